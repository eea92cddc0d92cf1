use std::path::Path;

use anyhow::Result;
use newsdesk_core::Config;

pub(crate) fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    println!("config OK: {}", config_path.display());
    println!("  top headlines: {}", config.endpoints.top_headlines);
    println!("  everything:    {}", config.endpoints.everything);
    println!("  page size:     {}", config.page_size);
    println!("  categories:    {}", config.categories.join(", "));
    println!("  countries:     {}", config.countries.join(", "));
    if config.cache.enabled {
        println!(
            "  cache:         {} entries, {}s TTL",
            config.cache.max_capacity, config.cache.ttl_secs
        );
    } else {
        println!("  cache:         disabled");
    }
    Ok(())
}
