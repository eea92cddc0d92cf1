//! Environment overrides for configuration values.

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable is the normal case and returns `default` quietly. A set but
/// unparseable value is logged at warn level so a typo in deployment does not
/// go unnoticed.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}
