//! Core types and rules for newsdesk
//!
//! Everything here is pure: configuration, the article model, canonical
//! listing URLs and the pagination policy shared by the HTTP handlers.

mod article;
mod config;
mod constants;
mod env_config;
mod error;
mod listing;
mod pagination;

pub use article::*;
pub use config::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use listing::Listing;
pub use pagination::*;
