pub mod scrape_config;

pub use scrape_config::*;
