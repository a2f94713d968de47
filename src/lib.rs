//! Catalog scraping ingestion pipeline: category discovery, paginated
//! card extraction, defensive normalization and dataset export.

pub mod config;
pub mod discovery;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod processor;
pub mod sink;
