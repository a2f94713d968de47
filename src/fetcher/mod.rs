pub mod http_fetcher;
pub mod listing_fetcher;
pub mod page_fetcher;

pub use http_fetcher::*;
pub use listing_fetcher::*;
pub use page_fetcher::*;
