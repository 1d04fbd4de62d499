// Feed API modules
pub mod client;
pub mod envelope;
pub mod error;
pub mod news;
pub mod products;
pub mod source;

// Re-export commonly used items
pub use client::{set_silent, FeedClient};
pub use envelope::{classify, FeedResponse, SUCCESS_STATUS};
pub use error::FetchError;
pub use news::{fetch_news, NEWS_ENDPOINT};
pub use products::{fetch_products, PRODUCTS_ENDPOINT};
pub use source::{FeedSource, NewsResult, ProductsResult};
