// URL handling utilities
pub mod url_builder;
pub mod query_string;

// JSON utilities
pub mod json_converter;

// Re-export all utilities for convenient access
pub use url_builder::endpoint_url;
pub use query_string::build_query_string;
pub use json_converter::{deserialize_display_text, deserialize_truthy_text, display_text, is_truthy};
