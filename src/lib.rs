//! Nutriview: fetch product records and news articles from a feed backend
//! and render them as an HTML page or terminal output.

pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod routes;
pub mod templates;
pub mod utils;
pub mod view;
