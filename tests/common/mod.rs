#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use nutriview::api::{FeedResponse, FeedSource, FetchError, NewsResult, ProductsResult};
use nutriview::models::{ArticleRecord, ProductQuery, ProductRecord};
use nutriview::view::StatusView;

pub fn product(name: &str) -> ProductRecord {
    ProductRecord {
        product_name: Some(name.to_string()),
        brands: Some(format!("{} brand", name)),
        energy_kcal: Some("100".to_string()),
        ..ProductRecord::default()
    }
}

pub fn products(names: &[&str]) -> Vec<ProductRecord> {
    names.iter().map(|n| product(n)).collect()
}

pub fn article(title: &str, description: Option<&str>) -> ArticleRecord {
    ArticleRecord {
        title: Some(title.to_string()),
        description: description.map(str::to_string),
    }
}

type ProductResponder = Box<dyn Fn(&ProductQuery) -> ProductsResult + Send + Sync>;

/// In-memory feed backend. Product answers come from a closure over the
/// query; news answers are queued. A query whose page matches `slow_page`
/// waits before answering.
pub struct FakeSource {
    products: ProductResponder,
    news: Mutex<VecDeque<NewsResult>>,
    slow_page: Option<(String, Duration)>,
    pub seen_queries: Mutex<Vec<ProductQuery>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            products: Box::new(|_: &ProductQuery| Ok(FeedResponse::Success(Vec::new()))),
            news: Mutex::new(VecDeque::new()),
            slow_page: None,
            seen_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_products<F>(mut self, f: F) -> Self
    where
        F: Fn(&ProductQuery) -> ProductsResult + Send + Sync + 'static,
    {
        self.products = Box::new(f);
        self
    }

    pub fn with_news(self, result: NewsResult) -> Self {
        self.news.lock().unwrap().push_back(result);
        self
    }

    pub fn with_slow_page(mut self, page: &str, delay: Duration) -> Self {
        self.slow_page = Some((page.to_string(), delay));
        self
    }
}

#[async_trait]
impl FeedSource for FakeSource {
    async fn fetch_products(&self, query: &ProductQuery) -> ProductsResult {
        self.seen_queries.lock().unwrap().push(query.clone());
        if let Some((page, delay)) = &self.slow_page {
            if page == &query.page {
                tokio::time::sleep(*delay).await;
            }
        }
        (self.products)(query)
    }

    async fn fetch_news(&self) -> NewsResult {
        self.news
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no queued news response".into())))
    }
}

/// Status view that remembers every write.
#[derive(Default)]
pub struct RecordingStatus {
    pub history: Vec<String>,
}

impl RecordingStatus {
    pub fn current(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("")
    }
}

impl StatusView for RecordingStatus {
    fn set_status(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records formatted log lines.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
