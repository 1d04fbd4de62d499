//! Fetch → classify → render-or-report, once per feed.
//!
//! [`products`] and [`news`] expose the pipelines as plain async functions
//! over injected views. [`SharedViewer`] runs them as superseding background
//! tasks against one shared [`ViewerPage`], which is how the web viewer uses
//! them.

pub mod news;
pub mod products;
pub mod render;
pub mod task;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::FeedSource;
use crate::models::ProductQuery;
use crate::view::ViewerPage;

pub use render::{render_news, render_products};
pub use task::{FeedHandle, TaskSlot, Ticket};

/// `Idle → Loading → {Rendered | ErrorDisplayed}`; every invocation re-enters `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    Idle,
    Loading,
    Rendered,
    ErrorDisplayed,
}

impl FeedState {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedState::Idle => "idle",
            FeedState::Loading => "loading",
            FeedState::Rendered => "rendered",
            FeedState::ErrorDisplayed => "error",
        }
    }
}

impl fmt::Display for FeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both pipelines bound to one page and one source.
#[derive(Clone)]
pub struct SharedViewer {
    page: Arc<Mutex<ViewerPage>>,
    source: Arc<dyn FeedSource>,
    products_slot: Arc<TaskSlot>,
    news_slot: Arc<TaskSlot>,
}

fn lock(page: &Mutex<ViewerPage>) -> MutexGuard<'_, ViewerPage> {
    page.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedViewer {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self {
            page: Arc::new(Mutex::new(ViewerPage::default())),
            source,
            products_slot: Arc::new(TaskSlot::new()),
            news_slot: Arc::new(TaskSlot::new()),
        }
    }

    /// Copy of the page as it is right now.
    pub fn snapshot(&self) -> ViewerPage {
        lock(&self.page).clone()
    }

    /// Start a product fetch, superseding any one still in flight.
    /// Must be called from within a tokio runtime.
    pub fn spawn_products(&self, query: ProductQuery) -> FeedHandle {
        // Claim under the page lock so loading writes land in ticket order
        let ticket = {
            let mut page = lock(&self.page);
            let ticket = self.products_slot.claim();
            page.products_state = products::begin(&mut page.status);
            page.last_query = Some(query.clone());
            ticket
        };

        let page = Arc::clone(&self.page);
        let source = Arc::clone(&self.source);
        let slot = Arc::clone(&self.products_slot);
        let handle = tokio::spawn(async move {
            let result = source.fetch_products(&query).await;
            let mut guard = lock(&page);
            if !slot.is_current(ticket) {
                tracing::debug!("dropping superseded product result");
                return None;
            }
            let page = &mut *guard;
            let state = products::apply(result, &mut page.table, &mut page.status);
            page.products_state = state;
            Some(state)
        });
        self.products_slot.attach(ticket, handle.abort_handle());
        FeedHandle::new(handle)
    }

    /// Start a news fetch, superseding any one still in flight.
    /// Must be called from within a tokio runtime.
    pub fn spawn_news(&self) -> FeedHandle {
        let ticket = {
            let mut page = lock(&self.page);
            let ticket = self.news_slot.claim();
            page.news_state = news::begin(&mut page.news);
            ticket
        };

        let page = Arc::clone(&self.page);
        let source = Arc::clone(&self.source);
        let slot = Arc::clone(&self.news_slot);
        let handle = tokio::spawn(async move {
            let result = source.fetch_news().await;
            let mut guard = lock(&page);
            if !slot.is_current(ticket) {
                tracing::debug!("dropping superseded news result");
                return None;
            }
            let state = news::apply(result, &mut guard.news);
            guard.news_state = state;
            Some(state)
        });
        self.news_slot.attach(ticket, handle.abort_handle());
        FeedHandle::new(handle)
    }
}
