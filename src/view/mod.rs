//! View surfaces the pipelines write into.
//!
//! The pipelines never look elements up themselves; callers hand them a
//! status target, a table body and a news container. [`document`] holds the
//! in-memory implementation shared by the web page and the CLI, and
//! [`terminal`] adds spinners and table printing on top of it.

pub mod document;
pub mod terminal;

pub use document::{ArticleCard, NewsContainer, NewsNode, StatusLine, TableBody, TableRow, ViewerPage};

/// A single line of human-readable status text.
pub trait StatusView {
    fn set_status(&mut self, text: &str);

    /// Called when a fetch starts.
    fn set_loading(&mut self, text: &str) {
        self.set_status(text);
    }
}

/// The body section of the product table.
pub trait TableView {
    fn clear_rows(&mut self);
    fn append_row(&mut self, cells: Vec<String>);
}

/// The news container. It doubles as the news pipeline's status target.
pub trait NewsView {
    /// Replace the whole container content with a message.
    fn set_message(&mut self, text: &str);

    /// Called when a fetch starts.
    fn set_loading(&mut self, text: &str) {
        self.set_message(text);
    }

    fn clear(&mut self);
    fn append_article(&mut self, title: &str, description: &str);
}
