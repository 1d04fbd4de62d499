use super::{NewsView, StatusView, TableView};
use crate::models::ProductQuery;
use crate::pipeline::FeedState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusView for StatusLine {
    fn set_status(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

impl TableBody {
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableView for TableBody {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, cells: Vec<String>) {
        self.rows.push(TableRow { cells });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsNode {
    Message(String),
    Article(ArticleCard),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsContainer {
    nodes: Vec<NewsNode>,
}

impl NewsContainer {
    pub fn nodes(&self) -> &[NewsNode] {
        &self.nodes
    }

    pub fn articles(&self) -> impl Iterator<Item = &ArticleCard> {
        self.nodes.iter().filter_map(|n| match n {
            NewsNode::Article(card) => Some(card),
            NewsNode::Message(_) => None,
        })
    }
}

impl NewsView for NewsContainer {
    fn set_message(&mut self, text: &str) {
        self.nodes = vec![NewsNode::Message(text.to_string())];
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append_article(&mut self, title: &str, description: &str) {
        self.nodes.push(NewsNode::Article(ArticleCard {
            title: title.to_string(),
            description: description.to_string(),
        }));
    }
}

/// Everything the viewer page shows.
#[derive(Debug, Clone, Default)]
pub struct ViewerPage {
    pub status: StatusLine,
    pub table: TableBody,
    pub news: NewsContainer,
    pub products_state: FeedState,
    pub news_state: FeedState,
    /// Inputs of the most recent product invocation, echoed back into the form.
    pub last_query: Option<ProductQuery>,
}
