//! Browsing session state
//!
//! `ViewState` is the explicit replacement for a page-global archive
//! object: it owns the caller's `QueryState` and route, applies discrete
//! actions to them, and renders the current view against an engine.

use serde::{Deserialize, Serialize};

use crate::query::{Filters, Paginator, QueryEngine, QueryErrorCode, QueryResult, QueryState, SortKey};
use crate::record::Record;

use super::pager::{page_window, PageLink};
use super::route::Route;

/// Authors shown on a card before "and N more"
const CARD_AUTHOR_LIMIT: usize = 3;
/// Keyword tags shown on a card
const CARD_KEYWORD_LIMIT: usize = 8;
/// Abstract characters shown on a card
const CARD_ABSTRACT_LIMIT: usize = 300;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Search { term: String },
    Filter { filters: Filters },
    /// Clears the search term as well as every filter
    ClearFilters,
    SelectKeyword { keyword: String },
    Sort { sort: SortKey },
    Page { page: usize },
    NextPage,
    PreviousPage,
    Navigate { hash: String },
    Open { id: String },
    Home,
}

/// A record prepared for a result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// First few authors, then "and N more"
    pub authors: String,
    pub publication: String,
    /// e.g. "August 15, 2024"
    pub date: String,
    pub abstract_preview: String,
    pub keywords: Vec<String>,
    pub href: String,
}

impl ArticleCard {
    pub fn from_record(record: &Record) -> Self {
        let mut authors = record
            .authors
            .iter()
            .take(CARD_AUTHOR_LIMIT)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if record.authors.len() > CARD_AUTHOR_LIMIT {
            authors.push_str(&format!(" and {} more", record.authors.len() - CARD_AUTHOR_LIMIT));
        }

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            link: record.link.clone(),
            authors,
            publication: record.publication.clone(),
            date: record.publication_date.format("%B %-d, %Y").to_string(),
            abstract_preview: truncate(&record.abstract_text, CARD_ABSTRACT_LIMIT),
            keywords: record.keywords.iter().take(CARD_KEYWORD_LIMIT).cloned().collect(),
            href: Route::Article(record.id.clone()).to_hash(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// What the caller should display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    #[serde(rename_all = "camelCase")]
    Listing {
        summary: String,
        cards: Vec<ArticleCard>,
        page: usize,
        total_pages: usize,
        has_previous: bool,
        has_next: bool,
        /// Empty when everything fits on one page
        pagination: Vec<PageLink>,
        popular_keywords: Vec<String>,
    },
    Article { article: Record },
    NotFound { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: QueryState,
    route: Route,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: QueryState::new().with_page_size(page_size),
            route: Route::Home,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Applies one action. Page moves outside `[1, total_pages]` are
    /// ignored.
    pub fn apply(&mut self, action: Action, engine: &QueryEngine) {
        match action {
            Action::Search { term } => {
                self.query.search_term = term;
                self.query.page = 1;
            }
            Action::Filter { filters } => {
                self.query.filters = filters;
                self.query.page = 1;
            }
            Action::ClearFilters => {
                self.query.search_term.clear();
                self.query.filters = Filters::default();
                self.query.page = 1;
            }
            Action::SelectKeyword { keyword } => {
                self.query.filters.keyword = keyword;
                self.query.page = 1;
            }
            Action::Sort { sort } => self.query.sort_key = sort,
            Action::Page { page } => self.go_to_page(page, engine),
            Action::NextPage => self.go_to_page(self.query.page + 1, engine),
            Action::PreviousPage => {
                if let Some(page) = self.query.page.checked_sub(1) {
                    self.go_to_page(page, engine);
                }
            }
            Action::Navigate { hash } => self.route = Route::parse(&hash),
            Action::Open { id } => self.route = Route::Article(id),
            Action::Home => self.route = Route::Home,
        }
    }

    fn go_to_page(&mut self, page: usize, engine: &QueryEngine) {
        let Ok(paginator) = Paginator::new(self.query.page_size) else {
            return;
        };
        let total_pages = paginator.total_pages(engine.count(&self.query));
        if (1..=total_pages).contains(&page) {
            self.query.page = page;
        }
    }

    /// Renders the current route.
    ///
    /// A listing whose page no longer exists falls back to page 1.
    pub fn render(&self, engine: &QueryEngine) -> QueryResult<View> {
        match &self.route {
            Route::Article(id) => Ok(match engine.find(id) {
                Some(record) => View::Article {
                    article: record.clone(),
                },
                None => View::NotFound { id: id.clone() },
            }),
            Route::Home => {
                let page = match engine.query(&self.query) {
                    Err(e) if e.code() == QueryErrorCode::PageOutOfRange => {
                        engine.query(&self.query.clone().with_page(1))?
                    }
                    other => other?,
                };

                let pagination = if page.total_pages > 1 {
                    page_window(page.page, page.total_pages)
                } else {
                    Vec::new()
                };

                Ok(View::Listing {
                    summary: page.summary(),
                    page: page.page,
                    total_pages: page.total_pages,
                    has_previous: page.has_previous(),
                    has_next: page.has_next(),
                    pagination,
                    cards: page.items.iter().map(ArticleCard::from_record).collect(),
                    popular_keywords: engine.popular_keywords(),
                })
            }
        }
    }
}
