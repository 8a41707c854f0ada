//! Hash routes
//!
//! Two routes: the listing at `#/` and a single article at
//! `#/article/<id>`. Anything unrecognized lands on the listing.

use std::fmt;

const ARTICLE_PREFIX: &str = "#/article/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Article(String),
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        match hash.trim().strip_prefix(ARTICLE_PREFIX) {
            Some(id) if !id.is_empty() => Route::Article(id.to_string()),
            _ => Route::Home,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Article(id) => format!("{}{}", ARTICLE_PREFIX, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hash())
    }
}
