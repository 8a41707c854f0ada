//! Browsing session
//!
//! Presentation-side state for a single reader: the current query, the
//! current route, and rendering of listing and article views.

mod pager;
mod route;
mod view;

pub use pager::{page_window, PageLink, MAX_VISIBLE_PAGES};
pub use route::Route;
pub use view::{Action, ArticleCard, View, ViewState};
