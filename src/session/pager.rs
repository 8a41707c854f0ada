//! Page-number buttons

use serde::Serialize;

/// Beyond this many pages the window collapses with ellipses
pub const MAX_VISIBLE_PAGES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

impl PageLink {
    fn page(number: usize, current: usize) -> Self {
        PageLink::Page {
            number,
            active: number == current,
        }
    }
}

/// Buttons to show for `current` of `total` pages.
///
/// All pages up to `MAX_VISIBLE_PAGES`. Past that: first page, an ellipsis
/// when `current > 3`, the current page and its neighbours, an ellipsis
/// when `current < total - 2`, last page.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(|n| PageLink::page(n, current)).collect();
    }

    let mut links = vec![PageLink::page(1, current)];
    if current > 3 {
        links.push(PageLink::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    links.extend((start..=end).map(|n| PageLink::page(n, current)));

    if current + 2 < total {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::page(total, current));
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(links: &[PageLink]) -> String {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, active: true } => format!("[{}]", number),
                PageLink::Page { number, .. } => number.to_string(),
                PageLink::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_small_totals_show_everything() {
        assert_eq!(render(&page_window(1, 0)), "");
        assert_eq!(render(&page_window(1, 1)), "[1]");
        assert_eq!(render(&page_window(4, 7)), "1 2 3 [4] 5 6 7");
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(render(&page_window(1, 10)), "[1] 2 ... 10");
        assert_eq!(render(&page_window(3, 10)), "1 2 [3] 4 ... 10");
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(render(&page_window(5, 10)), "1 ... 4 [5] 6 ... 10");
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(render(&page_window(8, 10)), "1 ... 7 [8] 9 10");
        assert_eq!(render(&page_window(10, 10)), "1 ... 9 [10]");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(page_window(1, 8)).unwrap();
        assert_eq!(value[0], serde_json::json!({"kind": "page", "number": 1, "active": true}));
        assert_eq!(value[2], serde_json::json!({"kind": "ellipsis"}));
    }
}
