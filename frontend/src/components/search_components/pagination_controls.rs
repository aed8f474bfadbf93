//! Previous/next links under the result list.

use common::{search_query::SearchQuery, search_result::PaginationInfo};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight}};

use crate::routes::Route;

fn page_href(query: &SearchQuery, page: Option<u64>) -> Option<String> {
    page.map(|page| Route::search_page_from_query(query.with_page(page)).to_string())
}

#[component]
pub fn PaginationControls(query: ReadSignal<SearchQuery>, pagination: ReadSignal<PaginationInfo>) -> Element {
    let pagination = pagination();
    let prev = page_href(&query.read(), pagination.prev_page);
    let next = page_href(&query.read(), pagination.next_page);
    let link_style = "display: flex; align-items: center; gap: 4px; color: #1C212D;";
    let disabled_style = "display: flex; align-items: center; gap: 4px; color: rgba(0, 0, 0, 0.3);";

    rsx! {
        nav {
            class: "pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 24px;
                padding: 12px;
                font-size: 16px;
            ",
            if let Some(href) = prev {
                a { class: "page-link prev", rel: "prev", href, style: link_style,
                    Icon { icon: MdChevronLeft, style: "width: 20px; height: 20px;" }
                    "Previous"
                }
            } else {
                span { class: "page-link prev disabled", style: disabled_style,
                    Icon { icon: MdChevronLeft, style: "width: 20px; height: 20px;" }
                    "Previous"
                }
            }
            span { class: "page-entries", "Page {pagination.current_page} of {pagination.total_pages}" }
            if let Some(href) = next {
                a { class: "page-link next", rel: "next", href, style: link_style,
                    "Next"
                    Icon { icon: MdChevronRight, style: "width: 20px; height: 20px;" }
                }
            } else {
                span { class: "page-link next disabled", style: disabled_style,
                    "Next"
                    Icon { icon: MdChevronRight, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_links_both_ways() {
        let query = SearchQuery::from_query_string("q=rome&page=2");
        let html = dioxus_ssr::render_element(rsx! {
            PaginationControls { query: query.clone(), pagination: PaginationInfo::new(2, 3) }
        });
        assert!(html.contains("Page 2 of 3"));
        assert!(html.contains(&Route::search_page_from_query(query.with_page(1)).to_string()));
        assert!(html.contains(&Route::search_page_from_query(query.with_page(3)).to_string()));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn single_page_has_no_links() {
        let html = dioxus_ssr::render_element(rsx! {
            PaginationControls { query: SearchQuery::default(), pagination: PaginationInfo::new(1, 1) }
        });
        assert!(html.contains("Page 1 of 1"));
        assert_eq!(html.matches("disabled").count(), 2);
        assert!(!html.contains("rel=\"next\""));
    }
}
