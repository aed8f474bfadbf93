//! Top header shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdHome, MdSearch}};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;
use common::search_query::SearchQuery;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",
            div {
                id: "x-nav-topbar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 56px;
                    background-color: #1C212D;
                    border-bottom: 1px solid #000000;
                    padding: 0 16px;
                    flex-shrink: 0;
                ",
                Link {
                    to: Route::HomePage {},
                    class: "navbar-brand",
                    span { style: "color: white; font-size: 22px; font-weight: 500;", "Blacklight" }
                }
                div { style: "flex-grow:1;" }
                IconLink { to: Route::HomePage {}, label: "Home", Icon { icon: MdHome, style: "width: 24px; height: 24px;" } }
                IconLink {
                    to: Route::search_page_from_query(SearchQuery::default()),
                    label: "Search",
                    Icon { icon: MdSearch, style: "width: 24px; height: 24px;" }
                }
            }
            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink(to: Route, label: String, children: Element) -> Element {
    rsx! {
        Link {
            to,
            span {
                title: "{label}",
                style: "color:white; display: flex; align-items: center;",
                {children}
            }
        }
    }
}
