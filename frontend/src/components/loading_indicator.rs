//! Placeholder shown while a catalog request is in flight.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdHourglassEmpty};

#[component]
pub fn LoadingIndicator(message: String) -> Element {
    rsx! {
        div {
            class: "catalog-loading",
            role: "status",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                width: 100%;
                padding: 40px 0;
                color: rgba(28, 33, 45, 0.7);
                font-size: 20px;
            ",
            Icon { icon: MdHourglassEmpty, style: "width: 24px; height: 24px;" }
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_the_pending_request() {
        let html = dioxus_ssr::render_element(rsx! { LoadingIndicator { message: "Searching the catalog..." } });
        assert!(html.contains("role=\"status\""));
        assert!(html.contains("Searching the catalog..."));
    }
}
