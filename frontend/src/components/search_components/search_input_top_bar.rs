use dioxus::prelude::*;
use common::search_query::SearchQuery;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::routes::Route;

/// Query box. A new search keeps the selected facets and starts over at page 1.
#[component]
pub fn SearchInputTopBar(original_query: ReadSignal<SearchQuery>) -> Element {
    let mut modified_search_query = use_signal(|| original_query.read().clone());
    // navigation does not reset our signals, so follow the route
    use_effect(move || {
        let new_query = original_query.read().clone();
        modified_search_query.set(new_query);
    });
    let query_has_changed = use_memo(move || modified_search_query.read().q != original_query.read().q);
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        let mut query = modified_search_query.read().clone();
        query.page = None;
        navigator().push(Route::search_page_from_query(query));
    };
    let search_oninput = move |event: Event<FormData>| {
        modified_search_query.write().q = event.value();
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                name: "q",
                placeholder: "Search...",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{modified_search_query.read().q}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
