//! Single document page with its actions, fields and More Like This sidebar.

use dioxus::prelude::*;

use common::catalog_config::CatalogConfig;
use crate::{
    api::catalog_api::get_document,
    components::{
        document_components::{document_actions::DocumentActions, document_fields::DocumentFields, show_sidebar::ShowSidebar},
        error_boundary::ComponentErrorDisplay,
        modal::ModalDialog,
        loading_indicator::LoadingIndicator,
    },
    data_definitions::modal_state::ModalState,
};

#[component]
pub fn ShowPage(id: String) -> Element {
    rsx! {
        Title { "Blacklight: {id}" }
        ShowPageRoot { id }
    }
}

#[component]
fn ShowPageRoot(id: ReadSignal<String>) -> Element {
    let config = CatalogConfig::default();
    let modal = use_signal(ModalState::default);
    let mut document = use_resource(move || {
        let id = id.read().clone();
        get_document(id)
    });
    use_effect(move || {
        let _ = id.read();
        document.clear();
        document.restart();
    });

    let document = document.read();
    let document = match document.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(d)) => d.clone(),
        None => return rsx! { LoadingIndicator { message: "Loading document..." } },
    };
    let title = document.document.title(&config);

    rsx! {
        div {
            id: "x-show-page-root",
            style: "
                display: flex;
                flex-direction: row;
                gap: 20px;
                padding: 20px;
                background-color: #ECEEF2;
                min-height: 100%;
                box-sizing: border-box;
            ",
            div {
                id: "document",
                style: "
                    flex-grow: 1;
                    background: white;
                    border-radius: 8px;
                    padding: 16px 20px;
                ",
                h1 { style: "font-size: 28px; font-weight: 400; margin: 0 0 8px 0;", "{title}" }
                DocumentActions { document: document.document.clone(), config: config.clone(), modal }
                DocumentFields { document: document.document.clone(), config: config.clone() }
            }
            div {
                id: "sidebar",
                style: "width: 300px; flex-shrink: 0;",
                ShowSidebar { more_like_this: document.more_like_this.clone(), config: config.clone() }
            }
        }
        ModalDialog { state: modal }
    }
}
