//! Action buttons shown above a document.

use common::{catalog_config::CatalogConfig, solr_document::SolrDocument};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdEmail};

use crate::data_definitions::modal_state::{ModalContent, ModalState};

#[component]
pub fn DocumentActions(document: ReadSignal<SolrDocument>, config: ReadSignal<CatalogConfig>, mut modal: Signal<ModalState>) -> Element {
    let open_email = move |_: MouseEvent| {
        let document = document.read();
        let content = ModalContent::Email { document_id: document.id.clone(), document_title: document.title(&config.read()) };
        modal.write().open(content);
    };

    rsx! {
        div {
            class: "document-actions",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                padding: 8px 0;
            ",
            button {
                id: "emailLink",
                class: "catalog-hover-shadow",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    cursor: pointer;
                    border: 1px solid #000;
                    border-radius: 8px;
                    background: white;
                    padding: 6px 12px;
                    font-size: 16px;
                ",
                onclick: open_email,
                Icon { icon: MdEmail, style: "width: 20px; height: 20px;" }
                "Email"
            }
        }
    }
}
