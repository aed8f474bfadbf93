//! Modal dialog for document actions.

use common::search_const::MODAL_DIALOG_ID;
use dioxus::{logger::tracing, prelude::*};

use crate::data_definitions::modal_state::{ModalContent, ModalState};

/// Renders `<dialog id="blacklight-modal">` while `state` is open; nothing otherwise.
#[component]
pub fn ModalDialog(mut state: Signal<ModalState>) -> Element {
    let ModalState::Open(content) = state.read().clone() else {
        return rsx! {};
    };
    let heading = content.heading();
    let close = move |_: MouseEvent| state.write().close();
    let body = match content {
        ModalContent::Email { document_id, document_title } => rsx! {
            EmailForm { document_id, document_title, on_done: move |_| state.write().close() }
        },
    };

    rsx! {
        div {
            class: "modal-backdrop",
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                width: 100vw;
                height: 100vh;
                background: rgba(0, 0, 0, 0.3);
                z-index: 1000;
            ",
            onclick: close,
        }
        dialog {
            id: "{MODAL_DIALOG_ID}",
            class: "modal",
            open: true,
            style: "
                position: fixed;
                top: 80px;
                width: 500px;
                max-width: calc(100vw - 40px);
                border: 1px solid rgba(0, 0, 0, 0.5);
                border-radius: 8px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.3);
                padding: 0px;
                z-index: 1001;
            ",
            div {
                class: "modal-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    padding: 12px 16px;
                    border-bottom: 1px solid rgba(0, 0, 0, 0.2);
                ",
                h1 { class: "modal-title", style: "font-size: 22px; font-weight: 400; margin: 0; flex-grow: 1;", "{heading}" }
                button {
                    r#type: "button",
                    class: "blacklight-modal-close",
                    aria_label: "Close",
                    style: "border: none; background: none; cursor: pointer; font-size: 28px; line-height: 28px;",
                    onclick: close,
                    "×"
                }
            }
            div {
                class: "modal-body",
                style: "padding: 16px;",
                {body}
            }
        }
    }
}

#[component]
fn EmailForm(document_id: String, document_title: String, on_done: Callback<()>) -> Element {
    let mut to = use_signal(String::new);
    let mut message = use_signal(String::new);

    rsx! {
        form {
            class: "email-form",
            style: "display: flex; flex-direction: column; gap: 10px;",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                tracing::info!("Email requested for {} to {:?}", document_id, to());
                on_done.call(());
            },
            p { "{document_title}" }
            label { r#for: "email-to", "Email:" }
            input {
                id: "email-to",
                r#type: "email",
                value: "{to}",
                oninput: move |e| to.set(e.value()),
            }
            label { r#for: "email-message", "Message:" }
            textarea {
                id: "email-message",
                value: "{message}",
                oninput: move |e| message.set(e.value()),
            }
            button { r#type: "submit", class: "btn btn-primary", "Send" }
        }
    }
}
