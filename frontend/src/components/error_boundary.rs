//! Error boundary and the inline error panel used when a catalog call fails.

use dioxus::prelude::*;

const ERROR_BOX: &str = "border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;";

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    h1 { style: "color:red; font-size: 40px; {ERROR_BOX}", "Something went wrong" }
                    p { style: "color:darkred; font-size: 22px; {ERROR_BOX}", "Boundary: {boundary_name}" }
                    a { href: "/", style: "color:blue; font-size: 22px; {ERROR_BOX}", "Return to the catalog" }
                    pre { style: "color:black; text-wrap: auto; {ERROR_BOX}", "{err:#?}" }
                }
            },
            children
        }
    }
}

/// Inline panel for a failed search or document lookup.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "catalog-error",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "20px",
            h2 { style: "color:red; font-size: 28px; margin: 5px;", "Catalog Error" }
            pre {
                style: "color:darkred; text-wrap: auto; max-width: 600px; max-height: 400px; overflow-y: auto; {ERROR_BOX}",
                "{error_txt}"
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_panel_shows_the_message() {
        let html = dioxus_ssr::render_element(rsx! {
            ComponentErrorDisplay { error_txt: "Solr error: 404".to_string() }
        });
        assert!(html.contains("Catalog Error"));
        assert!(html.contains("Solr error: 404"));
    }
}
