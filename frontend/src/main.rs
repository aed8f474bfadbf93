//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use backend::server_extra::{CatalogState, json_api_router};
        use dioxus::{logger::tracing, server::axum};

        Ok(dioxus::server::router(App)
            .merge(json_api_router(CatalogState::from_env()))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::debug!("{} {}", res.status(), path);
                    res
                },
            )))
    });
}
