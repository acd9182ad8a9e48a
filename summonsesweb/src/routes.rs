//! The route table for the site. Each page route carries its metadata
//! (title and favicon) so views can build the document head without
//! knowing which page they are rendering.

use axum::{extract::DefaultBodyLimit, response::Redirect, routing::get, Router};
use summonses_core::client::ApiClient;

use crate::{
    api::handlers::count_summonses, asset::static_handler, views::summonses::summonses_counter,
};

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}

/// The pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SummonsesCounter,
}

impl Route {
    /// Returns the path this route is served on.
    pub fn path(self) -> &'static str {
        match self {
            Route::SummonsesCounter => "/summonses-counter",
        }
    }

    /// The page title, if the route configures one.
    pub fn title(self) -> Option<&'static str> {
        match self {
            Route::SummonsesCounter => Some("Summonses Counter"),
        }
    }

    /// The favicon shown while this route is active, if it has its own.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Route::SummonsesCounter => Some("/assets/summonses_counter.svg"),
        }
    }
}

/// Builds the application router. "/" is not a page of its own, it just
/// forwards to the counter.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::permanent(Route::SummonsesCounter.path()) }),
        )
        .route(
            Route::SummonsesCounter.path(),
            get(summonses_counter).post(count_summonses),
        )
        .route("/assets/*file", get(static_handler))
        // Uploads pass through with no size cap; the backend decides what
        // it will accept.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use summonses_core::client::ApiConfig;

    fn test_server() -> TestServer {
        let state = AppState {
            // The GET routes never talk to the backend, any address works.
            api: ApiClient::new(ApiConfig::with_base_url("http://localhost:1/api")),
        };
        TestServer::new(router(state)).unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_the_counter() {
        let server = test_server();

        let response = server.get("/").await;

        response.assert_status(StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response
                .headers()
                .get("location")
                .map(|v| v.to_str().unwrap()),
            Some("/summonses-counter")
        );
    }

    #[tokio::test]
    async fn counter_page_carries_route_metadata() {
        let server = test_server();

        let response = server.get("/summonses-counter").await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains("<title>Summonses Counter</title>"));
        assert!(text.contains(r#"href="/assets/summonses_counter.svg""#));
    }

    #[tokio::test]
    async fn stylesheet_is_served_with_its_mime_type() {
        let server = test_server();

        let response = server.get("/assets/site.css").await;

        response.assert_status_ok();
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .map(|v| v.to_str().unwrap()),
            Some("text/css")
        );
    }

    #[tokio::test]
    async fn unknown_asset_is_not_found() {
        let server = test_server();

        let response = server.get("/assets/missing.css").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
