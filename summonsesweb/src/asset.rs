use axum::{
    http::{header, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use tracing::debug;

use crate::error::ApiError;

/// Everything under 'assets' is compiled into the binary: the stylesheet
/// plus the favicons the route table refers to.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.svg"]
pub struct Asset;

// We use a wildcard matcher ("/assets/*file") to match against everything
// within our defined assets directory. This is the directory on our Asset
// struct above, where folder = "assets".
pub async fn static_handler(uri: Uri) -> impl IntoResponse {
    let mut path = uri.path().trim_start_matches('/').to_string();

    if path.starts_with("assets/") {
        path = path.replace("assets/", "");
    }

    debug!("Serving asset {path}");
    StaticFile(path)
}

struct StaticFile<T>(T);

impl<T> IntoResponse for StaticFile<T>
where
    T: Into<String>,
{
    fn into_response(self) -> Response {
        let path = self.0.into();

        match Asset::get(path.as_str()) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
            }
            None => ApiError::not_found().into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_icons_are_embedded() {
        // The hrefs handed out by the route table must resolve, otherwise
        // the browser falls back to requesting /favicon.ico.
        assert!(Asset::get("summonses_counter.svg").is_some());
        assert!(Asset::get("favicon.svg").is_some());
        assert!(Asset::get("site.css").is_some());
    }
}
