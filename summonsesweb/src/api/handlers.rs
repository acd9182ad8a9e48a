use axum::extract::{Multipart, State};
use maud::Markup;
use summonses_core::summonses::{PdfUpload, PDF_FIELD_NAME};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    routes::AppState,
    views::summonses::counter_page,
};

/// Name given to an upload when the browser does not send one.
const UNNAMED_PDF: &str = "unnamed.pdf";

/// POST handler for the counter page. Note that this is a multipart post -
/// each file that is uploaded is once around the loop. Fields under other
/// names are ignored; the files we keep go to the backend in the order the
/// browser sent them.
pub async fn count_summonses(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Markup> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request().message(err.to_string()))?
    {
        if field.name() != Some(PDF_FIELD_NAME) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(UNNAMED_PDF).to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::bad_request().message(err.to_string()))?;

        info!("Received `{file_name}`, {} bytes", data.len());
        files.push(PdfUpload::new(file_name, data.to_vec()));
    }

    let reply = state
        .api
        .count_summonses(files)
        .await
        .map_err(|err| ApiError::bad_gateway().message(err.to_string()))?;

    Ok(counter_page(Some(&reply)))
}
