//! The summonses-count operation. Packages a set of PDF uploads into one
//! multipart request and hands back whatever the backend replies.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

use crate::{client::ApiClient, error::SummonsesError};

/// Form field name shared by every file part of an upload.
pub const PDF_FIELD_NAME: &str = "pdfs";

/// Path of the counting endpoint, relative to the configured base URL.
pub const COUNT_SUMMONSES_PATH: &str = "/v1/summonses-count";

/// One PDF selected for upload: its name and its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl PdfUpload {
    pub fn new<S: Into<String>>(file_name: S, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }
}

impl ApiClient {
    /// Posts `files` to the counting endpoint as a single multipart
    /// request, one part per file, every part under the `pdfs` field, in
    /// the order given. An empty list still issues the request.
    ///
    /// The reply's shape belongs to the backend, so it is returned as
    /// plain JSON rather than deserialized into a local type. A
    /// non-success status is an error.
    pub async fn count_summonses(&self, files: Vec<PdfUpload>) -> Result<Value, SummonsesError> {
        let url = self.url(COUNT_SUMMONSES_PATH);
        debug!(url = %url, files = files.len(), "posting summonses-count request");

        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.data)
                .file_name(file.file_name)
                .mime_str("application/pdf")?;
            form = form.part(PDF_FIELD_NAME, part);
        }

        let response = self
            .http()
            .post(url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
