use maud::{html, Markup};
use serde_json::Value;

use crate::{components::page::page, routes::Route};

/// GET handler for the counter page.
pub async fn summonses_counter() -> Markup {
    counter_page(None)
}

/// Renders the counter page, optionally with the backend's reply to an
/// upload that was just submitted.
pub fn counter_page(reply: Option<&Value>) -> Markup {
    page(
        Route::SummonsesCounter,
        html! {
            main {
                h1 { "Summonses Counter" }
                p { "Select one or more PDF files to count the summonses they contain." }
                (upload_form())
                @if let Some(reply) = reply {
                    (count_result(reply))
                }
            }
        },
    )
}

fn upload_form() -> Markup {
    html! {
        form action=(Route::SummonsesCounter.path()) method="post" enctype="multipart/form-data" {
            label for="pdfs" { "Upload PDFs:" }
            input id="pdfs" type="file" name="pdfs" accept="application/pdf" multiple;
            input type="submit" value="Count summonses";
        }
    }
}

/// The reply's shape is server-defined. When it carries a top-level
/// numeric `count` we show that; anything else is shown raw.
fn count_result(reply: &Value) -> Markup {
    html! {
        section class="result" {
            @match reply.get("count").and_then(Value::as_u64) {
                Some(count) => { p { "Summonses found: " strong { (count) } } }
                None => { pre { (reply) } }
            }
        }
    }
}
