use maud::{html, Markup, DOCTYPE};

use crate::routes::Route;

/// Title used when the active route does not configure one.
const DEFAULT_TITLE: &str = "Summonses";

/// Favicon used when the active route does not configure one.
const FALLBACK_ICON: &str = "/assets/favicon.svg";

/// Takes 'content' and wraps the standard head and body around it,
/// applying the active route's title and favicon.
pub fn page(route: Route, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html class="no-js" lang="en" {
            head {
                meta charset="utf-8";
                title { (route.title().unwrap_or(DEFAULT_TITLE)) }
                link rel="icon" type="image/svg+xml" href=(favicon_href(route.icon()));
                link href="/assets/site.css" rel="stylesheet" type="text/css";
            }
            body {
                (content)
            }
        }
    }
}

/// The favicon for a route, or the site-wide fallback.
fn favicon_href(icon: Option<&'static str>) -> &'static str {
    icon.unwrap_or(FALLBACK_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_falls_back_when_route_has_no_icon() {
        assert_eq!(favicon_href(None), FALLBACK_ICON);
        assert_eq!(
            favicon_href(Some("/assets/summonses_counter.svg")),
            "/assets/summonses_counter.svg"
        );
    }

    #[test]
    fn head_reflects_route_metadata() {
        let markup = page(Route::SummonsesCounter, html! { p { "hi" } }).into_string();

        assert!(markup.contains("<title>Summonses Counter</title>"));
        assert!(markup.contains(r#"href="/assets/summonses_counter.svg""#));
        assert!(markup.contains("<p>hi</p>"));
    }
}
