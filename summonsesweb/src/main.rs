use std::{thread, time::Duration};

use args::parse_args;
use routes::{router, AppState};
use summonses_core::client::ApiClient;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;

mod api;
mod args;
mod asset;
mod components;
mod error;
mod routes;
mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_tracing();

    let args = parse_args();

    let state = AppState {
        api: ApiClient::shared().clone(),
    };
    info!("Counting backend is at {}", state.api.base_url());

    let app = router(state);

    // Bind to the requested port (or a random one), then use a background
    // thread to automatically open the correct URL in the browser. We wait
    // for a bit in the background thread to ensure axum is started up
    // (though this does not seem to really be necessary on my machine.)
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port.unwrap_or(0))).await?;
    let addr = listener.local_addr()?;
    let url = format!("http://localhost:{}", addr.port());
    info!("Listening on {url}");
    if args.auto_open {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs_f32(0.5));
            // Ignore any errors, this is a "nice-to-have" anyway.
            let _ = opener::open_browser(url);
        });
    }

    // We block here. Closing the browser window does
    // not shut down the app.
    axum::serve(listener, app).await?;

    // This code only runs on exit.
    Ok(())
}

fn configure_tracing() {
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE) // Makes #[instrument] output something
        .with_max_level(tracing::Level::DEBUG)
        .init();
}
