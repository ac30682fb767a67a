//! Data loading over the browser fetch API.
//!
//! Both endpoint requests go out before either is awaited, and the
//! dashboard initializes only once both have landed. Failures come back
//! as strings for the status/banner surface; the caller also mirrors
//! them to the console.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use marquee::dataset::Dataset;
use marquee::record::{self, DataError};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5001";

/// Where the data endpoints live. Overridable with `?api=<base>` so a
/// deployed dashboard can point somewhere other than the local service.
pub(super) fn api_base() -> String {
    let fallback = DEFAULT_API_BASE.to_string();
    let Some(window) = web_sys::window() else {
        return fallback;
    };
    let Ok(search) = window.location().search() else {
        return fallback;
    };
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get("api"))
        .map(|base| base.trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty())
        .unwrap_or(fallback)
}

/// Fetch and parse both payloads. Returns the dataset plus the base URL
/// it came from (for the status line).
pub(super) async fn load_dataset() -> Result<(Dataset, String), String> {
    let base = api_base();
    let movies_url = format!("{base}/get-movies");
    let changes_url = format!("{base}/get-changes");

    // Start both requests, then await; the network work overlaps.
    let movies_pending = begin_get(&movies_url)?;
    let changes_pending = begin_get(&changes_url)?;

    let movies_body = finish_text(movies_pending, &movies_url).await?;
    let changes_body = finish_text(changes_pending, &changes_url).await?;

    let movies = record::parse_movies(&movies_body).map_err(|e| e.to_string())?;
    let changes = record::parse_changes(&changes_body).map_err(|e| e.to_string())?;
    Ok((Dataset::new(movies, changes), base))
}

fn begin_get(url: &str) -> Result<JsFuture, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| format!("bad request url: {url}"))?;
    let window = web_sys::window().ok_or("no window")?;
    Ok(JsFuture::from(window.fetch_with_request(&request)))
}

async fn finish_text(pending: JsFuture, url: &str) -> Result<String, String> {
    let resp_value = pending.await.map_err(|e| fetch_err(url, &e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| format!("{url}: response is not a Response"))?;

    if !resp.ok() {
        return Err(format!("{url}: {}", DataError::Status(resp.status())));
    }

    let body = JsFuture::from(resp.text().map_err(|e| fetch_err(url, &e))?)
        .await
        .map_err(|e| fetch_err(url, &e))?;
    body.as_string()
        .ok_or_else(|| format!("{url}: body is not text"))
}

fn fetch_err(url: &str, e: &JsValue) -> String {
    format!(
        "{url}: {}",
        e.as_string().unwrap_or_else(|| "fetch failed".to_string())
    )
}
