use tradle_shared::ScoreSubmission;
use tradle_shared::selector::{DateCountry, parse_country_csv};

const COUNTRY_LIST_URL: &str = "data.csv";
const GEOLOCATION_URL: &str = "https://geolocation-db.com/json/";
const SCORE_URL: &str = "/tradle/score";

/// Fetch the candidate country list served next to the app.
pub async fn fetch_country_rows() -> Result<Vec<DateCountry>, String> {
    let resp = gloo_net::http::Request::get(COUNTRY_LIST_URL)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = resp
        .text()
        .await
        .map_err(|e| format!("read error: {e}"))?;
    parse_country_csv(&text).map_err(|e| format!("parse error: {e}"))
}

/// Opaque geolocation record attached to score posts.
pub async fn fetch_ip_info() -> Result<serde_json::Value, String> {
    let resp = gloo_net::http::Request::get(GEOLOCATION_URL)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

pub async fn post_score(submission: &ScoreSubmission) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(SCORE_URL)
        .json(submission)
        .map_err(|e| format!("encode error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
