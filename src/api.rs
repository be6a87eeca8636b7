//! Diagnosis API Bindings
//!
//! Frontend bindings to the backend HTTP endpoints, one async fn per
//! endpoint, all returning `Result<T, String>`.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::models::{HistoryEntry, HistoryResponse, LoginRequest, LoginResponse};

/// Backend base URL, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

fn js_err(err: JsValue) -> String {
    format!("{:?}", err)
}

async fn send(request: web_sys::Request) -> Result<web_sys::Response, String> {
    let window = web_sys::window().ok_or("window not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    resp_value.dyn_into().map_err(js_err)
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: &web_sys::Response) -> Result<T, String> {
    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// `POST /login` with the submitted credentials.
///
/// A declared authentication failure still resolves Ok, carried in the
/// response's `success`/`message` fields; Err means the request itself
/// failed (unreachable server, malformed body).
pub async fn login(credentials: &LoginRequest<'_>) -> Result<LoginResponse, String> {
    let body = serde_json::to_string(credentials).map_err(|e| e.to_string())?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{}/login", API_BASE_URL);
    let request = web_sys::Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let resp = send(request).await?;
    read_json(&resp).await
}

/// `GET /history/{userId}`; returns the server-ordered record list.
pub async fn fetch_history(user_id: &str) -> Result<Vec<HistoryEntry>, String> {
    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");

    let url = format!("{}/history/{}", API_BASE_URL, user_id);
    let request = web_sys::Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let resp = send(request).await?;
    if !resp.ok() {
        return Err(format!("history request failed with status {}", resp.status()));
    }

    let parsed: HistoryResponse = read_json(&resp).await?;
    Ok(parsed.history)
}
