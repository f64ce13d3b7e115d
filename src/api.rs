//! Sweet Shop API Bindings
//!
//! Thin async bindings to the remote HTTP API, one function per endpoint.
//! Every call returns a `Result`; callers decide how failures surface.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use thiserror::Error;

use crate::models::{LoginResponse, Sweet, SweetPayload};

const API_BASE: &str = "http://localhost:8000/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Serialize)]
struct AmountArgs {
    amount: i64,
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

// ========================
// Auth
// ========================

/// `POST /auth/login` — form-encoded, per the server's OAuth2 form contract.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let form = web_sys::UrlSearchParams::new()
        .map_err(|_| ApiError::Network("failed to build form body".into()))?;
    form.append("username", username);
    form.append("password", password);

    let response = Request::post(&format!("{API_BASE}/auth/login"))
        .body(form)?
        .send()
        .await?;
    check_status(&response)?;
    Ok(response.json().await?)
}

/// `POST /auth/register` — the server assigns `customer` when it ignores `role`.
pub async fn register(username: &str, password: &str, role: &str) -> Result<(), ApiError> {
    let response = Request::post(&format!("{API_BASE}/auth/register"))
        .json(&RegisterArgs { username, password, role })?
        .send()
        .await?;
    check_status(&response)
}

// ========================
// Sweets
// ========================

pub async fn list_sweets(token: &str) -> Result<Vec<Sweet>, ApiError> {
    let response = authorized(Request::get(&format!("{API_BASE}/sweets/")), token)
        .send()
        .await?;
    check_status(&response)?;
    Ok(response.json().await?)
}

pub async fn search_sweets(token: &str, name: &str) -> Result<Vec<Sweet>, ApiError> {
    let response = authorized(Request::get(&format!("{API_BASE}/sweets/search")), token)
        .query([("name", name)])
        .send()
        .await?;
    check_status(&response)?;
    Ok(response.json().await?)
}

pub async fn create_sweet(token: &str, payload: &SweetPayload) -> Result<Sweet, ApiError> {
    let response = authorized(Request::post(&format!("{API_BASE}/sweets/")), token)
        .json(payload)?
        .send()
        .await?;
    check_status(&response)?;
    Ok(response.json().await?)
}

pub async fn update_sweet(token: &str, id: i64, payload: &SweetPayload) -> Result<Sweet, ApiError> {
    let response = authorized(Request::put(&format!("{API_BASE}/sweets/{id}")), token)
        .json(payload)?
        .send()
        .await?;
    check_status(&response)?;
    Ok(response.json().await?)
}

pub async fn delete_sweet(token: &str, id: i64) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&format!("{API_BASE}/sweets/{id}")), token)
        .send()
        .await?;
    check_status(&response)
}

pub async fn purchase_sweet(token: &str, id: i64, amount: i64) -> Result<(), ApiError> {
    let response = authorized(
        Request::post(&format!("{API_BASE}/sweets/{id}/purchase")),
        token,
    )
    .json(&AmountArgs { amount })?
    .send()
    .await?;
    check_status(&response)
}

pub async fn restock_sweet(token: &str, id: i64, amount: i64) -> Result<(), ApiError> {
    let response = authorized(
        Request::post(&format!("{API_BASE}/sweets/{id}/restock")),
        token,
    )
    .json(&AmountArgs { amount })?
    .send()
    .await?;
    check_status(&response)
}
