//! REST data-access layer for the hosted backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! backend's `/auth/v1`, `/rest/v1`, and `/storage/v1` surfaces.
//! Server-side (SSR): stubs returning `None`/error since these calls are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fetches whose absence the UI can degrade around return `Option`; mutations
//! the user must hear about return `Result<_, String>` with raw backend text,
//! which call sites pass through `error::sanitize_message` before display.
//! No call here retries; every failure is terminal for that user action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config;
use super::types::{AppearanceSettings, Link, Profile, Session, SiteSettings};
use crate::util::storage;

const SESSION_STORAGE_KEY: &str = "linkleaf_session";

// =============================================================================
// ENDPOINT FORMATTERS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn profiles_by_id_query(user_id: &str) -> String {
    format!("/rest/v1/profiles?id=eq.{user_id}&select=*")
}

#[cfg(any(test, feature = "hydrate"))]
fn profiles_by_username_query(username: &str) -> String {
    format!("/rest/v1/profiles?username=eq.{username}&select=*")
}

#[cfg(any(test, feature = "hydrate"))]
fn links_query(user_id: &str) -> String {
    format!("/rest/v1/links?user_id=eq.{user_id}&select=*&order=position.asc")
}

#[cfg(any(test, feature = "hydrate"))]
fn link_by_id_query(link_id: &str) -> String {
    format!("/rest/v1/links?id=eq.{link_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn appearance_query(user_id: &str) -> String {
    format!("/rest/v1/appearance_settings?user_id=eq.{user_id}&select=*")
}

#[cfg(any(test, feature = "hydrate"))]
fn site_settings_query() -> String {
    "/rest/v1/site_settings?select=*&limit=1".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn storage_object_path(bucket: &str, user_id: &str, object_name: &str) -> String {
    format!("/storage/v1/object/{bucket}/{user_id}/{object_name}")
}

#[cfg(any(test, feature = "hydrate"))]
fn public_object_url(bucket: &str, user_id: &str, object_name: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{bucket}/{user_id}/{object_name}",
        config::api_url()
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

// =============================================================================
// HYDRATE REQUEST PLUMBING
// =============================================================================

#[cfg(feature = "hydrate")]
fn full_url(path: &str) -> String {
    format!("{}{path}", config::api_url())
}

/// Attach the anon `apikey` header plus a bearer token: the session's access
/// token when present, the anon key for public reads.
#[cfg(feature = "hydrate")]
fn with_auth(
    builder: gloo_net::http::RequestBuilder,
    session: Option<&Session>,
) -> gloo_net::http::RequestBuilder {
    let bearer = session.map_or_else(|| config::anon_key().to_owned(), |s| s.access_token.clone());
    builder
        .header("apikey", config::anon_key())
        .header("Authorization", &format!("Bearer {bearer}"))
}

/// Extract the backend's error text from a non-OK response body, falling back
/// to the HTTP status line.
#[cfg(feature = "hydrate")]
async fn response_error(what: &str, resp: gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(alias = "msg", alias = "error_description")]
        message: Option<String>,
    }
    let status = resp.status();
    if let Ok(body) = resp.json::<ErrorBody>().await {
        if let Some(message) = body.message {
            if !message.is_empty() {
                return message;
            }
        }
    }
    request_failed_message(what, status)
}

// =============================================================================
// SESSION CACHE
// =============================================================================

/// Restore the cached session from `localStorage`, if any.
#[must_use]
pub fn load_session() -> Option<Session> {
    storage::load_local_json(SESSION_STORAGE_KEY)
}

/// Cache a session in `localStorage` so reloads stay signed in.
pub fn store_session(session: &Session) {
    storage::save_local_json(SESSION_STORAGE_KEY, session);
}

/// Drop the cached session.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(st) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = st.remove_item(SESSION_STORAGE_KEY);
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    user: TokenUser,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct TokenUser {
    id: String,
    email: String,
}

#[cfg(feature = "hydrate")]
impl TokenResponse {
    fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user_id: self.user.id,
            email: self.user.email,
        }
    }
}

/// Register a new account. The backend sends a confirmation email; no session
/// exists until the link is exchanged.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn sign_up(email: &str, password: &str, username: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "data": { "username": username },
        });
        let resp = with_auth(gloo_net::http::Request::post(&full_url("/auth/v1/signup")), None)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("sign up", resp).await);
        }
        storage::set_session_flag(storage::PENDING_SIGNUP_EMAIL_KEY, email);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, username);
        Err("not available on server".to_owned())
    }
}

/// Exchange email + password for a session.
///
/// # Errors
///
/// Returns raw backend error text (e.g. "Invalid login credentials").
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = with_auth(
            gloo_net::http::Request::post(&full_url("/auth/v1/token?grant_type=password")),
            None,
        )
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("sign in", resp).await);
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        let session = body.into_session();
        store_session(&session);
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Revoke the session on the backend and drop the local cache. Best-effort;
/// the local cache is cleared even when the revoke call fails.
pub async fn sign_out(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let _ = with_auth(
            gloo_net::http::Request::post(&full_url("/auth/v1/logout")),
            Some(session),
        )
        .send()
        .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
    clear_session();
}

/// Exchange an email-confirmation token for a session.
///
/// # Errors
///
/// Returns raw backend error text when the token is invalid or expired.
pub async fn exchange_confirmation(token_hash: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "type": "signup", "token_hash": token_hash });
        let resp = with_auth(gloo_net::http::Request::post(&full_url("/auth/v1/verify")), None)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("confirmation", resp).await);
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        let session = body.into_session();
        store_session(&session);
        storage::clear_session_flag(storage::PENDING_SIGNUP_EMAIL_KEY);
        storage::set_session_flag(storage::CONFIRMED_SESSION_KEY, "1");
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token_hash;
        Err("not available on server".to_owned())
    }
}

/// Ask the backend to send a password-reset email.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = with_auth(gloo_net::http::Request::post(&full_url("/auth/v1/recover")), None)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("password reset", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// PROFILES
// =============================================================================

/// Fetch the signed-in user's own profile row. `None` when missing or on the
/// server; the dashboard treats `None` as a fatal session error.
pub async fn fetch_profile(session: &Session) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&profiles_by_id_query(&session.user_id));
        let resp = with_auth(gloo_net::http::Request::get(&url), Some(session))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let rows: Vec<Profile> = resp.json().await.ok()?;
        rows.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Public profile lookup by username for the `/:username` page.
pub async fn fetch_profile_by_username(username: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&profiles_by_username_query(username));
        let resp = with_auth(gloo_net::http::Request::get(&url), None)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let rows: Vec<Profile> = resp.json().await.ok()?;
        rows.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        None
    }
}

/// Patch fields on the signed-in user's profile row.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn update_profile(session: &Session, patch: &serde_json::Value) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&profiles_by_id_query(&session.user_id));
        let resp = with_auth(gloo_net::http::Request::patch(&url), Some(session))
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("profile update", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, patch);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// LINKS
// =============================================================================

/// Fetch a profile's links ordered by position. Used by both the dashboard
/// (authenticated) and the public page (anon).
pub async fn fetch_links(user_id: &str, session: Option<&Session>) -> Option<Vec<Link>> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&links_query(user_id));
        let resp = with_auth(gloo_net::http::Request::get(&url), session)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, session);
        None
    }
}

/// Insert a new link row.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn create_link(session: &Session, link: &Link) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&full_url("/rest/v1/links")), Some(session))
            .json(link)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("link create", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, link);
        Err("not available on server".to_owned())
    }
}

/// Patch fields on one link row.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn update_link(session: &Session, link_id: &str, patch: &serde_json::Value) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&link_by_id_query(link_id));
        let resp = with_auth(gloo_net::http::Request::patch(&url), Some(session))
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("link update", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, link_id, patch);
        Err("not available on server".to_owned())
    }
}

/// Delete one link row.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn delete_link(session: &Session, link_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&link_by_id_query(link_id));
        let resp = with_auth(gloo_net::http::Request::delete(&url), Some(session))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("link delete", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, link_id);
        Err("not available on server".to_owned())
    }
}

/// Persist recomputed positions: one PATCH per changed row, all started
/// together, joined unordered. Any single failure fails the aggregate; rows
/// already written stay written (no rollback, by design — see `state::links`).
///
/// # Errors
///
/// Returns the first failing row's error text.
pub async fn persist_positions(session: &Session, changes: &[(String, i32)]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let updates = changes.iter().map(|(link_id, position)| {
            let patch = serde_json::json!({ "position": position });
            async move { update_link(session, link_id, &patch).await }
        });
        let results = futures::future::join_all(updates).await;
        results.into_iter().collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, changes);
        Err("not available on server".to_owned())
    }
}

/// Fire-and-forget click counter bump, called before navigating away. Errors
/// are intentionally dropped; a lost click must never block navigation.
pub async fn increment_link_clicks(link_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "p_link_id": link_id });
        let request = with_auth(
            gloo_net::http::Request::post(&full_url("/rest/v1/rpc/increment_link_clicks")),
            None,
        )
        .json(&payload);
        if let Ok(request) = request {
            let _ = request.send().await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = link_id;
    }
}

// =============================================================================
// APPEARANCE
// =============================================================================

/// Fetch a profile's appearance row; `None` falls back to defaults.
pub async fn fetch_appearance(user_id: &str, session: Option<&Session>) -> Option<AppearanceSettings> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&appearance_query(user_id));
        let resp = with_auth(gloo_net::http::Request::get(&url), session)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let rows: Vec<AppearanceSettings> = resp.json().await.ok()?;
        rows.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, session);
        None
    }
}

/// Upsert the whole appearance row.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn upsert_appearance(session: &Session, settings: &AppearanceSettings) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(
            gloo_net::http::Request::post(&full_url("/rest/v1/appearance_settings")),
            Some(session),
        )
        .header("Prefer", "resolution=merge-duplicates")
        .json(settings)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("appearance save", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, settings);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// SITE SETTINGS
// =============================================================================

/// Fetch the operator settings row; `None` falls back to defaults.
pub async fn fetch_site_settings(session: &Session) -> Option<SiteSettings> {
    #[cfg(feature = "hydrate")]
    {
        let url = full_url(&site_settings_query());
        let resp = with_auth(gloo_net::http::Request::get(&url), Some(session))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let rows: Vec<SiteSettings> = resp.json().await.ok()?;
        rows.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Persist the operator settings row. Nothing on the client enforces these
/// flags; they are stored for the backend's benefit.
///
/// # Errors
///
/// Returns raw backend error text on failure.
pub async fn update_site_settings(session: &Session, settings: &SiteSettings) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(
            gloo_net::http::Request::post(&full_url("/rest/v1/site_settings")),
            Some(session),
        )
        .header("Prefer", "resolution=merge-duplicates")
        .json(settings)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("settings save", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, settings);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Upload an image to a storage bucket and return its public URL. Uploads are
/// never debounced; the file goes up immediately and the caller persists the
/// returned URL as a normal field update.
///
/// # Errors
///
/// Returns raw backend error text on failure.
#[cfg(feature = "hydrate")]
pub async fn upload_image(session: &Session, bucket: &str, file: &web_sys::File) -> Result<String, String> {
    let object_name = format!("{}-{}", uuid::Uuid::new_v4(), file.name());
    let path = storage_object_path(bucket, &session.user_id, &object_name);
    let request = with_auth(gloo_net::http::Request::post(&full_url(&path)), Some(session))
        .header("x-upsert", "true")
        .body(file.clone())
        .map_err(|e| e.to_string())?;
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(response_error("image upload", resp).await);
    }
    Ok(public_object_url(bucket, &session.user_id, &object_name))
}
