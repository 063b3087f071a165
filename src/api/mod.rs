// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the scheduling API collaborator.
//!
//! The backend is an ordinary request/response JSON API. Every call here maps
//! any transport, status, or decode problem to an opaque [`ApiError`]; callers
//! treat a failure as a unit and surface a fixed user-facing message. There is
//! no retry or backoff policy - a failed action requires explicit user
//! re-initiation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedAgenda/", env!("CARGO_PKG_VERSION"));

/// Opaque failure from the API collaborator.
///
/// The distinction between variants exists for logging; user-facing reporting
/// never exposes the detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or the transport failed mid-flight.
    Request(String),
    /// The collaborator answered with a non-success status.
    Status(u16),
    /// The response body could not be decoded as the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "request failed: {}", e),
            ApiError::Status(code) => write!(f, "unexpected status: {}", code),
            ApiError::Decode(e) => write!(f, "invalid response body: {}", e),
        }
    }
}

/// Authenticated user profile as returned by the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Result of a successful credential exchange.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionGrant {
    pub token: String,
    pub user: Profile,
}

/// Availability of a single day within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DayAvailability {
    pub day: u32,
    pub available: bool,
}

/// Counterpart of an appointment (the person attending).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppointmentUser {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A scheduled appointment on the provider's agenda.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub user: AppointmentUser,
}

#[derive(Serialize)]
struct SessionRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct AccountRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Serialize)]
struct RecoveryRequest {
    email: String,
}

fn build_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}

/// Exchanges credentials for a session token and user profile.
///
/// POST `{base_url}/sessions`. Propagates the collaborator's failure
/// unchanged; the caller decides how to report it.
pub async fn create_session(
    base_url: String,
    email: String,
    password: String,
) -> Result<SessionGrant, ApiError> {
    let client = build_client()?;
    let response = client
        .post(format!("{}/sessions", base_url))
        .json(&SessionRequest { email, password })
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    check_status(&response)?;

    response
        .json::<SessionGrant>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Registers a new account. POST `{base_url}/users`.
pub async fn create_account(
    base_url: String,
    name: String,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let client = build_client()?;
    let response = client
        .post(format!("{}/users", base_url))
        .json(&AccountRequest {
            name,
            email,
            password,
        })
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    check_status(&response)
}

/// Requests a password-recovery e-mail. POST `{base_url}/password/forgot`.
///
/// Success/failure only; no structured body is expected either way.
pub async fn request_recovery(base_url: String, email: String) -> Result<(), ApiError> {
    let client = build_client()?;
    let response = client
        .post(format!("{}/password/forgot", base_url))
        .json(&RecoveryRequest { email })
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    check_status(&response)
}

/// Fetches per-day availability for the provider's month.
///
/// GET `{base_url}/providers/{provider_id}/month-availability?year&month`.
pub async fn month_availability(
    base_url: String,
    token: String,
    provider_id: String,
    year: i32,
    month: u32,
) -> Result<Vec<DayAvailability>, ApiError> {
    let client = build_client()?;
    let response = client
        .get(format!(
            "{}/providers/{}/month-availability",
            base_url, provider_id
        ))
        .query(&[("year", year.to_string()), ("month", month.to_string())])
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    check_status(&response)?;

    response
        .json::<Vec<DayAvailability>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetches the signed-in provider's appointments for one day.
///
/// GET `{base_url}/appointments/me?year&month&day`.
pub async fn day_appointments(
    base_url: String,
    token: String,
    date: NaiveDate,
) -> Result<Vec<Appointment>, ApiError> {
    use chrono::Datelike;

    let client = build_client()?;
    let response = client
        .get(format!("{}/appointments/me", base_url))
        .query(&[
            ("year", date.year().to_string()),
            ("month", date.month().to_string()),
            ("day", date.day().to_string()),
        ])
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    check_status(&response)?;

    response
        .json::<Vec<Appointment>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_is_compact() {
        assert_eq!(
            format!("{}", ApiError::Status(401)),
            "unexpected status: 401"
        );
        assert!(format!("{}", ApiError::Request("refused".into())).contains("refused"));
    }

    #[test]
    fn profile_decodes_without_avatar() {
        let json = r#"{"id":"1","name":"Ana","email":"ana@example.com"}"#;
        let profile: Profile =
            serde_json::from_str(json).expect("profile without avatar should decode");
        assert_eq!(profile.name, "Ana");
        assert!(profile.avatar_url.is_none());
    }

    #[test]
    fn session_grant_decodes_token_and_user() {
        let json = r#"{
            "token": "jwt-token",
            "user": {"id": "1", "name": "Ana", "email": "ana@example.com"}
        }"#;
        let grant: SessionGrant = serde_json::from_str(json).expect("grant should decode");
        assert_eq!(grant.token, "jwt-token");
        assert_eq!(grant.user.email, "ana@example.com");
    }

    #[test]
    fn appointment_decodes_utc_date() {
        let json = r#"{
            "id": "a1",
            "date": "2026-08-26T10:00:00Z",
            "user": {"name": "André"}
        }"#;
        let appointment: Appointment =
            serde_json::from_str(json).expect("appointment should decode");
        use chrono::Timelike;
        assert_eq!(appointment.date.hour(), 10);
        assert_eq!(appointment.user.name, "André");
    }
}
