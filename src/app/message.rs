// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ApiError, Appointment, DayAvailability, SessionGrant};
use crate::ui::dashboard;
use crate::ui::forgot_password;
use crate::ui::notifications;
use crate::ui::sign_in;
use crate::ui::sign_up;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SignIn(sign_in::Message),
    SignUp(sign_up::Message),
    ForgotPassword(forgot_password::Message),
    Dashboard(dashboard::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the credential exchange started from the sign-in screen.
    SessionCreated(Result<SessionGrant, ApiError>),
    /// Result of account registration.
    AccountCreated(Result<(), ApiError>),
    /// Result of the password-recovery request.
    RecoveryRequested(Result<(), ApiError>),
    /// Month availability for the dashboard calendar.
    AvailabilityFetched(Result<Vec<DayAvailability>, ApiError>),
    /// Appointments for the dashboard's selected day.
    AppointmentsFetched(Result<Vec<Appointment>, ApiError>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL override. Takes precedence over the config file.
    pub api_url: Option<String>,
    /// Optional data directory override (for session files).
    /// Takes precedence over `ICED_AGENDA_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_AGENDA_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
