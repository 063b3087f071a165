// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler borrows the mutable slices of `App` it needs through
//! [`UpdateContext`] and returns the follow-up task. API calls run as
//! `Task::perform` futures; their results come back as top-level messages.

use super::message::Message;
use super::screen::Screen;
use crate::api::{self, ApiError, Appointment, DayAvailability, SessionGrant};
use crate::session;
use crate::ui::dashboard;
use crate::ui::forgot_password;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::sign_in;
use crate::ui::sign_up;
use chrono::{Local, NaiveDate};
use iced::Task;

/// Mutable view over the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub sign_in: &'a mut sign_in::State,
    pub sign_up: &'a mut sign_up::State,
    pub forgot_password: &'a mut forgot_password::State,
    pub dashboard: &'a mut Option<dashboard::State>,
    pub session: &'a mut session::Store,
    pub notifications: &'a mut Manager,
    pub api_base_url: &'a str,
}

pub fn handle_sign_in_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_in::Message,
) -> Task<Message> {
    match sign_in::update(ctx.sign_in, message) {
        Some(sign_in::Action::Submit { email, password }) => Task::perform(
            api::create_session(ctx.api_base_url.to_string(), email, password),
            Message::SessionCreated,
        ),
        Some(sign_in::Action::GoToSignUp) => {
            *ctx.screen = Screen::SignUp;
            Task::none()
        }
        Some(sign_in::Action::GoToForgotPassword) => {
            *ctx.screen = Screen::ForgotPassword;
            Task::none()
        }
        None => Task::none(),
    }
}

pub fn handle_sign_up_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_up::Message,
) -> Task<Message> {
    match sign_up::update(ctx.sign_up, message) {
        Some(sign_up::Action::Submit {
            name,
            email,
            password,
        }) => Task::perform(
            api::create_account(ctx.api_base_url.to_string(), name, email, password),
            Message::AccountCreated,
        ),
        Some(sign_up::Action::GoToSignIn) => {
            *ctx.screen = Screen::SignIn;
            Task::none()
        }
        None => Task::none(),
    }
}

pub fn handle_forgot_password_message(
    ctx: &mut UpdateContext<'_>,
    message: forgot_password::Message,
) -> Task<Message> {
    match forgot_password::update(ctx.forgot_password, message) {
        Some(forgot_password::Action::Submit { email }) => Task::perform(
            api::request_recovery(ctx.api_base_url.to_string(), email),
            Message::RecoveryRequested,
        ),
        Some(forgot_password::Action::GoToSignIn) => {
            *ctx.screen = Screen::SignIn;
            Task::none()
        }
        None => Task::none(),
    }
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    let Some(state) = ctx.dashboard.as_mut() else {
        return Task::none();
    };

    match dashboard::update(state, message) {
        Some(dashboard::Action::FetchMonthAvailability { year, month }) => {
            fetch_availability_task(ctx, year, month)
        }
        Some(dashboard::Action::FetchAppointments { date }) => fetch_appointments_task(ctx, date),
        Some(dashboard::Action::SignOut) => {
            ctx.session.close();
            *ctx.dashboard = None;
            *ctx.sign_in = sign_in::State::default();
            *ctx.screen = Screen::SignIn;
            Task::none()
        }
        None => Task::none(),
    }
}

/// Handles the credential exchange result.
///
/// On success the session opens (a persistence warning becomes a sticky
/// toast), the dashboard is built around today, and both schedule requests
/// start. On failure the form is re-armed and a fixed error toast shows;
/// the collaborator's failure detail is never surfaced.
pub fn handle_session_created(
    ctx: &mut UpdateContext<'_>,
    result: Result<SessionGrant, ApiError>,
) -> Task<Message> {
    ctx.sign_in.submission_finished();

    match result {
        Ok(grant) => {
            if let Some(key) = ctx.session.open(grant) {
                ctx.notifications.push(Notification::error(key));
            }

            let today = Local::now().date_naive();
            let state = dashboard::State::new(today);
            let (year, month) = state.visible_month();
            *ctx.dashboard = Some(state);
            *ctx.sign_in = sign_in::State::default();
            *ctx.screen = Screen::Dashboard;

            Task::batch([
                fetch_availability_task(ctx, year, month),
                fetch_appointments_task(ctx, today),
            ])
        }
        Err(_) => {
            ctx.notifications.push(
                Notification::error("toast-sign-in-failed-title")
                    .with_description("toast-sign-in-failed-description"),
            );
            Task::none()
        }
    }
}

pub fn handle_account_created(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), ApiError>,
) -> Task<Message> {
    ctx.sign_up.submission_finished();

    match result {
        Ok(()) => {
            ctx.notifications.push(
                Notification::success("toast-sign-up-success-title")
                    .with_description("toast-sign-up-success-description"),
            );
            *ctx.sign_up = sign_up::State::default();
            *ctx.screen = Screen::SignIn;
        }
        Err(_) => {
            ctx.notifications.push(
                Notification::error("toast-sign-up-failed-title")
                    .with_description("toast-sign-up-failed-description"),
            );
        }
    }
    Task::none()
}

pub fn handle_recovery_requested(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), ApiError>,
) -> Task<Message> {
    ctx.forgot_password.submission_finished();

    match result {
        Ok(()) => {
            ctx.notifications.push(
                Notification::success("toast-recovery-sent-title")
                    .with_description("toast-recovery-sent-description"),
            );
            *ctx.forgot_password = forgot_password::State::default();
            *ctx.screen = Screen::SignIn;
        }
        Err(_) => {
            ctx.notifications.push(
                Notification::error("toast-recovery-failed-title")
                    .with_description("toast-recovery-failed-description"),
            );
        }
    }
    Task::none()
}

pub fn handle_availability_fetched(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<DayAvailability>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(days) => {
            if let Some(state) = ctx.dashboard.as_mut() {
                state.set_availability(days);
            }
        }
        Err(_) => {
            ctx.notifications
                .push(Notification::error("toast-schedule-load-failed-title"));
        }
    }
    Task::none()
}

pub fn handle_appointments_fetched(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Appointment>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(appointments) => {
            if let Some(state) = ctx.dashboard.as_mut() {
                state.set_appointments(appointments);
            }
        }
        Err(_) => {
            ctx.notifications
                .push(Notification::error("toast-schedule-load-failed-title"));
        }
    }
    Task::none()
}

/// Starts the initial schedule requests for a freshly restored session.
pub fn initial_dashboard_tasks(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(state) = ctx.dashboard.as_ref() else {
        return Task::none();
    };
    let (year, month) = state.visible_month();
    let date = state.selected_date();

    Task::batch([
        fetch_availability_task(ctx, year, month),
        fetch_appointments_task(ctx, date),
    ])
}

fn fetch_availability_task(
    ctx: &UpdateContext<'_>,
    year: i32,
    month: u32,
) -> Task<Message> {
    match (ctx.session.token(), ctx.session.user()) {
        (Some(token), Some(user)) => Task::perform(
            api::month_availability(
                ctx.api_base_url.to_string(),
                token.to_string(),
                user.id.clone(),
                year,
                month,
            ),
            Message::AvailabilityFetched,
        ),
        _ => Task::none(),
    }
}

fn fetch_appointments_task(ctx: &UpdateContext<'_>, date: NaiveDate) -> Task<Message> {
    match ctx.session.token() {
        Some(token) => Task::perform(
            api::day_appointments(ctx.api_base_url.to_string(), token.to_string(), date),
            Message::AppointmentsFetched,
        ),
        None => Task::none(),
    }
}
