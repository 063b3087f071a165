// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (credential forms, dashboard,
//! session, localization) and translates messages into side effects like API
//! calls or session persistence. Policy decisions (which screen a session
//! restores into, how API failures are reported) stay close to the main
//! update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::session;
use crate::ui::dashboard;
use crate::ui::forgot_password;
use crate::ui::notifications;
use crate::ui::sign_in;
use crate::ui::sign_up;
use crate::ui::theming::ThemeMode;
use chrono::Local;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the screens, localization, and
/// the session store.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    sign_in: sign_in::State,
    sign_up: sign_up::State,
    forgot_password: forgot_password::State,
    /// Present only while a session is open.
    dashboard: Option<dashboard::State>,
    session: session::Store,
    theme_mode: ThemeMode,
    api_base_url: String,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_signed_in())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::SignIn,
            sign_in: sign_in::State::default(),
            sign_up: sign_up::State::default(),
            forgot_password: forgot_password::State::default(),
            dashboard: None,
            session: session::Store::default(),
            theme_mode: ThemeMode::System,
            api_base_url: config::DEFAULT_API_BASE_URL.to_string(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags`, restoring any persisted
    /// session and kicking off the initial schedule requests when one exists.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.api_base_url = flags.api_url.unwrap_or_else(|| config.api_base_url());

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::info(key));
        }

        // A restored session lands directly on the dashboard
        app.session = session::Store::restore();
        let task = if app.session.is_signed_in() {
            let today = Local::now().date_naive();
            app.dashboard = Some(dashboard::State::new(today));
            app.screen = Screen::Dashboard;

            let mut ctx = app.update_context();
            update::initial_dashboard_tasks(&mut ctx)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            sign_in: &mut self.sign_in,
            sign_up: &mut self.sign_up,
            forgot_password: &mut self.forgot_password,
            dashboard: &mut self.dashboard,
            session: &mut self.session,
            notifications: &mut self.notifications,
            api_base_url: &self.api_base_url,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::SignIn(msg) => update::handle_sign_in_message(&mut ctx, msg),
            Message::SignUp(msg) => update::handle_sign_up_message(&mut ctx, msg),
            Message::ForgotPassword(msg) => update::handle_forgot_password_message(&mut ctx, msg),
            Message::Dashboard(msg) => update::handle_dashboard_message(&mut ctx, msg),
            Message::SessionCreated(result) => update::handle_session_created(&mut ctx, result),
            Message::AccountCreated(result) => update::handle_account_created(&mut ctx, result),
            Message::RecoveryRequested(result) => {
                update::handle_recovery_requested(&mut ctx, result)
            }
            Message::AvailabilityFetched(result) => {
                update::handle_availability_fetched(&mut ctx, result)
            }
            Message::AppointmentsFetched(result) => {
                update::handle_appointments_fetched(&mut ctx, result)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            sign_in: &self.sign_in,
            sign_up: &self.sign_up,
            forgot_password: &self.forgot_password,
            dashboard: self.dashboard.as_ref(),
            profile: self.session.user(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Appointment, AppointmentUser, DayAvailability, Profile,
        SessionGrant};
    use chrono::{TimeZone, Utc};
    use tempfile::{tempdir, TempDir};

    /// Backs the session store with a throwaway directory so persistence
    /// never touches the real data dir.
    fn app_with_temp_session(dir: &TempDir) -> App {
        App {
            session: session::Store::restore_from(Some(dir.path().to_path_buf())),
            ..App::default()
        }
    }

    fn grant() -> SessionGrant {
        SessionGrant {
            token: "jwt-token".to_string(),
            user: Profile {
                id: "provider-1".to_string(),
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn default_app_starts_logged_out_on_sign_in() {
        let app = App::default();
        assert_eq!(app.screen, Screen::SignIn);
        assert!(!app.session.is_signed_in());
        assert!(app.dashboard.is_none());
    }

    #[test]
    fn session_created_ok_opens_dashboard() {
        let dir = tempdir().expect("create temp dir");
        let mut app = app_with_temp_session(&dir);

        let _ = app.update(Message::SessionCreated(Ok(grant())));

        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.session.is_signed_in());
        assert!(app.dashboard.is_some());
        assert_eq!(app.session.user().map(|u| u.name.as_str()), Some("Ana"));
    }

    #[test]
    fn session_created_err_stays_on_sign_in_with_toast() {
        let dir = tempdir().expect("create temp dir");
        let mut app = app_with_temp_session(&dir);

        let _ = app.update(Message::SessionCreated(Err(ApiError::Status(401))));

        assert_eq!(app.screen, Screen::SignIn);
        assert!(!app.session.is_signed_in());
        assert!(app.notifications.has_notifications());
        assert!(!app.sign_in.is_submitting());

        // Rejected credentials must leave storage untouched
        let base = Some(dir.path().to_path_buf());
        assert!(session::storage::load_token(base.clone()).is_none());
        assert!(session::storage::load_user(base).is_none());
    }

    #[test]
    fn account_created_ok_returns_to_sign_in_with_success_toast() {
        let mut app = App {
            screen: Screen::SignUp,
            ..App::default()
        };

        let _ = app.update(Message::AccountCreated(Ok(())));

        assert_eq!(app.screen, Screen::SignIn);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn account_created_err_stays_on_sign_up() {
        let mut app = App {
            screen: Screen::SignUp,
            ..App::default()
        };

        let _ = app.update(Message::AccountCreated(Err(ApiError::Status(400))));

        assert_eq!(app.screen, Screen::SignUp);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn recovery_ok_returns_to_sign_in() {
        let mut app = App {
            screen: Screen::ForgotPassword,
            ..App::default()
        };

        let _ = app.update(Message::RecoveryRequested(Ok(())));

        assert_eq!(app.screen, Screen::SignIn);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn recovery_err_stays_on_forgot_password() {
        let mut app = App {
            screen: Screen::ForgotPassword,
            ..App::default()
        };

        let _ = app.update(Message::RecoveryRequested(Err(ApiError::Request(
            "refused".into(),
        ))));

        assert_eq!(app.screen, Screen::ForgotPassword);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn sign_out_clears_session_and_returns_to_sign_in() {
        let dir = tempdir().expect("create temp dir");
        let mut app = app_with_temp_session(&dir);
        let _ = app.update(Message::SessionCreated(Ok(grant())));
        assert!(app.session.is_signed_in());

        let _ = app.update(Message::Dashboard(dashboard::Message::SignOutPressed));

        assert_eq!(app.screen, Screen::SignIn);
        assert!(!app.session.is_signed_in());
        assert!(app.dashboard.is_none());
    }

    #[test]
    fn availability_result_lands_in_dashboard() {
        let dir = tempdir().expect("create temp dir");
        let mut app = app_with_temp_session(&dir);
        let _ = app.update(Message::SessionCreated(Ok(grant())));

        let _ = app.update(Message::AvailabilityFetched(Ok(vec![DayAvailability {
            day: 3,
            available: true,
        }])));

        // No error toast for a successful fetch; only the success path ran
        let dashboard_set = app.dashboard.is_some();
        assert!(dashboard_set);
    }

    #[test]
    fn schedule_fetch_failure_pushes_error_toast() {
        let dir = tempdir().expect("create temp dir");
        let mut app = app_with_temp_session(&dir);
        let _ = app.update(Message::SessionCreated(Ok(grant())));
        app.notifications.clear();

        let _ = app.update(Message::AvailabilityFetched(Err(ApiError::Status(500))));
        assert!(app.notifications.has_notifications());

        app.notifications.clear();
        let _ = app.update(Message::AppointmentsFetched(Err(ApiError::Status(500))));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn appointments_result_lands_in_dashboard() {
        let dir = tempdir().expect("create temp dir");
        let mut app = app_with_temp_session(&dir);
        let _ = app.update(Message::SessionCreated(Ok(grant())));

        let appointment = Appointment {
            id: "a1".to_string(),
            date: Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap(),
            user: AppointmentUser {
                name: "André".to_string(),
                avatar_url: None,
            },
        };
        let _ = app.update(Message::AppointmentsFetched(Ok(vec![appointment])));

        assert!(app.dashboard.is_some());
    }

    #[test]
    fn navigation_between_credential_screens() {
        let mut app = App::default();

        let _ = app.update(Message::SignIn(sign_in::Message::GoToSignUpPressed));
        assert_eq!(app.screen, Screen::SignUp);

        let _ = app.update(Message::SignUp(sign_up::Message::GoToSignInPressed));
        assert_eq!(app.screen, Screen::SignIn);

        let _ = app.update(Message::SignIn(sign_in::Message::GoToForgotPasswordPressed));
        assert_eq!(app.screen, Screen::ForgotPassword);

        let _ = app.update(Message::ForgotPassword(
            forgot_password::Message::GoToSignInPressed,
        ));
        assert_eq!(app.screen, Screen::SignIn);
    }

    #[test]
    fn notification_dismissal_flows_through_update() {
        let mut app = App::default();
        let id = app
            .notifications
            .push(notifications::Notification::error("toast-sign-in-failed-title"));
        assert!(app.notifications.has_notifications());

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn tick_is_forwarded_to_the_notification_manager() {
        let mut app = App::default();
        app.notifications
            .push(notifications::Notification::error("toast-sign-in-failed-title"));

        let _ = app.update(Message::Tick(std::time::Instant::now()));

        // Errors never auto-dismiss, the tick must not remove them
        assert!(app.notifications.has_notifications());
    }
}
