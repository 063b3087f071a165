// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen and stacks the toast overlay on top.

use super::message::Message;
use super::screen::Screen;
use crate::api::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::forgot_password;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sign_in;
use crate::ui::sign_up;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub sign_in: &'a sign_in::State,
    pub sign_up: &'a sign_up::State,
    pub forgot_password: &'a forgot_password::State,
    pub dashboard: Option<&'a dashboard::State>,
    pub profile: Option<&'a Profile>,
    pub notifications: &'a Manager,
}

/// Renders the current screen with the notification overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::SignIn => sign_in::view(ctx.sign_in, ctx.i18n).map(Message::SignIn),
        Screen::SignUp => sign_up::view(ctx.sign_up, ctx.i18n).map(Message::SignUp),
        Screen::ForgotPassword => {
            forgot_password::view(ctx.forgot_password, ctx.i18n).map(Message::ForgotPassword)
        }
        Screen::Dashboard => match (ctx.dashboard, ctx.profile) {
            (Some(state), Some(profile)) => {
                dashboard::view(state, profile, ctx.i18n).map(Message::Dashboard)
            }
            // Dashboard without a session: fall back to the sign-in form
            _ => sign_in::view(ctx.sign_in, ctx.i18n).map(Message::SignIn),
        },
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(base).push(overlay).into()
}
