// SPDX-License-Identifier: MPL-2.0
//! Forgot-password screen: requests a recovery e-mail for an address.

use crate::i18n::fluent::I18n;
use crate::ui::components::form;
use crate::ui::design_tokens::{spacing, typography};
use crate::validation;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// Forgot-password form state.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    errors: HashMap<String, String>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    SubmitPressed,
    GoToSignInPressed,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// The address passed validation; request the recovery e-mail.
    Submit { email: String },
    GoToSignIn,
}

impl State {
    pub fn submission_finished(&mut self) {
        self.submitting = false;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

pub fn update(state: &mut State, message: Message) -> Option<Action> {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            None
        }
        Message::SubmitPressed => match validation::forgot_password(&state.email) {
            Ok(()) => {
                state.errors.clear();
                state.submitting = true;
                Some(Action::Submit {
                    email: state.email.clone(),
                })
            }
            Err(failure) => {
                state.errors = failure.field_errors();
                None
            }
        },
        Message::GoToSignInPressed => Some(Action::GoToSignIn),
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("forgot-title")).size(typography::TITLE_LG);

    let email_field = form::field(
        i18n,
        "field-email",
        &state.email,
        state.errors.get("email").map(String::as_str),
        false,
        Message::EmailChanged,
    );

    let submit = form::submit_button(
        i18n,
        "forgot-submit",
        state.submitting,
        Message::SubmitPressed,
    );

    let back_link = form::link_button(i18n, "forgot-back-link", Message::GoToSignInPressed);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(email_field)
        .push(submit)
        .push(back_link);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
