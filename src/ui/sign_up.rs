// SPDX-License-Identifier: MPL-2.0
//! Sign-up screen: name + email + password registration form.

use crate::i18n::fluent::I18n;
use crate::ui::components::form;
use crate::ui::design_tokens::{spacing, typography};
use crate::validation;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// Sign-up form state.
#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    password: String,
    errors: HashMap<String, String>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    SubmitPressed,
    GoToSignInPressed,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// All fields passed validation; create the account.
    Submit {
        name: String,
        email: String,
        password: String,
    },
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
        Message::NameChanged(name) => {
            state.name = name;
            None
        }
        Message::EmailChanged(email) => {
            state.email = email;
            None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            None
        }
        Message::SubmitPressed => {
            match validation::sign_up(&state.name, &state.email, &state.password) {
                Ok(()) => {
                    state.errors.clear();
                    state.submitting = true;
                    Some(Action::Submit {
                        name: state.name.clone(),
                        email: state.email.clone(),
                        password: state.password.clone(),
                    })
                }
                Err(failure) => {
                    state.errors = failure.field_errors();
                    None
                }
            }
        }
        Message::GoToSignInPressed => Some(Action::GoToSignIn),
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("sign-up-title")).size(typography::TITLE_LG);

    let name_field = form::field(
        i18n,
        "field-name",
        &state.name,
        state.errors.get("name").map(String::as_str),
        false,
        Message::NameChanged,
    );

    let email_field = form::field(
        i18n,
        "field-email",
        &state.email,
        state.errors.get("email").map(String::as_str),
        false,
        Message::EmailChanged,
    );

    let password_field = form::field(
        i18n,
        "field-password",
        &state.password,
        state.errors.get("password").map(String::as_str),
        true,
        Message::PasswordChanged,
    );

    let submit = form::submit_button(
        i18n,
        "sign-up-submit",
        state.submitting,
        Message::SubmitPressed,
    );

    let back_link = form::link_button(i18n, "sign-up-back-link", Message::GoToSignInPressed);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(name_field)
        .push(email_field)
        .push(password_field)
        .push(submit)
        .push(back_link);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
