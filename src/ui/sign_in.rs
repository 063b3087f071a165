// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen: email + password form with inline validation errors.

use crate::i18n::fluent::I18n;
use crate::ui::components::form;
use crate::ui::design_tokens::{spacing, typography};
use crate::validation;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// Sign-in form state.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    password: String,
    /// Field name to i18n message key, populated on failed validation.
    errors: HashMap<String, String>,
    submitting: bool,
}

/// Messages produced by the sign-in screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    SubmitPressed,
    GoToSignUpPressed,
    GoToForgotPasswordPressed,
}

/// Actions the screen asks the application shell to perform.
#[derive(Debug, Clone)]
pub enum Action {
    /// Credentials passed validation; start the session request.
    Submit { email: String, password: String },
    GoToSignUp,
    GoToForgotPassword,
}

impl State {
    /// Re-enables the submit button after a request finishes.
    pub fn submission_finished(&mut self) {
        self.submitting = false;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// Handles a sign-in screen message, returning an action for the shell
/// when one is required.
pub fn update(state: &mut State, message: Message) -> Option<Action> {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            None
        }
        Message::SubmitPressed => match validation::sign_in(&state.email, &state.password) {
            Ok(()) => {
                state.errors.clear();
                state.submitting = true;
                Some(Action::Submit {
                    email: state.email.clone(),
                    password: state.password.clone(),
                })
            }
            Err(failure) => {
                state.errors = failure.field_errors();
                None
            }
        },
        Message::GoToSignUpPressed => Some(Action::GoToSignUp),
        Message::GoToForgotPasswordPressed => Some(Action::GoToForgotPassword),
    }
}

/// Renders the sign-in form centered in the window.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("sign-in-title")).size(typography::TITLE_LG);

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
        "sign-in-submit",
        state.submitting,
        Message::SubmitPressed,
    );

    let forgot_link = form::link_button(
        i18n,
        "sign-in-forgot-link",
        Message::GoToForgotPasswordPressed,
    );
    let sign_up_link =
        form::link_button(i18n, "sign-in-create-account", Message::GoToSignUpPressed);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(email_field)
        .push(password_field)
        .push(submit)
        .push(forgot_link)
        .push(sign_up_link);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_with_invalid_fields_sets_errors_and_no_action() {
        let mut state = State::default();
        state.email = "not-valid-email".to_string();
        state.password = "123123".to_string();

        let action = update(&mut state, Message::SubmitPressed);

        assert!(action.is_none());
        assert!(!state.is_submitting());
        assert_eq!(
            state.errors.get("email").map(String::as_str),
            Some("validation-email-invalid")
        );
    }

    #[test]
    fn submit_with_valid_fields_yields_submit_action() {
        let mut state = State::default();
        state.email = "teste@email.com".to_string();
        state.password = "123123".to_string();

        let action = update(&mut state, Message::SubmitPressed);

        match action {
            Some(Action::Submit { email, password }) => {
                assert_eq!(email, "teste@email.com");
                assert_eq!(password, "123123");
            }
            other => panic!("expected Submit action, got {other:?}"),
        }
        assert!(state.is_submitting());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn valid_submit_clears_previous_errors() {
        let mut state = State::default();
        let _ = update(&mut state, Message::SubmitPressed);
        assert!(!state.errors.is_empty());

        let _ = update(
            &mut state,
            Message::EmailChanged("teste@email.com".to_string()),
        );
        let _ = update(&mut state, Message::PasswordChanged("123123".to_string()));
        let _ = update(&mut state, Message::SubmitPressed);

        assert!(state.errors.is_empty());
    }

    #[test]
    fn navigation_messages_map_to_actions() {
        let mut state = State::default();

        assert!(matches!(
            update(&mut state, Message::GoToSignUpPressed),
            Some(Action::GoToSignUp)
        ));
        assert!(matches!(
            update(&mut state, Message::GoToForgotPasswordPressed),
            Some(Action::GoToForgotPassword)
        ));
    }

    #[test]
    fn submission_finished_reenables_submit() {
        let mut state = State::default();
        state.email = "teste@email.com".to_string();
        state.password = "123123".to_string();
        let _ = update(&mut state, Message::SubmitPressed);
        assert!(state.is_submitting());

        state.submission_finished();
        assert!(!state.is_submitting());
    }
}
