// SPDX-License-Identifier: MPL-2.0
//! Form building blocks: labeled inputs with inline error text and the
//! primary submit button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, text_input, Button, Column, Text};
use iced::{Element, Length};

/// A labeled text input with an optional inline error line underneath.
///
/// `error_key` is the i18n key from the validation-error map; `None` renders
/// no error line (the field is presumed valid).
pub fn field<'a, Message: Clone + 'a>(
    i18n: &I18n,
    label_key: &str,
    value: &str,
    error_key: Option<&str>,
    secure: bool,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let placeholder = i18n.tr(label_key);

    let mut input = text_input(&placeholder, value)
        .on_input(on_input)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    if secure {
        input = input.secure(true);
    }

    let mut column = Column::new().spacing(spacing::XXS).push(input);

    if let Some(key) = error_key {
        column = column.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}

/// The primary form submit button; disabled while a submission is in flight.
pub fn submit_button<'a, Message: Clone + 'a>(
    i18n: &I18n,
    label_key: &str,
    submitting: bool,
    on_press: Message,
) -> Button<'a, Message> {
    let mut submit = button(
        Text::new(i18n.tr(label_key))
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .center(),
    )
    .padding(spacing::SM)
    .width(Length::Fixed(sizing::INPUT_WIDTH))
    .style(button::primary);

    if !submitting {
        submit = submit.on_press(on_press);
    }

    submit
}

/// A secondary navigation link rendered as a borderless text button.
pub fn link_button<'a, Message: Clone + 'a>(
    i18n: &I18n,
    label_key: &str,
    on_press: Message,
) -> Button<'a, Message> {
    button(Text::new(i18n.tr(label_key)).size(typography::BODY))
        .padding(spacing::XXS)
        .style(button::text)
        .on_press(on_press)
}
