// SPDX-License-Identifier: MPL-2.0
//! Initials avatar disc for the dashboard header and appointment rows.

use crate::ui::design_tokens::{palette, radius, sizing, typography};
use iced::widget::{container, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Extracts up to two initials from a display name.
///
/// "André Cavalcanti" becomes "AC"; a single name yields one letter; an
/// empty name yields "?" so the disc never renders blank.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Renders a round disc with the name's initials.
pub fn view<'a, Message: 'a>(name: &str) -> Element<'a, Message> {
    Container::new(
        Text::new(initials(name))
            .size(typography::BODY_LG)
            .color(palette::WHITE),
    )
    .width(Length::Fixed(sizing::AVATAR_SIZE))
    .height(Length::Fixed(sizing::AVATAR_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(palette::PRIMARY_500)),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_takes_first_letters_of_two_words() {
        assert_eq!(initials("André Cavalcanti"), "AC");
    }

    #[test]
    fn initials_single_word() {
        assert_eq!(initials("ana"), "A");
    }

    #[test]
    fn initials_ignores_extra_words() {
        assert_eq!(initials("Ana Maria de Souza"), "AM");
    }

    #[test]
    fn empty_name_yields_placeholder() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }
}
