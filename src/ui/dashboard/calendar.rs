// SPDX-License-Identifier: MPL-2.0
//! Month calendar widget with per-day availability.
//!
//! Weeks run Sunday through Saturday. Weekend days and days the provider
//! reported as unavailable are rendered disabled; navigation cannot go
//! before the month containing today.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use chrono::{Datelike, NaiveDate, Weekday};
use iced::widget::{button, text, Button, Column, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::collections::HashMap;

/// Messages emitted by the calendar widget.
#[derive(Debug, Clone)]
pub enum Message {
    DaySelected(NaiveDate),
    PrevMonthPressed,
    NextMonthPressed,
}

/// Returns the first day of the month, if the year/month pair is valid.
#[must_use]
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Returns the year/month pair one month after the given one.
#[must_use]
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Returns the year/month pair one month before the given one.
#[must_use]
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Lays the month out as Sunday-first weeks; `None` cells pad the first
/// and last week.
#[must_use]
pub fn month_weeks(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = first_of_month(year, month) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut day = first;

    loop {
        let column = day.weekday().num_days_from_sunday() as usize;
        week[column] = Some(day);

        let next = day.succ_opt();
        let month_ended = next.is_none_or(|d| d.month() != month);

        if column == 6 || month_ended {
            weeks.push(week);
            week = [None; 7];
        }
        if month_ended {
            break;
        }
        // succ_opt only fails at NaiveDate::MAX, which month_ended covers
        day = match next {
            Some(d) => d,
            None => break,
        };
    }

    weeks
}

/// A day can be picked when it falls on a weekday and the provider has not
/// marked it unavailable. Days without an availability entry stay selectable
/// so an unresolved or failed fetch never locks the whole month.
#[must_use]
pub fn is_selectable(date: NaiveDate, availability: &HashMap<u32, bool>) -> bool {
    let weekday = date.weekday();
    if weekday == Weekday::Sat || weekday == Weekday::Sun {
        return false;
    }
    availability.get(&date.day()).copied().unwrap_or(true)
}

/// Whether the calendar may navigate back from the visible month.
///
/// Months before the one containing today are never shown.
#[must_use]
pub fn can_go_back(visible_year: i32, visible_month: u32, today: NaiveDate) -> bool {
    (visible_year, visible_month) > (today.year(), today.month())
}

/// Renders the calendar for the visible month.
pub fn view<'a>(
    i18n: &'a I18n,
    visible_year: i32,
    visible_month: u32,
    selected_date: NaiveDate,
    today: NaiveDate,
    availability: &HashMap<u32, bool>,
) -> Element<'a, Message> {
    let month_label = Text::new(format!(
        "{} {}",
        i18n.tr(&format!("month-{visible_month}")),
        visible_year
    ))
    .size(typography::BODY_LG);

    let mut prev = button(text("‹").size(typography::BODY_LG))
        .padding(spacing::XXS)
        .style(button::text);
    if can_go_back(visible_year, visible_month, today) {
        prev = prev.on_press(Message::PrevMonthPressed);
    }
    let next = button(text("›").size(typography::BODY_LG))
        .padding(spacing::XXS)
        .style(button::text)
        .on_press(Message::NextMonthPressed);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(prev)
        .push(
            iced::widget::Container::new(month_label)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(next);

    let mut weekday_row = Row::new().spacing(spacing::XXS);
    for index in 0..7 {
        weekday_row = weekday_row.push(
            iced::widget::Container::new(
                Text::new(i18n.tr(&format!("weekday-short-{index}"))).size(typography::CAPTION),
            )
            .width(Length::Fixed(sizing::CALENDAR_DAY))
            .align_x(alignment::Horizontal::Center),
        );
    }

    let mut grid = Column::new().spacing(spacing::XXS).push(weekday_row);
    for week in month_weeks(visible_year, visible_month) {
        let mut row = Row::new().spacing(spacing::XXS);
        for cell in week {
            row = row.push(day_cell(cell, selected_date, availability));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(grid)
        .into()
}

fn day_cell<'a>(
    cell: Option<NaiveDate>,
    selected_date: NaiveDate,
    availability: &HashMap<u32, bool>,
) -> Element<'a, Message> {
    let Some(date) = cell else {
        return iced::widget::Container::new(text(""))
            .width(Length::Fixed(sizing::CALENDAR_DAY))
            .height(Length::Fixed(sizing::CALENDAR_DAY))
            .into();
    };

    let selectable = is_selectable(date, availability);
    let selected = date == selected_date;

    let mut day_button: Button<'a, Message> = button(
        Text::new(date.day().to_string())
            .size(typography::BODY)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::CALENDAR_DAY))
    .height(Length::Fixed(sizing::CALENDAR_DAY))
    .style(move |theme: &Theme, status| day_style(theme, status, selected, selectable));

    if selectable {
        day_button = day_button.on_press(Message::DaySelected(date));
    }

    day_button.into()
}

fn day_style(
    theme: &Theme,
    status: button::Status,
    selected: bool,
    selectable: bool,
) -> button::Style {
    let text_color = if selectable {
        theme.palette().text
    } else {
        Color {
            a: opacity::DISABLED,
            ..theme.palette().text
        }
    };

    let background = if selected {
        Some(iced::Background::Color(palette::PRIMARY_500))
    } else if selectable && matches!(status, button::Status::Hovered | button::Status::Pressed) {
        Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        }))
    } else {
        None
    };

    button::Style {
        background,
        text_color: if selected { palette::WHITE } else { text_color },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_weeks_covers_every_day_once() {
        // June 2026 starts on a Monday and has 30 days
        let weeks = month_weeks(2026, 6);
        let days: Vec<NaiveDate> = weeks.iter().flatten().flatten().copied().collect();

        assert_eq!(days.len(), 30);
        assert_eq!(days[0], date(2026, 6, 1));
        assert_eq!(days[29], date(2026, 6, 30));
    }

    #[test]
    fn month_weeks_pads_leading_cells() {
        // 2026-06-01 is a Monday, so Sunday is padding
        let weeks = month_weeks(2026, 6);
        assert!(weeks[0][0].is_none());
        assert_eq!(weeks[0][1], Some(date(2026, 6, 1)));
    }

    #[test]
    fn month_weeks_invalid_month_is_empty() {
        assert!(month_weeks(2026, 13).is_empty());
    }

    #[test]
    fn weekends_are_never_selectable() {
        let mut availability = HashMap::new();
        availability.insert(6, true);
        availability.insert(7, true);

        // 2026-06-06 is a Saturday, 06-07 a Sunday
        assert!(!is_selectable(date(2026, 6, 6), &availability));
        assert!(!is_selectable(date(2026, 6, 7), &availability));
    }

    #[test]
    fn availability_controls_weekday_selection() {
        let mut availability = HashMap::new();
        availability.insert(8, true);
        availability.insert(9, false);

        assert!(is_selectable(date(2026, 6, 8), &availability));
        assert!(!is_selectable(date(2026, 6, 9), &availability));
        // Only an explicit false disables a weekday
        assert!(is_selectable(date(2026, 6, 10), &availability));
    }

    #[test]
    fn weekdays_stay_selectable_before_availability_arrives() {
        let availability = HashMap::new();

        // 2026-06-08 is a Monday
        assert!(is_selectable(date(2026, 6, 8), &availability));
        assert!(!is_selectable(date(2026, 6, 6), &availability));
    }

    #[test]
    fn cannot_navigate_before_current_month() {
        let today = date(2026, 8, 26);

        assert!(!can_go_back(2026, 8, today));
        assert!(can_go_back(2026, 9, today));
        assert!(can_go_back(2027, 1, today));
        assert!(!can_go_back(2025, 12, today));
    }

    #[test]
    fn month_arithmetic_wraps_at_year_boundaries() {
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(next_month(2026, 6), (2026, 7));
        assert_eq!(prev_month(2027, 1), (2026, 12));
        assert_eq!(prev_month(2026, 6), (2026, 5));
    }
}
