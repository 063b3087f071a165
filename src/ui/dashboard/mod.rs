// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: the signed-in provider's schedule next to a month
//! calendar with availability.

pub mod calendar;

use crate::api::{Appointment, DayAvailability, Profile};
use crate::i18n::fluent::I18n;
use crate::ui::components::avatar;
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::collections::HashMap;

/// Dashboard state.
#[derive(Debug)]
pub struct State {
    today: NaiveDate,
    selected_date: NaiveDate,
    visible_year: i32,
    visible_month: u32,
    /// Day-of-month to availability for the visible month.
    availability: HashMap<u32, bool>,
    /// Appointments for the selected day, sorted by time.
    appointments: Vec<Appointment>,
}

/// Messages produced by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    Calendar(calendar::Message),
    SignOutPressed,
}

/// Actions the dashboard asks the application shell to perform.
#[derive(Debug, Clone)]
pub enum Action {
    FetchMonthAvailability { year: i32, month: u32 },
    FetchAppointments { date: NaiveDate },
    SignOut,
}

impl State {
    /// Creates the dashboard focused on today.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected_date: today,
            visible_year: today.year(),
            visible_month: today.month(),
            availability: HashMap::new(),
            appointments: Vec::new(),
        }
    }

    #[must_use]
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    #[must_use]
    pub fn visible_month(&self) -> (i32, u32) {
        (self.visible_year, self.visible_month)
    }

    /// Replaces the availability for the visible month.
    pub fn set_availability(&mut self, days: Vec<DayAvailability>) {
        self.availability = days.into_iter().map(|d| (d.day, d.available)).collect();
    }

    /// Replaces the selected day's appointments, keeping them in time order.
    pub fn set_appointments(&mut self, mut appointments: Vec<Appointment>) {
        appointments.sort_by_key(|a| a.date);
        self.appointments = appointments;
    }

    /// The first appointment after `now`, shown only while today is selected.
    #[must_use]
    pub fn next_appointment(&self, now: DateTime<Utc>) -> Option<&Appointment> {
        if self.selected_date != self.today {
            return None;
        }
        self.appointments.iter().find(|a| a.date > now)
    }

    fn morning(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter().filter(|a| a.date.hour() < 12)
    }

    fn afternoon(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter().filter(|a| a.date.hour() >= 12)
    }
}

/// Handles a dashboard message, returning an action for the shell when one
/// is required.
pub fn update(state: &mut State, message: Message) -> Option<Action> {
    match message {
        Message::Calendar(calendar::Message::DaySelected(date)) => {
            state.selected_date = date;
            Some(Action::FetchAppointments { date })
        }
        Message::Calendar(calendar::Message::PrevMonthPressed) => {
            if !calendar::can_go_back(state.visible_year, state.visible_month, state.today) {
                return None;
            }
            let (year, month) = calendar::prev_month(state.visible_year, state.visible_month);
            state.visible_year = year;
            state.visible_month = month;
            state.availability.clear();
            Some(Action::FetchMonthAvailability { year, month })
        }
        Message::Calendar(calendar::Message::NextMonthPressed) => {
            let (year, month) = calendar::next_month(state.visible_year, state.visible_month);
            state.visible_year = year;
            state.visible_month = month;
            state.availability.clear();
            Some(Action::FetchMonthAvailability { year, month })
        }
        Message::SignOutPressed => Some(Action::SignOut),
    }
}

/// Renders the dashboard for the signed-in user.
pub fn view<'a>(state: &'a State, profile: &'a Profile, i18n: &'a I18n) -> Element<'a, Message> {
    let header = view_header(profile, i18n);
    let schedule = view_schedule(state, i18n);

    let month_calendar = calendar::view(
        i18n,
        state.visible_year,
        state.visible_month,
        state.selected_date,
        state.today,
        &state.availability,
    )
    .map(Message::Calendar);

    let body = Row::new()
        .spacing(spacing::XL)
        .push(Container::new(schedule).width(Length::FillPortion(3)))
        .push(Container::new(month_calendar).width(Length::FillPortion(2)));

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(body)
        .into()
}

fn view_header<'a>(profile: &'a Profile, i18n: &'a I18n) -> Element<'a, Message> {
    let greeting = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("dashboard-welcome"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .push(
            Text::new(profile.name.clone())
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_500),
        );

    let sign_out = button(Text::new(i18n.tr("dashboard-sign-out")).size(typography::BODY))
        .padding(spacing::XS)
        .style(button::text)
        .on_press(Message::SignOutPressed);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(avatar::view(&profile.name))
        .push(Container::new(greeting).width(Length::Fill))
        .push(sign_out)
        .into()
}

fn view_schedule<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("dashboard-schedule-title")).size(typography::TITLE_LG);

    let weekday_index = state
        .selected_date
        .weekday()
        .num_days_from_sunday()
        .to_string();
    let mut date_line = Row::new().spacing(spacing::XS);
    if state.selected_date == state.today {
        date_line = date_line.push(
            Text::new(i18n.tr("dashboard-today"))
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        );
    }
    date_line = date_line
        .push(
            Text::new(format!(
                "{} {}",
                i18n.tr(&format!("month-{}", state.selected_date.month())),
                state.selected_date.day()
            ))
            .size(typography::BODY)
            .color(palette::PRIMARY_500),
        )
        .push(
            Text::new(i18n.tr(&format!("weekday-name-{weekday_index}")))
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        );

    let mut schedule = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(date_line);

    if let Some(next) = state.next_appointment(Utc::now()) {
        schedule = schedule
            .push(
                Text::new(i18n.tr("dashboard-next-appointment")).size(typography::CAPTION),
            )
            .push(appointment_card(next, true));
    }

    schedule = schedule.push(section(
        i18n,
        "dashboard-morning",
        state.morning().collect(),
    ));
    schedule = schedule.push(section(
        i18n,
        "dashboard-afternoon",
        state.afternoon().collect(),
    ));

    if state.appointments.is_empty() {
        schedule = schedule.push(
            Text::new(i18n.tr("dashboard-no-appointments"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );
    }

    schedule.into()
}

fn section<'a>(
    i18n: &'a I18n,
    title_key: &str,
    appointments: Vec<&'a Appointment>,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).push(
        Text::new(i18n.tr(title_key))
            .size(typography::TITLE_MD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
    );

    for appointment in appointments {
        column = column.push(appointment_card(appointment, false));
    }

    column.into()
}

fn appointment_card<'a>(appointment: &'a Appointment, highlighted: bool) -> Element<'a, Message> {
    let time = Text::new(appointment.date.format("%H:%M").to_string())
        .size(typography::BODY)
        .color(palette::PRIMARY_500);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(time)
        .push(avatar::view(&appointment.user.name))
        .push(Text::new(appointment.user.name.clone()).size(typography::BODY_LG));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| appointment_card_style(theme, highlighted))
        .into()
}

fn appointment_card_style(theme: &Theme, highlighted: bool) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: if highlighted {
                palette::PRIMARY_500
            } else {
                theme.extended_palette().background.strong.color
            },
            width: if highlighted {
                border::WIDTH_MD
            } else {
                border::WIDTH_SM
            },
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppointmentUser;
    use chrono::TimeZone;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn appointment(id: &str, hour: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2026, 8, 26, hour, 0, 0).unwrap(),
            user: AppointmentUser {
                name: format!("user-{id}"),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn selecting_a_day_requests_its_appointments() {
        let mut state = State::new(date(2026, 8, 26));
        let picked = date(2026, 8, 28);

        let action = update(
            &mut state,
            Message::Calendar(calendar::Message::DaySelected(picked)),
        );

        assert!(matches!(
            action,
            Some(Action::FetchAppointments { date }) if date == picked
        ));
        assert_eq!(state.selected_date(), picked);
    }

    #[test]
    fn month_navigation_requests_availability() {
        let mut state = State::new(date(2026, 8, 26));
        state.set_availability(vec![DayAvailability {
            day: 27,
            available: true,
        }]);

        let action = update(
            &mut state,
            Message::Calendar(calendar::Message::NextMonthPressed),
        );

        assert!(matches!(
            action,
            Some(Action::FetchMonthAvailability {
                year: 2026,
                month: 9
            })
        ));
        assert_eq!(state.visible_month(), (2026, 9));
        // Stale availability must not leak into the new month
        assert!(state.availability.is_empty());
    }

    #[test]
    fn cannot_navigate_before_the_current_month() {
        let mut state = State::new(date(2026, 8, 26));

        let action = update(
            &mut state,
            Message::Calendar(calendar::Message::PrevMonthPressed),
        );

        assert!(action.is_none());
        assert_eq!(state.visible_month(), (2026, 8));
    }

    #[test]
    fn prev_month_works_after_going_forward() {
        let mut state = State::new(date(2026, 8, 26));
        let _ = update(
            &mut state,
            Message::Calendar(calendar::Message::NextMonthPressed),
        );

        let action = update(
            &mut state,
            Message::Calendar(calendar::Message::PrevMonthPressed),
        );

        assert!(matches!(
            action,
            Some(Action::FetchMonthAvailability {
                year: 2026,
                month: 8
            })
        ));
        assert_eq!(state.visible_month(), (2026, 8));
    }

    #[test]
    fn appointments_are_kept_sorted_and_split_by_period() {
        let mut state = State::new(date(2026, 8, 26));
        state.set_appointments(vec![
            appointment("b", 14),
            appointment("a", 9),
            appointment("c", 11),
        ]);

        let morning: Vec<&str> = state.morning().map(|a| a.id.as_str()).collect();
        let afternoon: Vec<&str> = state.afternoon().map(|a| a.id.as_str()).collect();

        assert_eq!(morning, vec!["a", "c"]);
        assert_eq!(afternoon, vec!["b"]);
    }

    #[test]
    fn next_appointment_is_the_first_after_now() {
        let mut state = State::new(date(2026, 8, 26));
        state.set_appointments(vec![appointment("a", 9), appointment("b", 14)]);

        let now = Utc.with_ymd_and_hms(2026, 8, 26, 10, 0, 0).unwrap();
        assert_eq!(state.next_appointment(now).map(|a| a.id.as_str()), Some("b"));

        let late = Utc.with_ymd_and_hms(2026, 8, 26, 15, 0, 0).unwrap();
        assert!(state.next_appointment(late).is_none());
    }

    #[test]
    fn next_appointment_only_shown_for_today() {
        let mut state = State::new(date(2026, 8, 26));
        state.set_appointments(vec![appointment("a", 9)]);
        state.selected_date = date(2026, 8, 27);

        let now = Utc.with_ymd_and_hms(2026, 8, 26, 8, 0, 0).unwrap();
        assert!(state.next_appointment(now).is_none());
    }

    #[test]
    fn sign_out_button_maps_to_action() {
        let mut state = State::new(date(2026, 8, 26));
        assert!(matches!(
            update(&mut state, Message::SignOutPressed),
            Some(Action::SignOut)
        ));
    }
}
