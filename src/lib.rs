// SPDX-License-Identifier: MPL-2.0
//! `iced_agenda` is an appointment-scheduling desktop client built with the
//! Iced GUI framework.
//!
//! It provides sign-in, sign-up, and password-recovery forms plus a dashboard
//! that shows appointment availability on a calendar, backed by an external
//! HTTP API. It demonstrates internationalization with Fluent, local session
//! persistence, and modular UI design.

pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod session;
pub mod ui;
pub mod validation;
