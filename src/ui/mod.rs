// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: screens, shared components, notifications, design
//! tokens, and theming.

pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod forgot_password;
pub mod notifications;
pub mod sign_in;
pub mod sign_up;
pub mod theming;
