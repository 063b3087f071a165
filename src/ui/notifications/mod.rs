// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive, transient messages informing the user about action
//! outcomes (sign-in failures, recovery e-mails, etc.) without blocking
//! interaction.
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! Success and info toasts auto-dismiss after ~3s; errors persist until
//! dismissed manually. At most 3 toasts are visible, the rest queue.
//! Position: bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
