// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for navigation.

/// The application's top-level screens.
///
/// The three credential screens are always reachable from each other; the
/// dashboard is only entered with an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
    Dashboard,
}
