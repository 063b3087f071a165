// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Default base URL of the scheduling API collaborator.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub fn default_api_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}
