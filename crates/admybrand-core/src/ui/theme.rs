use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LandingError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to storage and matched by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Class toggled on the document root; light mode uses none.
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl FromStr for Theme {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(LandingError::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_parse_stored_value() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "system".parse::<Theme>(),
            Err(LandingError::UnknownTheme("system".to_string()))
        );
    }

    #[test]
    fn test_class_name() {
        assert_eq!(Theme::Dark.class_name(), Some("dark"));
        assert_eq!(Theme::Light.class_name(), None);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
