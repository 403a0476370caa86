//! Light/dark color scheme

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two-valued theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// The other scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme `{0}`, expected `light` or `dark`")]
pub struct ParseSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(ParseSchemeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_ne!(scheme.toggle(), scheme);
            assert_eq!(scheme.toggle().toggle(), scheme);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert_eq!(" light ".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert!("sepia".parse::<ColorScheme>().is_err());
    }
}
