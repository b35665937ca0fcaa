//! User settings: catalog endpoint, paging behaviour and the visual theme

use crate::browse::BOOKS_PER_PAGE;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// GraphQL endpoint serving the catalog
    pub endpoint: Option<String>,

    /// Root that relative cover paths are resolved against
    pub asset_root: String,

    pub page_size: usize,

    pub page_policy: PagePolicy,

    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: None,
            asset_root: "/".to_string(),
            page_size: BOOKS_PER_PAGE,
            page_policy: PagePolicy::Clamp,
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and normalize them
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = tokio::fs::read_to_string(path).await?;
        let mut settings: Settings = serde_json::from_str(&data)?;
        settings.normalize();
        settings.theme.validate()?;
        Ok(settings)
    }

    pub fn normalize(&mut self) {
        self.page_size = self.page_size.max(1);
        self.endpoint = self
            .endpoint
            .take()
            .map(|endpoint| endpoint.trim().to_string())
            .filter(|endpoint| !endpoint.is_empty());
        self.asset_root = self.asset_root.trim().to_string();
        if self.asset_root.is_empty() {
            self.asset_root = "/".to_string();
        }
    }
}

/// What happens to the current page when the filtered results shrink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePolicy {
    /// Pull the page back to the last one that still has results
    Clamp,
    /// Keep the page as chosen, even if it is now past the end
    Preserve,
}

impl PagePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PagePolicy::Clamp => "clamp",
            PagePolicy::Preserve => "preserve",
        }
    }
}

impl std::fmt::Display for PagePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PagePolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(PagePolicy::Clamp),
            "preserve" => Ok(PagePolicy::Preserve),
            other => Err(ConfigError::Invalid(format!("unknown page policy '{}'", other))),
        }
    }
}

/// Colors and typography handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            font_family: "Mulish, Arial, sans-serif".to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#5ACCCC".to_string(),
            secondary: "#FABD33".to_string(),
            text: "#335C6E".to_string(),
            background: "#F7F7F7".to_string(),
        }
    }
}

impl Theme {
    /// Check that every palette entry is a parseable hex color
    pub fn validate(&self) -> Result<(), ConfigError> {
        for color in [
            &self.palette.primary,
            &self.palette.secondary,
            &self.palette.text,
            &self.palette.background,
        ] {
            Rgb::parse_hex(color)?;
        }
        Ok(())
    }
}

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn parse_hex(value: &str) -> Result<Self, ConfigError> {
        let hex = value.trim().trim_start_matches('#');
        let invalid = || ConfigError::Invalid(format!("'{}' is not a #RRGGBB color", value));
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Nearest entry in the xterm 256-color cube or grayscale ramp
    pub fn to_ansi256(self) -> u8 {
        let to_cube = |c: u8| -> u8 {
            if c < 48 {
                0
            } else if c < 115 {
                1
            } else {
                (c - 35) / 40
            }
        };
        let cube_level = |i: u8| -> u8 {
            if i == 0 {
                0
            } else {
                55 + i * 40
            }
        };
        let (ri, gi, bi) = (to_cube(self.r), to_cube(self.g), to_cube(self.b));
        let cube = (cube_level(ri), cube_level(gi), cube_level(bi));

        let avg = (self.r as u16 + self.g as u16 + self.b as u16) / 3;
        let gray_index = (if avg > 238 { 23 } else { avg.saturating_sub(3) / 10 }) as u8;
        let gray_level = 8 + gray_index * 10;

        let distance = |(r, g, b): (u8, u8, u8)| -> u32 {
            let dr = self.r as i32 - r as i32;
            let dg = self.g as i32 - g as i32;
            let db = self.b as i32 - b as i32;
            (dr * dr + dg * dg + db * db) as u32
        };

        if distance((gray_level, gray_level, gray_level)) < distance(cube) {
            232 + gray_index
        } else {
            16 + 36 * ri + 6 * gi + bi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.page_size, 8);
        assert_eq!(settings.page_policy, PagePolicy::Clamp);
        assert_eq!(settings.asset_root, "/");
        assert!(settings.theme.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"page_policy":"preserve","theme":{"font_family":"Mulish"}}"#)
                .unwrap();
        assert_eq!(settings.page_policy, PagePolicy::Preserve);
        assert_eq!(settings.page_size, 8);
        assert_eq!(settings.theme.font_family, "Mulish");
        assert_eq!(settings.theme.palette.primary, "#5ACCCC");
    }

    #[test]
    fn test_normalize() {
        let mut settings = Settings {
            endpoint: Some("  ".to_string()),
            asset_root: " ".to_string(),
            page_size: 0,
            ..Settings::default()
        };
        settings.normalize();
        assert_eq!(settings.endpoint, None);
        assert_eq!(settings.asset_root, "/");
        assert_eq!(settings.page_size, 1);
    }

    #[test]
    fn test_page_policy_parses_strings() {
        assert_eq!("clamp".parse::<PagePolicy>().unwrap(), PagePolicy::Clamp);
        assert_eq!(" Preserve ".parse::<PagePolicy>().unwrap(), PagePolicy::Preserve);
        assert!("nope".parse::<PagePolicy>().is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            Rgb::parse_hex("#5ACCCC").unwrap(),
            Rgb { r: 0x5a, g: 0xcc, b: 0xcc }
        );
        assert!(Rgb::parse_hex("#5ACCC").is_err());
        assert!(Rgb::parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_to_ansi256() {
        assert_eq!(Rgb { r: 0, g: 0, b: 0 }.to_ansi256(), 16);
        assert_eq!(Rgb { r: 255, g: 0, b: 0 }.to_ansi256(), 196);
        assert_eq!(Rgb { r: 128, g: 128, b: 128 }.to_ansi256(), 244);
    }

    #[tokio::test]
    async fn test_load_rejects_bad_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, r##"{"theme":{"palette":{"primary":"teal"}}}"##)
            .await
            .unwrap();
        assert!(matches!(
            Settings::load(&path).await,
            Err(ConfigError::Invalid(_))
        ));
    }
}
