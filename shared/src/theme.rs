//! Theme object used to resolve color and spacing tokens into CSS values.
//!
//! The theme is plain data handed to the rendering layer. It can be loaded from JSON,
//! every field is optional and falls back to the design system default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    Gray300,
    Primary,
}

impl ColorToken {
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Gray300 => "gray-300",
            ColorToken::Primary => "primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColorPalette {
    #[serde(default = "default_gray_300")]
    pub gray_300: String,
    #[serde(default = "default_primary")]
    pub primary: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        ColorPalette {
            gray_300: default_gray_300(),
            primary: default_primary(),
        }
    }
}

fn default_gray_300() -> String {
    "#a0aec0".to_string()
}

fn default_primary() -> String {
    "#6967f9".to_string()
}

/// largest accepted spacing step size
pub const MAX_SPACING_UNIT_PX: u32 = 64;

fn default_spacing_unit_px() -> u32 {
    4
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: ColorPalette,
    /// size of one spacing step
    #[serde(default = "default_spacing_unit_px")]
    pub spacing_unit_px: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            colors: ColorPalette::default(),
            spacing_unit_px: default_spacing_unit_px(),
        }
    }
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        debug!(
            "loaded theme (spacing unit {}px, gray-300 {})",
            theme.spacing_unit_px, theme.colors.gray_300
        );
        Ok(theme)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        if self.spacing_unit_px == 0 {
            return Err(ThemeError::InvalidSpacingUnit);
        }
        if self.spacing_unit_px > MAX_SPACING_UNIT_PX {
            return Err(ThemeError::SpacingUnitTooLarge {
                unit: self.spacing_unit_px,
                max: MAX_SPACING_UNIT_PX,
            });
        }
        for token in [ColorToken::Gray300, ColorToken::Primary] {
            if self.color(token).trim().is_empty() {
                return Err(ThemeError::EmptyColor {
                    token: token.name(),
                });
            }
        }
        Ok(())
    }

    pub fn color(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Gray300 => &self.colors.gray_300,
            ColorToken::Primary => &self.colors.primary,
        }
    }

    pub fn space_px(&self, step: u8) -> u32 {
        // themes built in code skip validation
        self.spacing_unit_px.saturating_mul(u32::from(step))
    }

    /// css length of a spacing step, e.g. `"40px"`
    pub fn space(&self, step: u8) -> String {
        format!("{}px", self.space_px(step))
    }
}
