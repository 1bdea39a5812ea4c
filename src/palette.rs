//! Colour palettes for sparks.
//!
//! Every spark picks one colour uniformly from the field's palette at spawn
//! and keeps it for life.
//!
//! ```ignore
//! FieldConfig::default().with_palette(Palette::Ember);
//! FieldConfig::default().with_palette(Palette::from_hex(&["#ff0080", "#00e5ff"])?);
//! ```

use crate::error::ConfigError;
use crate::random::RandomSource;
use glam::Vec3;
use serde::{Deserialize, Serialize};

const WHITE: Vec3 = Vec3::ONE;

const AGENCY: [Vec3; 5] = [
    Vec3::new(0.231, 0.510, 0.965), // Blue
    Vec3::new(0.545, 0.361, 0.965), // Violet
    Vec3::new(0.925, 0.282, 0.600), // Pink
    Vec3::new(0.024, 0.714, 0.831), // Cyan
    Vec3::new(0.961, 0.620, 0.043), // Amber
];

const EMBER: [Vec3; 4] = [
    Vec3::new(1.0, 0.9, 0.4), // Yellow
    Vec3::new(1.0, 0.5, 0.2), // Orange
    Vec3::new(1.0, 0.2, 0.1), // Red-orange
    Vec3::new(0.7, 0.1, 0.0), // Deep red
];

const OCEAN: [Vec3; 4] = [
    Vec3::new(0.0, 0.4, 0.6), // Blue
    Vec3::new(0.2, 0.6, 0.8), // Light blue
    Vec3::new(0.6, 0.9, 1.0), // Cyan
    Vec3::new(0.0, 0.8, 0.7), // Teal
];

const MONO: [Vec3; 1] = [WHITE];

/// Fixed set of colours sparks are drawn from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Brand blues, violets and pinks (default).
    #[default]
    Agency,
    /// Warm yellows through deep red.
    Ember,
    /// Cool blues and teals.
    Ocean,
    /// Plain white.
    Mono,
    /// User supplied RGB colours (0.0-1.0).
    Custom(Vec<Vec3>),
}

impl Palette {
    /// Build a custom palette from `#rrggbb` strings.
    pub fn from_hex(colors: &[&str]) -> Result<Self, ConfigError> {
        colors
            .iter()
            .map(|c| parse_hex(c))
            .collect::<Result<Vec<_>, _>>()
            .map(Palette::Custom)
    }

    /// The colours of this palette.
    pub fn colors(&self) -> &[Vec3] {
        match self {
            Palette::Agency => &AGENCY,
            Palette::Ember => &EMBER,
            Palette::Ocean => &OCEAN,
            Palette::Mono => &MONO,
            Palette::Custom(colors) => colors,
        }
    }

    pub fn len(&self) -> usize {
        self.colors().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    /// Pick one colour uniformly. An empty palette yields white.
    pub fn pick(&self, rng: &mut impl RandomSource) -> Vec3 {
        let colors = self.colors();
        if colors.is_empty() {
            return WHITE;
        }
        colors[rng.index(colors.len())]
    }
}

fn parse_hex(s: &str) -> Result<Vec3, ConfigError> {
    let invalid = || ConfigError::InvalidColor(s.to_string());
    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| invalid())
    };
    Ok(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff80"]).unwrap();
        let colors = palette.colors();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], Vec3::new(1.0, 0.0, 0.0));
        assert!((colors[1].z - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            Palette::from_hex(&["ff0000"]),
            Err(ConfigError::InvalidColor(_))
        ));
        assert!(Palette::from_hex(&["#ff00"]).is_err());
        assert!(Palette::from_hex(&["#gg0000"]).is_err());
    }

    #[test]
    fn test_pick_uses_rng_index() {
        let palette = Palette::Agency;
        let mut first = SequenceRandom::constant(0.0);
        let mut last = SequenceRandom::constant(0.99);
        assert_eq!(palette.pick(&mut first), AGENCY[0]);
        assert_eq!(palette.pick(&mut last), AGENCY[4]);
    }

    #[test]
    fn test_empty_custom_picks_white() {
        let palette = Palette::Custom(Vec::new());
        let mut rng = SequenceRandom::constant(0.5);
        assert!(palette.is_empty());
        assert_eq!(palette.pick(&mut rng), WHITE);
    }
}
