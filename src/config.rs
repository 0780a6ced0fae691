//! The knobs of a render: how long to iterate each point, how much of
//! the complex plane the image covers, and what color the canvas
//! starts out as.
//!
//! Two presets are provided.  They were both used for real renders and
//! neither is more "correct" than the other; `wide` shows the whole set
//! floating in a lot of empty space at high precision, `narrow` fills
//! the frame with it and iterates ten times less.

use image::Rgb;
use std::str::FromStr;

/// Configuration threaded through the mapper, the escape-time engine
/// and the populator.  Nothing in the crate reads process-wide state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Iteration budget per point.  Escape counts are always below it.
    pub max_iter: usize,
    /// Width of the visible window on the complex plane.
    pub h_span: f64,
    /// Height of the visible window on the complex plane.
    pub v_span: f64,
    /// Color the buffer is filled with before any pixel is computed.
    pub background: Rgb<u8>,
}

impl RenderConfig {
    /// Spans of 10×5 at 1000 iterations.
    pub fn wide() -> Self {
        RenderConfig {
            max_iter: 1000,
            h_span: 10.0,
            v_span: 5.0,
            background: Rgb([0, 0, 0]),
        }
    }

    /// Spans of 4×2 at 100 iterations.
    pub fn narrow() -> Self {
        RenderConfig {
            max_iter: 100,
            h_span: 4.0,
            v_span: 2.0,
            background: Rgb([0, 0, 0]),
        }
    }

    /// Replace the iteration budget.
    pub fn with_max_iter(self, max_iter: usize) -> Self {
        RenderConfig { max_iter, ..self }
    }

    /// Replace the starting color of the canvas.
    pub fn with_background(self, background: Rgb<u8>) -> Self {
        RenderConfig { background, ..self }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::wide()
    }
}

/// Named configurations, selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Preset {
    /// See `RenderConfig::wide`.
    Wide,
    /// See `RenderConfig::narrow`.
    Narrow,
}

impl Preset {
    /// The configuration this preset stands for.
    pub fn config(self) -> RenderConfig {
        match self {
            Preset::Wide => RenderConfig::wide(),
            Preset::Narrow => RenderConfig::narrow(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wide" => Ok(Preset::Wide),
            "narrow" => Ok(Preset::Narrow),
            _ => Err(format!("Unknown preset '{}', expected 'wide' or 'narrow'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_wide() {
        assert_eq!(RenderConfig::default(), RenderConfig::wide());
    }

    #[test]
    fn presets_parse_case_insensitively() {
        assert_eq!("wide".parse::<Preset>(), Ok(Preset::Wide));
        assert_eq!("NARROW".parse::<Preset>(), Ok(Preset::Narrow));
        assert!("medium".parse::<Preset>().is_err());
    }

    #[test]
    fn narrow_preset_matches_its_config() {
        let c = Preset::Narrow.config();
        assert_eq!(c.max_iter, 100);
        assert_eq!((c.h_span, c.v_span), (4.0, 2.0));
    }

    #[test]
    fn builders_only_touch_their_field() {
        let c = RenderConfig::narrow()
            .with_max_iter(7)
            .with_background(Rgb([1, 2, 3]));
        assert_eq!(c.max_iter, 7);
        assert_eq!(c.background, Rgb([1, 2, 3]));
        assert_eq!(c.h_span, 4.0);
    }
}
