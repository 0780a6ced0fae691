//! Escape counts to pixels.

use escape::Escape;
use image::Rgb;
use num::clamp;

/// A gray whose every channel is the escape count, saturating at white.
/// A count of 0 (never escaped) is black.
pub fn gray(steps: usize) -> Rgb<u8> {
    let v = clamp(steps, 0, usize::from(u8::max_value())) as u8;
    Rgb([v, v, v])
}

/// Color for a tagged escape result.  Both kinds of non-escaping point
/// come out black.
pub fn escape_color(escape: Escape) -> Rgb<u8> {
    gray(escape.steps())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_black() {
        assert_eq!(gray(0), Rgb([0, 0, 0]));
        assert_eq!(escape_color(Escape::Interior), Rgb([0, 0, 0]));
        assert_eq!(escape_color(Escape::Bounded), Rgb([0, 0, 0]));
    }

    #[test]
    fn counts_become_equal_channels() {
        assert_eq!(gray(1), Rgb([1, 1, 1]));
        assert_eq!(gray(254), Rgb([254, 254, 254]));
        assert_eq!(escape_color(Escape::Escaped(42)), Rgb([42, 42, 42]));
    }

    #[test]
    fn large_counts_saturate_rather_than_wrap() {
        assert_eq!(gray(255), Rgb([255, 255, 255]));
        assert_eq!(gray(256), Rgb([255, 255, 255]));
        assert_eq!(gray(999), Rgb([255, 255, 255]));
        assert_eq!(gray(usize::max_value()), Rgb([255, 255, 255]));
    }
}
