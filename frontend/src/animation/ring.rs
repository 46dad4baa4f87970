use std::f64::consts::PI;

use crate::config;

pub fn circumference() -> f64 {
    2.0 * PI * config::RING_RADIUS
}

/// SVG `stroke-dashoffset` for a ring filled to `progress` percent.
pub fn stroke_dashoffset(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 100.0);
    circumference() - (progress / 100.0) * circumference()
}

/// Counter text, e.g. `400%`, `150+` or `24/7`.
pub fn stat_label(value: u32, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circumference() {
        assert!((circumference() - 251.327_412_287_183_45).abs() < 1e-9);
    }

    #[test]
    fn test_dashoffset_bounds() {
        assert_eq!(stroke_dashoffset(0.0), circumference());
        assert!(stroke_dashoffset(100.0).abs() < 1e-9);
        assert!((stroke_dashoffset(50.0) - circumference() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_dashoffset_for_partial_ring() {
        let expected = circumference() * 0.02;
        assert!((stroke_dashoffset(98.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label(400, "%"), "400%");
        assert_eq!(stat_label(150, "+"), "150+");
        assert_eq!(stat_label(24, "/7"), "24/7");
        assert_eq!(stat_label(0, "%"), "0%");
    }
}
