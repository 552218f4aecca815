// src/view/motion.rs
//! Timing and pointer-effect parameters for the page.
//!
//! The browser script reads these from the `data-motion` attribute of the
//! rendered page and owns the transitions themselves.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionConfig {
    pub intro_ms: u64,
    pub title_interval_ms: u64,
    pub title_fade_ms: u64,
    pub reveal_threshold: f64,
    pub scroll_threshold_px: f64,
    pub tilt_max_deg: f64,
    pub tilt_scale: f64,
    pub perspective_px: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            intro_ms: 2500,
            title_interval_ms: 3000,
            title_fade_ms: 500,
            reveal_threshold: 0.1,
            scroll_threshold_px: 10.0,
            tilt_max_deg: 10.0,
            tilt_scale: 1.05,
            perspective_px: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_script_field_names() {
        let json = serde_json::to_value(MotionConfig::default()).unwrap();
        assert_eq!(json["introMs"], 2500);
        assert_eq!(json["titleIntervalMs"], 3000);
        assert_eq!(json["titleFadeMs"], 500);
        assert_eq!(json["revealThreshold"], 0.1);
        assert_eq!(json["scrollThresholdPx"], 10.0);
        assert_eq!(json["tiltMaxDeg"], 10.0);
        assert_eq!(json["tiltScale"], 1.05);
        assert_eq!(json["perspectivePx"], 1000.0);
    }
}
