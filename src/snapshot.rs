//! Persisted design snapshot and its normalization
//!
//! The surrounding application serializes the current design as a flat record
//! and restores it on normal navigation; a hard reload clears it. The record
//! arrives here either as defaults or a previously valid snapshot, and
//! [`DesignSnapshot::normalize`] clamps every field regardless, so the layout
//! core never sees a NaN, negative, or zero value.

use crate::constants::*;
use crate::design::{clamp_text_size, Color, LabelDesign, PatternKind, TextPlacement};
use crate::geometry::{LabelSize, LayoutRequest, SheetGeometry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Flat record of one editor session's design parameters
///
/// Unknown fields in saved data are ignored and missing fields take their
/// defaults, so an older or malformed record degrades to a valid design
/// instead of failing to restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSnapshot {
    pub label_width: f32,
    pub label_height: f32,
    pub repeat_count: u32,
    pub text: String,
    pub text_x: f32,
    pub text_y: f32,
    pub text_size: f32,
    pub text_color: Color,
    pub background: Color,
    pub pattern: PatternKind,
}

impl Default for DesignSnapshot {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH_CM,
            label_height: DEFAULT_LABEL_HEIGHT_CM,
            repeat_count: DEFAULT_REPEAT_COUNT,
            text: String::new(),
            text_x: 0.0,
            text_y: 0.0,
            text_size: DEFAULT_TEXT_SIZE_PT,
            text_color: Color::black(),
            background: Color::white(),
            pattern: PatternKind::None,
        }
    }
}

impl DesignSnapshot {
    /// Clamp every field into its valid range
    ///
    /// Non-finite or non-positive label dimensions fall back to the defaults,
    /// the repeat count is raised to 1, the text placement is pulled inside
    /// the label bounds, and color channels are clamped to `[0, 1]`.
    pub fn normalize(mut self) -> Self {
        let label = LabelSize::clamped(self.label_width, self.label_height);
        self.label_width = label.width();
        self.label_height = label.height();
        self.repeat_count = self.repeat_count.max(1);

        let placement = TextPlacement {
            x: self.text_x,
            y: self.text_y,
        }
        .clamped_to(self.label_width, self.label_height);
        self.text_x = placement.x;
        self.text_y = placement.y;
        self.text_size = clamp_text_size(self.text_size);

        self.text_color = self.text_color.normalized();
        self.background = self.background.normalized();

        self
    }

    /// The label size described by this snapshot
    pub fn label_size(&self) -> LabelSize {
        LabelSize::clamped(self.label_width, self.label_height)
    }

    /// The visual design described by this snapshot
    pub fn design(&self) -> LabelDesign {
        LabelDesign {
            text: self.text.clone(),
            text_placement: TextPlacement {
                x: self.text_x,
                y: self.text_y,
            },
            text_size: self.text_size,
            text_color: self.text_color,
            background: self.background,
            pattern: self.pattern,
        }
    }

    /// The layout request described by this snapshot, on the fixed A4 sheet
    pub fn layout_request(&self) -> LayoutRequest {
        LayoutRequest::new(SheetGeometry::a4(), self.label_size(), self.repeat_count)
    }
}

/// Restore a saved snapshot, or fall back to the default design
///
/// `None` is the hard-reload and first-visit path. A `Some` snapshot is
/// normalized before use, so callers always receive a fully valid record.
pub fn restore(saved: Option<DesignSnapshot>) -> DesignSnapshot {
    match saved {
        Some(snapshot) => {
            debug!("restoring saved design snapshot");
            snapshot.normalize()
        }
        None => {
            debug!("no saved design, starting from defaults");
            DesignSnapshot::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_saved_state_uses_defaults() {
        let snapshot = restore(None);
        assert_eq!(snapshot, DesignSnapshot::default());
        assert_eq!(snapshot.repeat_count, 1);
    }

    #[test]
    fn normalize_repairs_malformed_fields() {
        let snapshot = DesignSnapshot {
            label_width: f32::NAN,
            label_height: -3.0,
            repeat_count: 0,
            text_x: 99.0,
            text_y: f32::INFINITY,
            text_size: 0.5,
            text_color: Color { r: 4.0, g: -1.0, b: 0.5 },
            ..Default::default()
        }
        .normalize();

        assert_eq!(snapshot.label_width, DEFAULT_LABEL_WIDTH_CM);
        assert_eq!(snapshot.label_height, DEFAULT_LABEL_HEIGHT_CM);
        assert_eq!(snapshot.repeat_count, 1);
        assert_eq!(snapshot.text_x, DEFAULT_LABEL_WIDTH_CM);
        assert_eq!(snapshot.text_y, 0.0);
        assert_eq!(snapshot.text_size, MIN_TEXT_SIZE_PT);
        assert_eq!(snapshot.text_color, Color { r: 1.0, g: 0.0, b: 0.5 });
    }

    #[test]
    fn valid_snapshot_survives_normalization_unchanged() {
        let snapshot = DesignSnapshot {
            label_width: 6.0,
            label_height: 4.0,
            repeat_count: 20,
            text: "Raspberry Jam".to_string(),
            text_x: 1.0,
            text_y: 0.5,
            text_size: 18.0,
            pattern: PatternKind::Diagonal,
            ..Default::default()
        };
        assert_eq!(snapshot.clone().normalize(), snapshot);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = DesignSnapshot {
            label_width: 6.0,
            label_height: 4.0,
            repeat_count: 20,
            text: "Raspberry Jam".to_string(),
            pattern: PatternKind::Dots,
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DesignSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let back: DesignSnapshot =
            serde_json::from_str(r#"{"label_width": 7.0, "repeat_count": 5}"#).unwrap();
        assert_eq!(back.label_width, 7.0);
        assert_eq!(back.repeat_count, 5);
        assert_eq!(back.label_height, DEFAULT_LABEL_HEIGHT_CM);
        assert_eq!(back.pattern, PatternKind::None);
    }

    #[test]
    fn layout_request_reflects_the_snapshot() {
        let request = DesignSnapshot {
            label_width: 6.0,
            label_height: 4.0,
            repeat_count: 18,
            ..Default::default()
        }
        .layout_request();

        assert_eq!(request.repeat_count(), 18);
        assert_eq!(request.label.width(), 6.0);
        assert_eq!(request.label.height(), 4.0);
    }
}
