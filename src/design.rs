//! Label design configuration: color, background pattern, text placement
//!
//! The editor owns and mutates these values; this crate carries them as typed
//! configuration so the rendering layer dispatches on enums instead of
//! string keys. No styling computation happens here.

use crate::constants::{DEFAULT_TEXT_SIZE_PT, MAX_TEXT_SIZE_PT, MIN_TEXT_SIZE_PT};
use serde::{Deserialize, Serialize};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }

    /// Clamp each channel into range, replacing non-finite values with zero
    pub fn normalized(self) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            r: clamp(self.r),
            g: clamp(self.g),
            b: clamp(self.b),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Background pattern drawn behind the label text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    None,
    Dots,
    Grid,
    Diagonal,
}

impl Default for PatternKind {
    fn default() -> Self {
        Self::None
    }
}

/// Position of the text block inside the label, in centimeters from the
/// label's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextPlacement {
    pub x: f32,
    pub y: f32,
}

impl TextPlacement {
    /// Clamp the placement into the label bounds, zeroing non-finite values
    pub fn clamped_to(self, label_width: f32, label_height: f32) -> Self {
        let clamp = |v: f32, max: f32| if v.is_finite() { v.clamp(0.0, max) } else { 0.0 };
        Self {
            x: clamp(self.x, label_width),
            y: clamp(self.y, label_height),
        }
    }
}

impl Default for TextPlacement {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Complete visual design of one label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDesign {
    pub text: String,
    pub text_placement: TextPlacement,
    /// Text size in points
    pub text_size: f32,
    pub text_color: Color,
    pub background: Color,
    pub pattern: PatternKind,
}

impl LabelDesign {
    /// Create a design with the given text and default styling
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            text_placement: TextPlacement::default(),
            text_size: DEFAULT_TEXT_SIZE_PT,
            text_color: Color::black(),
            background: Color::white(),
            pattern: PatternKind::default(),
        }
    }

    /// Set the background pattern
    pub fn with_pattern(mut self, pattern: PatternKind) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the text color
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the text size in points, clamped to the accepted range
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = clamp_text_size(size);
        self
    }

    /// Set the text placement in centimeters from the top-left corner
    pub fn with_text_placement(mut self, x: f32, y: f32) -> Self {
        self.text_placement = TextPlacement { x, y };
        self
    }
}

impl Default for LabelDesign {
    fn default() -> Self {
        Self::new("")
    }
}

/// Clamp a text size into the accepted point range, defaulting when not finite
pub(crate) fn clamp_text_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(MIN_TEXT_SIZE_PT, MAX_TEXT_SIZE_PT)
    } else {
        DEFAULT_TEXT_SIZE_PT
    }
}
