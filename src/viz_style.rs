//! Colors used by the chart renderer.
//!
//! Series take their fill from the Microsoft Office palette by index; the bar outline is the same
//! hue darkened. Everything else (grid, text, tracks, tooltip) uses the fixed neutrals below.

/// RGBA color; alpha is 0-255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scale the RGB channels by `factor` (alpha untouched), clamped to 0-255.
    pub fn shade(self, factor: f64) -> Self {
        let f = |c: u8| ((c as f64) * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [Rgba; 10] = [
    Rgba::rgb(68, 114, 196),  // blue      (#4472C4)
    Rgba::rgb(237, 125, 49),  // orange    (#ED7D31)
    Rgba::rgb(165, 165, 165), // gray      (#A5A5A5)
    Rgba::rgb(255, 192, 0),   // gold      (#FFC000)
    Rgba::rgb(91, 155, 213),  // light blue(#5B9BD5)
    Rgba::rgb(112, 173, 71),  // green     (#70AD47)
    Rgba::rgb(38, 68, 120),   // dark blue (#264478)
    Rgba::rgb(158, 72, 14),   // dark org. (#9E480E)
    Rgba::rgb(99, 99, 99),    // dark gray (#636363)
    Rgba::rgb(153, 115, 0),   // brownish  (#997300)
];

/// Fill color for series `idx`; wraps around after ten series.
#[inline]
pub fn series_fill(idx: usize) -> Rgba {
    OFFICE10[idx % OFFICE10.len()]
}

/// Outline color for series `idx`.
#[inline]
pub fn series_stroke(idx: usize) -> Rgba {
    series_fill(idx).shade(0.78)
}

pub const BACKGROUND: Rgba = Rgba::rgb(255, 255, 255);
pub const GRID_LINE: Rgba = Rgba::rgb(229, 231, 235);
pub const AXIS_LINE: Rgba = Rgba::rgb(156, 163, 175);
pub const AXIS_TEXT: Rgba = Rgba::rgb(107, 114, 128);
pub const LABEL_TEXT: Rgba = Rgba::rgb(31, 41, 55);
pub const TRACK_FILL: Rgba = Rgba::rgb(243, 244, 246);
pub const RANKED_BAR_FILL: Rgba = Rgba::rgb(68, 114, 196);
pub const TOOLTIP_FILL: Rgba = Rgba::rgb(17, 24, 39);
pub const TOOLTIP_TEXT: Rgba = Rgba::rgb(249, 250, 251);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_and_strokes_are_darker() {
        assert_eq!(series_fill(0), series_fill(10));
        let fill = series_fill(1);
        let stroke = series_stroke(1);
        assert!(stroke.r <= fill.r && stroke.g <= fill.g && stroke.b <= fill.b);
        assert_eq!(fill.to_hex(), "#ED7D31");
    }
}
