//! Monokai color theme shared by the charts and the page.

use plotters::style::RGBColor;

/// Colors used across the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: RGBColor,
    pub text: RGBColor,
    /// Chart titles and page headings
    pub title: RGBColor,
    pub grid: RGBColor,
    pub purple: RGBColor,
    pub green: RGBColor,
    pub orange: RGBColor,
    pub yellow: RGBColor,
    pub pink: RGBColor,
    pub blue: RGBColor,
}

impl Theme {
    pub fn monokai() -> Self {
        let blue = RGBColor(0x66, 0xD9, 0xEF);
        Self {
            background: RGBColor(0x27, 0x28, 0x22),
            text: RGBColor(0xF8, 0xF8, 0xF2),
            title: blue,
            grid: RGBColor(0x75, 0x71, 0x5E),
            purple: RGBColor(0xAE, 0x81, 0xFF),
            green: RGBColor(0xA6, 0xE2, 0x2E),
            orange: RGBColor(0xFD, 0x97, 0x1F),
            yellow: RGBColor(0xE6, 0xDB, 0x74),
            pink: RGBColor(0xF9, 0x26, 0x72),
            blue,
        }
    }

    /// Slice colors for pie charts, in slice order
    pub fn slice_colors(&self) -> [RGBColor; 5] {
        [self.purple, self.green, self.orange, self.pink, self.blue]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::monokai()
    }
}

/// `#RRGGBB` form of a color, for CSS
pub fn css_hex(color: RGBColor) -> String {
    format!("#{:02X}{:02X}{:02X}", color.0, color.1, color.2)
}
