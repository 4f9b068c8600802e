use serde::{Deserialize, Serialize};

/// A point entity of the field, drawn as a filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Circle radius
    pub size: f32,
    /// Palette color [r, g, b, a]
    pub color: [f32; 4],
}

impl Particle {
    pub fn new(pos: [f32; 2], vel: [f32; 2], size: f32, color: [f32; 4]) -> Self {
        Self {
            x: pos[0],
            y: pos[1],
            vx: vel[0],
            vy: vel[1],
            size,
            color,
        }
    }

    pub fn pos(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pointer position in surface coordinates (top-left origin, y down).
/// `position` is `None` while the pointer is outside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Option<[f32; 2]>,
    pub radius: f32,
}

impl PointerState {
    pub fn absent(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }
}

/// Light/dark theme. Only affects drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Line style for outlines and connection segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: [f32; 4],
    pub width: f32,
}

/// Parse `#rrggbb` (or `#rgb`) into an opaque [r, g, b, a]
pub fn parse_hex_color(s: &str) -> Option<[f32; 4]> {
    let hex = s.trim().strip_prefix('#')?;
    let digits: Vec<u8> = match hex.len() {
        6 => (0..3)
            .map(|i| u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok())
            .collect::<Option<_>>()?,
        3 => hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
            .collect::<Option<_>>()?,
        _ => return None,
    };
    Some([
        digits[0] as f32 / 255.0,
        digits[1] as f32 / 255.0,
        digits[2] as f32 / 255.0,
        1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let c = parse_hex_color("#0066ff").unwrap();
        assert_eq!(c[0], 0.0);
        assert!((c[1] - 0.4).abs() < 1e-6);
        assert_eq!(c[2], 1.0);
        assert_eq!(c[3], 1.0);

        assert_eq!(parse_hex_color("#fff"), Some([1.0, 1.0, 1.0, 1.0]));
        assert_eq!(parse_hex_color("#673AB7"), parse_hex_color("#673ab7"));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("0066ff"), None);
        assert_eq!(parse_hex_color("#00zz00"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::from_dark(true), Theme::Dark);
        assert!(!Theme::default().is_dark());
    }
}
