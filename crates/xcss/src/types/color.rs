//! RGBA color type used for theme values and literal colors.
//!
//! Themes bind every [`ColorToken`](crate::ColorToken) to an [`RgbaColor`].
//! The serializer writes each color twice: once as a CSS color
//! (`#rrggbb` / `rgba(...)`) and once as bare channels (`r, g, b`) so the
//! opacity utilities can composite against it with `rgba(var(..), alpha)`.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **Named**: CSS color names like `red`, `coral`, `rebeccapurple`
//! - **Special**: `transparent`

use std::fmt;

use phf::phf_map;

/// Error returned when color parsing fails.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorParseError {
    /// Human-readable description of the parsing error.
    pub message: String,
}

impl ColorParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// CSS named colors accepted by [`RgbaColor::parse`].
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "red" => (255, 0, 0),
    "green" => (0, 128, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "aqua" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "fuchsia" => (255, 0, 255),
    "gray" => (128, 128, 128),
    "grey" => (128, 128, 128),
    "silver" => (192, 192, 192),
    "maroon" => (128, 0, 0),
    "olive" => (128, 128, 0),
    "lime" => (0, 255, 0),
    "teal" => (0, 128, 128),
    "navy" => (0, 0, 128),
    "purple" => (128, 0, 128),
    "orange" => (255, 165, 0),
    "coral" => (255, 127, 80),
    "crimson" => (220, 20, 60),
    "gold" => (255, 215, 0),
    "hotpink" => (255, 105, 180),
    "indigo" => (75, 0, 130),
    "ivory" => (255, 255, 240),
    "khaki" => (240, 230, 140),
    "lavender" => (230, 230, 250),
    "salmon" => (250, 128, 114),
    "slategray" => (112, 128, 144),
    "slategrey" => (112, 128, 144),
    "tomato" => (255, 99, 71),
    "turquoise" => (64, 224, 208),
    "violet" => (238, 130, 238),
    "wheat" => (245, 222, 179),
    "whitesmoke" => (245, 245, 245),
    "snow" => (255, 250, 250),
    "steelblue" => (70, 130, 180),
    "royalblue" => (65, 105, 225),
    "dodgerblue" => (30, 144, 255),
    "deeppink" => (255, 20, 147),
    "darkgray" => (169, 169, 169),
    "darkgrey" => (169, 169, 169),
    "lightgray" => (211, 211, 211),
    "lightgrey" => (211, 211, 211),
    "dimgray" => (105, 105, 105),
    "dimgrey" => (105, 105, 105),
    "gainsboro" => (220, 220, 220),
    "rebeccapurple" => (102, 51, 153),
};

/// An RGBA color.
///
/// # Examples
///
/// ```
/// use xcss::RgbaColor;
///
/// let brand = RgbaColor::parse("#ff7a59").unwrap();
/// assert_eq!(brand.to_css(), "#ff7a59");
/// assert_eq!(brand.channels(), "255, 122, 89");
///
/// let faded = brand.with_alpha(0.5);
/// assert_eq!(faded.to_css(), "rgba(255, 122, 89, 0.5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl RgbaColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Returns true if the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Calculates the relative luminance of this color (ITU-R BT.709).
    pub fn luminance(&self) -> f32 {
        let r = srgb_to_linear(self.r as f32 / 255.0);
        let g = srgb_to_linear(self.g as f32 / 255.0);
        let b = srgb_to_linear(self.b as f32 / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Increases HSL lightness by `amount` (0.0 - 1.0).
    pub fn lighten(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).clamp(0.0, 1.0), self.a)
    }

    /// Decreases HSL lightness by `amount` (0.0 - 1.0).
    pub fn darken(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).clamp(0.0, 1.0), self.a)
    }

    /// Serializes as `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, format_alpha(self.a))
        }
    }

    /// Serializes the bare channels (`r, g, b`) for `rgba(var(..), alpha)` compositing.
    pub fn channels(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Serializes the alpha channel as a bare number (`1`, `0.3`).
    pub fn alpha_css(&self) -> String {
        format_alpha(self.a)
    }

    /// Parse a color string in any of the supported formats.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::new("empty color string"));
        }

        let lower = input.to_lowercase();
        if lower == "transparent" {
            return Ok(Self::transparent());
        }
        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }
        if lower.starts_with("hsl") {
            return Self::parse_hsl_func(&lower);
        }

        NAMED_COLORS
            .get(lower.as_str())
            .map(|&(r, g, b)| Self::rgb(r, g, b))
            .ok_or_else(|| ColorParseError::new(format!("unknown color name: {}", input)))
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| ColorParseError::new(format!("invalid hex digit: {}", c)))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            [r, g, b, a] => Ok(Self::rgba(r * 17, g * 17, b * 17, (a * 17) as f32 / 255.0)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::rgba(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
                (a1 * 16 + a2) as f32 / 255.0,
            )),
            _ => Err(ColorParseError::new(format!(
                "invalid hex color length: {}",
                digits.len()
            ))),
        }
    }

    fn function_args<'a>(input: &'a str, name: &str) -> Result<Vec<&'a str>, ColorParseError> {
        let start = input
            .find('(')
            .ok_or_else(|| ColorParseError::new(format!("missing '(' in {} function", name)))?;
        let end = input
            .rfind(')')
            .ok_or_else(|| ColorParseError::new(format!("missing ')' in {} function", name)))?;
        let parts: Vec<&str> = input[start + 1..end].split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return Err(ColorParseError::new(format!(
                "{} requires at least 3 components",
                name
            )));
        }
        Ok(parts)
    }

    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::function_args(input, "rgb")?;
        let r = parse_u8(parts[0])?;
        let g = parse_u8(parts[1])?;
        let b = parse_u8(parts[2])?;
        let a = parts.get(3).map(|p| parse_f32(p)).transpose()?.unwrap_or(1.0);
        Ok(Self::rgba(r, g, b, a))
    }

    fn parse_hsl_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::function_args(input, "hsl")?;
        let h = parse_f32(parts[0])?;
        let s = parse_percentage(parts[1])?;
        let l = parse_percentage(parts[2])?;
        let a = parts.get(3).map(|p| parse_f32(p)).transpose()?.unwrap_or(1.0);
        Ok(Self::from_hsl(h, s, l, a))
    }

    fn to_hsl(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0 * 360.0, s, l)
    }

    /// Creates an RgbaColor from HSL values (hue in degrees, s/l in 0.0 - 1.0).
    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        let h = h / 360.0;
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self::rgba(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a,
        )
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn parse_u8(s: &str) -> Result<u8, ColorParseError> {
    let val: i32 = s
        .parse()
        .map_err(|_| ColorParseError::new(format!("invalid number: {}", s)))?;
    u8::try_from(val)
        .map_err(|_| ColorParseError::new(format!("value out of range (0-255): {}", val)))
}

fn parse_f32(s: &str) -> Result<f32, ColorParseError> {
    s.parse()
        .map_err(|_| ColorParseError::new(format!("invalid float: {}", s)))
}

fn parse_percentage(s: &str) -> Result<f32, ColorParseError> {
    let val = parse_f32(s.trim_end_matches('%'))
        .map_err(|_| ColorParseError::new(format!("invalid percentage: {}", s)))?;
    Ok(val / 100.0)
}

/// Formats an alpha value with at most three decimals and no trailing zeros.
fn format_alpha(a: f32) -> String {
    let rounded = (a * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== HEX FORMAT TESTS ====================

    #[test]
    fn test_hex_3_digit() {
        assert_eq!(RgbaColor::parse("#f00").unwrap(), RgbaColor::rgb(255, 0, 0));
        assert_eq!(RgbaColor::parse("#abc").unwrap(), RgbaColor::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_hex_4_digit() {
        let color = RgbaColor::parse("#f008").unwrap();
        assert_eq!(color, RgbaColor::rgba(255, 0, 0, 0x88 as f32 / 255.0));
    }

    #[test]
    fn test_hex_6_and_8_digit() {
        assert_eq!(RgbaColor::parse("#9932CC").unwrap(), RgbaColor::rgb(0x99, 0x32, 0xCC));
        assert_eq!(
            RgbaColor::parse("#ff000000").unwrap(),
            RgbaColor::rgba(255, 0, 0, 0.0)
        );
    }

    #[test]
    fn test_hex_invalid() {
        assert!(RgbaColor::parse("#ff00").is_ok());
        assert!(RgbaColor::parse("#ff0").is_ok());
        assert!(RgbaColor::parse("#ff00f").is_err());
        assert!(RgbaColor::parse("#zzz").is_err());
    }

    // ==================== FUNCTION TESTS ====================

    #[test]
    fn test_rgb_and_rgba() {
        assert_eq!(RgbaColor::parse("rgb(1, 2, 3)").unwrap(), RgbaColor::rgb(1, 2, 3));
        assert_eq!(
            RgbaColor::parse("rgba(1,2,3,0.5)").unwrap(),
            RgbaColor::rgba(1, 2, 3, 0.5)
        );
        assert!(RgbaColor::parse("rgb(300, 0, 0)").is_err());
    }

    #[test]
    fn test_hsl() {
        assert_eq!(
            RgbaColor::parse("hsl(0, 100%, 50%)").unwrap(),
            RgbaColor::rgb(255, 0, 0)
        );
        assert_eq!(
            RgbaColor::parse("hsl(0, 0%, 50%)").unwrap(),
            RgbaColor::rgb(128, 128, 128)
        );
    }

    // ==================== NAMED / SPECIAL ====================

    #[test]
    fn test_named_case_insensitive() {
        assert_eq!(RgbaColor::parse("Coral").unwrap(), RgbaColor::rgb(255, 127, 80));
        assert!(RgbaColor::parse("notacolor").is_err());
        assert!(RgbaColor::parse("transparent").unwrap().is_transparent());
    }

    // ==================== SERIALIZATION ====================

    #[test]
    fn test_to_css() {
        assert_eq!(RgbaColor::rgb(255, 0, 16).to_css(), "#ff0010");
        assert_eq!(RgbaColor::rgba(0, 0, 0, 0.25).to_css(), "rgba(0, 0, 0, 0.25)");
        assert_eq!(RgbaColor::rgba(0, 0, 0, 0.0).to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_lighten_darken() {
        let gray = RgbaColor::rgb(100, 100, 100);
        assert!(gray.lighten(0.2).r > 100);
        assert!(gray.darken(0.2).r < 100);
    }
}
