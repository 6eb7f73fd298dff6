//! Theme-independent token scales.
//!
//! Besides colors, styles reference spacing, sizes and typography through
//! `$token` references. Each reference resolves against the scale implied
//! by the property (`margin-top` → `space`, `font-size` → `fontSizes`) and
//! becomes `var(--{scale}-{token})`. The scale values themselves are emitted
//! once on `:root` by [`Scales::css_text`].
//!
//! The defaults below are the values the site uses; an [`EngineConfig`]
//! may replace or extend them.
//!
//! [`EngineConfig`]: crate::EngineConfig

use phf::phf_ordered_map;

/// `$space` tokens: margins, paddings, gaps, offsets.
pub static SPACE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "1" => "0.25rem",
    "2" => "0.5rem",
    "3" => "0.75rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "8" => "2rem",
    "10" => "2.5rem",
    "12" => "3rem",
    "16" => "4rem",
    "20" => "5rem",
    "24" => "6rem",
    "32" => "8rem",
};

/// `$sizes` tokens: widths and heights.
pub static SIZES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "small" => "42rem",
    "base" => "56rem",
    "large" => "72rem",
    "full" => "100%",
    "screen" => "100vw",
};

/// `$fontSizes` tokens.
pub static FONT_SIZES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "xs" => "0.75rem",
    "sm" => "0.875rem",
    "base" => "1rem",
    "lg" => "1.125rem",
    "xl" => "1.25rem",
    "2xl" => "1.5rem",
    "3xl" => "1.875rem",
    "4xl" => "2.25rem",
    "5xl" => "3rem",
    "6xl" => "3.75rem",
    "7xl" => "4.5rem",
    "8xl" => "6rem",
    "9xl" => "8rem",
    "10xl" => "10rem",
};

/// `$fontWeights` tokens.
pub static FONT_WEIGHTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
};

/// `$lineHeights` tokens.
pub static LINE_HEIGHTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "1",
    "tight" => "1.25",
    "snug" => "1.375",
    "normal" => "1.5",
    "relaxed" => "1.625",
    "loose" => "2",
};

/// `$letterSpacings` tokens.
pub static LETTER_SPACINGS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "tight" => "-0.025em",
    "normal" => "0",
    "wide" => "0.025em",
};

/// `$radii` tokens.
pub static RADII: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "sm" => "0.125rem",
    "base" => "0.25rem",
    "md" => "0.375rem",
    "lg" => "0.5rem",
    "full" => "9999px",
};

/// `$fonts` tokens.
pub static FONTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "sans" => "Inter, ui-sans-serif, system-ui, -apple-system, sans-serif",
    "mono" => "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace",
};

/// `$zIndices` tokens.
pub static Z_INDICES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "base" => "0",
    "raised" => "10",
    "overlay" => "100",
    "modal" => "1000",
};

/// Named token scales, in serialization order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    scales: Vec<(String, Vec<(String, String)>)>,
}

impl Default for Scales {
    fn default() -> Self {
        let tables: [(&str, &phf::OrderedMap<&'static str, &'static str>); 9] = [
            ("space", &SPACE),
            ("sizes", &SIZES),
            ("fontSizes", &FONT_SIZES),
            ("fontWeights", &FONT_WEIGHTS),
            ("lineHeights", &LINE_HEIGHTS),
            ("letterSpacings", &LETTER_SPACINGS),
            ("radii", &RADII),
            ("fonts", &FONTS),
            ("zIndices", &Z_INDICES),
        ];
        let scales = tables
            .into_iter()
            .map(|(name, table)| {
                let tokens = table
                    .entries()
                    .map(|(token, value)| (token.to_string(), value.to_string()))
                    .collect();
                (name.to_string(), tokens)
            })
            .collect();
        Self { scales }
    }
}

impl Scales {
    /// A set of scales with no tokens at all.
    pub fn empty() -> Self {
        Self { scales: Vec::new() }
    }

    /// Builder method adding (or replacing) one token in a scale.
    pub fn with_token(mut self, scale: &str, token: &str, value: &str) -> Self {
        let idx = match self.scales.iter().position(|(name, _)| name == scale) {
            Some(idx) => idx,
            None => {
                self.scales.push((scale.to_string(), Vec::new()));
                self.scales.len() - 1
            }
        };
        let tokens = &mut self.scales[idx].1;
        match tokens.iter_mut().find(|(name, _)| name == token) {
            Some(entry) => entry.1 = value.to_string(),
            None => tokens.push((token.to_string(), value.to_string())),
        }
        self
    }

    /// Returns the value of a token, if the scale defines it.
    pub fn get(&self, scale: &str, token: &str) -> Option<&str> {
        self.scales
            .iter()
            .find(|(name, _)| name == scale)?
            .1
            .iter()
            .find(|(name, _)| name == token)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, scale: &str, token: &str) -> bool {
        self.get(scale, token).is_some()
    }

    /// Scale names in serialization order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scales.iter().map(|(name, _)| name.as_str())
    }

    /// Serializes every token as a custom property on `:root`.
    pub fn css_text(&self) -> String {
        if self.scales.iter().all(|(_, tokens)| tokens.is_empty()) {
            return String::new();
        }
        let mut out = String::from(":root{");
        for (scale, tokens) in &self.scales {
            for (token, value) in tokens {
                out.push_str(&format!("--{}-{}:{};", scale, token, value));
            }
        }
        out.push('}');
        out
    }
}
