//! Declaration expansion: utilities, `$token` references and units.
//!
//! Every scalar declaration goes through [`expand_declaration`], which turns
//! an authored `(property, value)` pair into the raw CSS declarations it
//! stands for:
//!
//! | Authored                | Emitted                                                        |
//! |-------------------------|----------------------------------------------------------------|
//! | `mt: "$16"`             | `margin-top: var(--space-16)`                                  |
//! | `mx: "auto"`            | `margin-left: auto`, `margin-right: auto`                      |
//! | `height: 350`           | `height: 350px`                                                |
//! | `xColor: "$fg3"`        | `--x-color: var(--colors-fg3-rgb)`, `--x-color-alpha: var(--colors-fg3-alpha)`, `color: rgba(var(--x-color), calc(var(--x-color-alpha) * var(--x-color-opacity, 1)))` |
//! | `xColorOpacity: 0.4`    | `--x-color-opacity: 0.4`                                       |
//! | `flexBasis: "50%"`      | `flex-basis: 50%`                                              |
//!
//! The color utilities split a color into channels and alpha so that an
//! opacity set anywhere (a hover block, a descendant rule) composes with
//! the color set elsewhere instead of replacing it. The color's own alpha
//! (a translucent token such as `$selection`) multiplies with that opacity.

use phf::{phf_map, phf_set};

use crate::error::{Result, XcssError};
use crate::parser::{Segment, value_segments};
use crate::scales::Scales;
use crate::types::color::RgbaColor;
use crate::types::token::ColorToken;
use crate::types::value::{StyleValue, format_number};

/// Shorthand utilities and the raw properties they expand to, in order.
pub static SHORTHANDS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "m" => &["margin"],
    "mt" => &["margin-top"],
    "mr" => &["margin-right"],
    "mb" => &["margin-bottom"],
    "ml" => &["margin-left"],
    "mx" => &["margin-left", "margin-right"],
    "my" => &["margin-top", "margin-bottom"],
    "p" => &["padding"],
    "pt" => &["padding-top"],
    "pr" => &["padding-right"],
    "pb" => &["padding-bottom"],
    "pl" => &["padding-left"],
    "px" => &["padding-left", "padding-right"],
    "py" => &["padding-top", "padding-bottom"],
    "w" => &["width"],
    "h" => &["height"],
    "size" => &["width", "height"],
    "bg" => &["background"],
};

/// The scale a bare `$token` resolves against, per raw property.
pub static PROPERTY_SCALES: phf::Map<&'static str, &'static str> = phf_map! {
    "margin" => "space",
    "margin-top" => "space",
    "margin-right" => "space",
    "margin-bottom" => "space",
    "margin-left" => "space",
    "margin-block" => "space",
    "margin-inline" => "space",
    "padding" => "space",
    "padding-top" => "space",
    "padding-right" => "space",
    "padding-bottom" => "space",
    "padding-left" => "space",
    "padding-block" => "space",
    "padding-inline" => "space",
    "gap" => "space",
    "row-gap" => "space",
    "column-gap" => "space",
    "top" => "space",
    "right" => "space",
    "bottom" => "space",
    "left" => "space",
    "inset" => "space",
    "width" => "sizes",
    "height" => "sizes",
    "min-width" => "sizes",
    "max-width" => "sizes",
    "min-height" => "sizes",
    "max-height" => "sizes",
    "flex-basis" => "sizes",
    "font-size" => "fontSizes",
    "font-weight" => "fontWeights",
    "line-height" => "lineHeights",
    "letter-spacing" => "letterSpacings",
    "font-family" => "fonts",
    "border-radius" => "radii",
    "border-top-left-radius" => "radii",
    "border-top-right-radius" => "radii",
    "border-bottom-left-radius" => "radii",
    "border-bottom-right-radius" => "radii",
    "z-index" => "zIndices",
    "color" => "colors",
    "background" => "colors",
    "background-color" => "colors",
    "border" => "colors",
    "border-top" => "colors",
    "border-right" => "colors",
    "border-bottom" => "colors",
    "border-left" => "colors",
    "border-color" => "colors",
    "outline" => "colors",
    "outline-color" => "colors",
    "box-shadow" => "colors",
    "text-shadow" => "colors",
    "text-decoration-color" => "colors",
    "caret-color" => "colors",
    "fill" => "colors",
    "stroke" => "colors",
};

/// Properties whose numeric values take no unit.
pub static UNITLESS: phf::Set<&'static str> = phf_set! {
    "opacity",
    "line-height",
    "font-weight",
    "z-index",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
    "zoom",
    "aspect-ratio",
    "orphans",
    "widows",
};

/// A color utility: the custom properties it writes and the property it
/// finally paints.
struct ColorUtility {
    color_var: &'static str,
    alpha_var: &'static str,
    opacity_var: &'static str,
    target: &'static str,
}

const X_COLOR: ColorUtility = ColorUtility {
    color_var: "--x-color",
    alpha_var: "--x-color-alpha",
    opacity_var: "--x-color-opacity",
    target: "color",
};

const X_BG: ColorUtility = ColorUtility {
    color_var: "--x-bg",
    alpha_var: "--x-bg-alpha",
    opacity_var: "--x-bg-opacity",
    target: "background-color",
};

/// A raw CSS declaration, ready to serialize.
pub type Declaration = (String, String);

/// Expands one authored declaration with a scalar value.
pub fn expand_declaration(
    property: &str,
    value: &StyleValue,
    scales: &Scales,
) -> Result<Vec<Declaration>> {
    match property {
        "xColor" => color_utility(&X_COLOR, value),
        "xColorOpacity" => opacity_utility(&X_COLOR, value),
        "xBg" => color_utility(&X_BG, value),
        "xBgOpacity" => opacity_utility(&X_BG, value),
        _ => match SHORTHANDS.get(property) {
            Some(targets) => targets
                .iter()
                .map(|raw| Ok((raw.to_string(), resolve_value(raw, value, scales)?)))
                .collect(),
            None => {
                let raw = kebab_case(property);
                let resolved = resolve_value(&raw, value, scales)?;
                Ok(vec![(raw, resolved)])
            }
        },
    }
}

fn color_utility(utility: &ColorUtility, value: &StyleValue) -> Result<Vec<Declaration>> {
    let text = match value {
        StyleValue::Text(text) => text.trim(),
        other => {
            return Err(XcssError::invalid_value(
                format!("{:?}", other),
                "color utilities take a token or a color",
            ));
        }
    };

    let token = if let Some(name) = text.strip_prefix("$colors$") {
        Some(name.parse::<ColorToken>()?)
    } else if text.starts_with('$') {
        Some(text.parse::<ColorToken>()?)
    } else {
        text.parse::<ColorToken>().ok()
    };
    let (channels, alpha) = match token {
        Some(token) => (
            format!("var({})", token.channels_var_name()),
            format!("var({})", token.alpha_var_name()),
        ),
        None => {
            let color = RgbaColor::parse(text)?;
            (color.channels(), color.alpha_css())
        }
    };

    Ok(vec![
        (utility.color_var.to_string(), channels),
        (utility.alpha_var.to_string(), alpha),
        (
            utility.target.to_string(),
            format!(
                "rgba(var({}), calc(var({}) * var({}, 1)))",
                utility.color_var, utility.alpha_var, utility.opacity_var
            ),
        ),
    ])
}

fn opacity_utility(utility: &ColorUtility, value: &StyleValue) -> Result<Vec<Declaration>> {
    let opacity = match value {
        StyleValue::Number(n) => format_number(*n),
        StyleValue::Text(text) => {
            let text = text.trim();
            let numeric = text.strip_suffix('%').unwrap_or(text);
            if numeric.parse::<f64>().is_err() && !text.starts_with("var(") {
                return Err(XcssError::invalid_value(text, "expected a number"));
            }
            text.to_string()
        }
        StyleValue::Responsive(_) => {
            return Err(XcssError::invalid_value(
                "responsive",
                "nested responsive value",
            ));
        }
    };
    Ok(vec![(utility.opacity_var.to_string(), opacity)])
}

/// Resolves a scalar value for a raw property: tokens become `var()`
/// references and numbers get their unit.
pub fn resolve_value(property: &str, value: &StyleValue, scales: &Scales) -> Result<String> {
    match value {
        StyleValue::Number(n) if *n == 0.0 => Ok("0".to_string()),
        StyleValue::Number(n) if is_unitless(property) => Ok(format_number(*n)),
        StyleValue::Number(n) => Ok(format!("{}px", format_number(*n))),
        StyleValue::Text(text) => resolve_tokens(property, text, scales),
        StyleValue::Responsive(_) => Err(XcssError::invalid_value(
            property,
            "responsive values cannot be nested",
        )),
    }
}

fn resolve_tokens(property: &str, text: &str, scales: &Scales) -> Result<String> {
    if !text.contains('$') {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len() + 16);
    for segment in value_segments(text)? {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Token(token) => {
                let scale = token
                    .scale
                    .or_else(|| PROPERTY_SCALES.get(property).copied())
                    .ok_or_else(|| XcssError::unknown_token(token.name, None))?;

                let known = if scale == "colors" {
                    token.name.parse::<ColorToken>().is_ok()
                } else {
                    scales.contains(scale, token.name)
                };
                if !known {
                    return Err(XcssError::unknown_token(token.name, Some(scale)));
                }

                let reference = format!("var(--{}-{})", scale, token.name);
                if token.negative {
                    out.push_str(&format!("calc({} * -1)", reference));
                } else {
                    out.push_str(&reference);
                }
            }
        }
    }
    Ok(out)
}

fn is_unitless(property: &str) -> bool {
    property.starts_with("--") || UNITLESS.contains(property)
}

/// Converts a camelCase property name to kebab-case.
///
/// Kebab-case names and custom properties pass through unchanged; a
/// leading capital marks a vendor prefix (`WebkitAppearance` →
/// `-webkit-appearance`).
pub fn kebab_case(property: &str) -> String {
    if property.starts_with("--") || !property.chars().any(|c| c.is_ascii_uppercase()) {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
