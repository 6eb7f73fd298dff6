//! Typography: font size, weight and line height.

use xcss::{Recipe, Responsive, Selection, Style, Variant, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum TextSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    #[variant(rename = "2xl")]
    TwoXl,
    #[variant(rename = "3xl")]
    ThreeXl,
    #[variant(rename = "4xl")]
    FourXl,
    #[variant(rename = "5xl")]
    FiveXl,
    #[variant(rename = "6xl")]
    SixXl,
    #[variant(rename = "7xl")]
    SevenXl,
    #[variant(rename = "8xl")]
    EightXl,
    #[variant(rename = "9xl")]
    NineXl,
    #[variant(rename = "10xl")]
    TenXl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum TextWeight {
    Normal,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum Leading {
    None,
    Tight,
    Snug,
    Normal,
    Relaxed,
    Loose,
}

/// Arguments of [`Primitives::text`](super::Primitives::text).
#[derive(Debug, Clone, Default)]
pub struct TextProps {
    pub size: Option<Responsive<TextSize>>,
    pub weight: Option<Responsive<TextWeight>>,
    pub leading: Option<Responsive<Leading>>,
    pub css: Option<Style>,
}

impl TextProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<Responsive<TextSize>>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<Responsive<TextWeight>>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn leading(mut self, leading: impl Into<Responsive<Leading>>) -> Self {
        self.leading = Some(leading.into());
        self
    }

    pub fn css(mut self, css: Style) -> Self {
        self.css = Some(css);
        self
    }

    pub(crate) fn into_selection(self) -> Selection {
        let selection = Selection::new()
            .choose_opt("size", self.size)
            .choose_opt("weight", self.weight)
            .choose_opt("leading", self.leading);
        match self.css {
            Some(css) => selection.css(css),
            None => selection,
        }
    }
}

pub(crate) fn recipe() -> xcss::Result<Recipe> {
    Recipe::builder("text")
        .base(style! { m: 0, fontFamily: "$sans" })
        .variants("size", |size: TextSize| {
            style! { fontSize: format!("${}", size.variant_key()) }
        })
        .variants("weight", |weight: TextWeight| {
            style! { fontWeight: format!("${}", weight.variant_key()) }
        })
        .variants("leading", |leading: Leading| {
            style! { lineHeight: format!("${}", leading.variant_key()) }
        })
        .default_variant("size", TextSize::Base)
        .default_variant("weight", TextWeight::Normal)
        .build()
}
