//! Flex layout.
//!
//! `x` and `y` name the horizontal and vertical axes of the screen, not
//! the main and cross axes of the flex container. Which CSS property each
//! one drives depends on `dir`, so the alignment rules are compound
//! variants over `(dir, x)` and `(dir, y)`.

use xcss::{Conditions, Recipe, RecipeBuilder, Responsive, Selection, Style, Variant, VariantEnum, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum StackDir {
    Row,
    RowReverse,
    Col,
    ColReverse,
}

impl StackDir {
    fn css_value(self) -> &'static str {
        match self {
            StackDir::Row => "row",
            StackDir::RowReverse => "row-reverse",
            StackDir::Col => "column",
            StackDir::ColReverse => "column-reverse",
        }
    }

    fn is_row(self) -> bool {
        matches!(self, StackDir::Row | StackDir::RowReverse)
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum StackX {
    Left,
    Center,
    Right,
    Between,
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum StackY {
    Top,
    Center,
    Bottom,
    Between,
}

/// Space between children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum StackSize {
    None,
    Small,
    Base,
    Large,
}

impl StackSize {
    fn space_token(self) -> &'static str {
        match self {
            StackSize::None => "$0",
            StackSize::Small => "$2",
            StackSize::Base => "$4",
            StackSize::Large => "$8",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StackProps {
    pub dir: Option<Responsive<StackDir>>,
    pub x: Option<Responsive<StackX>>,
    pub y: Option<Responsive<StackY>>,
    pub grow: Option<Responsive<bool>>,
    pub size: Option<Responsive<StackSize>>,
    pub css: Option<Style>,
}

impl StackProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, dir: impl Into<Responsive<StackDir>>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn x(mut self, x: impl Into<Responsive<StackX>>) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn y(mut self, y: impl Into<Responsive<StackY>>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn grow(mut self, grow: impl Into<Responsive<bool>>) -> Self {
        self.grow = Some(grow.into());
        self
    }

    pub fn size(mut self, size: impl Into<Responsive<StackSize>>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn css(mut self, css: Style) -> Self {
        self.css = Some(css);
        self
    }

    pub(crate) fn into_selection(self) -> Selection {
        let selection = Selection::new()
            .choose_opt("dir", self.dir)
            .choose_opt("x", self.x)
            .choose_opt("y", self.y)
            .choose_opt("grow", self.grow)
            .choose_opt("size", self.size);
        match self.css {
            Some(css) => selection.css(css),
            None => selection,
        }
    }
}

fn flex_position(start: bool, end: bool) -> &'static str {
    match (start, end) {
        (true, _) => "flex-start",
        (_, true) => "flex-end",
        _ => "center",
    }
}

fn x_value(x: StackX) -> &'static str {
    match x {
        StackX::Between => "space-between",
        _ => flex_position(x == StackX::Left, x == StackX::Right),
    }
}

fn y_value(y: StackY) -> &'static str {
    match y {
        StackY::Between => "space-between",
        _ => flex_position(y == StackY::Top, y == StackY::Bottom),
    }
}

/// `space-between` has no cross-axis meaning; it stretches instead.
fn cross_axis(value: &'static str) -> &'static str {
    if value == "space-between" {
        "stretch"
    } else {
        value
    }
}

fn alignment(builder: RecipeBuilder) -> RecipeBuilder {
    StackDir::ALL.iter().fold(builder, |builder, &dir| {
        let builder = StackX::ALL.iter().fold(builder, |builder, &x| {
            let value = x_value(x);
            let style = if dir.is_row() {
                style! { justifyContent: value }
            } else {
                style! { alignItems: cross_axis(value) }
            };
            builder.compound(Conditions::new().when("dir", dir).when("x", x), style)
        });
        StackY::ALL.iter().fold(builder, |builder, &y| {
            let value = y_value(y);
            let style = if dir.is_row() {
                style! { alignItems: cross_axis(value) }
            } else {
                style! { justifyContent: value }
            };
            builder.compound(Conditions::new().when("dir", dir).when("y", y), style)
        })
    })
}

pub(crate) fn recipe() -> xcss::Result<Recipe> {
    let builder = Recipe::builder("stack")
        .base(style! { display: "flex" })
        .variants("dir", |dir: StackDir| style! { flexDirection: dir.css_value() })
        .variants("x", |_: StackX| Style::new())
        .variants("y", |_: StackY| Style::new())
        .variant("grow", true, style! { flexGrow: 1, "& > *": { flexGrow: 1 } })
        .variant("grow", false, Style::new())
        .variants("size", |size: StackSize| style! { gap: size.space_token() })
        .default_variant("dir", StackDir::Row);
    alignment(builder).build()
}
