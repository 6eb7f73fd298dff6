//! Centered, width-capped page column.

use xcss::{Recipe, Responsive, Selection, Style, Variant, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
pub enum ContainerSize {
    Small,
    Base,
    Large,
}

#[derive(Debug, Clone, Default)]
pub struct ContainerProps {
    pub size: Option<Responsive<ContainerSize>>,
    pub css: Option<Style>,
}

impl ContainerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<Responsive<ContainerSize>>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn css(mut self, css: Style) -> Self {
        self.css = Some(css);
        self
    }

    pub(crate) fn into_selection(self) -> Selection {
        let selection = Selection::new().choose_opt("size", self.size);
        match self.css {
            Some(css) => selection.css(css),
            None => selection,
        }
    }
}

pub(crate) fn recipe() -> xcss::Result<Recipe> {
    Recipe::builder("container")
        .base(style! {
            w: "$full",
            mx: "auto",
            px: "$4",
            "@sm": { px: "$6" },
        })
        .variants("size", |size: ContainerSize| {
            style! { maxWidth: format!("${}", size.variant_key()) }
        })
        .default_variant("size", ContainerSize::Base)
        .build()
}
