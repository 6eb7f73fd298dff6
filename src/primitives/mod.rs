//! Layout and typography primitives shared by every page.
//!
//! Each primitive is a [`Recipe`] built once at startup. Pages call the
//! matching method with typed props and get back a class name registered
//! in the request's collector:
//!
//! ```
//! use boringstonks::primitives::{Primitives, TextProps, TextSize, TextWeight};
//! use xcss::{Engine, EngineConfig, Responsive};
//!
//! # fn main() -> boringstonks::Result<()> {
//! let engine = Engine::new(EngineConfig::default())?;
//! let primitives = Primitives::new()?;
//! let mut cx = engine.render_context();
//!
//! let title = primitives.text(
//!     &mut cx,
//!     TextProps::new()
//!         .weight(TextWeight::Bold)
//!         .size(Responsive::at([("initial", TextSize::Xl), ("@sm", TextSize::TwoXl)])),
//! )?;
//! assert!(title.starts_with("x-text-"));
//! # Ok(())
//! # }
//! ```

mod container;
mod stack;
mod text;

pub use container::{ContainerProps, ContainerSize};
pub use stack::{StackDir, StackProps, StackSize, StackX, StackY};
pub use text::{Leading, TextProps, TextSize, TextWeight};

use xcss::{Recipe, RenderContext};

use crate::error::Result;

/// The built primitive recipes.
#[derive(Debug, Clone)]
pub struct Primitives {
    text: Recipe,
    container: Recipe,
    stack: Recipe,
}

impl Primitives {
    pub fn new() -> Result<Self> {
        Ok(Self {
            text: text::recipe()?,
            container: container::recipe()?,
            stack: stack::recipe()?,
        })
    }

    pub fn text(&self, cx: &mut RenderContext<'_>, props: TextProps) -> Result<String> {
        Ok(cx.class(&self.text, &props.into_selection())?)
    }

    pub fn container(&self, cx: &mut RenderContext<'_>, props: ContainerProps) -> Result<String> {
        Ok(cx.class(&self.container, &props.into_selection())?)
    }

    pub fn stack(&self, cx: &mut RenderContext<'_>, props: StackProps) -> Result<String> {
        Ok(cx.class(&self.stack, &props.into_selection())?)
    }
}
