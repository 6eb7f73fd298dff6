//! Value types shared by the engine: colors, color tokens, themes and
//! declaration values.

pub mod color;
pub mod theme;
pub mod token;
pub mod value;

pub use color::{ColorParseError, RgbaColor};
pub use theme::{Theme, ThemeRegistry, ThemeRegistryBuilder, standard_themes};
pub use token::ColorToken;
pub use value::StyleValue;
