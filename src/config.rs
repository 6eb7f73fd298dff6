//! Site-wide settings.

/// The author avatar shown on the about page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            src: "/images/avatar-full.png".to_string(),
            alt: "Zaid's Avatar".to_string(),
        }
    }
}

/// Settings the engine and the document shell are built from.
///
/// ```
/// use boringstonks::SiteConfig;
///
/// let config = SiteConfig::default().with_default_theme("light").with_class_prefix("bs");
/// assert_eq!(config.default_theme, "light");
/// assert_eq!(config.lang, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Theme bound to `:root` and applied when a request does not pick one.
    pub default_theme: String,
    /// Prefix of every generated class name.
    pub class_prefix: String,
    /// The `lang` attribute of `<html>`.
    pub lang: String,
    pub avatar: Avatar,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_theme: "dark".to_string(),
            class_prefix: "x".to_string(),
            lang: "en".to_string(),
            avatar: Avatar::default(),
        }
    }
}

impl SiteConfig {
    pub fn with_default_theme(mut self, theme: impl Into<String>) -> Self {
        self.default_theme = theme.into();
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = avatar;
        self
    }
}
