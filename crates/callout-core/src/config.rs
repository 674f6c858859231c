//! Transform configuration with merge-then-fallback semantics.
//!
//! Caller-supplied [`CalloutOptions`] are merged onto defaults once per
//! transform call, producing an immutable [`CalloutConfig`]. Invalid values
//! are silently corrected to the nearest valid default and never surface as
//! errors.

use std::collections::HashMap;

use crate::icons;

/// Default CSS class prefix for rendered callouts.
pub const DEFAULT_CLASS_PREFIX: &str = "callout";

/// Whether the icon/label header is rendered by default.
pub const DEFAULT_RENDER_HEADER: bool = true;

/// Output tag used to wrap a rendered callout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Wrapper {
    /// `<div>` wrapper.
    #[default]
    Div,
    /// `<blockquote>` wrapper.
    Blockquote,
}

impl Wrapper {
    /// Tag name emitted into the output markup.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Blockquote => "blockquote",
        }
    }

    /// Parse a wrapper tag name, falling back to [`Wrapper::Div`] for any
    /// unrecognized value.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "blockquote" => Self::Blockquote,
            _ => Self::Div,
        }
    }
}

/// Caller-supplied configuration overrides.
///
/// All fields are optional. Only `Some` values override the defaults.
#[derive(Clone, Debug, Default)]
pub struct CalloutOptions {
    /// Override the CSS class prefix for wrapper/header/icon/label elements.
    pub class_prefix: Option<String>,
    /// Override whether the header fragment is emitted.
    pub render_header: Option<bool>,
    /// Override the output wrapper tag.
    pub wrapper: Option<Wrapper>,
    /// Override the modifier → markup lookup for header icons.
    pub icons: Option<HashMap<String, String>>,
}

/// Resolved configuration for one transform call.
#[derive(Clone, Debug)]
pub struct CalloutConfig {
    /// Base CSS class, non-empty and trimmed.
    pub class_prefix: String,
    /// Whether the icon/label header is emitted.
    pub render_header: bool,
    /// Output wrapper tag.
    pub wrapper: Wrapper,
    /// Modifier → icon markup table.
    pub icons: HashMap<String, String>,
}

impl CalloutConfig {
    /// Merge options onto defaults.
    ///
    /// An empty or whitespace-only class prefix falls back to
    /// [`DEFAULT_CLASS_PREFIX`]; an absent icon table falls back to the
    /// built-in set.
    #[must_use]
    pub fn resolve(options: &CalloutOptions) -> Self {
        let class_prefix = options
            .class_prefix
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(DEFAULT_CLASS_PREFIX)
            .to_owned();

        Self {
            class_prefix,
            render_header: options.render_header.unwrap_or(DEFAULT_RENDER_HEADER),
            wrapper: options.wrapper.unwrap_or_default(),
            icons: options
                .icons
                .clone()
                .unwrap_or_else(icons::default_icon_map),
        }
    }
}

impl Default for CalloutConfig {
    fn default() -> Self {
        Self::resolve(&CalloutOptions::default())
    }
}
