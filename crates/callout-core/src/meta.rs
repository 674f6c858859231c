//! Presentation metadata derived from a callout type.

use crate::config::CalloutConfig;
use crate::icons;

/// Modifier used when slugging a type produces an empty string.
const FALLBACK_MODIFIER: &str = "callout";

/// Display label used for empty types.
const FALLBACK_LABEL: &str = "CALLOUT";

/// Per-block presentation metadata for a rendered callout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalloutMeta {
    /// Slugged type used for CSS modifier classes and icon lookup.
    /// Never empty.
    pub modifier: String,
    /// Display label for the header. Never empty.
    pub label: String,
    /// Configured class prefix.
    pub prefix: String,
    /// Computed wrapper class string: `"{prefix} {prefix}--{modifier}"`.
    pub classes: String,
    /// Resolved icon markup.
    pub icon: String,
}

impl CalloutMeta {
    /// Derive metadata for a raw callout type under the given configuration.
    #[must_use]
    pub fn resolve(raw_type: &str, config: &CalloutConfig) -> Self {
        let modifier = type_modifier(raw_type);
        let prefix = config.class_prefix.clone();
        let classes = format!("{prefix} {prefix}--{modifier}");
        let icon = icons::icon_for_modifier(&modifier, &config.icons).to_owned();

        Self {
            label: type_label(raw_type),
            modifier,
            prefix,
            classes,
            icon,
        }
    }
}

/// Slug a raw callout type into a CSS modifier.
///
/// Lowercases the type, replaces every run of characters outside `[a-z0-9]`
/// with a single `-`, and trims leading/trailing dashes. An empty result
/// falls back to `"callout"`.
#[must_use]
pub fn type_modifier(raw_type: &str) -> String {
    let mut slug = String::with_capacity(raw_type.len());
    let mut last_was_dash = true; // Prevents leading dash

    for c in raw_type.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        FALLBACK_MODIFIER.to_owned()
    } else {
        slug
    }
}

/// Normalize a raw callout type into a display label.
///
/// Trims the type, collapses runs of whitespace and underscores to a single
/// space, and uppercases the result. An empty type falls back to
/// `"CALLOUT"`.
#[must_use]
pub fn type_label(raw_type: &str) -> String {
    let trimmed = raw_type.trim();
    if trimmed.is_empty() {
        return FALLBACK_LABEL.to_owned();
    }

    let mut label = String::with_capacity(trimmed.len());
    let mut last_was_space = false;
    for c in trimmed.chars() {
        if c.is_whitespace() || c == '_' {
            if !last_was_space {
                label.push(' ');
                last_was_space = true;
            }
        } else {
            label.push(c);
            last_was_space = false;
        }
    }

    label.to_uppercase()
}
