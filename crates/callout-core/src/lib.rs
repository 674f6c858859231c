//! GitHub-style callout transformation for markdown text.
//!
//! Scans text for blockquotes whose first line carries a `[!TYPE]` marker
//! and rewrites each matching block into structured HTML: a wrapper element
//! with type-derived CSS classes, an optional icon/label header, and the
//! rendered body. Non-matching blockquotes and all other lines pass through
//! unchanged.
//!
//! Body content is rendered through an injected [`BodyRender`] capability.
//! When no renderer is injected, or the injected one fails, a minimal
//! paragraph escaper takes over, so the transform is total over all inputs.
//!
//! # Example
//!
//! ```
//! use callout_core::{CalloutOptions, transform};
//!
//! let html = transform("> [!NOTE]\n> Hello", &CalloutOptions::default());
//! assert!(html.contains(r#"class="callout callout--note""#));
//! ```

mod body;
mod config;
mod icons;
mod meta;
mod renderer;
mod scanner;
mod util;

pub use body::{BodyRender, BodyRenderError, escape_paragraphs};
pub use config::{
    CalloutConfig, CalloutOptions, DEFAULT_CLASS_PREFIX, DEFAULT_RENDER_HEADER, Wrapper,
};
pub use icons::default_icon_map;
pub use meta::{CalloutMeta, type_label, type_modifier};
pub use renderer::{CalloutTransformer, transform};
pub use util::escape_html;
