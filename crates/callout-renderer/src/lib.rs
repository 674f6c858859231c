//! Markdown body renderer for callout content.
//!
//! Implements the [`BodyRender`] capability on top of pulldown-cmark, with
//! GitHub Flavored Markdown enabled by default. The transform treats the
//! produced HTML as an opaque fragment.
//!
//! # Example
//!
//! ```
//! use callout_core::CalloutTransformer;
//! use callout_renderer::MarkdownBody;
//!
//! let body = MarkdownBody::new();
//! let html = CalloutTransformer::new()
//!     .with_body_renderer(&body)
//!     .transform("> [!NOTE]\n> This is a **note**.");
//! assert!(html.contains("<strong>note</strong>"));
//! ```

use callout_core::{BodyRender, BodyRenderError};
use pulldown_cmark::{Options, Parser, html};

/// Markdown body renderer with GFM enabled by default.
pub struct MarkdownBody {
    gfm: bool,
}

impl MarkdownBody {
    /// Create a new renderer with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// When enabled, the parser supports tables, strikethrough and task
    /// lists.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

impl BodyRender for MarkdownBody {
    fn render(&self, markdown: &str) -> Result<String, BodyRenderError> {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

impl Default for MarkdownBody {
    fn default() -> Self {
        Self::new()
    }
}
