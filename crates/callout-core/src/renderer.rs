//! Callout block rendering and the transform entry point.
//!
//! Walks the scanned line sequence, detects the `[!TYPE]` heading pattern
//! on each blockquote block and rewrites matching blocks into wrapper
//! markup. Blocks without the heading pattern are rejoined untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::body::{BodyRender, escape_paragraphs};
use crate::config::{CalloutConfig, CalloutOptions, Wrapper};
use crate::meta::CalloutMeta;
use crate::scanner::{self, BlockScanner, Segment};
use crate::util::{escape_html, indent};

static CALLOUT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s{0,3}>\s*\[!([^\]]+)\]\s*(.*)$").unwrap());

/// Callout transformer with an optional injected body renderer.
///
/// Stateless across calls: [`transform`](Self::transform) reads no shared
/// mutable state and performs no I/O, so transformers may be used from
/// multiple threads without coordination.
pub struct CalloutTransformer<'a> {
    config: CalloutConfig,
    body: Option<&'a dyn BodyRender>,
}

impl<'a> CalloutTransformer<'a> {
    /// Create a transformer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CalloutConfig::default(),
            body: None,
        }
    }

    /// Create a transformer from caller-supplied option overrides.
    #[must_use]
    pub fn with_options(options: &CalloutOptions) -> Self {
        Self {
            config: CalloutConfig::resolve(options),
            body: None,
        }
    }

    /// Inject the body-render capability.
    ///
    /// Without one, body content is rendered by the built-in paragraph
    /// escaper.
    #[must_use]
    pub fn with_body_renderer(mut self, renderer: &'a dyn BodyRender) -> Self {
        self.body = Some(renderer);
        self
    }

    /// Transform GitHub-style callout blockquotes in `text` into HTML.
    ///
    /// Non-callout blockquotes and all other lines pass through unchanged
    /// apart from line-ending normalization.
    #[must_use]
    pub fn transform(&self, text: &str) -> String {
        let normalized = scanner::normalize(text);
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut result = Vec::with_capacity(lines.len());
        for segment in BlockScanner::new(&lines) {
            match segment {
                Segment::Line(line) => result.push(line.to_owned()),
                Segment::Blockquote(block) => result.push(self.render_block(&block)),
            }
        }
        result.join("\n")
    }

    /// Render one blockquote block: callout markup when the heading pattern
    /// matches, the original lines rejoined otherwise.
    fn render_block(&self, block: &[&str]) -> String {
        let Some(first) = block.first() else {
            return String::new();
        };

        let Some(captures) = CALLOUT_HEADING.captures(first.trim_start()) else {
            return block.join("\n");
        };

        let raw_type = captures[1].trim().to_owned();
        let title_remainder = captures[2].trim().to_owned();

        let mut content_lines = Vec::with_capacity(block.len());
        if !title_remainder.is_empty() {
            content_lines.push(title_remainder);
        }
        for line in &block[1..] {
            content_lines.push(scanner::strip_blockquote_prefix(line).to_owned());
        }

        let joined = content_lines.join("\n");
        let body_html = self.render_body(joined.trim());

        let meta = CalloutMeta::resolve(&raw_type, &self.config);

        let mut segments = Vec::new();
        if self.config.render_header {
            segments.push(render_header(&meta));
        }
        if !body_html.is_empty() {
            segments.push(indent(&body_html));
        }
        let inner = segments.join("\n");

        wrap_content(&inner, &meta.classes, self.config.wrapper)
    }

    /// Render body content, recovering from renderer failure with the
    /// fallback escaper.
    fn render_body(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        match self.body {
            Some(renderer) => match renderer.render(content) {
                Ok(html) => html.trim().to_owned(),
                Err(e) => {
                    tracing::warn!(error = %e, "Body renderer failed, using paragraph fallback");
                    escape_paragraphs(content)
                }
            },
            None => escape_paragraphs(content),
        }
    }
}

impl Default for CalloutTransformer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the header fragment, indented one level.
///
/// The label is HTML-escaped; icon markup is trusted and injected raw.
fn render_header(meta: &CalloutMeta) -> String {
    let label = escape_html(&meta.label);
    let prefix = escape_html(&meta.prefix);
    format!(
        r#"    <header class="{prefix}__header" aria-label="{label}"><span class="{prefix}__icon" aria-hidden="true">{icon}</span><span class="{prefix}__label">{label}</span></header>"#,
        icon = meta.icon,
    )
}

/// Wrap inner content using the configured tag.
///
/// Empty content collapses to an empty element.
fn wrap_content(inner: &str, classes: &str, wrapper: Wrapper) -> String {
    let tag = wrapper.tag();
    if inner.is_empty() {
        format!(r#"<{tag} class="{classes}"></{tag}>"#)
    } else {
        format!("<{tag} class=\"{classes}\">\n{inner}\n</{tag}>")
    }
}

/// Transform callouts in `text` with defaults-plus-overrides configuration
/// and the built-in fallback body renderer.
#[must_use]
pub fn transform(text: &str, options: &CalloutOptions) -> String {
    CalloutTransformer::with_options(options).transform(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::body::BodyRenderError;

    fn transform_default(text: &str) -> String {
        transform(text, &CalloutOptions::default())
    }

    #[test]
    fn test_note_callout_with_defaults() {
        let html = transform_default("> [!NOTE]\n> Hello");
        assert!(html.starts_with(r#"<div class="callout callout--note">"#));
        assert!(html.ends_with("</div>"));
        assert!(html.contains(r#"aria-label="NOTE""#));
        assert!(html.contains(r#"<span class="callout__label">NOTE</span>"#));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_title_remainder_prepended_to_body() {
        let html = transform_default("> [!TIP] Quick tip\n> more text");
        assert!(html.contains(r#"class="callout callout--tip""#));
        // Title remainder and following lines render as one body block
        assert!(html.contains("<p>Quick tip\nmore text</p>"));
    }

    #[test]
    fn test_non_callout_blockquote_passes_through() {
        let input = "> random quote, no marker";
        assert_eq!(transform_default(input), input);
    }

    #[test]
    fn test_non_blockquote_text_unchanged() {
        let input = "# Heading\n\nParagraph with [!NOTE] inline.\n";
        assert_eq!(transform_default(input), input);
    }

    #[test]
    fn test_render_header_disabled() {
        let options = CalloutOptions {
            render_header: Some(false),
            ..CalloutOptions::default()
        };
        let html = transform("> [!NOTE]\n> Hello", &options);
        assert!(!html.contains("<header"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_unknown_type_uses_fallbacks() {
        let html = transform_default("> [!FOOBAR]\n> body");
        assert!(html.contains(r#"class="callout callout--foobar""#));
        assert!(html.contains(r#"<span class="callout__label">FOOBAR</span>"#));
        // Icon falls back to the default entry
        assert!(html.contains("lucide-radio-tower"));
    }

    #[test]
    fn test_empty_body_emits_header_only() {
        let html = transform_default("> [!NOTE]");
        assert!(html.contains("<header"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_empty_body_and_no_header_collapses_wrapper() {
        let options = CalloutOptions {
            render_header: Some(false),
            ..CalloutOptions::default()
        };
        assert_eq!(
            transform("> [!NOTE]", &options),
            r#"<div class="callout callout--note"></div>"#
        );
    }

    #[test]
    fn test_blockquote_wrapper() {
        let options = CalloutOptions {
            wrapper: Some(Wrapper::Blockquote),
            ..CalloutOptions::default()
        };
        let html = transform("> [!NOTE]\n> Hello", &options);
        assert!(html.starts_with(r#"<blockquote class="callout callout--note">"#));
        assert!(html.ends_with("</blockquote>"));
    }

    #[test]
    fn test_custom_class_prefix() {
        let options = CalloutOptions {
            class_prefix: Some("aside".to_owned()),
            ..CalloutOptions::default()
        };
        let html = transform("> [!NOTE]\n> Hello", &options);
        assert!(html.contains(r#"class="aside aside--note""#));
        assert!(html.contains(r#"<span class="aside__label">NOTE</span>"#));
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let html = transform_default("before\n\n> [!NOTE]\n> Hi\n\nafter");
        assert!(html.starts_with("before\n\n<div"));
        assert!(html.ends_with("</div>\n\nafter"));
    }

    #[test]
    fn test_pass_through_block_keeps_line_count() {
        let input = "> one\n> two\n> three";
        let output = transform_default(input);
        assert_eq!(output.split('\n').count(), input.split('\n').count());
    }

    #[test]
    fn test_idempotent_on_rendered_output() {
        let rendered = transform_default("> plain quote\n> second line");
        assert_eq!(transform_default(&rendered), rendered);
    }

    #[test]
    fn test_crlf_normalized() {
        let html = transform_default("> [!NOTE]\r\n> Hello\r\n");
        assert!(html.contains("<p>Hello</p>"));
        assert!(!html.contains('\r'));
    }

    #[test]
    fn test_heading_is_case_insensitive() {
        let html = transform_default("> [!note]\n> x");
        assert!(html.contains(r#"class="callout callout--note""#));
        assert!(html.contains(r#"<span class="callout__label">NOTE</span>"#));
    }

    #[test]
    fn test_indented_heading_up_to_three_spaces() {
        let html = transform_default("   > [!NOTE]\n   > deep");
        assert!(html.contains(r#"class="callout callout--note""#));
        assert!(html.contains("<p>deep</p>"));
    }

    #[test]
    fn test_injected_body_renderer_is_used() {
        let renderer = |markdown: &str| -> Result<String, BodyRenderError> {
            Ok(format!("<section>{markdown}</section>"))
        };
        let html = CalloutTransformer::new()
            .with_body_renderer(&renderer)
            .transform("> [!NOTE]\n> Hello");
        assert!(html.contains("    <section>Hello</section>"));
    }

    #[test]
    fn test_failing_body_renderer_falls_back() {
        let renderer = |_markdown: &str| -> Result<String, BodyRenderError> {
            Err(BodyRenderError("backend unavailable".to_owned()))
        };
        let html = CalloutTransformer::new()
            .with_body_renderer(&renderer)
            .transform("> [!NOTE]\n> Hello <x>");
        assert!(html.contains("<p>Hello &lt;x&gt;</p>"));
    }

    #[test]
    fn test_label_is_escaped_in_header() {
        let html = transform_default("> [!<B>]\n> x");
        assert!(html.contains(r#"aria-label="&lt;B&gt;""#));
        assert!(html.contains(r#"<span class="callout__label">&lt;B&gt;</span>"#));
    }

    #[test]
    fn test_multiple_blocks_transformed_independently() {
        let html = transform_default("> [!NOTE]\n> a\n\n> plain\n\n> [!TIP]\n> b");
        assert!(html.contains("callout--note"));
        assert!(html.contains("> plain"));
        assert!(html.contains("callout--tip"));
    }

    #[test]
    fn test_empty_input_is_identity() {
        assert_eq!(transform_default(""), "");
    }

    #[test]
    fn test_wrap_content_empty_element() {
        assert_eq!(
            wrap_content("", "callout callout--note", Wrapper::Div),
            r#"<div class="callout callout--note"></div>"#
        );
    }

    #[test]
    fn test_body_indented_one_level() {
        let html = transform_default("> [!NOTE]\n> Hello");
        assert!(html.contains("\n    <p>Hello</p>\n"));
    }
}
