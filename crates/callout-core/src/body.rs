//! Body-render capability and the built-in fallback escaper.

use crate::util::escape_html;

/// Error returned by a body renderer implementation.
///
/// A failing renderer never fails the transform: the renderer loop catches
/// this error and falls back to [`escape_paragraphs`].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BodyRenderError(pub String);

/// Capability used to render callout body content to HTML.
///
/// Implementations receive the callout body as markdown and return an HTML
/// fragment, treated as opaque by the transform. The capability is injected
/// explicitly; there is no ambient discovery.
pub trait BodyRender {
    /// Render markdown body content to an HTML fragment.
    fn render(&self, markdown: &str) -> Result<String, BodyRenderError>;
}

impl<F> BodyRender for F
where
    F: Fn(&str) -> Result<String, BodyRenderError>,
{
    fn render(&self, markdown: &str) -> Result<String, BodyRenderError> {
        self(markdown)
    }
}

/// Minimal deterministic body rendering fallback.
///
/// Splits content on blank lines, HTML-escapes each non-empty paragraph and
/// wraps it in a `<p>` element.
#[must_use]
pub fn escape_paragraphs(content: &str) -> String {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_paragraphs_single() {
        assert_eq!(escape_paragraphs("Hello"), "<p>Hello</p>");
    }

    #[test]
    fn test_escape_paragraphs_multiple() {
        assert_eq!(
            escape_paragraphs("First\n\nSecond"),
            "<p>First</p>\n<p>Second</p>"
        );
    }

    #[test]
    fn test_escape_paragraphs_escapes_markup() {
        assert_eq!(
            escape_paragraphs("<b>bold</b> & more"),
            "<p>&lt;b&gt;bold&lt;/b&gt; &amp; more</p>"
        );
    }

    #[test]
    fn test_escape_paragraphs_skips_empty_chunks() {
        assert_eq!(escape_paragraphs("a\n\n\n\nb"), "<p>a</p>\n<p>b</p>");
        assert_eq!(escape_paragraphs(""), "");
    }

    #[test]
    fn test_fn_impl_satisfies_capability() {
        let upper =
            |markdown: &str| -> Result<String, BodyRenderError> { Ok(markdown.to_uppercase()) };
        assert_eq!(upper.render("abc").unwrap(), "ABC");
    }

    #[test]
    fn test_multiline_paragraph_kept_together() {
        assert_eq!(
            escape_paragraphs("line one\nline two"),
            "<p>line one\nline two</p>"
        );
    }
}
