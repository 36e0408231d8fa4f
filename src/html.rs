//! HTML document wrapper
//!
//! Static template insertion around an already-rendered body: a stylesheet
//! mapping each category marker to its visual style, and a monospace block
//! holding the body. The body itself is produced by the core pipeline and
//! inserted as-is.

use crate::theme::Theme;

/// Wrap a rendered body in a complete HTML page
pub fn wrap_document(body: &str, theme: &Theme) -> String {
    format!(
        "<html><head><style>\n{css}</style></head><body><pre>\n{body}</pre></body></html>\n",
        css = theme.css(),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_contains_body_and_styles() {
        let theme = Theme::default();
        let page = wrap_document("<span class='keyword'>def</span> f():\n", &theme);

        assert!(page.starts_with("<html><head><style>"));
        assert!(page.contains(".keyword { color: blue; font-weight: bold; }"));
        assert!(page.contains("<pre>\n<span class='keyword'>def</span> f():\n</pre>"));
        assert!(page.ends_with("</body></html>\n"));
    }

    #[test]
    fn test_body_inserted_verbatim() {
        let theme = Theme::default();
        let page = wrap_document("a < b\n", &theme);

        assert!(page.contains("a < b\n"));
    }
}
