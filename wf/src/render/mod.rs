//! Markdown rendering
//!
//! Markdown to sanitized HTML. The pipeline is parse then sanitize, in that
//! order, always; raw parser output never leaves this module.

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to sanitized HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize(&raw_html)
}

/// Strip unsafe markup from HTML
pub fn sanitize(html: &str) -> String {
    ammonia::clean(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_constructs_render() {
        let html = render_markdown("# Title\n\n- one\n- two\n\n*emphasis* and **strong**");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<strong>strong</strong>"));
    }

    #[test]
    fn test_script_tags_are_stripped() {
        let html = render_markdown("hello <script>alert('xss')</script> world");
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_event_handlers_are_stripped() {
        let html = render_markdown(r#"<img src="x.png" onerror="alert(1)">"#);
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_unsafe_urls_are_stripped() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_idempotent_under_resanitization() {
        let inputs = [
            "# Travel Plan: Paris to Tokyo\n\n- **Duration**: 4 days",
            "plain text with <b>inline html</b> & entities",
            "[link](https://example.com) and `code`",
        ];
        for input in inputs {
            let rendered = render_markdown(input);
            assert_eq!(sanitize(&rendered), rendered, "not idempotent for {:?}", input);
        }
    }
}
