//! Recipe Step Markdown
//!
//! Generated steps may carry light inline Markdown (`**bold**`, `_italic_`).
//! Rendered with pulldown-cmark; raw HTML in the text is escaped first.

use pulldown_cmark::{html::push_html, Options, Parser};

/// Render one step for use inside an `<li>` (outer `<p>` stripped)
pub fn render_step(step: &str) -> String {
    let source = escape_html(strip_list_marker(step.trim()));
    let parser = Parser::new_ext(&source, Options::ENABLE_STRIKETHROUGH);
    let mut html = String::new();
    push_html(&mut html, parser);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// The `<ol>` already numbers steps, so "3. Fry" and "- Fry" lose their marker.
fn strip_list_marker(step: &str) -> &str {
    if let Some(rest) = step.strip_prefix("- ").or_else(|| step.strip_prefix("* ")) {
        return rest.trim_start();
    }
    let digits = step.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let rest = &step[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return rest.trim_start();
        }
    }
    step
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_emphasis() {
        assert_eq!(render_step("Add **2 cups** flour"), "Add <strong>2 cups</strong> flour");
    }

    #[test]
    fn test_list_markers_are_dropped() {
        assert_eq!(render_step("3. Fry until golden"), "Fry until golden");
        assert_eq!(render_step("- Serve hot"), "Serve hot");
        assert_eq!(render_step("350 degrees oven"), "350 degrees oven");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_step("<script>alert(1)</script> then stir");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
