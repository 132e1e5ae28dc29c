//! Static HTML rendering
//!
//! Serializes an element tree to HTML. Keyed elements carry a `data-key`
//! attribute; a [`StyleOverlay`] may contribute an inline `style` per key,
//! which is how in-progress reveal animations are captured in a snapshot.

use std::fmt::Write as _;

use fusion_core::ElementKey;

use crate::element::Element;

/// Supplies per-element inline styles at render time
pub trait StyleOverlay {
    fn inline_style(&self, key: &ElementKey) -> Option<String>;
}

/// Overlay that adds nothing
pub struct NoOverlay;

impl StyleOverlay for NoOverlay {
    fn inline_style(&self, _key: &ElementKey) -> Option<String> {
        None
    }
}

/// HTML serializer for element trees
pub struct HtmlRenderer<'a> {
    overlay: &'a dyn StyleOverlay,
    pretty: bool,
}

impl Default for HtmlRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> HtmlRenderer<'a> {
    pub fn new() -> Self {
        Self {
            overlay: &NoOverlay,
            pretty: true,
        }
    }

    pub fn with_overlay(mut self, overlay: &'a dyn StyleOverlay) -> Self {
        self.overlay = overlay;
        self
    }

    /// Emit everything on one line
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Render a single element and its subtree
    pub fn render(&self, element: &Element) -> String {
        let mut out = String::new();
        self.write_element(&mut out, element, 0);
        out
    }

    /// Render a complete HTML document with `body` as the page content
    pub fn render_document(&self, title: &str, stylesheet: &str, body: &Element) -> String {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(out, "<title>{}</title>", html_escape::encode_text(title));
        if !stylesheet.is_empty() {
            out.push_str("<style>\n");
            out.push_str(stylesheet);
            out.push_str("\n</style>\n");
        }
        out.push_str("</head>\n<body>\n");
        self.write_element(&mut out, body, 0);
        out.push_str("</body>\n</html>\n");
        out
    }

    fn write_element(&self, out: &mut String, element: &Element, depth: usize) {
        self.indent(out, depth);
        out.push('<');
        out.push_str(element.tag());

        if !element.classes().is_empty() {
            let classes = element.classes().join(" ");
            write_attr(out, "class", &classes);
        }
        for (name, value) in element.attrs() {
            if name != "style" {
                write_attr(out, name, value);
            }
        }

        let mut style = element.get_attr("style").unwrap_or_default().to_string();
        if let Some(key) = element.element_key() {
            write_attr(out, "data-key", key.as_str());
            if let Some(overlay) = self.overlay.inline_style(key) {
                if !style.is_empty() && !overlay.is_empty() && !style.ends_with(';') {
                    style.push(';');
                }
                style.push_str(&overlay);
            }
        }
        if !style.is_empty() {
            write_attr(out, "style", &style);
        }
        out.push('>');

        if element.is_void() {
            self.newline(out);
            return;
        }

        let text = element.text_content().unwrap_or_default();
        if element.children().is_empty() {
            out.push_str(&html_escape::encode_text(text));
        } else {
            if !text.is_empty() {
                self.newline(out);
                self.indent(out, depth + 1);
                out.push_str(&html_escape::encode_text(text));
            }
            self.newline(out);
            for child in element.children() {
                self.write_element(out, child, depth + 1);
            }
            self.indent(out, depth);
        }

        out.push_str("</");
        out.push_str(element.tag());
        out.push('>');
        self.newline(out);
    }

    fn indent(&self, out: &mut String, depth: usize) {
        if self.pretty {
            for _ in 0..depth {
                out.push_str("  ");
            }
        }
    }

    fn newline(&self, out: &mut String) {
        if self.pretty {
            out.push('\n');
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{div, image, link, paragraph};

    struct FixedOverlay;

    impl StyleOverlay for FixedOverlay {
        fn inline_style(&self, key: &ElementKey) -> Option<String> {
            (key.as_str() == "card").then(|| "opacity:0.000".to_string())
        }
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let el = link("/search?a=1&b=\"2\"", "Tom & Jerry <3");
        let html = HtmlRenderer::new().compact().render(&el);
        assert_eq!(
            html,
            "<a href=\"/search?a=1&amp;b=&quot;2&quot;\">Tom &amp; Jerry &lt;3</a>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let html = HtmlRenderer::new()
            .compact()
            .render(&image("/logo.png", "QF"));
        assert_eq!(html, "<img src=\"/logo.png\" alt=\"QF\">");
    }

    #[test]
    fn test_overlay_styles_keyed_elements() {
        let tree = div()
            .class("grid")
            .child(div().key("card").child(paragraph("Hi")))
            .child(div().key("other"));

        let html = HtmlRenderer::new()
            .with_overlay(&FixedOverlay)
            .compact()
            .render(&tree);
        assert_eq!(
            html,
            "<div class=\"grid\"><div data-key=\"card\" style=\"opacity:0.000\"><p>Hi</p></div><div data-key=\"other\"></div></div>"
        );
    }

    #[test]
    fn test_own_style_merges_with_overlay() {
        let el = div().key("card").attr("style", "height:50%");
        let html = HtmlRenderer::new()
            .with_overlay(&FixedOverlay)
            .compact()
            .render(&el);
        assert_eq!(
            html,
            "<div data-key=\"card\" style=\"height:50%;opacity:0.000\"></div>"
        );
    }

    #[test]
    fn test_document_wraps_body() {
        let doc = HtmlRenderer::new().render_document("Q & F", "body{}", &div());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Q &amp; F</title>"));
        assert!(doc.contains("<style>\nbody{}\n</style>"));
        assert!(doc.trim_end().ends_with("</html>"));
    }
}
