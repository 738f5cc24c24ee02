//! HTML backend for rich text rendering.
//!
//! Produces semantic HTML5 output suitable for web display.

use crate::backend::RenderBackend;
use crate::classes::ClassMap;
use crate::node::Mark;
use crate::output::{ElementTag, ImageAttrs};

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<p>`, `<h1>`..`<h6>`, `<ul>`/`<ol>`/`<li>`, `<blockquote>`
/// - `<pre><code>` for code blocks
/// - `<strong>`, `<em>`, `<u>`, `<s>`, `<code>` for marks
/// - `<div class="...">` around the output when a root class is given
/// - Optional per-element `class` attributes from a [`ClassMap`]
#[derive(Clone, Debug, Default)]
pub struct HtmlBackend {
    classes: ClassMap,
}

impl HtmlBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach per-element classes.
    #[must_use]
    pub fn with_classes(mut self, classes: ClassMap) -> Self {
        self.classes = classes;
        self
    }

    fn push_class(&self, tag: &ElementTag, out: &mut String) {
        if let Some(class) = self.classes.get(tag) {
            push_attr(out, "class", class);
        }
    }
}

impl RenderBackend for HtmlBackend {
    fn wrapper_start(&self, class: Option<&str>, out: &mut String) {
        if let Some(class) = class {
            out.push_str("<div");
            push_attr(out, "class", class);
            out.push('>');
        }
    }

    fn wrapper_end(&self, class: Option<&str>, out: &mut String) {
        if class.is_some() {
            out.push_str("</div>");
        }
    }

    fn open(&self, tag: &ElementTag, out: &mut String) {
        if tag.is_leaf() {
            return;
        }
        out.push('<');
        out.push_str(tag_name(tag));
        if let ElementTag::Link(link) = tag {
            push_attr(out, "href", &link.href);
            push_attr(out, "target", &link.target);
            if let Some(rel) = link.rel {
                push_attr(out, "rel", rel);
            }
        }
        self.push_class(tag, out);
        out.push('>');
        if *tag == ElementTag::CodeBlock {
            out.push_str("<code>");
        }
    }

    fn close(&self, tag: &ElementTag, out: &mut String) {
        if tag.is_leaf() {
            return;
        }
        if *tag == ElementTag::CodeBlock {
            out.push_str("</code>");
        }
        out.push_str("</");
        out.push_str(tag_name(tag));
        out.push('>');
    }

    fn image(&self, attrs: &ImageAttrs, out: &mut String) {
        let tag = ElementTag::Image(ImageAttrs::default());
        out.push_str("<img");
        push_attr(out, "src", &attrs.src);
        push_attr(out, "alt", &attrs.alt);
        self.push_class(&tag, out);
        out.push('>');
    }

    fn text(&self, text: &str, out: &mut String) {
        out.push_str(&escape_html(text));
    }

    fn horizontal_rule(&self, out: &mut String) {
        out.push_str("<hr");
        self.push_class(&ElementTag::HorizontalRule, out);
        out.push('>');
    }

    fn line_break(&self, out: &mut String) {
        out.push_str("<br");
        self.push_class(&ElementTag::LineBreak, out);
        out.push('>');
    }
}

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// HTML element name for a tag. Heading levels are clamped to 1..=6.
fn tag_name(tag: &ElementTag) -> &'static str {
    match tag {
        ElementTag::Paragraph => "p",
        ElementTag::Heading(level) => HEADING_TAGS[usize::from((*level).clamp(1, 6) - 1)],
        ElementTag::List { ordered: true } => "ol",
        ElementTag::List { ordered: false } => "ul",
        ElementTag::ListItem => "li",
        ElementTag::Blockquote => "blockquote",
        ElementTag::Link(_) => "a",
        ElementTag::Image(_) => "img",
        ElementTag::HorizontalRule => "hr",
        ElementTag::LineBreak => "br",
        ElementTag::CodeBlock => "pre",
        ElementTag::Mark(Mark::Bold) => "strong",
        ElementTag::Mark(Mark::Italic) => "em",
        ElementTag::Mark(Mark::Underline) => "u",
        ElementTag::Mark(Mark::Strikethrough) => "s",
        ElementTag::Mark(Mark::Code) => "code",
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Escape text for safe inclusion in HTML content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
