//! Render backend trait for serializing the render tree.
//!
//! The renderer produces a format-independent [`RenderNode`] tree; a backend
//! decides how each element kind is written out.

use crate::output::{ElementTag, ImageAttrs, RenderNode};

/// Backend trait for format-specific output.
///
/// Implementations provide the markup for:
/// - The root wrapper carrying the caller's class hint
/// - Container elements (paragraphs, headings, lists, links, marks)
/// - Leaf elements (images, rules, line breaks)
/// - Text escaping
pub trait RenderBackend {
    /// Open the root wrapper. `class` is the caller's styling hint, forwarded unchanged.
    fn wrapper_start(&self, class: Option<&str>, out: &mut String);

    /// Close the root wrapper.
    fn wrapper_end(&self, class: Option<&str>, out: &mut String);

    /// Open a container element.
    fn open(&self, tag: &ElementTag, out: &mut String);

    /// Close a container element.
    fn close(&self, tag: &ElementTag, out: &mut String);

    /// Render an image leaf.
    fn image(&self, attrs: &ImageAttrs, out: &mut String);

    /// Render literal text.
    fn text(&self, text: &str, out: &mut String);

    /// Render a horizontal rule.
    ///
    /// Default uses `<hr>`.
    fn horizontal_rule(&self, out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a line break.
    ///
    /// Default uses `<br>`.
    fn line_break(&self, out: &mut String) {
        out.push_str("<br>");
    }
}

/// Write rendered nodes through a backend, depth-first in order.
pub fn write_nodes<B: RenderBackend + ?Sized>(backend: &B, nodes: &[RenderNode], out: &mut String) {
    for node in nodes {
        match node {
            RenderNode::Text(run) => backend.text(&run.text, out),
            RenderNode::Element(element) => match &element.tag {
                ElementTag::Image(attrs) => backend.image(attrs, out),
                ElementTag::HorizontalRule => backend.horizontal_rule(out),
                ElementTag::LineBreak => backend.line_break(out),
                tag => {
                    backend.open(tag, out);
                    write_nodes(backend, &element.children, out);
                    backend.close(tag, out);
                }
            },
        }
    }
}
