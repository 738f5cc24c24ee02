//! Rich text rendering for CMS content fields.
//!
//! CMS fields declared as rich text may arrive as a plain string, a JSON
//! document (`{ "type": "doc", "children": [...] }`), a bare node, a bare
//! array of nodes, or nothing. This crate provides:
//!
//! - [`Content`]: classification of a field value into a closed set of shapes
//! - [`RichTextRenderer`]: conversion to a keyed render tree, serialized to
//!   HTML by a [`RenderBackend`] ([`HtmlBackend`] by default)
//! - [`extract_plain_text`] / [`TextExtractor`]: formatting-free text for meta
//!   descriptions, `alt` attributes and excerpts
//!
//! Rendering is pure and never fails. Degraded input is reported as
//! [`Diagnostic`] values on the result instead of being logged directly.
//!
//! # Example
//!
//! ```
//! use folio_richtext::{RichTextRenderer, extract_plain_text, parse_content};
//!
//! let field = parse_content(r#"{
//!     "type": "doc",
//!     "children": [
//!         { "type": "h2", "children": [{ "text": "Our story" }] },
//!         { "type": "p", "children": [{ "text": "Met in " }, { "text": "Lisbon", "italic": true }] }
//!     ]
//! }"#).unwrap();
//!
//! let result = RichTextRenderer::new().with_class("prose").render(&field);
//! assert_eq!(
//!     result.to_html(),
//!     r#"<div class="prose"><h2>Our story</h2><p>Met in <em>Lisbon</em></p></div>"#
//! );
//! assert_eq!(extract_plain_text(&field), "Our storyMet in Lisbon");
//! ```

mod backend;
mod classes;
pub mod content;
mod diagnostic;
mod html;
mod node;
mod output;
mod plain_text;
mod renderer;

pub use backend::{RenderBackend, write_nodes};
pub use classes::{ClassMap, UnknownClassKey};
pub use content::{
    Content, ParseError, is_document, is_empty, is_node, is_plain_text, parse_content, stringify,
};
pub use diagnostic::Diagnostic;
pub use html::{HtmlBackend, escape_html};
pub use node::{Attrs, Mark, Marks, NodeKind, NodeRef};
pub use output::{ElementTag, ImageAttrs, LinkAttrs, RenderElement, RenderNode, TextRun};
pub use plain_text::{ELLIPSIS, TextExtractor, excerpt, extract_plain_text, safe_text_content};
pub use renderer::{DEFAULT_MAX_DEPTH, PARAGRAPH_SEPARATOR, RenderResult, RichTextRenderer};
