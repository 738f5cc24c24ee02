//! Keyed render tree produced by [`RichTextRenderer`](crate::RichTextRenderer).
//!
//! Every node carries a key derived from its position in the source tree
//! (`node-0`, `node-0-2`, `node-0-2-bold`), never from its content, so a UI
//! layer can reconcile lists across re-renders.

use crate::node::Mark;

/// Rendered node: an element or a text run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(tag = "node", rename_all = "lowercase"))]
pub enum RenderNode {
    Element(RenderElement),
    Text(TextRun),
}

impl RenderNode {
    /// Position-derived key.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Element(element) => &element.key,
            Self::Text(run) => &run.key,
        }
    }
}

/// Rendered element with its children.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct RenderElement {
    pub key: String,
    pub tag: ElementTag,
    pub children: Vec<RenderNode>,
}

/// Literal text, unescaped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct TextRun {
    pub key: String,
    pub text: String,
}

/// Visual element kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "kebab-case"))]
pub enum ElementTag {
    Paragraph,
    Heading(u8),
    List { ordered: bool },
    ListItem,
    Blockquote,
    Link(LinkAttrs),
    Image(ImageAttrs),
    HorizontalRule,
    LineBreak,
    CodeBlock,
    Mark(Mark),
}

/// Link attributes after defaults are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct LinkAttrs {
    pub href: String,
    pub target: String,
    pub rel: Option<&'static str>,
}

impl LinkAttrs {
    /// Placeholder href used when a link has none.
    pub const DEFAULT_HREF: &'static str = "#";
    /// Target used when a link has none.
    pub const DEFAULT_TARGET: &'static str = "_self";

    /// Build link attributes, defaulting href to `#` and target to `_self`.
    ///
    /// A `_blank` target gets `rel="noopener noreferrer"`.
    #[must_use]
    pub fn new(href: Option<&str>, target: Option<&str>) -> Self {
        let target = target.unwrap_or(Self::DEFAULT_TARGET);
        Self {
            href: href.unwrap_or(Self::DEFAULT_HREF).to_owned(),
            rel: (target == "_blank").then_some("noopener noreferrer"),
            target: target.to_owned(),
        }
    }
}

/// Image attributes after defaults are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ImageAttrs {
    pub src: String,
    pub alt: String,
}

const HEADING_KEYS: [&str; 6] = [
    "heading-1",
    "heading-2",
    "heading-3",
    "heading-4",
    "heading-5",
    "heading-6",
];

impl ElementTag {
    /// Every key accepted by [`ElementTag::class_key`] and [`ClassMap`](crate::ClassMap).
    pub const CLASS_KEYS: &'static [&'static str] = &[
        "paragraph",
        "heading-1",
        "heading-2",
        "heading-3",
        "heading-4",
        "heading-5",
        "heading-6",
        "unordered-list",
        "ordered-list",
        "list-item",
        "blockquote",
        "link",
        "image",
        "horizontal-rule",
        "line-break",
        "code-block",
        "bold",
        "italic",
        "underline",
        "strikethrough",
        "code",
    ];

    /// Styling key of this element kind.
    #[must_use]
    pub fn class_key(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading(level) => {
                HEADING_KEYS[usize::from((*level).clamp(1, 6) - 1)]
            }
            Self::List { ordered: false } => "unordered-list",
            Self::List { ordered: true } => "ordered-list",
            Self::ListItem => "list-item",
            Self::Blockquote => "blockquote",
            Self::Link(_) => "link",
            Self::Image(_) => "image",
            Self::HorizontalRule => "horizontal-rule",
            Self::LineBreak => "line-break",
            Self::CodeBlock => "code-block",
            Self::Mark(mark) => mark.name(),
        }
    }

    /// Leaf elements never carry children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Image(_) | Self::HorizontalRule | Self::LineBreak
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_attrs_defaults() {
        let attrs = LinkAttrs::new(None, None);
        assert_eq!(attrs.href, "#");
        assert_eq!(attrs.target, "_self");
        assert_eq!(attrs.rel, None);
    }

    #[test]
    fn test_link_attrs_blank_target_adds_rel() {
        let attrs = LinkAttrs::new(Some("https://x.com"), Some("_blank"));
        assert_eq!(attrs.href, "https://x.com");
        assert_eq!(attrs.rel, Some("noopener noreferrer"));
    }

    #[test]
    fn test_class_keys_cover_all_tags() {
        let tags = [
            ElementTag::Paragraph,
            ElementTag::Heading(1),
            ElementTag::Heading(6),
            ElementTag::List { ordered: true },
            ElementTag::List { ordered: false },
            ElementTag::ListItem,
            ElementTag::Blockquote,
            ElementTag::Link(LinkAttrs::new(None, None)),
            ElementTag::Image(ImageAttrs::default()),
            ElementTag::HorizontalRule,
            ElementTag::LineBreak,
            ElementTag::CodeBlock,
            ElementTag::Mark(Mark::Bold),
            ElementTag::Mark(Mark::Code),
        ];
        for tag in tags {
            assert!(
                ElementTag::CLASS_KEYS.contains(&tag.class_key()),
                "missing class key for {tag:?}"
            );
        }
    }

    #[test]
    fn test_heading_class_key_clamped() {
        assert_eq!(ElementTag::Heading(3).class_key(), "heading-3");
        assert_eq!(ElementTag::Heading(0).class_key(), "heading-1");
        assert_eq!(ElementTag::Heading(9).class_key(), "heading-6");
    }
}
