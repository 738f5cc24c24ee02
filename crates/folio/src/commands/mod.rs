//! CLI command implementations.

pub(crate) mod classify;
mod input;
pub(crate) mod render;
pub(crate) mod text;

pub(crate) use classify::ClassifyArgs;
pub(crate) use render::RenderArgs;
pub(crate) use text::TextArgs;
