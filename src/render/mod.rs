//! Preview rendering of documents as Markdown, plain text, or JSON.

mod json;
mod markdown;
mod options;
mod stats;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use stats::DocumentStats;
pub use text::{outline, to_text};
