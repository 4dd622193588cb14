// Shared layout primitives: glyph metrics, wrapping, and the paginating
// cursor every template draws through. Pure computation; callers on the async
// side run renders inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod wrap;

pub use flow::{Cursor, Decoration, Flow, Frame, Region};
pub use font_metrics::{text_width_mm, Font, FontFamily, FontWeight};
pub use wrap::{bullet_lines, join_present, split_blob, wrap_text, WrappedLine};
