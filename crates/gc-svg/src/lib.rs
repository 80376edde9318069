//! SVG card rendering.
//!
//! A card is a title plus an ordered list of [`gc_core::Row`]s drawn over a
//! themed gradient. Cards are standalone files, sized by `width`/`height`
//! attributes as well as a `viewBox`.

mod builder;
mod card;
mod element;
mod format;

pub use builder::SvgBuilder;
pub use card::{CardStyle, render_card};
pub use element::{Rect, SvgElement, Text, TextAnchor};
pub use format::xml_escape;
