//! Core data model definitions shared across slider crates.
#![allow(missing_docs)]

pub mod direction;
pub mod item;
pub mod list_key;
pub mod media;

pub use direction::{Direction, Edge};
pub use item::{CarouselItem, ItemKey, KEY_BUFFER_LEN};
pub use list_key::{ListKey, ListKeyError, MovieCategory, Section, TvCategory};
pub use media::MediaSummary;
