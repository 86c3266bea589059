//! Paging core for horizontally paged media sliders.
//!
//! A slider shows a fixed-size window over an item list, turns pages with
//! wraparound, and refuses a new turn until the renderer reports that the
//! previous exit animation has settled. The selected item is derived from the
//! detail route on every render and never stored.
//!
//! The crate is render-agnostic: item lists, the current route, and the
//! animation-complete signal are all passed in explicitly.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod guard;
pub mod registry;
pub mod route;
pub mod selection;
pub mod window;

pub use carousel::{CarouselView, PagedCarousel};
pub use catalog::{InMemoryCatalog, ListCatalog, lookup_raw};
pub use config::CarouselConfig;
pub use error::{CoreError, Result};
pub use guard::{GuardState, PageTurn, TransitionGuard, next_page};
pub use registry::CarouselRegistry;
pub use route::{DetailMatch, DetailRoute};
pub use selection::resolve_selection;
pub use window::{PageIndicator, max_page_index, page_range, visible_slice};

pub use slider_model::{CarouselItem, Direction, ItemKey, ListKey};
