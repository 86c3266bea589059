//! Slider constants
//!
//! Defaults for paging and transition behaviour. Runtime overrides go through
//! [`CarouselConfig`](crate::config::CarouselConfig).

/// Paging defaults.
pub mod paging {
    /// Items per page (one row of poster cards).
    pub const PAGE_SIZE: usize = 5;
}

/// Transition defaults.
pub mod transition {
    /// Duration of the linear slide between two pages (ms).
    pub const DURATION_MS: u64 = 800;
}
