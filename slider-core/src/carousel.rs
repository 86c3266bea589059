//! PagedCarousel: page index, direction, and transition guard for one slider

use std::time::Instant;

use slider_model::{CarouselItem, Direction};

use crate::config::CarouselConfig;
use crate::guard::{GuardState, PageTurn, TransitionGuard};
use crate::selection::resolve_selection;
use crate::window::{PageIndicator, max_page_index, visible_slice};

/// Paging state owned by one slider instance.
///
/// The item list is not stored: callers pass the current list (or `None`
/// while it is loading) on every call, so a list replaced between renders is
/// picked up without any explicit sync. A stored page index beyond the new
/// list's last page is clamped when read.
#[derive(Debug, Clone)]
pub struct PagedCarousel {
    page_index: usize,
    direction: Direction,
    page_size: usize,
    guard: TransitionGuard,
}

/// Everything a renderer needs for one frame of a slider.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a, T> {
    /// Items on the current page.
    pub visible: &'a [T],
    /// Current and last page for the pagination dots.
    pub indicator: PageIndicator,
    /// Direction of the last accepted turn, for the slide animation.
    pub direction: Direction,
    /// Whether a turn is in flight.
    pub state: GuardState,
    /// Item to show in the detail overlay.
    pub selection: Option<&'a T>,
}

impl Default for PagedCarousel {
    fn default() -> Self {
        Self::new(&CarouselConfig::default())
    }
}

impl PagedCarousel {
    /// Fresh carousel on page 0, facing forward, unlocked.
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            page_index: 0,
            direction: Direction::Forward,
            page_size: config.page_size,
            guard: TransitionGuard::with_settle_timeout(
                config.settle_timeout(),
            ),
        }
    }

    /// Carousel with the default config and a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self::new(&CarouselConfig {
            page_size,
            ..CarouselConfig::default()
        })
    }

    /// Stored page index. May exceed the last page if the list shrank; see
    /// [`current_page`](Self::current_page).
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Direction of the last accepted turn.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a turn is in flight.
    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    /// Shorthand for `guard_state() == GuardState::Transitioning`.
    pub fn is_locked(&self) -> bool {
        self.guard.is_locked()
    }

    /// Last page index for the given list.
    pub fn max_index<T>(&self, items: Option<&[T]>) -> usize {
        max_page_index(items.map_or(0, <[T]>::len), self.page_size)
    }

    /// Page index clamped to the given list.
    pub fn current_page<T>(&self, items: Option<&[T]>) -> usize {
        self.page_index.min(self.max_index(items))
    }

    /// Items on the current page.
    pub fn visible_slice<'a, T>(&self, items: Option<&'a [T]>) -> &'a [T] {
        visible_slice(items, self.current_page(items), self.page_size)
    }

    /// Current and last page for a pagination indicator.
    pub fn indicator<T>(&self, items: Option<&[T]>) -> PageIndicator {
        PageIndicator::for_len(
            items.map_or(0, <[T]>::len),
            self.page_index,
            self.page_size,
        )
    }

    /// Start a page turn, returning the accepted turn.
    ///
    /// Dropped (returns `None`, nothing changes) while a previous turn is in
    /// flight, while the list has not loaded, or while it is empty: an empty
    /// page plays no exit animation, so nothing would ever settle the lock.
    /// The renderer must call
    /// [`on_transition_settled`](Self::on_transition_settled) for every
    /// accepted turn, even one that wraps a single page onto itself.
    pub fn begin_transition<T>(
        &mut self,
        direction: Direction,
        items: Option<&[T]>,
    ) -> Option<PageTurn> {
        let Some(items) = items else {
            tracing::trace!(?direction, "page turn dropped, list not loaded");
            return None;
        };
        if items.is_empty() {
            tracing::trace!(?direction, "page turn dropped, list is empty");
            return None;
        }
        let max = max_page_index(items.len(), self.page_size);
        let turn = self.guard.request(direction, self.page_index, max)?;
        self.direction = direction;
        self.page_index = turn.to;
        tracing::debug!(
            from = turn.from,
            to = turn.to,
            max,
            ?direction,
            "page turn accepted"
        );
        Some(turn)
    }

    /// Request a page turn. `true` if accepted.
    pub fn request_transition<T>(
        &mut self,
        direction: Direction,
        items: Option<&[T]>,
    ) -> bool {
        self.begin_transition(direction, items).is_some()
    }

    /// Exit animation of the outgoing page finished; accept the next turn.
    pub fn on_transition_settled(&mut self) {
        self.guard.settle();
    }

    /// Force-settle a turn whose settle signal is overdue. No-op unless the
    /// carousel was built with a settle timeout.
    pub fn expire_stale(&mut self, now: Instant) -> bool {
        self.guard.expire_stale(now)
    }

    /// Item matching `navigation_id`; see
    /// [`resolve_selection`](crate::selection::resolve_selection).
    pub fn resolve_selection<'a, T: CarouselItem>(
        &self,
        items: Option<&'a [T]>,
        navigation_id: Option<&str>,
    ) -> Option<&'a T> {
        resolve_selection(items, navigation_id)
    }

    /// Derive the per-render view from the current list and navigation id.
    pub fn view<'a, T: CarouselItem>(
        &self,
        items: Option<&'a [T]>,
        navigation_id: Option<&str>,
    ) -> CarouselView<'a, T> {
        CarouselView {
            visible: self.visible_slice(items),
            indicator: self.indicator(items),
            direction: self.direction,
            state: self.guard.state(),
            selection: resolve_selection(items, navigation_id),
        }
    }
}
