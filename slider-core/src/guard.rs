//! Transition guard: at most one page turn in flight.
//!
//! The guard locks when a turn is accepted and unlocks only when the renderer
//! reports that the outgoing page's exit animation has settled. Requests that
//! arrive while locked are dropped, not queued: the first turn wins until it
//! settles.
//!
//! Without a settle timeout a dropped settle signal leaves the guard locked
//! for the rest of the carousel's life.
//! [`TransitionGuard::with_settle_timeout`] opts into a forced unlock checked
//! by [`TransitionGuard::expire_stale`].

use std::time::{Duration, Instant};

use slider_model::Direction;

/// Observable state of a [`TransitionGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// No transition in flight; the next request is accepted.
    #[default]
    Idle,
    /// A turn was accepted and its exit animation has not settled.
    Transitioning,
}

/// An accepted page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTurn {
    /// Page shown when the turn was requested.
    pub from: usize,
    /// Page shown once the turn settles.
    pub to: usize,
    /// Requested direction.
    pub direction: Direction,
}

impl PageTurn {
    /// False when the list has a single page and the turn wraps onto itself.
    pub fn changes_page(&self) -> bool {
        self.from != self.to
    }
}

/// Page after `current` in `direction`, wrapping at both ends.
pub fn next_page(current: usize, max: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => {
            if current >= max {
                0
            } else {
                current + 1
            }
        }
        Direction::Backward => {
            if current == 0 {
                max
            } else {
                current - 1
            }
        }
    }
}

/// Two-state lock serializing page turns.
#[derive(Debug, Clone, Default)]
pub struct TransitionGuard {
    /// Set while locked.
    locked_since: Option<Instant>,
    settle_timeout: Option<Duration>,
}

impl TransitionGuard {
    /// Unlocked guard without a settle timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard that force-settles after `timeout` when given one.
    pub fn with_settle_timeout(timeout: Option<Duration>) -> Self {
        Self {
            locked_since: None,
            settle_timeout: timeout,
        }
    }

    /// True between an accepted turn and its settle.
    pub fn is_locked(&self) -> bool {
        self.locked_since.is_some()
    }

    /// Current state of the lock.
    pub fn state(&self) -> GuardState {
        if self.is_locked() {
            GuardState::Transitioning
        } else {
            GuardState::Idle
        }
    }

    /// Configured forced-unlock timeout, if any.
    pub fn settle_timeout(&self) -> Option<Duration> {
        self.settle_timeout
    }

    /// Try to start a turn from `current` on a list whose last page is `max`.
    ///
    /// Returns `None` without touching any state when a turn is already in
    /// flight.
    pub fn request(
        &mut self,
        direction: Direction,
        current: usize,
        max: usize,
    ) -> Option<PageTurn> {
        if self.is_locked() {
            tracing::trace!(
                ?direction,
                "page turn dropped, transition in flight"
            );
            return None;
        }
        self.locked_since = Some(Instant::now());
        let from = current.min(max);
        Some(PageTurn {
            from,
            to: next_page(from, max, direction),
            direction,
        })
    }

    /// Unlock after the exit animation completed. Returns whether the guard
    /// was locked.
    pub fn settle(&mut self) -> bool {
        let was_locked = self.locked_since.take().is_some();
        if !was_locked {
            tracing::trace!("settle signal while idle ignored");
        }
        was_locked
    }

    /// Force-settle when locked for longer than the settle timeout as of
    /// `now`. Always `false` when no timeout is configured.
    pub fn expire_stale(&mut self, now: Instant) -> bool {
        let (Some(timeout), Some(since)) =
            (self.settle_timeout, self.locked_since)
        else {
            return false;
        };
        let locked_for = now.saturating_duration_since(since);
        if locked_for < timeout {
            return false;
        }
        tracing::warn!(
            ?locked_for,
            ?timeout,
            "settle signal never arrived, forcing transition guard open"
        );
        self.locked_since = None;
        true
    }
}
