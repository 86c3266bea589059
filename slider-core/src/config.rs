//! Static configuration for a slider instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{paging, transition};
use crate::error::{CoreError, Result};

/// Paging and transition settings shared by every slider in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Number of items in one page.
    pub page_size: usize,
    /// Length of the slide animation the renderer plays (ms). The core does
    /// not time the animation; this is carried for the renderer and used to
    /// validate the settle timeout.
    pub transition_duration_ms: u64,
    /// Force-settle a transition that has been locked for this long (ms).
    /// `None` keeps the guard locked until the renderer reports settlement.
    pub settle_timeout_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            page_size: paging::PAGE_SIZE,
            transition_duration_ms: transition::DURATION_MS,
            settle_timeout_ms: None,
        }
    }
}

impl CarouselConfig {
    /// Check value ranges. A timeout shorter than the animation would unlock
    /// the guard while the outgoing page is still on screen.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CoreError::InvalidConfig(
                "page_size must be at least 1".into(),
            ));
        }
        match self.settle_timeout_ms {
            Some(0) => Err(CoreError::InvalidConfig(
                "settle_timeout_ms must be greater than zero".into(),
            )),
            Some(ms) if ms < self.transition_duration_ms => {
                Err(CoreError::InvalidConfig(format!(
                    "settle_timeout_ms ({ms}) is shorter than \
                     transition_duration_ms ({})",
                    self.transition_duration_ms
                )))
            }
            _ => Ok(()),
        }
    }

    /// Slide animation length.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Forced-unlock timeout, `None` when disabled.
    pub fn settle_timeout(&self) -> Option<Duration> {
        self.settle_timeout_ms.map(Duration::from_millis)
    }
}
