//! Registry for managing slider states keyed by ListKey

use std::collections::HashMap;

use slider_model::ListKey;

use crate::carousel::PagedCarousel;
use crate::config::CarouselConfig;

/// One [`PagedCarousel`] per slider on screen.
///
/// Removing a key tears the slider down; the next
/// [`ensure`](Self::ensure) starts it over on page 0.
#[derive(Debug, Default)]
pub struct CarouselRegistry {
    config: CarouselConfig,
    states: HashMap<ListKey, PagedCarousel>,
}

impl CarouselRegistry {
    /// Empty registry creating sliders from `config`.
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            states: HashMap::new(),
        }
    }

    /// Config new sliders are created with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Get the slider for `key`, creating it from the registry config when
    /// absent.
    pub fn ensure(&mut self, key: ListKey) -> &mut PagedCarousel {
        let config = self.config;
        self.states
            .entry(key)
            .or_insert_with(|| PagedCarousel::new(&config))
    }

    /// Slider for `key`, if it exists.
    pub fn get(&self, key: &ListKey) -> Option<&PagedCarousel> {
        self.states.get(key)
    }

    /// Mutable slider for `key`, if it exists.
    pub fn get_mut(&mut self, key: &ListKey) -> Option<&mut PagedCarousel> {
        self.states.get_mut(key)
    }

    /// Tear down the slider for `key`.
    pub fn remove(&mut self, key: &ListKey) -> Option<PagedCarousel> {
        self.states.remove(key)
    }

    /// Tear down every slider, e.g. when leaving a browse section.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Number of live sliders.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no slider is live.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<ListKey> {
        self.states.keys().copied().collect()
    }
}
