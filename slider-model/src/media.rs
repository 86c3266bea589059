use crate::item::{CarouselItem, ItemKey};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary record for one movie or series as served by a listing endpoint.
///
/// Only `id` matters to the carousel; the rest is carried for the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MediaSummary {
    pub id: i64,
    /// Movie title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    /// Series name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: Option<f32>,
}

impl MediaSummary {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title for movies, name for series.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    /// Key for a rendered card. The same item can show up in several sliders
    /// on one screen, so the slider title is part of the key.
    pub fn render_key(&self, slider_title: &str) -> String {
        format!("{}-{}", self.id, slider_title)
    }
}

impl CarouselItem for MediaSummary {
    fn key(&self) -> ItemKey<'_> {
        ItemKey::Numeric(self.id)
    }
}
