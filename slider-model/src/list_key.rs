//! Strongly typed `(section, category)` keys for the item lists a slider
//! pages through.
//!
//! Routes and callsites speak in raw path segments (`"movie"`,
//! `"now_playing"`); everything past the parsing boundary uses [`ListKey`] so a
//! typo can't silently select the wrong list.

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListKeyError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("unknown {section} category `{category}`")]
    UnknownCategory { section: Section, category: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Section {
    Movie,
    Tv,
}

impl Section {
    pub const ALL: [Self; 2] = [Self::Movie, Self::Tv];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Movie => "movie",
            Section::Tv => "tv",
        }
    }

    /// Name of the id parameter in this section's detail route.
    pub fn id_param(self) -> &'static str {
        match self {
            Section::Movie => "movieId",
            Section::Tv => "tvId",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ListKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Section::Movie),
            "tv" => Ok(Section::Tv),
            other => Err(ListKeyError::UnknownSection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovieCategory {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
    Trending,
    #[cfg_attr(feature = "serde", serde(rename = "trending_2"))]
    Trending2,
}

impl MovieCategory {
    pub const ALL: [Self; 6] = [
        Self::NowPlaying,
        Self::Popular,
        Self::TopRated,
        Self::Upcoming,
        Self::Trending,
        Self::Trending2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MovieCategory::NowPlaying => "now_playing",
            MovieCategory::Popular => "popular",
            MovieCategory::TopRated => "top_rated",
            MovieCategory::Upcoming => "upcoming",
            MovieCategory::Trending => "trending",
            MovieCategory::Trending2 => "trending_2",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TvCategory {
    AiringToday,
    OnTheAir,
    Popular,
    TopRated,
    Trending,
    #[cfg_attr(feature = "serde", serde(rename = "trending_2"))]
    Trending2,
}

impl TvCategory {
    pub const ALL: [Self; 6] = [
        Self::AiringToday,
        Self::OnTheAir,
        Self::Popular,
        Self::TopRated,
        Self::Trending,
        Self::Trending2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TvCategory::AiringToday => "airing_today",
            TvCategory::OnTheAir => "on_the_air",
            TvCategory::Popular => "popular",
            TvCategory::TopRated => "top_rated",
            TvCategory::Trending => "trending",
            TvCategory::Trending2 => "trending_2",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Identifies one item list, e.g. `movie/now_playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "section", content = "category", rename_all = "snake_case")
)]
pub enum ListKey {
    Movie(MovieCategory),
    Tv(TvCategory),
}

impl ListKey {
    /// Parse raw route segments into a key.
    pub fn parse(section: &str, category: &str) -> Result<Self, ListKeyError> {
        let section = section.parse::<Section>()?;
        let key = match section {
            Section::Movie => {
                MovieCategory::parse(category).map(ListKey::Movie)
            }
            Section::Tv => TvCategory::parse(category).map(ListKey::Tv),
        };
        key.ok_or_else(|| ListKeyError::UnknownCategory {
            section,
            category: category.to_string(),
        })
    }

    pub fn section(self) -> Section {
        match self {
            ListKey::Movie(_) => Section::Movie,
            ListKey::Tv(_) => Section::Tv,
        }
    }

    pub fn category_str(self) -> &'static str {
        match self {
            ListKey::Movie(c) => c.as_str(),
            ListKey::Tv(c) => c.as_str(),
        }
    }

    /// Every list a browsing UI can show.
    pub fn all() -> impl Iterator<Item = ListKey> {
        MovieCategory::ALL
            .into_iter()
            .map(ListKey::Movie)
            .chain(TvCategory::ALL.into_iter().map(ListKey::Tv))
    }
}

impl Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section(), self.category_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_known_combination() {
        for key in ListKey::all() {
            let parsed =
                ListKey::parse(key.section().as_str(), key.category_str());
            assert_eq!(parsed, Ok(key));
        }
        assert_eq!(ListKey::all().count(), 12);
    }

    #[test]
    fn categories_are_scoped_to_their_section() {
        assert_eq!(
            ListKey::parse("tv", "now_playing"),
            Err(ListKeyError::UnknownCategory {
                section: Section::Tv,
                category: "now_playing".into(),
            })
        );
        assert_eq!(
            ListKey::parse("movie", "popular"),
            Ok(ListKey::Movie(MovieCategory::Popular))
        );
        assert_eq!(
            ListKey::parse("tv", "popular"),
            Ok(ListKey::Tv(TvCategory::Popular))
        );
    }

    #[test]
    fn unknown_section_is_reported() {
        assert_eq!(
            ListKey::parse("music", "popular"),
            Err(ListKeyError::UnknownSection("music".into()))
        );
    }

    #[test]
    fn display_uses_route_segments() {
        assert_eq!(
            ListKey::Tv(TvCategory::Trending2).to_string(),
            "tv/trending_2"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_route_spelling() {
        let json =
            serde_json::to_string(&ListKey::Movie(MovieCategory::Trending2))
                .unwrap();
        assert_eq!(json, r#"{"section":"movie","category":"trending_2"}"#);
    }
}
