//! Detail route matching.
//!
//! A slider opens its detail overlay when the current path matches
//! `/:section/:category/:id`. The id segment is the navigation id fed to
//! [`resolve_selection`](crate::selection::resolve_selection). The section
//! segment is not checked against the slider's own section: a list that does
//! not contain the id simply resolves to no selection.

use std::borrow::Cow;

use slider_model::Section;

/// Decoded segments of a matched detail path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailMatch<'a> {
    /// First segment, e.g. `movie`.
    pub section: Cow<'a, str>,
    /// Second segment, e.g. `popular`.
    pub category: Cow<'a, str>,
    /// Item id, the navigation id for selection.
    pub id: Cow<'a, str>,
}

/// Detail route for one section, e.g. `/:section/:category/:movieId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRoute {
    section: Section,
}

impl DetailRoute {
    /// Detail route for sliders of `section`.
    pub fn new(section: Section) -> Self {
        Self { section }
    }

    /// Section whose id parameter name the pattern uses.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Route pattern as registered with the router.
    pub fn pattern(&self) -> String {
        format!("/:section/:category/:{}", self.section.id_param())
    }

    /// Match a pathname. Query strings and fragments are ignored, a single
    /// trailing slash is allowed, and every segment must be non-empty.
    pub fn match_path<'a>(&self, path: &'a str) -> Option<DetailMatch<'a>> {
        let path = path
            .split_once(['?', '#'])
            .map_or(path, |(pathname, _)| pathname);
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = rest.split('/');
        let (Some(section), Some(category), Some(id), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return None;
        };
        if section.is_empty() || category.is_empty() || id.is_empty() {
            return None;
        }

        Some(DetailMatch {
            section: decode_segment(section),
            category: decode_segment(category),
            id: decode_segment(id),
        })
    }

    /// Navigation id for `path`, if it is a detail path.
    pub fn navigation_id<'a>(&self, path: &'a str) -> Option<Cow<'a, str>> {
        self.match_path(path).map(|m| m.id)
    }
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(
                segment,
                error = %err,
                "route segment is not valid utf-8 once decoded, using raw value"
            );
            Cow::Borrowed(segment)
        }
    }
}
