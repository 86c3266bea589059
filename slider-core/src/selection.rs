//! Selection derived from the active detail route.

use slider_model::CarouselItem;

/// Item whose key matches the navigation id of the active detail route.
///
/// First match wins if the list carries duplicate ids. `None` when no detail
/// route is active, the list is not loaded, or nothing matches.
pub fn resolve_selection<'a, T: CarouselItem>(
    items: Option<&'a [T]>,
    navigation_id: Option<&str>,
) -> Option<&'a T> {
    let id = navigation_id?;
    items?.iter().find(|item| item.key().matches(id))
}
