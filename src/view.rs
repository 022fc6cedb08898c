//! View derivation: filter, sort, paginate
//!
//! Pure functions from the working set plus view state to one renderable
//! page. The GUI calls [`derive`] every frame, so everything here is
//! stateless and depends only on its arguments.

use std::cmp::Ordering;

use crate::models::{Genre, Movie, PageSpec, SortDir, SortKey, SortSpec};

/// One derived page of results, plus how many records matched the filter
/// before pagination (drives the count line and the page-link math).
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Movie>,
    pub total_matches: usize,
}

/// Case-insensitive prefix check without allocation
pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    if prefix.len() > haystack.len() {
        return false;
    }

    haystack.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Number of page links needed for `total` matches
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Slice out one 1-based page, clipped to the available length. A page
/// past the end yields an empty slice, never an error - that is the whole
/// bounds policy; callers decide whether to move the user somewhere else.
pub fn paginate<T: Clone>(items: &[T], current_page: usize, page_size: usize) -> Vec<T> {
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Turn the working set plus view state into one renderable page.
///
/// Filter first, then a stable sort, then the page slice. A non-empty
/// search query wins over the genre filter; the state container never
/// supplies both, but the rule holds here regardless.
pub fn derive(
    movies: &[Movie],
    genre_filter: Option<&Genre>,
    search_query: &str,
    sort: SortSpec,
    page: PageSpec,
) -> PageView {
    let mut matched: Vec<Movie> = if !search_query.is_empty() {
        movies
            .iter()
            .filter(|m| starts_with_ignore_case(&m.title, search_query))
            .cloned()
            .collect()
    } else if let Some(g) = genre_filter.filter(|g| !g.id.is_empty()) {
        movies.iter().filter(|m| m.genre.id == g.id).cloned().collect()
    } else {
        movies.to_vec()
    };

    matched.sort_by(|a, b| compare(a, b, sort));

    let total_matches = matched.len();
    let items = paginate(&matched, page.current_page, page.page_size);

    PageView {
        items,
        total_matches,
    }
}

/// Comparator for one sort spec. Descending reverses the ordering result
/// rather than the sorted vector, so equal keys keep their filter-stage
/// relative order in both directions.
fn compare(a: &Movie, b: &Movie, sort: SortSpec) -> Ordering {
    let ord = match sort.key {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Genre => a.genre.name.cmp(&b.genre.name),
        SortKey::Stock => a.number_in_stock.cmp(&b.number_in_stock),
        SortKey::Rate => a.daily_rental_rate.total_cmp(&b.daily_rental_rate),
    };
    match sort.dir {
        SortDir::Asc => ord,
        SortDir::Desc => ord.reverse(),
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
