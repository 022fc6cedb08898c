//! Browsing-session state for the movie catalog
//!
//! Owns the movie list plus the current filter, sort and page. Every
//! user action goes through one of the transition methods here; the
//! UI then re-derives its page through [`derive_page`](CatalogState::derive_page).

use crate::library;
use crate::models::{ActiveFilter, Genre, Movie, PageSpec, SortKey, SortSpec};
use crate::view::{self, PageView};

/// Movies shown per catalog page.
pub const PAGE_SIZE: usize = 4;

pub struct CatalogState {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    filter: ActiveFilter,
    sort: SortSpec,
    current_page: usize,
}

impl CatalogState {
    /// Fresh session over the full library. The genre list gets the
    /// "All Genres" entry prepended so the sidebar can render it like
    /// any other row.
    pub fn load() -> Self {
        let mut genres = vec![Genre::all_genres()];
        genres.extend(library::get_genres());
        Self {
            movies: library::get_movies(),
            genres,
            filter: ActiveFilter::All,
            sort: SortSpec::default(),
            current_page: 1,
        }
    }

    /// Throw away likes, deletions and view settings and start over.
    pub fn reload(&mut self) {
        *self = Self::load();
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn filter(&self) -> &ActiveFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search_query(&self) -> &str {
        self.filter.query()
    }

    pub fn page_spec(&self) -> PageSpec {
        PageSpec {
            page_size: PAGE_SIZE,
            current_page: self.current_page,
        }
    }

    /// Run the current view through filter, sort and paginate.
    pub fn derive_page(&self) -> PageView {
        view::derive(
            &self.movies,
            self.filter.genre(),
            self.filter.query(),
            self.sort,
            self.page_spec(),
        )
    }

    /// Picking a genre replaces any search and jumps back to page 1.
    /// The "All Genres" sentinel clears the filter entirely.
    pub fn select_genre(&mut self, genre: &Genre) {
        self.filter = if genre.is_sentinel() {
            ActiveFilter::All
        } else {
            ActiveFilter::Genre(genre.clone())
        };
        self.current_page = 1;
    }

    /// Typing in the search box replaces any genre selection and jumps
    /// back to page 1. An emptied-out query stays a search filter; it
    /// just matches everything.
    pub fn search(&mut self, query: String) {
        self.filter = ActiveFilter::Search(query);
        self.current_page = 1;
    }

    /// Replace the sort spec outright. The page is left alone.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Clicking a column header: same column flips direction, a new
    /// column starts ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        self.set_sort(self.sort.toggled(key));
    }

    /// The page number is taken as-is. A page past the end of the
    /// current match set renders empty; it is up to the user to click
    /// back to a populated one.
    pub fn change_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Flip the liked flag on one movie. Returns the new flag, or
    /// `None` when no movie has that id.
    pub fn toggle_liked(&mut self, id: &str) -> Option<bool> {
        let movie = self.movies.iter_mut().find(|m| m.id == id)?;
        movie.liked = !movie.liked;
        Some(movie.liked)
    }

    /// Remove one movie from the session. Filter, sort and page are
    /// untouched. Returns false when no movie has that id.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.movies.iter().position(|m| m.id == id) {
            Some(index) => {
                self.movies.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
