//! Tests for the catalog browsing-session state

#[cfg(test)]
mod tests {
    use crate::models::{ActiveFilter, SortDir, SortKey, SortSpec};
    use crate::state::*;

    fn ids(state: &CatalogState) -> Vec<String> {
        state.movies().iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_load_starts_with_the_full_catalog() {
        let state = CatalogState::load();
        assert_eq!(state.movies().len(), 9);
        assert_eq!(state.genres().len(), 4);
        assert!(state.genres()[0].is_sentinel());
        assert_eq!(state.genres()[0].name, "All Genres");
        assert_eq!(state.filter(), &ActiveFilter::All);
        assert_eq!(state.sort().key, SortKey::Title);
        assert_eq!(state.sort().dir, SortDir::Asc);
        assert_eq!(state.current_page(), 1);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_select_genre_resets_the_page() {
        let mut state = CatalogState::load();
        state.change_page(3);
        let comedy = state.genres()[2].clone();
        state.select_genre(&comedy);
        assert_eq!(state.filter(), &ActiveFilter::Genre(comedy));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_select_sentinel_clears_the_filter() {
        let mut state = CatalogState::load();
        let comedy = state.genres()[2].clone();
        state.select_genre(&comedy);
        let sentinel = state.genres()[0].clone();
        state.select_genre(&sentinel);
        assert_eq!(state.filter(), &ActiveFilter::All);
    }

    #[test]
    fn test_search_replaces_any_genre_selection() {
        let mut state = CatalogState::load();
        let comedy = state.genres()[2].clone();
        state.select_genre(&comedy);
        state.change_page(2);

        state.search("die".to_string());
        assert_eq!(state.filter(), &ActiveFilter::Search("die".to_string()));
        assert_eq!(state.search_query(), "die");
        assert_eq!(state.current_page(), 1);

        // Erasing the text keeps the search filter, now matching everything
        state.search(String::new());
        assert_eq!(state.filter(), &ActiveFilter::Search(String::new()));
        assert_eq!(state.derive_page().total_matches, 9);
    }

    #[test]
    fn test_select_genre_replaces_any_search() {
        let mut state = CatalogState::load();
        state.search("ter".to_string());
        let action = state.genres()[1].clone();
        state.select_genre(&action);
        assert_eq!(state.search_query(), "");
        assert_eq!(state.filter(), &ActiveFilter::Genre(action));
        assert_eq!(state.derive_page().total_matches, 3);
    }

    #[test]
    fn test_sort_keeps_the_current_page() {
        let mut state = CatalogState::load();
        state.change_page(2);
        state.sort_by(SortKey::Stock);
        assert_eq!(state.sort().key, SortKey::Stock);
        assert_eq!(state.sort().dir, SortDir::Asc);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_set_sort_replaces_the_whole_spec() {
        let mut state = CatalogState::load();
        state.change_page(2);
        state.set_sort(SortSpec {
            key: SortKey::Rate,
            dir: SortDir::Desc,
        });
        assert_eq!(state.sort().key, SortKey::Rate);
        assert_eq!(state.sort().dir, SortDir::Desc);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_sorting_the_same_column_flips_direction() {
        let mut state = CatalogState::load();
        state.sort_by(SortKey::Rate);
        assert_eq!(state.sort().dir, SortDir::Asc);
        state.sort_by(SortKey::Rate);
        assert_eq!(state.sort().dir, SortDir::Desc);
        state.sort_by(SortKey::Rate);
        assert_eq!(state.sort().dir, SortDir::Asc);
        // Moving to another column starts ascending again
        state.sort_by(SortKey::Rate);
        state.sort_by(SortKey::Title);
        assert_eq!(state.sort().key, SortKey::Title);
        assert_eq!(state.sort().dir, SortDir::Asc);
    }

    #[test]
    fn test_change_page_takes_any_number() {
        let mut state = CatalogState::load();
        state.change_page(99);
        assert_eq!(state.current_page(), 99);
        assert!(state.derive_page().items.is_empty());
        assert_eq!(state.derive_page().total_matches, 9);
    }

    #[test]
    fn test_toggle_liked_flips_exactly_one_movie() {
        let mut state = CatalogState::load();
        let before = ids(&state);

        assert_eq!(state.toggle_liked("3"), Some(true));
        assert_eq!(
            state.movies().iter().filter(|m| m.liked).count(),
            1
        );
        assert!(state.movies().iter().find(|m| m.id == "3").unwrap().liked);
        // Order and membership are untouched
        assert_eq!(ids(&state), before);

        assert_eq!(state.toggle_liked("3"), Some(false));
        assert_eq!(state.movies().iter().filter(|m| m.liked).count(), 0);
    }

    #[test]
    fn test_toggle_liked_unknown_id_is_a_no_op() {
        let mut state = CatalogState::load();
        assert_eq!(state.toggle_liked("nope"), None);
        assert_eq!(state.movies().len(), 9);
    }

    #[test]
    fn test_toggle_liked_leaves_the_view_alone() {
        let mut state = CatalogState::load();
        let comedy = state.genres()[2].clone();
        state.select_genre(&comedy);
        state.change_page(1);
        state.sort_by(SortKey::Rate);

        state.toggle_liked("5");
        assert_eq!(state.filter(), &ActiveFilter::Genre(comedy));
        assert_eq!(state.sort().key, SortKey::Rate);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_delete_removes_exactly_one_movie() {
        let mut state = CatalogState::load();
        assert!(state.delete("2"));
        assert_eq!(state.movies().len(), 8);
        assert_eq!(
            ids(&state),
            vec!["1", "3", "4", "5", "6", "7", "8", "9"]
        );
        // Gone means gone
        assert!(!state.delete("2"));
        assert_eq!(state.movies().len(), 8);
    }

    #[test]
    fn test_delete_does_not_clamp_the_page() {
        // 9 movies: page 3 shows the last one. Deleting it leaves the
        // session sitting on an empty page 3 of a 2-page set.
        let mut state = CatalogState::load();
        state.change_page(3);
        let last_on_page = state.derive_page().items[0].clone();

        assert!(state.delete(&last_on_page.id));
        assert_eq!(state.current_page(), 3);
        let view = state.derive_page();
        assert_eq!(view.total_matches, 8);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_deleting_everything_empties_the_catalog() {
        let mut state = CatalogState::load();
        for id in (1..=9).map(|i| i.to_string()).collect::<Vec<_>>() {
            assert!(state.delete(&id));
        }
        assert!(state.is_empty());
        assert_eq!(state.derive_page().total_matches, 0);
    }

    #[test]
    fn test_reload_restores_the_pristine_catalog() {
        let mut state = CatalogState::load();
        state.delete("1");
        state.toggle_liked("4");
        state.search("gone".to_string());
        state.sort_by(SortKey::Stock);
        state.change_page(7);

        state.reload();
        assert_eq!(state.movies().len(), 9);
        assert_eq!(state.movies().iter().filter(|m| m.liked).count(), 0);
        assert_eq!(state.filter(), &ActiveFilter::All);
        assert_eq!(state.sort().key, SortKey::Title);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_derive_page_uses_the_active_filter() {
        let mut state = CatalogState::load();
        let thriller = state.genres()[3].clone();
        state.select_genre(&thriller);
        let view = state.derive_page();
        assert_eq!(view.total_matches, 3);
        assert!(view.items.iter().all(|m| m.genre.name == "Thriller"));

        // Title sort is already ascending on load
        assert_eq!(view.items[0].title, "Get Out");
        assert_eq!(view.items[1].title, "Gone Girl");
        assert_eq!(view.items[2].title, "The Sixth Sense");
    }

    #[test]
    fn test_page_size_matches_the_pagination_bar() {
        let state = CatalogState::load();
        assert_eq!(state.page_spec().page_size, PAGE_SIZE);
        assert_eq!(state.derive_page().items.len(), PAGE_SIZE);
    }
}
