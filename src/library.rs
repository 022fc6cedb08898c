//! In-memory movie library
//!
//! Stands in for a rental-shop backend: the same fixed records on every
//! call. The UI keeps its own working copy, so likes and deletes never
//! reach back here - restarting (or reloading) always starts from this
//! set again.

use crate::models::{Genre, Movie};

const ACTION: (&str, &str) = ("1", "Action");
const COMEDY: (&str, &str) = ("2", "Comedy");
const THRILLER: (&str, &str) = ("3", "Thriller");

fn genre((id, name): (&str, &str)) -> Genre {
    Genre {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn movie(id: &str, title: &str, g: (&str, &str), stock: u32, rate: f64) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        genre: genre(g),
        number_in_stock: stock,
        daily_rental_rate: rate,
        liked: false,
    }
}

/// All known genres, in catalog order. The "All Genres" sentinel is not
/// part of the library - the UI prepends it.
pub fn get_genres() -> Vec<Genre> {
    vec![genre(ACTION), genre(COMEDY), genre(THRILLER)]
}

/// The full movie catalog, in catalog order.
pub fn get_movies() -> Vec<Movie> {
    vec![
        movie("1", "Terminator", ACTION, 6, 2.5),
        movie("2", "Die Hard", ACTION, 5, 2.5),
        movie("3", "Get Out", THRILLER, 8, 3.5),
        movie("4", "Trip to Italy", COMEDY, 7, 3.5),
        movie("5", "Airplane", COMEDY, 7, 3.5),
        movie("6", "Wedding Party", COMEDY, 6, 2.8),
        movie("7", "Gone Girl", THRILLER, 7, 4.5),
        movie("8", "The Sixth Sense", THRILLER, 4, 3.5),
        movie("9", "The Avengers", ACTION, 7, 3.5),
    ]
}
