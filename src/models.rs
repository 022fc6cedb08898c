//! Data models for the Reel Rental catalog

/// UI tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Catalog,
    Liked,
    Console,
}

/// Genre reference data
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

impl Genre {
    /// Synthetic "All Genres" entry meaning "no filter". Its empty id is
    /// what the rest of the code checks for.
    pub fn all_genres() -> Self {
        Self {
            id: String::new(),
            name: "All Genres".to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id.is_empty()
    }
}

/// A rentable title as held in the UI working set
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,
    pub liked: bool,
}

/// Sortable columns of the results table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Genre,
    Stock,
    Rate,
}

impl SortKey {
    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Genre => "Genre",
            SortKey::Stock => "Stock",
            SortKey::Rate => "Rate",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDir::Asc => "↑",
            SortDir::Desc => "↓",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDir::Asc => "ascending",
            SortDir::Desc => "descending",
        }
    }
}

/// Active sort: one column plus a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Title,
            dir: SortDir::Asc,
        }
    }
}

impl SortSpec {
    /// Next spec for a header click: the active column flips direction,
    /// a new column starts ascending.
    pub fn toggled(&self, key: SortKey) -> Self {
        if self.key == key {
            let dir = match self.dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::Asc,
            };
            Self { key, dir }
        } else {
            Self {
                key,
                dir: SortDir::Asc,
            }
        }
    }
}

/// Page window over the filtered result set (pages are 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page_size: usize,
    pub current_page: usize,
}

/// The one active filter. Genre filter and title search are mutually
/// exclusive; whichever was set last is the one in effect.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveFilter {
    All,
    Genre(Genre),
    Search(String),
}

impl ActiveFilter {
    pub fn genre(&self) -> Option<&Genre> {
        match self {
            ActiveFilter::Genre(g) => Some(g),
            _ => None,
        }
    }

    pub fn query(&self) -> &str {
        match self {
            ActiveFilter::Search(q) => q,
            _ => "",
        }
    }
}
