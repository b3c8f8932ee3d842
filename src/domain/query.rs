use std::fmt;

/// The six orderings offered over the filtered catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingAsc,
        SortOption::RatingDesc,
    ];

    /// Parses a sort key. Never fails: unrecognised keys fall back to
    /// [`SortOption::NameAsc`].
    ///
    /// Both the canonical keys (`price-desc`) and the storefront's selector
    /// values (`£HtoL`) are accepted.
    pub fn parse(key: &str) -> Self {
        match key {
            "name-asc" | "AtoZ" => SortOption::NameAsc,
            "name-desc" | "ZtoA" => SortOption::NameDesc,
            "price-asc" | "£LtoH" => SortOption::PriceAsc,
            "price-desc" | "£HtoL" => SortOption::PriceDesc,
            "rating-asc" | "*LtoH" => SortOption::RatingAsc,
            "rating-desc" | "*HtoL" => SortOption::RatingDesc,
            _ => SortOption::NameAsc,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::RatingAsc => "rating-asc",
            SortOption::RatingDesc => "rating-desc",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "By name (A - Z)",
            SortOption::NameDesc => "By name (Z - A)",
            SortOption::PriceAsc => "By price (low - high)",
            SortOption::PriceDesc => "By price (high - low)",
            SortOption::RatingAsc => "By rating (low - high)",
            SortOption::RatingDesc => "By rating (high - low)",
        }
    }
}

impl From<&str> for SortOption {
    fn from(key: &str) -> Self {
        SortOption::parse(key)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The three inputs the view layer feeds into the query engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub search_term: String,
    pub sort_option: SortOption,
    pub in_stock_only: bool,
}

impl QueryParams {
    pub fn new(search_term: impl Into<String>, sort_option: SortOption, in_stock_only: bool) -> Self {
        Self {
            search_term: search_term.into(),
            sort_option,
            in_stock_only,
        }
    }
}
