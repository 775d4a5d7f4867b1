// ABOUTME: Fixed-size pagination for question listings
// ABOUTME: Slices a full ordered result set by 1-based page number

use serde::Deserialize;
use trivia_core::QUESTIONS_PER_PAGE;

/// Minimum page number (1-indexed)
pub const MIN_PAGE: usize = 1;

/// `?page=` query parameter.
///
/// Kept as a raw string so a non-numeric value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// The requested page, defaulting to 1 and never below 1
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|page| usize::try_from(page).unwrap_or(MIN_PAGE))
            .unwrap_or(MIN_PAGE)
            .max(MIN_PAGE)
    }
}

/// Return `items[(page-1)*10 .. page*10]`; pages past the end are empty
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page
        .max(MIN_PAGE)
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
