use crate::domain::shared::{errors::ApiError, pagination::PageResult};
use serde::Deserialize;

/// Paginated collection body: `{ count, next, previous, results }`.
///
/// Every field is required; a body missing one fails to decode rather than
/// producing an empty page.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Envelope<T> {
    /// Checks the envelope against the page size and converts it.
    pub fn into_page(self, page_size: u32) -> Result<PageResult<T>, ApiError> {
        let total_count = u64::try_from(self.count)
            .map_err(|_| ApiError::malformed(format!("negative count {}", self.count)))?;

        if self.results.len() > page_size as usize {
            return Err(ApiError::malformed(format!(
                "{} results exceed page size {}",
                self.results.len(),
                page_size
            )));
        }
        if self.results.len() as u64 > total_count {
            return Err(ApiError::malformed(format!(
                "{} results exceed count {}",
                self.results.len(),
                total_count
            )));
        }

        Ok(PageResult {
            items: self.results,
            total_count,
            has_next: self.next.is_some(),
            has_previous: self.previous.is_some(),
            page_size,
        })
    }
}
