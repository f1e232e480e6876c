//! Exhaustive walk over a paginated listing.

use std::future::Future;

use crate::ports::{ApiError, Page, PageRequest};

/// Fetches every page sequentially, starting at `first`, and concatenates
/// the content.
///
/// Stops at the last page reported by the backend or at the first empty page.
pub async fn collect_all_pages<T, F, Fut>(first: PageRequest, mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let mut items = Vec::new();
    let mut request = first;

    loop {
        let page = fetch(request.clone()).await?;
        let done = !page.has_next() || page.content.is_empty();
        items.extend(page.content);
        if done {
            break;
        }
        request = request.next();
    }

    tracing::debug!(count = items.len(), "Collected all pages");
    Ok(items)
}
