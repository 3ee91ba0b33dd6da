//! Cursor pagination over list endpoints.

use std::future::Future;

use crate::error::AppError;
use crate::models::Page;

/// Fetch pages in cursor order and concatenate their items.
///
/// `fetch` receives `None` for the first page and the previous page's
/// `next_cursor` afterwards. Pages are requested strictly one after another;
/// the walk ends when a page carries no `next_cursor`.
///
/// Any failed page aborts the whole walk. So does a `next_cursor` that is
/// still present after `max_pages` pages, which guards against a service
/// that never stops handing out cursors.
pub async fn collect_pages<T, F, Fut>(max_pages: u32, mut fetch: F) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, AppError>>,
{
    let mut items = Vec::new();
    let mut cursor = None;
    let mut pages: u32 = 0;

    loop {
        let page = fetch(cursor.take()).await?;
        pages += 1;
        items.extend(page.items);

        match page.next_cursor {
            None => break,
            Some(_) if pages >= max_pages => {
                tracing::warn!(pages, max_pages, "Pagination limit reached");
                return Err(AppError::PaginationLimitExceeded { max_pages });
            }
            Some(next) => cursor = Some(next),
        }
    }

    tracing::debug!(pages, count = items.len(), "Collected all pages");
    Ok(items)
}
