use std::sync::Arc;

use futures::stream::{Stream, TryStreamExt};
use tracing::{debug, info, warn};

use crate::api::{ApiError, CompassBackend};
use crate::models::{StudentPage, StudentRecord};

/// Cursor position while walking the student listing
enum PageCursor {
    Start,
    Next(String),
    Done,
}

/// Aggregates the remote student collection over cursor pagination.
///
/// The backend only exposes cursor-paginated fetches; the dashboard wants the
/// whole roster in memory. `pages` is a lazy, finite stream of pages (one
/// outstanding request at a time, not restartable); `fetch_all` drains it.
pub struct RosterCollector {
    backend: Arc<dyn CompassBackend>,
}

impl RosterCollector {
    pub fn new(backend: Arc<dyn CompassBackend>) -> Self {
        Self { backend }
    }

    /// Lazy stream of pages, following `nextCursor` until `hasNextPage` is false
    pub fn pages(&self) -> impl Stream<Item = Result<StudentPage, ApiError>> + '_ {
        futures::stream::try_unfold(PageCursor::Start, move |state| async move {
            let cursor = match state {
                PageCursor::Start => None,
                PageCursor::Next(cursor) => Some(cursor),
                PageCursor::Done => return Ok(None),
            };

            let page = self.backend.fetch_student_page(cursor.as_deref()).await?;

            let next = if page.has_next_page {
                match page.next_cursor.clone() {
                    Some(cursor) => PageCursor::Next(cursor),
                    None => {
                        // A page claiming more data without a cursor ends the walk
                        warn!("Backend reported hasNextPage without a nextCursor; stopping");
                        PageCursor::Done
                    }
                }
            } else {
                PageCursor::Done
            };

            Ok(Some((page, next)))
        })
    }

    /// Fetch every page and concatenate records in arrival order.
    ///
    /// Any page failure aborts the walk and discards records already fetched;
    /// a partially loaded roster would silently understate counts and exports.
    pub async fn fetch_all(&self) -> Result<Vec<StudentRecord>, ApiError> {
        let mut all = Vec::new();
        let mut page_count = 0usize;

        let pages = self.pages();
        futures::pin_mut!(pages);

        while let Some(page) = pages.try_next().await? {
            page_count += 1;
            debug!("Page {}: {} students", page_count, page.items.len());
            all.extend(page.items);
        }

        info!("Fetched {} students across {} pages", all.len(), page_count);
        Ok(all)
    }
}
