//! Offset/limit windows over an ordered result set.

use serde::{Deserialize, Serialize};

/// Window requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Window for the zero-based `page` of `size` rows, `None` when the
    /// offset overflows.
    pub fn of(page: usize, size: usize) -> Option<Self> {
        page.checked_mul(size).map(|offset| Self::new(offset, size))
    }
}

/// How the total of a [`Page`] is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Always run the count query.
    Always,
    /// Skip the count query when the first page is not full.
    SkipWhenComplete,
}

/// Bounded slice of a result set with the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub total: u64,
}

impl<T> Page<T> {
    /// Builds a page from already fetched `content`.
    ///
    /// `count` is invoked at most once. With [`CountMode::SkipWhenComplete`] it
    /// is not invoked at all when the window starts at zero and came back
    /// short: no rows precede or follow it, so its length is the total.
    pub fn assemble<E, F>(
        content: Vec<T>,
        request: PageRequest,
        mode: CountMode,
        count: F,
    ) -> Result<Self, E>
    where
        F: FnOnce() -> Result<u64, E>,
    {
        let complete = request.offset == 0 && content.len() < request.limit;
        let total = if mode == CountMode::SkipWhenComplete && complete {
            log::debug!("skipping count query, first page holds {} rows", content.len());
            content.len() as u64
        } else {
            count()?
        };

        Ok(Self {
            content,
            offset: request.offset,
            limit: request.limit,
            total,
        })
    }
}
