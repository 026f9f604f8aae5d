//! Traversal parameters for the list-producing operations.
//!
//! Search and by-author traversals walk server pages and run every candidate
//! work through a small per-item pipeline: an optional filter predicate, an
//! optional observer callback, and an optional result limit. [`ParserParam`]
//! bundles the three and is built fluently:
//!
//! ```rust
//! use pixiv_parser::ParserParam;
//!
//! let param = ParserParam::new()
//!     .limit(30)
//!     .filter(|work| work.is_manga)
//!     .on_found(|work| println!("found #{}", work.id));
//! ```

use crate::types::Work;

/// Predicate deciding whether a work enters the result set.
pub type WorkFilter = Box<dyn Fn(&Work) -> bool + Send + Sync>;

/// Observer invoked for every accepted work, before it is appended.
pub type WorkCallback = Box<dyn Fn(&Work) + Send + Sync>;

/// Configuration bundle for a list operation.
///
/// The default value is a pass-through: no filter, no callback, unlimited
/// results.
#[derive(Default)]
pub struct ParserParam {
    limit: Option<usize>,
    filter: Option<WorkFilter>,
    callback: Option<WorkCallback>,
}

impl ParserParam {
    /// Creates a pass-through parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the traversal once `limit` works have been accepted. Reaching
    /// the limit short-circuits before any further page request is issued.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only keeps works the predicate accepts. Rejected works are skipped
    /// entirely: not appended, not reported to the callback, not counted
    /// against the limit.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Work) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Registers an observer invoked once per accepted work, before the
    /// work is appended to the result.
    pub fn on_found<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Work) + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub(crate) fn accepts(&self, work: &Work) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(work))
    }

    pub(crate) fn notify(&self, work: &Work) {
        if let Some(callback) = &self.callback {
            callback(work);
        }
    }

    pub(crate) fn limit_reached(&self, collected: usize) -> bool {
        self.limit.is_some_and(|limit| collected >= limit)
    }
}
