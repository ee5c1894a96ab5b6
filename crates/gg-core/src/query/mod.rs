//! Query modes, page requests and the browsing session state machine.

mod session;

pub use session::{ApplyOutcome, FetchResult, FetchTicket, QuerySession};

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Which remote endpoint and accumulation policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Trending,
    Search,
}

impl QueryMode {
    /// Search for any non-empty text, trending otherwise.
    pub fn for_text(text: &str) -> Self {
        if text.is_empty() {
            QueryMode::Trending
        } else {
            QueryMode::Search
        }
    }

    /// Endpoint path segment on the remote API.
    pub fn endpoint(&self) -> &'static str {
        match self {
            QueryMode::Trending => "trending",
            QueryMode::Search => "search",
        }
    }
}

/// One page request: (mode, query, offset, limit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageQuery {
    pub mode: QueryMode,
    /// Empty for trending.
    pub query: String,
    pub offset: u32,
    pub limit: u32,
}

impl PageQuery {
    pub fn trending(offset: u32, limit: u32) -> Self {
        Self {
            mode: QueryMode::Trending,
            query: String::new(),
            offset,
            limit,
        }
    }

    pub fn search(query: impl Into<String>, offset: u32, limit: u32) -> Self {
        Self {
            mode: QueryMode::Search,
            query: query.into(),
            offset,
            limit,
        }
    }

    /// Limit actually sent: zero falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn effective_limit(&self) -> u32 {
        if self.limit == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.limit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_text() {
        assert_eq!(QueryMode::for_text(""), QueryMode::Trending);
        assert_eq!(QueryMode::for_text("cat"), QueryMode::Search);
        assert_eq!(QueryMode::Search.endpoint(), "search");
        assert_eq!(QueryMode::Trending.endpoint(), "trending");
    }

    #[test]
    fn zero_limit_uses_default_page_size() {
        assert_eq!(PageQuery::trending(0, 0).effective_limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageQuery::search("cat", 0, 5).effective_limit(), 5);
    }
}
