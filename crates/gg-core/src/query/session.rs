use crate::media::MediaRecord;
use crate::query::{PageQuery, QueryMode, DEFAULT_PAGE_SIZE};

/// A fetch the session has decided to issue, tagged with the generation it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: PageQuery,
}

/// The completed fetch, carrying the generation of its ticket back.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub generation: u64,
    pub data: Vec<MediaRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { received: usize, total: usize },
    /// The session moved on; the result was dropped untouched.
    Stale { generation: u64, current: u64 },
}

/// Mutable browsing state for one mounted screen.
///
/// The generation is bumped on every search change and on teardown. A
/// fetch result is applied only while its generation is still current, so
/// a slow response for an old query can never overwrite newer results.
///
/// Search pages replace the accumulated results, trending pages append to
/// them. The offset advances by the page size after every applied fetch,
/// even an empty one.
#[derive(Debug, Clone)]
pub struct QuerySession {
    mode: QueryMode,
    query: String,
    offset: u32,
    page_size: u32,
    results: Vec<MediaRecord>,
    generation: u64,
    in_flight: bool,
}

impl Default for QuerySession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QuerySession {
    pub fn new(page_size: u32) -> Self {
        Self {
            mode: QueryMode::Trending,
            query: String::new(),
            offset: 0,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            results: Vec::new(),
            generation: 0,
            in_flight: false,
        }
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn results(&self) -> &[MediaRecord] {
        &self.results
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Search text changed: start a new generation from offset 0 with no
    /// results, and issue its first fetch.
    pub fn begin_search(&mut self, text: &str) -> FetchTicket {
        self.generation += 1;
        self.mode = QueryMode::for_text(text);
        self.query = text.to_string();
        self.offset = 0;
        self.results.clear();
        self.in_flight = true;
        self.ticket()
    }

    /// End of list reached: fetch at the current offset.
    ///
    /// Returns `None` while a fetch of this generation is still pending.
    pub fn begin_page(&mut self) -> Option<FetchTicket> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.ticket())
    }

    pub fn apply(&mut self, result: FetchResult) -> ApplyOutcome {
        if result.generation != self.generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                generation = result.generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return ApplyOutcome::Stale {
                generation: result.generation,
                current: self.generation,
            };
        }

        let received = result.data.len();
        match self.mode {
            QueryMode::Search => self.results = result.data,
            QueryMode::Trending => self.results.extend(result.data),
        }
        self.offset = self.offset.saturating_add(self.page_size);
        self.in_flight = false;

        ApplyOutcome::Applied {
            received,
            total: self.results.len(),
        }
    }

    /// The fetch issued for `generation` will never complete (its caller
    /// went away). Clears the in-flight guard if that generation is still
    /// current so the next end-of-list event can fetch again.
    pub fn abandon(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.in_flight {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Teardown: every outstanding result becomes stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.in_flight = false;
    }

    fn ticket(&self) -> FetchTicket {
        let query = match self.mode {
            QueryMode::Trending => PageQuery::trending(self.offset, self.page_size),
            QueryMode::Search => PageQuery::search(self.query.clone(), self.offset, self.page_size),
        };
        FetchTicket {
            generation: self.generation,
            query,
        }
    }
}
