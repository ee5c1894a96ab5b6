use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use gg_core::ports::MediaSourcePort;
use gg_core::{ApplyOutcome, FetchResult, FetchTicket, MediaRecord, QueryMode, QuerySession};
use tokio::sync::watch;
use tracing::{debug, info, info_span, Instrument};

use super::debounce::SearchDebouncer;

/// What happened to one fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was merged into the session.
    Applied { received: usize, total: usize },
    /// A newer search (or teardown) superseded the request while it ran.
    Stale,
    /// A page of the current generation is already loading.
    Skipped,
    /// The screen was unmounted.
    Closed,
}

/// Snapshot of the session for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub mode: QueryMode,
    pub query: String,
    pub offset: u32,
    pub generation: u64,
    pub loading: bool,
    pub results: Vec<MediaRecord>,
}

impl SessionView {
    fn of(session: &QuerySession) -> Self {
        Self {
            mode: session.mode(),
            query: session.query().to_string(),
            offset: session.offset(),
            generation: session.generation(),
            loading: session.is_loading(),
            results: session.results().to_vec(),
        }
    }
}

struct ControllerState {
    session: QuerySession,
    closed: bool,
}

/// Drives a [`QuerySession`] from search-text and end-of-list events.
///
/// ## Behavior
/// - `search_changed` is debounced; only the last text of a quiet window
///   resets the session (mode, query, offset 0, no results) and fetches.
/// - `end_reached` fetches the next page at the current offset.
/// - Fetch results carry the generation they were issued for and are
///   dropped when the session has moved on.
///
/// The state lock is never held across the network call, so other events
/// are handled while a fetch is pending.
pub struct BrowseController {
    source: Arc<dyn MediaSourcePort>,
    state: Mutex<ControllerState>,
    debouncer: SearchDebouncer,
    view_tx: watch::Sender<SessionView>,
}

impl BrowseController {
    pub fn new(source: Arc<dyn MediaSourcePort>, page_size: u32, debounce: Duration) -> Self {
        let session = QuerySession::new(page_size);
        let (view_tx, _) = watch::channel(SessionView::of(&session));
        Self {
            source,
            state: Mutex::new(ControllerState {
                session,
                closed: false,
            }),
            debouncer: SearchDebouncer::new(debounce),
            view_tx,
        }
    }

    /// Initial trending load when the screen appears.
    pub async fn mount(&self) -> FetchOutcome {
        self.end_reached().await
    }

    /// Debounced search text change. Requires a tokio runtime.
    pub fn search_changed(self: &Arc<Self>, text: impl Into<String>) {
        if self.lock().closed {
            return;
        }
        let text = text.into();
        let controller = Arc::clone(self);
        self.debouncer.schedule(async move {
            controller.apply_search(&text).await;
        });
    }

    /// Search transition without the debounce window.
    pub async fn apply_search(&self, text: &str) -> FetchOutcome {
        let ticket = {
            let mut state = self.lock();
            if state.closed {
                return FetchOutcome::Closed;
            }
            let ticket = state.session.begin_search(text);
            self.publish(&state.session);
            ticket
        };
        info!(
            mode = ?ticket.query.mode,
            generation = ticket.generation,
            "search changed"
        );
        self.run(ticket).await
    }

    /// The list scrolled close to its end.
    pub async fn end_reached(&self) -> FetchOutcome {
        let ticket = {
            let mut state = self.lock();
            if state.closed {
                return FetchOutcome::Closed;
            }
            match state.session.begin_page() {
                Some(ticket) => {
                    self.publish(&state.session);
                    ticket
                }
                None => {
                    debug!("page already loading; end reached ignored");
                    return FetchOutcome::Skipped;
                }
            }
        };
        self.run(ticket).await
    }

    /// Screen teardown: pending search is cancelled and every in-flight
    /// result is discarded when it lands.
    pub fn unmount(&self) {
        self.debouncer.cancel();
        let mut state = self.lock();
        state.closed = true;
        state.session.invalidate();
        self.publish(&state.session);
    }

    pub fn view(&self) -> SessionView {
        SessionView::of(&self.lock().session)
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view_tx.subscribe()
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    async fn run(&self, ticket: FetchTicket) -> FetchOutcome {
        let span = info_span!(
            "usecase.browse.fetch",
            endpoint = ticket.query.mode.endpoint(),
            offset = ticket.query.offset,
            generation = ticket.generation,
        );

        async {
            let mut pending = PendingFetch {
                controller: self,
                generation: ticket.generation,
                armed: true,
            };
            let data = self.source.fetch_page(&ticket.query).await;
            pending.armed = false;

            let mut state = self.lock();
            if state.closed {
                debug!("controller closed; fetch result discarded");
                return FetchOutcome::Closed;
            }
            let outcome = state.session.apply(FetchResult {
                generation: ticket.generation,
                data,
            });
            match outcome {
                ApplyOutcome::Applied { received, total } => {
                    self.publish(&state.session);
                    debug!(received, total, "page applied");
                    FetchOutcome::Applied { received, total }
                }
                ApplyOutcome::Stale { current, .. } => {
                    debug!(current, "stale page discarded");
                    FetchOutcome::Stale
                }
            }
        }
        .instrument(span)
        .await
    }

    fn publish(&self, session: &QuerySession) {
        self.view_tx.send_replace(SessionView::of(session));
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Clears the in-flight guard when a fetch future is dropped before its
/// result was applied (timeout, `select!`, aborted task).
struct PendingFetch<'a> {
    controller: &'a BrowseController,
    generation: u64,
    armed: bool,
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.controller.lock();
        if state.session.abandon(self.generation) {
            debug!(generation = self.generation, "fetch abandoned before completion");
            self.controller.publish(&state.session);
        }
    }
}

impl Drop for BrowseController {
    fn drop(&mut self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gg_core::{MediaId, PageQuery, ResourceRef};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn records(prefix: &str, count: usize) -> Vec<MediaRecord> {
        (0..count)
            .map(|i| {
                let url = format!("https://media.example/{prefix}{i}.gif");
                MediaRecord::new(
                    MediaId::from_string(format!("{prefix}{i}")),
                    ResourceRef::parse("original", &url, None).unwrap(),
                    ResourceRef::parse("fixed_height", &url, None).unwrap(),
                    ResourceRef::parse("fixed_height_still", &url, None).unwrap(),
                )
                .unwrap()
            })
            .collect()
    }

    /// Answers pages in order and records every request.
    #[derive(Default)]
    struct ScriptedSource {
        pages: Mutex<VecDeque<Vec<MediaRecord>>>,
        requests: Mutex<Vec<PageQuery>>,
    }

    impl ScriptedSource {
        fn with_pages(pages: Vec<Vec<MediaRecord>>) -> Arc<Self> {
            Arc::new(Self {
                pages: Mutex::new(pages.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<PageQuery> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MediaSourcePort for ScriptedSource {
        async fn fetch_page(&self, query: &PageQuery) -> Vec<MediaRecord> {
            self.requests.lock().unwrap().push(query.clone());
            self.pages.lock().unwrap().pop_front().unwrap_or_default()
        }
    }

    fn controller(source: Arc<dyn MediaSourcePort>) -> Arc<BrowseController> {
        Arc::new(BrowseController::new(
            source,
            20,
            Duration::from_millis(500),
        ))
    }

    #[tokio::test]
    async fn search_scenario_replaces_and_advances() {
        let source = ScriptedSource::with_pages(vec![records("a", 5), records("b", 3)]);
        let controller = controller(source.clone());

        let outcome = controller.apply_search("cat").await;
        assert_eq!(outcome, FetchOutcome::Applied { received: 5, total: 5 });
        assert_eq!(controller.view().offset, 20);

        let outcome = controller.end_reached().await;
        assert_eq!(outcome, FetchOutcome::Applied { received: 3, total: 3 });

        let view = controller.view();
        assert_eq!(view.results, records("b", 3));
        assert_eq!(view.offset, 40);
        assert_eq!(
            source.requests(),
            vec![PageQuery::search("cat", 0, 20), PageQuery::search("cat", 20, 20)]
        );
    }

    #[tokio::test]
    async fn trending_scenario_appends_and_survives_exhaustion() {
        let source = ScriptedSource::with_pages(vec![records("t", 20), Vec::new()]);
        let controller = controller(source.clone());

        assert_eq!(
            controller.mount().await,
            FetchOutcome::Applied { received: 20, total: 20 }
        );
        assert_eq!(
            controller.end_reached().await,
            FetchOutcome::Applied { received: 0, total: 20 }
        );

        let view = controller.view();
        assert_eq!(view.results.len(), 20);
        assert_eq!(view.offset, 40);
        assert_eq!(view.mode, QueryMode::Trending);
        assert_eq!(
            source.requests(),
            vec![PageQuery::trending(0, 20), PageQuery::trending(20, 20)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_search_only_fetches_last_text() {
        let source = ScriptedSource::with_pages(vec![records("cat", 2)]);
        let controller = controller(source.clone());

        controller.search_changed("c");
        tokio::time::advance(Duration::from_millis(100)).await;
        controller.search_changed("ca");
        tokio::time::advance(Duration::from_millis(100)).await;
        controller.search_changed("cat");
        assert!(controller.is_search_pending());

        tokio::time::advance(Duration::from_millis(500)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }

        assert_eq!(source.requests(), vec![PageQuery::search("cat", 0, 20)]);
        assert_eq!(controller.view().results.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_pending_search() {
        let source = ScriptedSource::with_pages(vec![]);
        let controller = controller(source.clone());

        controller.search_changed("cat");
        controller.unmount();
        tokio::time::advance(Duration::from_secs(1)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }

        assert!(source.requests().is_empty());
        assert_eq!(controller.end_reached().await, FetchOutcome::Closed);
        assert_eq!(controller.apply_search("dog").await, FetchOutcome::Closed);
    }

    #[tokio::test]
    async fn subscribers_see_applied_pages() {
        let source = ScriptedSource::with_pages(vec![records("t", 4)]);
        let controller = controller(source);
        let mut views = controller.subscribe();

        controller.mount().await;

        assert!(views.has_changed().unwrap());
        let view = views.borrow_and_update().clone();
        assert_eq!(view.results.len(), 4);
        assert!(!view.loading);
    }

    /// Never answers its first request; later ones pop scripted pages.
    struct StuckOnceSource {
        calls: AtomicUsize,
        inner: Arc<ScriptedSource>,
    }

    #[async_trait]
    impl MediaSourcePort for StuckOnceSource {
        async fn fetch_page(&self, query: &PageQuery) -> Vec<MediaRecord> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                std::future::pending::<()>().await;
            }
            self.inner.fetch_page(query).await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out_page_does_not_block_the_next_one() {
        let source = Arc::new(StuckOnceSource {
            calls: AtomicUsize::new(0),
            inner: ScriptedSource::with_pages(vec![records("t", 3)]),
        });
        let controller = controller(source.clone());

        let first =
            tokio::time::timeout(Duration::from_millis(50), controller.end_reached()).await;
        assert!(first.is_err());
        assert!(!controller.view().loading);

        assert_eq!(
            controller.end_reached().await,
            FetchOutcome::Applied { received: 3, total: 3 }
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(controller.view().offset, 20);
    }

    #[tokio::test]
    async fn empty_text_switches_back_to_trending() {
        let source = ScriptedSource::with_pages(vec![records("s", 2), records("t", 6)]);
        let controller = controller(source.clone());

        controller.apply_search("cat").await;
        controller.apply_search("").await;

        let view = controller.view();
        assert_eq!(view.mode, QueryMode::Trending);
        assert_eq!(view.query, "");
        assert_eq!(view.results.len(), 6);
        assert_eq!(source.requests()[1], PageQuery::trending(0, 20));
    }
}
