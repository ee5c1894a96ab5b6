//! Media source port - abstracts the remote search/trending API

use async_trait::async_trait;

use crate::media::MediaRecord;
use crate::query::PageQuery;

/// Media source port
///
/// One call is one network request. The contract is fail-soft: transport
/// and decoding failures are logged by the implementation and come back as
/// an empty page, never as an error. Calls are independent; there is no
/// retry and no caching behind this port.
#[async_trait]
pub trait MediaSourcePort: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery) -> Vec<MediaRecord>;
}
