use std::future::Future;

use futures::future;

use crate::error::FetchError;
use crate::models::VideoStat;

/// Looks up every identifier concurrently and returns one outcome per
/// identifier, in input order.
///
/// The lookup is injected so callers decide the transport; this function only
/// guarantees fan-out, ordering, and per-identifier fault isolation. The
/// batch completes when every lookup has resolved. No retries.
pub async fn fetch_all<F, Fut>(ids: &[String], lookup: F) -> Vec<Result<VideoStat, FetchError>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<VideoStat, FetchError>>,
{
    let outcomes = future::join_all(ids.iter().map(|id| lookup(id.clone()))).await;

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    if failed > 0 {
        log::debug!("{failed} of {} lookups failed", outcomes.len());
    }

    outcomes
}
