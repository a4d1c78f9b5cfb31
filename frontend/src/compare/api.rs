use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use stats_core::{fetch_all, FetchError, VideoListing, VideoStat};

use crate::env_variable_utils::{API_BASE_URL, API_KEY, FETCH_TIMEOUT_MS};

/// Looks up statistics and snippet fields for every id concurrently.
/// One outcome per id, in input order; a failed id never fails the batch.
pub async fn fetch_batch(ids: Vec<String>) -> Vec<Result<VideoStat, FetchError>> {
    fetch_all(&ids, lookup_video).await
}

/// One `videos.list` call, raced against the configured timeout.
pub async fn lookup_video(video_id: String) -> Result<VideoStat, FetchError> {
    let request = send_lookup(video_id);
    let deadline = TimeoutFuture::new(*FETCH_TIMEOUT_MS);
    pin_mut!(request, deadline);

    match select(request, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(FetchError::Network(format!(
            "no response within {}ms",
            *FETCH_TIMEOUT_MS
        ))),
    }
}

async fn send_lookup(video_id: String) -> Result<VideoStat, FetchError> {
    let url = format!(
        "{}/videos?part=statistics%2Csnippet&id={}&key={}",
        &*API_BASE_URL,
        urlencoding::encode(&video_id),
        urlencoding::encode(&API_KEY),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let listing = response
        .json::<VideoListing>()
        .await
        .map_err(|e| FetchError::Payload(e.to_string()))?;

    VideoStat::from_listing(&video_id, listing)
}
