use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Statistics and descriptive fields for one video, as shown on a card.
/// Produced by a successful lookup and replaced wholesale on the next fetch
/// cycle; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStat {
    pub video_id: String,
    pub title: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub thumbnail_url: Option<String>,
}

impl VideoStat {
    /// Sum of the three public counters.
    pub fn engagement_total(&self) -> u64 {
        self.view_count + self.like_count + self.comment_count
    }

    /// Validates one `videos.list` response into a `VideoStat`.
    ///
    /// The API reports counts as decimal strings. An empty `items` array, a
    /// missing field group, or a count that does not parse base-10 is a
    /// per-item failure. A missing medium thumbnail is tolerated.
    pub fn from_listing(video_id: &str, listing: VideoListing) -> Result<Self, FetchError> {
        let item = listing
            .items
            .into_iter()
            .next()
            .ok_or(FetchError::UnknownVideo)?;
        let statistics = item
            .statistics
            .ok_or(FetchError::MissingField("statistics"))?;
        let snippet = item.snippet.ok_or(FetchError::MissingField("snippet"))?;
        let title = snippet
            .title
            .ok_or(FetchError::MissingField("snippet.title"))?;

        Ok(VideoStat {
            video_id: video_id.to_string(),
            title,
            view_count: parse_count("statistics.viewCount", statistics.view_count)?,
            like_count: parse_count("statistics.likeCount", statistics.like_count)?,
            comment_count: parse_count("statistics.commentCount", statistics.comment_count)?,
            thumbnail_url: snippet.thumbnails.and_then(|t| t.medium).map(|t| t.url),
        })
    }
}

fn parse_count(field: &'static str, raw: Option<String>) -> Result<u64, FetchError> {
    let raw = raw.ok_or(FetchError::MissingField(field))?;
    raw.parse::<u64>()
        .map_err(|_| FetchError::Payload(format!("{field} is not a number: {raw:?}")))
}

/// A [`VideoStat`] plus its derived comparison score. Recomputed on every
/// ranking pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedStat {
    pub stat: VideoStat,
    pub total: u64,
}

/// Wire shape of the `videos.list` endpoint, reduced to the fields read here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListing {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    pub statistics: Option<VideoStatistics>,
    pub snippet: Option<VideoSnippet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSnippet {
    pub title: Option<String>,
    pub thumbnails: Option<ThumbnailSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThumbnailSet {
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{
        "items": [{
            "statistics": {
                "viewCount": "1200",
                "likeCount": "34",
                "commentCount": "5"
            },
            "snippet": {
                "title": "Some video",
                "thumbnails": {
                    "medium": { "url": "https://i.ytimg.com/vi/abc/mqdefault.jpg" }
                }
            }
        }]
    }"#;

    fn listing(payload: &str) -> VideoListing {
        serde_json::from_str(payload).unwrap()
    }

    #[test]
    fn test_full_payload_decodes() {
        let stat = VideoStat::from_listing("abc", listing(FULL_PAYLOAD)).unwrap();
        assert_eq!(stat.video_id, "abc");
        assert_eq!(stat.title, "Some video");
        assert_eq!(stat.view_count, 1200);
        assert_eq!(stat.like_count, 34);
        assert_eq!(stat.comment_count, 5);
        assert_eq!(
            stat.thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/abc/mqdefault.jpg")
        );
        assert_eq!(stat.engagement_total(), 1239);
    }

    #[test]
    fn test_empty_items_is_unknown_video() {
        let result = VideoStat::from_listing("gone", listing(r#"{"items": []}"#));
        assert_eq!(result, Err(FetchError::UnknownVideo));
    }

    #[test]
    fn test_missing_items_key_is_unknown_video() {
        let result = VideoStat::from_listing("gone", listing("{}"));
        assert_eq!(result, Err(FetchError::UnknownVideo));
    }

    #[test]
    fn test_missing_statistics_is_incomplete() {
        let payload = r#"{"items": [{"snippet": {"title": "t"}}]}"#;
        let result = VideoStat::from_listing("abc", listing(payload));
        assert_eq!(result, Err(FetchError::MissingField("statistics")));
    }

    #[test]
    fn test_missing_snippet_is_incomplete() {
        let payload = r#"{"items": [{"statistics": {"viewCount": "1", "likeCount": "1", "commentCount": "1"}}]}"#;
        let result = VideoStat::from_listing("abc", listing(payload));
        assert_eq!(result, Err(FetchError::MissingField("snippet")));
    }

    #[test]
    fn test_non_numeric_count_is_malformed() {
        let payload = r#"{
            "items": [{
                "statistics": {"viewCount": "many", "likeCount": "1", "commentCount": "1"},
                "snippet": {"title": "t"}
            }]
        }"#;
        let result = VideoStat::from_listing("abc", listing(payload));
        assert!(matches!(result, Err(FetchError::Payload(_))));
    }

    #[test]
    fn test_missing_thumbnail_is_tolerated() {
        let payload = r#"{
            "items": [{
                "statistics": {"viewCount": "10", "likeCount": "2", "commentCount": "0"},
                "snippet": {"title": "no thumb"}
            }]
        }"#;
        let stat = VideoStat::from_listing("abc", listing(payload)).unwrap();
        assert_eq!(stat.thumbnail_url, None);
    }
}
