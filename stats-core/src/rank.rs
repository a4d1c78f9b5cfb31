use crate::models::{RankedStat, VideoStat};

/// Ranks stats by summed views, likes, and comments, highest first.
///
/// Pure, no I/O, full set returned. The sort is stable, so equal totals keep
/// their submission order.
pub fn rank(stats: Vec<VideoStat>) -> Vec<RankedStat> {
    let mut ranked: Vec<RankedStat> = stats
        .into_iter()
        .map(|stat| RankedStat {
            total: stat.engagement_total(),
            stat,
        })
        .collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(id: &str, views: u64, likes: u64, comments: u64) -> VideoStat {
        VideoStat {
            video_id: id.to_string(),
            title: id.to_string(),
            view_count: views,
            like_count: likes,
            comment_count: comments,
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_sorts_descending_by_total() {
        let ranked = rank(vec![stat("low", 1, 1, 1), stat("high", 10, 5, 1)]);
        assert_eq!(ranked[0].stat.video_id, "high");
        assert_eq!(ranked[0].total, 16);
        assert_eq!(ranked[1].stat.video_id, "low");
        assert_eq!(ranked[1].total, 3);
    }

    #[test]
    fn test_full_set_is_returned() {
        let ranked = rank(vec![
            stat("a", 3, 0, 0),
            stat("b", 2, 0, 0),
            stat("c", 1, 0, 0),
        ]);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_is_idempotent() {
        let once = rank(vec![
            stat("a", 5, 5, 5),
            stat("b", 100, 0, 0),
            stat("c", 1, 2, 3),
        ]);
        let twice = rank(once.iter().map(|r| r.stat.clone()).collect());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let ranked = rank(vec![
            stat("first", 4, 3, 3),
            stat("second", 5, 5, 0),
            stat("third", 10, 0, 0),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| r.stat.video_id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input_ranks_to_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
