// src/domain/blog/timeline.rs
use crate::domain::blog::feedback::FeedbackEvent;
use crate::domain::blog::version::Version;

/// A version paired with the feedback recorded while it was the current one.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub version: Version,
    pub feedback: Vec<FeedbackEvent>,
}

/// Rebuild the conversation timeline for a blog.
///
/// `versions` must be sorted newest-first. Each version owns the half-open
/// attribution window `(own created_at, next newer created_at]`; the newest
/// version has no upper bound. Every feedback event is attributed to the
/// first window (scanning newest to oldest) containing its timestamp.
/// Events older than the oldest version, or matching no window, clamp to the
/// oldest version so nothing is silently dropped.
///
/// Pure and deterministic: the output has one entry per version, every event
/// appears under exactly one entry, and attributed events are ordered by
/// timestamp ascending with ties keeping input order.
pub fn reconcile(versions: &[Version], feedback: &[FeedbackEvent]) -> Vec<TimelineEntry> {
    if versions.is_empty() {
        return Vec::new();
    }

    let mut buckets: Vec<Vec<FeedbackEvent>> = vec![Vec::new(); versions.len()];
    let oldest = versions.len() - 1;

    for event in feedback {
        let slot = attribute_index(versions, event).unwrap_or(oldest);
        buckets[slot].push(event.clone());
    }

    versions
        .iter()
        .zip(buckets)
        .map(|(version, mut events)| {
            // stable: ties keep input order
            events.sort_by_key(|e| e.created_at);
            TimelineEntry {
                version: version.clone(),
                feedback: events,
            }
        })
        .collect()
}

fn attribute_index(versions: &[Version], event: &FeedbackEvent) -> Option<usize> {
    versions.iter().enumerate().position(|(i, version)| {
        let after_lower = event.created_at > version.created_at;
        let within_upper = i == 0 || event.created_at <= versions[i - 1].created_at;
        after_lower && within_upper
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::value_objects::{BlogId, FeedbackId, VersionId};
    use crate::domain::blog::feedback::FeedbackPolarity;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn version(blog_id: BlogId, secs: i64, content: &str) -> Version {
        Version {
            id: VersionId::generate(),
            blog_id,
            content: content.to_string(),
            user_prompt: None,
            ai_response: None,
            feedback_text: None,
            created_at: at(secs),
        }
    }

    fn event(blog_id: BlogId, secs: i64, content: &str) -> FeedbackEvent {
        FeedbackEvent {
            id: FeedbackId::generate(),
            blog_id,
            content: content.to_string(),
            polarity: FeedbackPolarity::Negative,
            created_at: at(secs),
        }
    }

    fn contents(entry: &TimelineEntry) -> Vec<&str> {
        entry.feedback.iter().map(|e| e.content.as_str()).collect()
    }

    #[test]
    fn attributes_feedback_to_enclosing_window() {
        let blog = BlogId::generate();
        let versions = vec![
            version(blog, 300, "v3"),
            version(blog, 200, "v2"),
            version(blog, 100, "v1"),
        ];
        let feedback = vec![event(blog, 250, "fix"), event(blog, 150, "nice")];

        let timeline = reconcile(&versions, &feedback);

        assert_eq!(timeline.len(), 3);
        assert_eq!(contents(&timeline[0]), vec!["fix"]);
        assert_eq!(contents(&timeline[1]), vec!["nice"]);
        assert!(timeline[2].feedback.is_empty());
    }

    #[test]
    fn newest_version_absorbs_later_feedback_unbounded() {
        let blog = BlogId::generate();
        let versions = vec![version(blog, 300, "v2"), version(blog, 100, "v1")];
        let feedback = vec![event(blog, 10_000, "late")];

        let timeline = reconcile(&versions, &feedback);
        assert_eq!(contents(&timeline[0]), vec!["late"]);
    }

    #[test]
    fn feedback_older_than_oldest_version_clamps_to_oldest() {
        let blog = BlogId::generate();
        let versions = vec![version(blog, 300, "v2"), version(blog, 100, "v1")];
        let feedback = vec![event(blog, 50, "early")];

        let timeline = reconcile(&versions, &feedback);
        assert!(timeline[0].feedback.is_empty());
        assert_eq!(contents(&timeline[1]), vec!["early"]);
    }

    #[test]
    fn boundary_timestamp_belongs_to_the_older_window() {
        let blog = BlogId::generate();
        let versions = vec![version(blog, 300, "v2"), version(blog, 100, "v1")];
        // exactly at the newer version's creation instant: still inside the
        // older version's (100, 300] window
        let feedback = vec![event(blog, 300, "boundary")];

        let timeline = reconcile(&versions, &feedback);
        assert!(timeline[0].feedback.is_empty());
        assert_eq!(contents(&timeline[1]), vec!["boundary"]);
    }

    #[test]
    fn no_event_is_dropped_or_duplicated() {
        let blog = BlogId::generate();
        let versions = vec![
            version(blog, 400, "v4"),
            version(blog, 300, "v3"),
            version(blog, 200, "v2"),
            version(blog, 100, "v1"),
        ];
        let feedback = vec![
            event(blog, 50, "a"),
            event(blog, 150, "b"),
            event(blog, 250, "c"),
            event(blog, 350, "d"),
            event(blog, 450, "e"),
        ];

        let timeline = reconcile(&versions, &feedback);
        let total: usize = timeline.iter().map(|t| t.feedback.len()).sum();
        assert_eq!(timeline.len(), versions.len());
        assert_eq!(total, feedback.len());
    }

    #[test]
    fn empty_feedback_yields_empty_buckets() {
        let blog = BlogId::generate();
        let versions = vec![version(blog, 200, "v2"), version(blog, 100, "v1")];

        let timeline = reconcile(&versions, &[]);
        assert_eq!(timeline.len(), 2);
        assert!(timeline.iter().all(|t| t.feedback.is_empty()));
    }

    #[test]
    fn empty_version_list_yields_empty_timeline() {
        let blog = BlogId::generate();
        let feedback = vec![event(blog, 100, "orphan")];
        assert!(reconcile(&[], &feedback).is_empty());
    }

    #[test]
    fn tie_timestamps_keep_input_order_deterministically() {
        let blog = BlogId::generate();
        let versions = vec![version(blog, 100, "v1")];
        let feedback = vec![
            event(blog, 200, "first"),
            event(blog, 200, "second"),
            event(blog, 150, "earliest"),
        ];

        let first = reconcile(&versions, &feedback);
        let second = reconcile(&versions, &feedback);

        assert_eq!(contents(&first[0]), vec!["earliest", "first", "second"]);
        assert_eq!(contents(&first[0]), contents(&second[0]));
    }

    #[test]
    fn attributed_feedback_is_ordered_by_timestamp_ascending() {
        let blog = BlogId::generate();
        let versions = vec![version(blog, 100, "v1")];
        let feedback = vec![
            event(blog, 500, "late"),
            event(blog, 200, "early"),
            event(blog, 300, "middle"),
        ];

        let timeline = reconcile(&versions, &feedback);
        assert_eq!(contents(&timeline[0]), vec!["early", "middle", "late"]);
    }
}
