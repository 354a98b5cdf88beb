use std::collections::BTreeMap;

use study_core::model::{SubjectKey, Video};

/// Immutable lesson-video catalog grouped by subject.
///
/// Built once at startup, from the remote catalog or the built-in demo
/// list, and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    by_subject: BTreeMap<SubjectKey, Vec<Video>>,
}

impl VideoCatalog {
    #[must_use]
    pub fn from_videos(videos: Vec<Video>) -> Self {
        let mut by_subject: BTreeMap<SubjectKey, Vec<Video>> = BTreeMap::new();
        for video in videos {
            by_subject.entry(video.subject()).or_default().push(video);
        }
        Self { by_subject }
    }

    /// Catalog backed by the built-in demo videos.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_videos(crate::demo_catalog::videos())
    }

    /// Videos for one subject; empty when the subject has no entries.
    #[must_use]
    pub fn videos_for(&self, subject: SubjectKey) -> &[Video] {
        self.by_subject
            .get(&subject)
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_subject.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_subject.values().all(Vec::is_empty)
    }

    /// Per-subject video counts, for catalog displays.
    #[must_use]
    pub fn subject_counts(&self) -> Vec<(SubjectKey, usize)> {
        self.by_subject
            .iter()
            .map(|(subject, videos)| (*subject, videos.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::VideoId;

    fn video(id: &str, subject: SubjectKey) -> Video {
        Video::new(
            VideoId::new(id),
            subject,
            "title",
            "",
            "https://example.com/v",
            600,
        )
    }

    #[test]
    fn groups_videos_by_subject() {
        let catalog = VideoCatalog::from_videos(vec![
            video("pt-v1", SubjectKey::Portugues),
            video("mt-v1", SubjectKey::Matematica),
            video("pt-v2", SubjectKey::Portugues),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.videos_for(SubjectKey::Portugues).len(), 2);
        assert!(catalog.videos_for(SubjectKey::Etica).is_empty());
    }

    #[test]
    fn builtin_catalog_has_videos() {
        let catalog = VideoCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(!catalog.videos_for(SubjectKey::Portugues).is_empty());
    }
}
