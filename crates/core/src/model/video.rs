use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::SubjectKey;

/// Unique, stable identifier for a catalog video.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VideoId({})", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable lesson-video record from the catalog.
///
/// Playback is an external concern; this is only the catalog entry the
/// boundary lists and links out to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    id: VideoId,
    subject: SubjectKey,
    title: String,
    description: String,
    url: String,
    duration_seconds: u64,
}

impl Video {
    #[must_use]
    pub fn new(
        id: VideoId,
        subject: SubjectKey,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        duration_seconds: u64,
    ) -> Self {
        Self {
            id,
            subject,
            title: title.into(),
            description: description.into(),
            url: url.into(),
            duration_seconds,
        }
    }

    #[must_use]
    pub fn id(&self) -> &VideoId {
        &self.id
    }

    #[must_use]
    pub fn subject(&self) -> SubjectKey {
        self.subject
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }
}
