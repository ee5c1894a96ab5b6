//! Media records returned by the remote search/trending API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::MediaId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("media id is empty")]
    MissingId,

    #[error("{variant} reference is missing")]
    Missing { variant: &'static str },

    #[error("{variant} reference is not an absolute http(s) url: {url}")]
    Malformed { variant: &'static str, url: String },
}

/// A remote binary resource. The url is always absolute http(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    url: String,
    /// Content length advertised by the API, when it sends one.
    size_bytes: Option<u64>,
}

impl ResourceRef {
    pub fn parse(
        variant: &'static str,
        url: &str,
        size_bytes: Option<u64>,
    ) -> Result<Self, ResourceError> {
        if url.is_empty() {
            return Err(ResourceError::Missing { variant });
        }

        let parsed = url::Url::parse(url).map_err(|_| ResourceError::Malformed {
            variant,
            url: url.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ResourceError::Malformed {
                variant,
                url: url.to_string(),
            });
        }

        Ok(Self {
            url: url.to_string(),
            size_bytes,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.size_bytes
    }
}

/// One media item with its three required resource variants.
///
/// Only [`MediaRecord::new`] builds records, so a record with a missing or
/// malformed reference cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    id: MediaId,
    original: ResourceRef,
    preview_animated: ResourceRef,
    preview_static: ResourceRef,
}

impl MediaRecord {
    pub fn new(
        id: MediaId,
        original: ResourceRef,
        preview_animated: ResourceRef,
        preview_static: ResourceRef,
    ) -> Result<Self, ResourceError> {
        if id.as_str().is_empty() {
            return Err(ResourceError::MissingId);
        }
        Ok(Self {
            id,
            original,
            preview_animated,
            preview_static,
        })
    }

    pub fn id(&self) -> &MediaId {
        &self.id
    }

    pub fn original(&self) -> &ResourceRef {
        &self.original
    }

    pub fn preview_animated(&self) -> &ResourceRef {
        &self.preview_animated
    }

    pub fn preview_static(&self) -> &ResourceRef {
        &self.preview_static
    }

    /// Reference a grid cell should show: animated while playing, still otherwise.
    pub fn preview(&self, playing: bool) -> &ResourceRef {
        if playing {
            &self.preview_animated
        } else {
            &self.preview_static
        }
    }
}
