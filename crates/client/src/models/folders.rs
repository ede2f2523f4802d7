//! Folder models for the Checkmk folder tree.
//!
//! Checkmk addresses folders by a slash-delimited path (`/network/europe`)
//! in request bodies and by a tilde-delimited identifier (`~network~europe`)
//! in REST URLs, because a slash cannot appear inside a URL path segment.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::endpoints::encode_path_segment;

/// Hierarchical folder location in the Checkmk namespace.
///
/// Stored as ordered segments; the main (root) folder has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    /// The main folder (`/`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a folder path in either slash (`/a/b`) or tilde (`~a~b`) form.
    ///
    /// Empty segments are dropped, so `/`, `~` and `` all denote the main folder.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(['/', '~'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, `None` for the main folder.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Containing folder, `None` for the main folder.
    pub fn parent(&self) -> Option<FolderPath> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Child folder `segment` below this one. Blank segments leave the path unchanged.
    pub fn join(&self, segment: &str) -> FolderPath {
        let mut segments = self.segments.clone();
        let segment = segment.trim();
        if !segment.is_empty() {
            segments.push(segment.to_string());
        }
        Self { segments }
    }

    /// Every non-root prefix of this path, shortest first, ending with the path itself.
    pub fn ancestors(&self) -> impl Iterator<Item = FolderPath> + '_ {
        (1..=self.segments.len()).map(|len| Self {
            segments: self.segments[..len].to_vec(),
        })
    }

    /// Identifier used in REST URLs: `~a~b`, or `~` for the main folder.
    ///
    /// Each segment is percent-encoded, so a stray `/` or `~` inside a
    /// segment can never split it.
    pub fn to_rest_id(&self) -> String {
        if self.is_root() {
            return "~".to_string();
        }
        self.segments
            .iter()
            .map(|s| format!("~{}", encode_path_segment(s)))
            .collect()
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for FolderPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FolderPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FolderPath::parse(&raw))
    }
}

/// Folder object as returned by `GET /objects/folder_config/{id}`.
#[derive(Debug, Deserialize, Clone)]
pub struct Folder {
    pub id: String,
    #[serde(default)]
    pub title: String,
}
