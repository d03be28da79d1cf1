//! Ingestion configuration and its validation.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

// ── ConfigError ────────────────────────────────────────────────────

/// Invalid [`IngestConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The comment marker is empty, which would comment out every line.
    EmptyCommentMarker,
    /// The comment marker contains whitespace and could never start a
    /// trimmed line.
    WhitespaceInCommentMarker {
        /// The configured marker.
        marker: String,
    },
    /// A data file path is empty.
    EmptyPath {
        /// Which file (`"rectangles"` or `"cones"`).
        which: &'static str,
    },
    /// Both shape kinds point at the same file.
    SameFile {
        /// The shared path.
        path: PathBuf,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCommentMarker => write!(f, "comment marker must not be empty"),
            Self::WhitespaceInCommentMarker { marker } => {
                write!(f, "comment marker must not contain whitespace, got {marker:?}")
            }
            Self::EmptyPath { which } => write!(f, "{which} file path is empty"),
            Self::SameFile { path } => write!(
                f,
                "rectangles and cones read the same file: {}",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

// ── IngestConfig ───────────────────────────────────────────────────

/// Where shape records come from and how comments are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestConfig {
    /// Rectangle records. Default: `data/rectangles.txt`.
    pub rectangles_file: PathBuf,
    /// Cone records. Default: `data/cones.txt`.
    pub cones_file: PathBuf,
    /// Starts a comment, whole-line or trailing. Default: `#`.
    pub comment_marker: String,
}

impl IngestConfig {
    /// Default file names inside `dir`.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            rectangles_file: dir.join("rectangles.txt"),
            cones_file: dir.join("cones.txt"),
            comment_marker: "#".to_string(),
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Comment marker must be non-empty.
        if self.comment_marker.is_empty() {
            return Err(ConfigError::EmptyCommentMarker);
        }
        // 2. Lines are trimmed before the marker is checked.
        if self.comment_marker.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInCommentMarker {
                marker: self.comment_marker.clone(),
            });
        }
        // 3. Both files must be named.
        if self.rectangles_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { which: "rectangles" });
        }
        if self.cones_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { which: "cones" });
        }
        // 4. One file cannot hold both record layouts.
        if self.rectangles_file == self.cones_file {
            return Err(ConfigError::SameFile {
                path: self.cones_file.clone(),
            });
        }
        Ok(())
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self::from_data_dir("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_into_data_dir() {
        let cfg = IngestConfig::default();
        assert_eq!(cfg.rectangles_file, Path::new("data").join("rectangles.txt"));
        assert_eq!(cfg.cones_file, Path::new("data").join("cones.txt"));
        assert_eq!(cfg.comment_marker, "#");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn data_dir_only_derives_file_paths() {
        let cfg = IngestConfig::from_data_dir("fixtures/run");
        assert_eq!(
            cfg,
            IngestConfig {
                rectangles_file: PathBuf::from("fixtures/run/rectangles.txt"),
                cones_file: PathBuf::from("fixtures/run/cones.txt"),
                comment_marker: "#".to_string(),
            }
        );
    }

    #[test]
    fn empty_marker_fails() {
        let cfg = IngestConfig {
            comment_marker: String::new(),
            ..IngestConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::EmptyCommentMarker) => {}
            other => panic!("expected EmptyCommentMarker, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_marker_fails() {
        let cfg = IngestConfig {
            comment_marker: "# ".to_string(),
            ..IngestConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::WhitespaceInCommentMarker { .. }) => {}
            other => panic!("expected WhitespaceInCommentMarker, got {other:?}"),
        }
    }

    #[test]
    fn empty_path_fails() {
        let cfg = IngestConfig {
            cones_file: PathBuf::new(),
            ..IngestConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::EmptyPath { which: "cones" })
        );
    }

    #[test]
    fn shared_file_fails() {
        let mut cfg = IngestConfig::default();
        cfg.cones_file = cfg.rectangles_file.clone();
        match cfg.validate() {
            Err(ConfigError::SameFile { .. }) => {}
            other => panic!("expected SameFile, got {other:?}"),
        }
    }
}
