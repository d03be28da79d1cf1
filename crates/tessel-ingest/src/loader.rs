//! Loading shape files.

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::parse::parse_record;
use crate::reader::records;
use std::fs;
use std::path::Path;
use tessel_core::ShapeKind;
use tessel_shape::Shape;
use tracing::{debug, info, warn};

/// Outcome of loading one or more sources.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Valid shapes, in source order.
    pub shapes: Vec<Shape>,
    /// Malformed records that were logged and dropped.
    pub skipped: usize,
}

impl LoadReport {
    /// Append `other`, keeping source order.
    pub fn merge(&mut self, other: LoadReport) {
        self.shapes.extend(other.shapes);
        self.skipped += other.skipped;
    }
}

/// Parse every record of `source` as `kind`.
///
/// `origin` names the source in log output. Malformed records are logged
/// at `warn` and counted, never returned as errors.
pub fn load_str(kind: ShapeKind, source: &str, comment_marker: &str, origin: &str) -> LoadReport {
    let mut report = LoadReport::default();
    for record in records(source, comment_marker) {
        match parse_record(kind, &record) {
            Ok(shape) => {
                debug!(origin, line = record.line, shape = %shape.id(), "parsed record");
                report.shapes.push(shape);
            }
            Err(error) => {
                warn!(
                    origin,
                    line = record.line,
                    text = record.text,
                    %error,
                    "skipping invalid {kind} record"
                );
                report.skipped += 1;
            }
        }
    }
    report
}

/// Read and parse `path` as records of `kind`.
pub fn load_file(
    kind: ShapeKind,
    path: &Path,
    comment_marker: &str,
) -> Result<LoadReport, IngestError> {
    let source = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();
    let report = load_str(kind, &source, comment_marker, &origin);
    info!(
        file = %origin,
        %kind,
        loaded = report.shapes.len(),
        skipped = report.skipped,
        "loaded shape file"
    );
    Ok(report)
}

/// Loads the files named by an [`IngestConfig`].
#[derive(Clone, Debug)]
pub struct Loader {
    config: IngestConfig,
}

impl Loader {
    /// Validate `config` and wrap it.
    pub fn new(config: IngestConfig) -> Result<Self, IngestError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Load the rectangles file.
    pub fn load_rectangles(&self) -> Result<LoadReport, IngestError> {
        self.load(ShapeKind::Rectangle)
    }

    /// Load the cones file.
    pub fn load_cones(&self) -> Result<LoadReport, IngestError> {
        self.load(ShapeKind::Cone)
    }

    /// Load the file for `kind`.
    pub fn load(&self, kind: ShapeKind) -> Result<LoadReport, IngestError> {
        let path = match kind {
            ShapeKind::Rectangle => &self.config.rectangles_file,
            ShapeKind::Cone => &self.config.cones_file,
        };
        load_file(kind, path, &self.config.comment_marker)
    }

    /// Rectangles then cones. Stops at the first unreadable file.
    pub fn load_all(&self) -> Result<LoadReport, IngestError> {
        let mut report = LoadReport::default();
        for kind in ShapeKind::ALL {
            report.merge(self.load(kind)?);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn load_str_counts_skipped_records() {
        let src = "\
# x1 y1 x2 y2
0 0 4 3
1 2 3
2 0 2 5   # zero width
-1 -1 1 1
";
        let report = load_str(ShapeKind::Rectangle, src, "#", "inline");
        assert_eq!(report.skipped, 2);
        let ids: Vec<_> = report.shapes.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, ["rect_2", "rect_5"]);
    }

    #[test]
    fn merge_appends() {
        let mut a = load_str(ShapeKind::Rectangle, "0 0 1 1\nbad", "#", "a");
        let b = load_str(ShapeKind::Cone, "0 0 1 0 0 0 1 1", "#", "b");
        a.merge(b);
        assert_eq!(a.shapes.len(), 2);
        assert_eq!(a.skipped, 1);
    }

    #[test]
    fn loader_rejects_invalid_config() {
        let cfg = IngestConfig {
            comment_marker: String::new(),
            ..IngestConfig::default()
        };
        match Loader::new(cfg) {
            Err(IngestError::Config(ConfigError::EmptyCommentMarker)) => {}
            other => panic!("expected Config(EmptyCommentMarker), got {other:?}"),
        }
    }
}
