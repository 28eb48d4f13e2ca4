//! Error types for loading and writing scene documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scene TOML: {}", .0.message())]
    Toml(#[from] toml::de::Error),

    #[error("failed to write scene TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    /// Location of the error in the scene source, when known
    pub fn span(&self, source: &str) -> Option<Span> {
        match self {
            SceneError::Toml(e) => e.span(),
            SceneError::Json(e) if e.line() > 0 => {
                let start = line_col_to_offset(source, e.line(), e.column());
                Some(start..(start + 1).min(source.len()).max(start))
            }
            _ => None,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Falls back to the plain message when the error has no location.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span(source) else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.label_message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    fn label_message(&self) -> String {
        match self {
            SceneError::Toml(e) => e.message().to_string(),
            SceneError::Json(e) => format!("{:?} error here", e.classify()),
            other => other.to_string(),
        }
    }
}

/// Convert a 1-based line and column to a byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}
