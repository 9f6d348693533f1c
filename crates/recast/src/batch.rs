//! Per-file batch conversion with strict isolation.
//!
//! Each file's parse → rewrite → generate run is independent and owns
//! all of its state, so conversions fan out across a rayon pool with no
//! synchronization beyond collecting outcomes. One failing file never
//! aborts the batch; its error is carried in the outcome and reported
//! by the caller alongside the successes.

use std::fs;
use std::path::{Path, PathBuf};

use difference::{Changeset, Difference};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use recast_core::error::ConvertError;
use recast_core::frontend::JsonFrontend;
use recast_core::pipeline::Pipeline;

/// Why one file's conversion failed. Scoped to that file only.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// The result of converting one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<String, FileError>,
}

/// Collect the input files for a run.
///
/// A file path is taken as-is; a directory is walked recursively for
/// files with the given extension. The list is sorted so batch output
/// order is stable across runs and platforms.
pub fn discover_inputs(root: &Path, extension: &str) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    files.sort();
    files
}

/// Convert every file through the shared pipeline.
///
/// Conversions run in parallel; outcomes come back in input order so
/// reporting stays deterministic.
pub fn convert_files(pipeline: &Pipeline<JsonFrontend>, files: &[PathBuf]) -> Vec<FileOutcome> {
    files
        .par_iter()
        .map(|path| {
            debug!(file = %path.display(), "converting");
            let result = fs::read_to_string(path)
                .map_err(FileError::from)
                .and_then(|source| pipeline.convert(&source).map_err(FileError::from));
            FileOutcome {
                input: path.clone(),
                result,
            }
        })
        .collect()
}

/// Map an input path into the output directory, swapping the extension
/// to `.py` and preserving the directory structure below `base`.
pub fn output_path(input: &Path, base: Option<&Path>, out_dir: &Path) -> PathBuf {
    let relative = base
        .and_then(|b| input.strip_prefix(b).ok())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(input.file_name().unwrap_or(input.as_os_str())));
    out_dir.join(relative).with_extension("py")
}

/// Render a line-based changeset between the input text and the
/// generated text, unified-diff style markers without hunk headers.
pub fn render_diff(original: &str, generated: &str) -> String {
    let changeset = Changeset::new(original, generated, "\n");
    let mut out = String::new();
    for diff in changeset.diffs {
        let (marker, text) = match &diff {
            Difference::Same(text) => (' ', text),
            Difference::Add(text) => ('+', text),
            Difference::Rem(text) => ('-', text),
        };
        for line in text.lines() {
            out.push(marker);
            out.push(' ');
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_preserves_structure_under_base() {
        let path = output_path(
            Path::new("in/sub/file.json"),
            Some(Path::new("in")),
            Path::new("out"),
        );
        assert_eq!(path, Path::new("out/sub/file.py"));
    }

    #[test]
    fn output_path_without_base_uses_file_name() {
        let path = output_path(Path::new("some/where/file.json"), None, Path::new("out"));
        assert_eq!(path, Path::new("out/file.py"));
    }

    #[test]
    fn diff_marks_added_and_removed_lines() {
        let diff = render_diff("a\nb\n", "a\nc\n");
        assert!(diff.contains("- b"), "{diff}");
        assert!(diff.contains("+ c"), "{diff}");
        assert!(diff.contains("  a"), "{diff}");
    }
}
