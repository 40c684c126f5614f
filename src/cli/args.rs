#![forbid(unsafe_code)]

//! Input resolution and path validation
//!
//! Turns the raw argument list into an [`Invocation`]: an input source
//! (file or stdin) plus a counting mode. All validation happens here,
//! synchronously, before any stream is opened; the only filesystem access
//! is a metadata existence check on an already grammar-approved path.

use crate::engine::InputSource;
use crate::error::CountError;
use crate::types::Mode;
use std::path::Path;

/// Extensions a path argument may carry to be treated as a text file.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "csv", "json", "xml", "log", "html"];

/// A fully resolved run: where to read from and what to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: InputSource,
    pub mode: Mode,
}

/// Resolve the raw argument list (program name already stripped).
///
/// - no arguments: usage error
/// - one argument: a path (counted in all mode) or a flag (stdin)
/// - two arguments: `<flag> <path>`, validated in that priority order
///   (flag validity, then path shape, then existence)
/// - anything longer is rejected as a usage error
pub fn resolve(args: &[String]) -> Result<Invocation, CountError> {
    match args {
        [] => Err(CountError::Usage),
        [single] => resolve_single(single),
        [flag, path] => {
            let mode = Mode::from_flag(flag).ok_or_else(|| CountError::InvalidFlag(flag.clone()))?;
            let source = resolve_file(path)?;
            Ok(Invocation { source, mode })
        }
        _ => Err(CountError::Usage),
    }
}

fn resolve_single(arg: &str) -> Result<Invocation, CountError> {
    if is_countable_path(arg) {
        let source = resolve_file(arg)?;
        return Ok(Invocation {
            source,
            mode: Mode::All,
        });
    }

    if let Some(mode) = Mode::from_flag(arg) {
        return Ok(Invocation {
            source: InputSource::Stdin,
            mode,
        });
    }

    // Not a path shape and not a recognized flag. A token carrying the
    // flag marker was clearly meant as a flag; everything else was meant
    // as a path.
    if arg.starts_with('-') {
        Err(CountError::InvalidFlag(arg.to_string()))
    } else {
        Err(CountError::InvalidPathShape(arg.to_string()))
    }
}

/// Grammar-check the path, then confirm the file exists on disk.
fn resolve_file(path: &str) -> Result<InputSource, CountError> {
    if !is_countable_path(path) {
        return Err(CountError::InvalidPathShape(path.to_string()));
    }
    if !Path::new(path).is_file() {
        return Err(CountError::FileNotFound(path.to_string()));
    }
    Ok(InputSource::file(path))
}

/// Explicit grammar check for "looks like a text file path".
///
/// A path is accepted only if it contains at least one separator, has no
/// `..` parent-traversal component, and its last component carries one of
/// the recognized text extensions (case-insensitive). Rejection happens
/// before any filesystem access.
pub fn is_countable_path(candidate: &str) -> bool {
    if !candidate.contains(['/', '\\']) {
        return false;
    }
    if candidate.split(['/', '\\']).any(|component| component == "..") {
        return false;
    }

    let last = candidate
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(candidate);
    match last.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            TEXT_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}
