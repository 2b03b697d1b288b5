//! Image source resolution.
//!
//! Local image paths are rewritten to absolute `file://` URLs when the file
//! exists, so a page written to a temporary location still finds its images.
//! The filesystem lookup sits behind [`AssetResolver`] so rendering can be
//! exercised without touching the disk.

use std::io;
use std::path::{Path, PathBuf};

/// Locates local assets referenced by a document.
pub trait AssetResolver {
    /// Return the absolute path of `relative` if it exists, `None` otherwise.
    fn locate(&self, relative: &str) -> io::Result<Option<PathBuf>>;
}

/// Resolver backed by the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsResolver {
    /// Directory relative paths are joined onto. `None` means the process
    /// working directory at lookup time.
    base: Option<PathBuf>,
}

impl FsResolver {
    /// Resolve against the working directory at the time of each lookup.
    pub fn current_dir() -> Self {
        Self { base: None }
    }

    /// Resolve against a fixed base directory.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }
}

impl AssetResolver for FsResolver {
    fn locate(&self, relative: &str) -> io::Result<Option<PathBuf>> {
        let base = match &self.base {
            Some(base) => base.clone(),
            None => std::env::current_dir()?,
        };
        let candidate = base.join(relative);
        log::debug!("probing image path {}", candidate.display());
        if candidate.try_exists()? {
            Ok(Some(candidate))
        } else {
            Ok(None)
        }
    }
}

/// Resolver that never finds anything; sources are left as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn locate(&self, _relative: &str) -> io::Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Whether `src` names a local file: no URI scheme, or the `file` scheme.
pub fn is_local(src: &str) -> bool {
    match uri_scheme(src) {
        None => true,
        Some(scheme) => scheme.eq_ignore_ascii_case("file"),
    }
}

/// Extract a URI scheme (`scheme:`), treating single-letter drive prefixes
/// like `C:` as paths.
fn uri_scheme(src: &str) -> Option<&str> {
    let (scheme, _) = src.trim().split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() || scheme.len() < 2 {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}

/// Resolve an image `src` for embedding in the page.
///
/// Remote URLs pass through. Local paths are cleaned (surrounding whitespace
/// and quotes, one leading `/`), looked up through `assets`, and rewritten to a
/// `file://` URL when found. A missing file or a failed lookup yields `src`
/// unchanged.
pub fn resolve_image_src(src: &str, assets: &dyn AssetResolver) -> String {
    if src.trim().is_empty() || !is_local(src) {
        return src.to_string();
    }

    let cleaned = src.trim().trim_matches(|c| c == '\'' || c == '"').trim();
    let cleaned = strip_file_scheme(cleaned);
    let relative = cleaned.strip_prefix('/').unwrap_or(cleaned);

    match assets.locate(relative) {
        Ok(Some(path)) => file_url(&path),
        Ok(None) => {
            log::debug!("image not found: {relative}");
            src.to_string()
        }
        Err(err) => {
            log::warn!("could not resolve image path '{relative}': {err}");
            src.to_string()
        }
    }
}

fn strip_file_scheme(src: &str) -> &str {
    match src.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("file://") => &src[7..],
        _ => match src.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("file:") => &src[5..],
            _ => src,
        },
    }
}

/// Format an absolute path as a `file://` URL with forward slashes.
pub fn file_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    if normalized.starts_with('/') {
        format!("file://{normalized}")
    } else {
        // Windows drive-letter form: C:/dir -> file:///C:/dir
        format!("file:///{normalized}")
    }
}
