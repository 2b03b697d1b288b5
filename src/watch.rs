use anyhow::{Context, Result};
use colored::Colorize;
use notify::{EventKind, RecursiveMode, Watcher};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use webforge_core::AssetResolver;

use crate::config::WebforgeConfig;
use crate::preview::render_preview;

/// Keeps the preview file in step with a source document.
pub struct Previewer<'a> {
    source: PathBuf,
    output: PathBuf,
    assets: &'a dyn AssetResolver,
    last_digest: Option<String>,
    quiet: bool,
}

impl<'a> Previewer<'a> {
    pub fn new(
        source: PathBuf,
        output: PathBuf,
        assets: &'a dyn AssetResolver,
        quiet: bool,
    ) -> Self {
        Self {
            source,
            output,
            assets,
            last_digest: None,
            quiet,
        }
    }

    /// Re-render the preview if the source content changed since the last
    /// run. Returns whether the preview file was written.
    pub fn refresh(&mut self) -> Result<bool> {
        let content = std::fs::read_to_string(&self.source)
            .with_context(|| format!("Failed to read '{}'", self.source.display()))?;

        let digest = content_digest(&content);
        if self.last_digest.as_deref() == Some(digest.as_str()) {
            log::debug!("{} unchanged, skipping", self.source.display());
            return Ok(false);
        }

        let compiled = render_preview(&content, self.assets);
        std::fs::write(&self.output, &compiled.html)
            .with_context(|| format!("Failed to write '{}'", self.output.display()))?;
        self.last_digest = Some(digest);

        if !self.quiet {
            let status = if compiled.success {
                "Updated".green().bold()
            } else {
                "Updated (with errors)".yellow().bold()
            };
            println!("{} {}", status, self.output.display());
        }
        for diag in &compiled.diagnostics {
            log::warn!("{}: {}", self.source.display(), diag.message);
        }
        Ok(true)
    }
}

/// SHA-256 of the document text, hex encoded.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Render `file` once, then re-render on every change until interrupted.
pub fn watch_and_preview(
    file: &Path,
    out: Option<&Path>,
    config: &WebforgeConfig,
    quiet: bool,
) -> Result<()> {
    let file_path = std::fs::canonicalize(file)
        .with_context(|| format!("Cannot resolve path '{}'", file.display()))?;

    let watch_dir = file_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine parent directory of '{}'", file.display()))?
        .to_path_buf();

    let output = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.preview_file.clone());
    let resolver = config.resolver();
    let mut previewer = Previewer::new(file_path.clone(), output, &resolver, quiet);

    if let Err(e) = previewer.refresh() {
        eprintln!("{} {:#}", "Preview error:".red().bold(), e);
    }

    if !quiet {
        println!(
            "{} {} for changes (Ctrl+C to stop)",
            "Watching".cyan().bold(),
            file.display()
        );
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        match res {
            Ok(event) => {
                let _ = tx.send(event);
            }
            Err(e) => log::error!("watch error: {e}"),
        }
    })?;

    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    let debounce = Duration::from_millis(config.debounce_ms);
    let mut pending: Option<Instant> = None;

    loop {
        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(event) => {
                let relevant = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
                let affects_our_file = event
                    .paths
                    .iter()
                    .any(|p| p.canonicalize().ok().as_ref() == Some(&file_path));

                if relevant && affects_our_file {
                    // Restart the quiet period on every edit.
                    pending = Some(Instant::now());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if pending.is_some_and(|since| since.elapsed() >= debounce) {
            pending = None;
            if let Err(e) = previewer.refresh() {
                eprintln!("{} {:#}", "Preview error:".red().bold(), e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webforge_core::NoAssets;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn digest_is_hex_sha256() {
        let h = content_digest("title: A");
        assert_eq!(h.len(), 64);
        assert_eq!(h, content_digest("title: A"));
        assert_ne!(h, content_digest("title: B"));
    }

    #[test]
    fn refresh_skips_unchanged_content() {
        let dir = temp_dir("webforge-watch-skip");
        let src = dir.join("page.yaml");
        let out = dir.join("preview.html");
        std::fs::write(&src, "title: First").unwrap();

        let mut previewer = Previewer::new(src.clone(), out.clone(), &NoAssets, true);
        assert!(previewer.refresh().unwrap());
        assert!(std::fs::read_to_string(&out).unwrap().contains("<title>First</title>"));
        assert!(!previewer.refresh().unwrap());

        std::fs::write(&src, "title: Second").unwrap();
        assert!(previewer.refresh().unwrap());
        assert!(std::fs::read_to_string(&out).unwrap().contains("<title>Second</title>"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn refresh_writes_error_page_for_bad_yaml() {
        let dir = temp_dir("webforge-watch-error");
        let src = dir.join("page.yaml");
        let out = dir.join("preview.html");
        std::fs::write(&src, "title: [").unwrap();

        let mut previewer = Previewer::new(src, out.clone(), &NoAssets, true);
        assert!(previewer.refresh().unwrap());
        assert!(std::fs::read_to_string(&out).unwrap().contains("YAML Error"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn refresh_missing_source_is_error() {
        let dir = temp_dir("webforge-watch-missing");
        let mut previewer =
            Previewer::new(dir.join("nope.yaml"), dir.join("out.html"), &NoAssets, true);
        let err = previewer.refresh().unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
