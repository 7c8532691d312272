//! Report artifacts on disk: dated markdown and map files under the export
//! directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

pub fn report_path(export_dir: &Path, date_str: &str) -> PathBuf {
    export_dir.join(format!("{date_str}.md"))
}

pub fn map_path(export_dir: &Path, date_str: &str) -> PathBuf {
    export_dir.join(format!("{date_str}.png"))
}

/// Write the markdown report, creating the export directory if needed.
pub fn write_report(export_dir: &Path, date_str: &str, text: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(export_dir)
        .with_context(|| format!("Failed to create {}", export_dir.display()))?;

    let path = report_path(export_dir, date_str);
    std::fs::write(&path, text)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Markdown report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_dated_report_under_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("export");

        let path = write_report(&export, "2025-08-24", "# report").unwrap();
        assert_eq!(path, export.join("2025-08-24.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }

    #[test]
    fn artifact_paths_share_the_date_stem() {
        let export = Path::new("export");
        assert_eq!(report_path(export, "2025-08-24"), Path::new("export/2025-08-24.md"));
        assert_eq!(map_path(export, "2025-08-24"), Path::new("export/2025-08-24.png"));
    }
}
