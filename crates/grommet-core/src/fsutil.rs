// File: crates/grommet-core/src/fsutil.rs
// Summary: Output-path helpers shared by the report, SVG and raster writers.

use std::path::Path;

use anyhow::{Context, Result};

/// Create the directory `path` will be written into, if it has one.
pub fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_parent_and_accepts_bare_names() {
        let path = Path::new("target/test_out/fsutil/nested/out.csv");
        create_parent_dir(path).unwrap();
        assert!(Path::new("target/test_out/fsutil/nested").is_dir());
        create_parent_dir(Path::new("out.csv")).unwrap();
    }

    #[test]
    fn reports_the_blocked_directory() {
        let blocker = Path::new("target/test_out/fsutil_blocker");
        create_parent_dir(&blocker.join("x")).unwrap();
        std::fs::write(blocker.join("file"), b"x").unwrap();
        let err = create_parent_dir(&blocker.join("file/inner/out.csv")).unwrap_err();
        assert!(err.to_string().starts_with("creating "), "{err}");
    }
}
