use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created next to `path` and renamed over it once
/// fully written, so readers never observe a half-written workbook. The
/// parent directory must already exist.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> std::io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Same directory so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("bcg.xlsx");

        atomic_write(&file_path, b"PK\x03\x04")?;

        assert_eq!(fs::read(file_path)?, b"PK\x03\x04");
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("bcg.xlsx");

        atomic_write(&file_path, "Initial")?;
        atomic_write(&file_path, "Updated")?;

        assert_eq!(fs::read_to_string(&file_path)?, "Updated");
        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_atomic_write_missing_directory_fails() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("missing/bcg.xlsx");
        assert!(atomic_write(&file_path, "x").is_err());
        assert!(!file_path.exists());
        Ok(())
    }
}
