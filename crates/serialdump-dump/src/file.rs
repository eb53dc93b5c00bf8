use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{DumpError, Result};

/// Write `data` verbatim to `path`, replacing any existing file.
///
/// The file is synced before returning.
pub fn write_raw(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let wrap = |source| DumpError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(data).map_err(wrap)?;
    file.sync_all().map_err(wrap)?;

    tracing::info!(path = %path.display(), bytes = data.len(), "raw dump saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "serialdump-dump-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn file_matches_buffer() {
        let dir = unique_temp_dir("match");
        let path = dir.join("dump.bin");
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

        write_raw(&path, &data).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), data);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = unique_temp_dir("overwrite");
        let path = dir.join("dump.bin");
        std::fs::write(&path, vec![0xFF; 64]).unwrap();

        write_raw(&path, b"short").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_buffer_creates_empty_file() {
        let dir = unique_temp_dir("empty");
        let path = dir.join("dump.bin");

        write_raw(&path, &[]).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_reports_path() {
        let dir = unique_temp_dir("missing");
        let path = dir.join("no-such-dir").join("dump.bin");

        let err = write_raw(&path, b"x").unwrap_err();
        assert_eq!(err.io().kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("no-such-dir"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
