use anyhow::{Result, bail};
use std::io;
use std::path::Path;

/// 來源必須是已存在的資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 遞迴建立資料夾，已存在時不視為錯誤
pub fn ensure_directory_exists(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());

        assert!(validate_directory_exists(Path::new("")).is_err());

        let missing = temp_dir.path().join("missing");
        assert!(validate_directory_exists(&missing).is_err());

        let file = temp_dir.path().join("file.jpg");
        std::fs::write(&file, "x").unwrap();
        assert!(validate_directory_exists(&file).is_err());
    }

    #[test]
    fn test_ensure_directory_exists_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("2024/01/05_Trip");

        ensure_directory_exists(&nested).unwrap();
        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
