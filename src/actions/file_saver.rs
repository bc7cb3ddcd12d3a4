use std::{fs, path::PathBuf};

use crate::app::models::app_error::AppError;

/// Destination of the "save prompt" action.
pub trait FileSaver: Send + Sync {
    fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, AppError>;
}

/// Writes exports into a single directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectoryFileSaver {
    dir: PathBuf,
}

impl DirectoryFileSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSaver for DirectoryFileSaver {
    fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::new(format!("failed to create {}: {}", self.dir.display(), e))
        })?;

        let path = self.dir.join(filename);
        fs::write(&path, contents)
            .map_err(|e| AppError::new(format!("failed to write {}: {}", path.display(), e)))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_exact_contents() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectoryFileSaver::new(dir.path().join("exports"));

        let path = saver.save("prompt_en.txt", "a cat, Anime").unwrap();

        assert_eq!(path, dir.path().join("exports").join("prompt_en.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "a cat, Anime");
    }

    #[test]
    fn test_save_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectoryFileSaver::new(dir.path());

        saver.save("prompt_ko.txt", "first").unwrap();
        let path = saver.save("prompt_ko.txt", "").unwrap();

        assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let saver = DirectoryFileSaver::new(&blocker);

        assert!(saver.save("prompt_ko.txt", "a cat").is_err());
    }
}
