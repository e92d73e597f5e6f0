use std::path::PathBuf;

const TEMP_DIR_ROOT_NAME: &str = "mockable_test";

/// Per test directory in the system temp folder.
pub struct TempDir;

impl TempDir {
    /// Path of the temp directory of the given test, the directory is not created.
    pub fn build_path(module_name: &str, name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(TEMP_DIR_ROOT_NAME)
            .join(module_name)
            .join(name)
    }

    /// (Re)create an empty temp directory for the given test and return its path.
    pub fn create(module_name: &str, name: &str) -> PathBuf {
        let path = Self::build_path(module_name, name);
        if path.exists() {
            std::fs::remove_dir_all(&path)
                .unwrap_or_else(|e| panic!("Could not remove dir {path:?}: {e}"));
        }
        std::fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("Could not create dir {path:?}: {e}"));

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_gives_an_existing_empty_directory() {
        let path = TempDir::create("temp_dir", "create_gives_an_existing_empty_directory");
        std::fs::write(path.join("file.txt"), "content").unwrap();

        let path = TempDir::create("temp_dir", "create_gives_an_existing_empty_directory");

        assert!(path.is_dir());
        assert_eq!(0, std::fs::read_dir(&path).unwrap().count());
    }
}
