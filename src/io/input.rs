//! Input selection: where the batch gets its ordered list of source images.
//! An empty list is a valid outcome meaning "nothing to do".
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;

/// Image extensions picked up when scanning a directory (case-insensitive).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tga", "gif"];

pub trait InputSource {
    fn inputs(&self) -> Result<Vec<PathBuf>>;
}

/// Explicit list of files, kept in the given order.
#[derive(Debug, Clone, Default)]
pub struct PathList {
    pub paths: Vec<PathBuf>,
}

impl PathList {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl InputSource for PathList {
    fn inputs(&self) -> Result<Vec<PathBuf>> {
        Ok(self
            .paths
            .iter()
            .map(|path| match std::fs::canonicalize(path) {
                Ok(full) => full,
                Err(e) => {
                    warn!(
                        "Could not get canonical path for {:?} ({}). Using it as given.",
                        path, e
                    );
                    path.clone()
                }
            })
            .collect())
    }
}

/// Every supported image inside a directory, sorted for stable ordering.
#[derive(Debug, Clone)]
pub struct DirectoryScan {
    pub dir: PathBuf,
    pub recursive: bool,
}

impl DirectoryScan {
    pub fn new(dir: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            dir: dir.into(),
            recursive,
        }
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn collect_images_from_dir(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                collect_images_from_dir(&path, recursive, files)?;
            }
        } else if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    Ok(())
}

impl InputSource for DirectoryScan {
    fn inputs(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_images_from_dir(&self.dir, self.recursive, &mut files)?;
        files.sort();
        Ok(files)
    }
}

/// Several sources chained in order.
impl InputSource for Vec<Box<dyn InputSource>> {
    fn inputs(&self) -> Result<Vec<PathBuf>> {
        let mut all = Vec::new();
        for source in self {
            all.extend(source.inputs()?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(is_supported_image(Path::new("a/B.PNG")));
        assert!(is_supported_image(Path::new("x.Jpeg")));
        assert!(!is_supported_image(Path::new("x.tiff")));
        assert!(!is_supported_image(Path::new("noext")));
    }

    #[test]
    fn directory_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.png"));
        touch(&dir.path().join("a.JPG"));
        touch(&dir.path().join("readme.md"));
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested").join("c.gif"));

        let flat = DirectoryScan::new(dir.path(), false).inputs().unwrap();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png"]);

        let deep = DirectoryScan::new(dir.path(), true).inputs().unwrap();
        assert_eq!(deep.len(), 3);
        assert!(deep.iter().any(|p| p.ends_with("nested/c.gif")));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DirectoryScan::new(dir.path().join("gone"), false).inputs().is_err());
    }

    #[test]
    fn path_list_keeps_order_and_unresolvable_paths() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("z.png");
        touch(&real);
        let ghost = PathBuf::from("does/not/exist.png");

        let list = PathList::new(vec![real.clone(), ghost.clone()]);
        let inputs = list.inputs().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], std::fs::canonicalize(&real).unwrap());
        assert_eq!(inputs[1], ghost);
    }

    #[test]
    fn empty_list_is_nothing_to_do() {
        assert!(PathList::default().inputs().unwrap().is_empty());
    }
}
