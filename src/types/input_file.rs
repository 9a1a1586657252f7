//! Local files uploaded as multipart parts.

use std::path::{Path, PathBuf};

/// A local file sent as raw bytes under a form field name.
///
/// Only a file with both a path and a field name takes part in a request;
/// a half-filled value is treated as if it were absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFile {
    /// Path of the file on the local filesystem.
    pub path: PathBuf,
    /// Multipart field name the file is sent under.
    pub name: String,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Whether the file participates in multipart encoding.
    pub fn is_attached(&self) -> bool {
        !self.path.as_os_str().is_empty() && !self.name.is_empty()
    }

    /// File name reported in the part's `Content-Disposition`: the path's
    /// base name, or the whole path when it has none.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// `attach://<name>` reference used by `InputMedia.media` to point at this
    /// part; `None` when the file will not be sent.
    pub fn attach_uri(&self) -> Option<String> {
        self.is_attached().then(|| format!("attach://{}", self.name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Collect the attached files among `candidates`, preserving order.
pub fn attached<'a, I>(candidates: I) -> Vec<&'a InputFile>
where
    I: IntoIterator<Item = Option<&'a InputFile>>,
{
    candidates
        .into_iter()
        .flatten()
        .filter(|f| f.is_attached())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attached_requires_path_and_name() {
        assert!(InputFile::new("/tmp/cat.jpg", "photo").is_attached());
        assert!(!InputFile::new("", "photo").is_attached());
        assert!(!InputFile::new("/tmp/cat.jpg", "").is_attached());
        assert!(!InputFile::default().is_attached());
    }

    #[test]
    fn file_name_is_base_name() {
        assert_eq!(
            InputFile::new("/var/data/report.pdf", "document").file_name(),
            "report.pdf"
        );
        assert_eq!(InputFile::new("notes.txt", "document").file_name(), "notes.txt");
    }

    #[test]
    fn attached_filters_and_keeps_order() {
        let a = InputFile::new("a.png", "photo");
        let half = InputFile::new("b.png", "");
        let c = InputFile::new("c.png", "thumb");
        let files = attached([Some(&a), None, Some(&half), Some(&c)]);
        assert_eq!(files, vec![&a, &c]);
    }

    #[test]
    fn attach_uri_uses_field_name() {
        assert_eq!(
            InputFile::new("x.jpg", "p0").attach_uri().as_deref(),
            Some("attach://p0")
        );
        assert_eq!(InputFile::new("", "p0").attach_uri(), None);
        assert_eq!(InputFile::new("x.jpg", "").attach_uri(), None);
    }
}
