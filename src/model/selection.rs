use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Cancelled,
    Single(PathBuf),
    Multiple(Vec<PathBuf>),
}

impl Selection {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Selection::Cancelled)
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Cancelled => 0,
            Selection::Single(_) => 1,
            Selection::Multiple(paths) => paths.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Selection::Cancelled => Vec::new(),
            Selection::Single(path) => vec![path.as_path()],
            Selection::Multiple(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }

    /// First path of the selection, dropping any others; `None` when cancelled.
    pub fn first_path(&self) -> Option<&Path> {
        match self {
            Selection::Cancelled => None,
            Selection::Single(path) => Some(path),
            Selection::Multiple(paths) => paths.first().map(PathBuf::as_path),
        }
    }
}

impl From<Option<PathBuf>> for Selection {
    fn from(picked: Option<PathBuf>) -> Self {
        match picked {
            Some(path) => Selection::Single(path),
            None => Selection::Cancelled,
        }
    }
}

impl From<Option<Vec<PathBuf>>> for Selection {
    /// A dismissed dialog and an empty path list both count as cancelled.
    fn from(picked: Option<Vec<PathBuf>>) -> Self {
        match picked {
            Some(paths) if !paths.is_empty() => Selection::Multiple(paths),
            _ => Selection::Cancelled,
        }
    }
}
