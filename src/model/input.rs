use std::path::{Path, PathBuf};

use super::{Result, Selection, StoreError, resolve_selection};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputCollection {
    names: Vec<String>,
    device_paths: Vec<PathBuf>,
    display_handles: Vec<String>,
}

impl InputCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_many(&mut self, selection: &Selection) {
        for entry in resolve_selection(selection) {
            self.names.push(file_label(&entry.device_path));
            self.device_paths.push(entry.device_path);
            self.display_handles.push(entry.display_handle);
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.names.remove(index);
        self.device_paths.remove(index);
        self.display_handles.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.device_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.device_paths.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn device_paths(&self) -> &[PathBuf] {
        &self.device_paths
    }

    pub fn display_handles(&self) -> &[String] {
        &self.display_handles
    }

    pub fn is_aligned(&self) -> bool {
        self.names.len() == self.device_paths.len()
            && self.device_paths.len() == self.display_handles.len()
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
