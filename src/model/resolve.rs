use std::path::{Path, PathBuf};

use super::Selection;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub device_path: PathBuf,
    pub display_handle: String,
}

pub fn resolve_selection(selection: &Selection) -> Vec<ResolvedInput> {
    selection
        .paths()
        .into_iter()
        .map(|path| ResolvedInput {
            device_path: path.to_path_buf(),
            display_handle: display_handle(path),
        })
        .collect()
}

pub fn display_handle(path: &Path) -> String {
    format!("asset://localhost/{}", urlencoding::encode(&path.to_string_lossy()))
}
