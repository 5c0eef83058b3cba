use rfd::FileDialog;

use crate::model::Selection;

use super::PickRequest;

pub trait FilePicker {
    fn pick(&self, request: &PickRequest) -> Selection;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NativePicker;

impl NativePicker {
    pub fn new() -> Self {
        Self
    }
}

impl FilePicker for NativePicker {
    fn pick(&self, request: &PickRequest) -> Selection {
        let mut dialog = FileDialog::new();
        for filter in &request.filters {
            dialog = dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
        }
        if request.directory {
            if request.multiple {
                dialog.pick_folders().into()
            } else {
                dialog.pick_folder().into()
            }
        } else if request.multiple {
            dialog.pick_files().into()
        } else {
            dialog.pick_file().into()
        }
    }
}
