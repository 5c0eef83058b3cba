#[derive(Debug, Clone, PartialEq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickRequest {
    pub multiple: bool,
    pub directory: bool,
    pub filters: Vec<FileFilter>,
}

impl PickRequest {
    pub fn exposure_images() -> Self {
        Self {
            multiple: true,
            directory: false,
            filters: vec![FileFilter {
                name: "Image".to_string(),
                extensions: vec!["jpg".into(), "jpeg".into(), "JPG".into(), "JPEG".into()],
            }],
        }
    }

    pub fn batch_directories() -> Self {
        Self {
            multiple: true,
            directory: true,
            filters: Vec::new(),
        }
    }

    /// Multi-select stays enabled even though only the first path is kept.
    pub fn calibration_file() -> Self {
        Self {
            multiple: true,
            directory: false,
            filters: Vec::new(),
        }
    }
}
