mod picker;
mod request;


pub use picker::{FilePicker, NativePicker};
pub use request::{FileFilter, PickRequest};
