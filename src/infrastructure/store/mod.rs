//! Note store adapters

mod json_file;
mod local_fs;

pub use json_file::JsonFileMetadataStore;
pub use local_fs::LocalFileStore;
