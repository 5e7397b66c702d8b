pub mod confirm;
pub mod data_dir;
pub mod entry;
pub mod index;
pub mod migrate;
pub mod plan;
pub mod refresh;
pub mod schema_file;
