use crate::domain::model::KeyMapping;
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    fn csv_file_path(&self) -> &Path;
    fn output_file(&self) -> &Path;
}

pub trait Pipeline {
    fn extract(&self) -> Result<KeyMapping>;
    /// Persists the mapping and returns where it was written.
    fn load(&self, mapping: &KeyMapping) -> Result<String>;
}
