use crate::core::convert::{convert_with_stats, write_json};
use crate::core::{ConfigProvider, KeyMapping, Pipeline};
use crate::utils::error::Result;

pub struct KeymapPipeline<C: ConfigProvider> {
    pub(crate) config: C,
}

impl<C: ConfigProvider> KeymapPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Pipeline for KeymapPipeline<C> {
    fn extract(&self) -> Result<KeyMapping> {
        let (mapping, stats) = convert_with_stats(self.config.csv_file_path())?;
        tracing::debug!("Conversion stats: {:?}", stats);
        Ok(mapping)
    }

    fn load(&self, mapping: &KeyMapping) -> Result<String> {
        let output = self.config.output_file();
        write_json(mapping, output)?;
        Ok(output.display().to_string())
    }
}
