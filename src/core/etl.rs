use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Converting CSV to key mapping...");
        let mapping = self.pipeline.extract()?;
        tracing::info!("Collected {} keys", mapping.len());

        // 讀取完成後才建立輸出檔
        let output_path = self.pipeline.load(&mapping)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
