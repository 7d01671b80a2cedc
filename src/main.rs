use csv_keymap::utils::{logger, validation::Validate};
use csv_keymap::{CliConfig, ConvertEngine, KeymapError, KeymapPipeline};

fn exit_with(e: &KeymapError) -> ! {
    tracing::debug!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    if !matches!(e, KeymapError::UsageError { .. }) {
        eprintln!("💡 {}", e.recovery_suggestion());
    }
    std::process::exit(e.exit_code());
}

fn main() {
    logger::init_cli_logger();

    // 參數錯誤時不碰任何檔案
    let config = match CliConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let engine = ConvertEngine::new(KeymapPipeline::new(config));
    match engine.run() {
        Ok(output_path) => {
            println!("✅ Mapping written to: {}", output_path);
        }
        Err(e) => exit_with(&e),
    }
}
