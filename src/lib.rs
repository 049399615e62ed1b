pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, resolve_output_path, DEFAULT_OUTPUT_PATH};
pub use crate::core::{
    engine::PrimeEngine,
    pipeline::JsonPipeline,
    primes::{generate, is_prime},
    PrimeSequence, RunConfig, RunReport,
};
pub use utils::error::{PrimeError, Result};

/// 以明確的設定執行：產生質數並寫入 JSON 檔
pub fn run(config: RunConfig, monitor_enabled: bool) -> Result<RunReport> {
    use crate::utils::validation::Validate;

    config.validate()?;
    let pipeline = JsonPipeline::new(LocalStorage::default(), config);
    PrimeEngine::new_with_monitoring(pipeline, monitor_enabled).run()
}
