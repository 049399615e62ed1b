pub mod cli;
pub mod prompt;
pub mod toml_config;

use crate::core::{ConfigProvider, RunConfig};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_OUTPUT_PATH: &str = "./primes.json";

/// 空字串或未提供時回傳預設輸出路徑
pub fn resolve_output_path(path: Option<&str>) -> String {
    match path {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => DEFAULT_OUTPUT_PATH.to_string(),
    }
}

impl ConfigProvider for RunConfig {
    fn count(&self) -> i64 {
        self.count
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::warn_on_non_positive_count(self.count);
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use self::cli_args::{CliConfig, ResolvedConfig};

#[cfg(feature = "cli")]
mod cli_args {
    use super::prompt;
    use super::resolve_output_path;
    use super::toml_config::TomlConfig;
    use crate::core::RunConfig;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_required_field, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::io::{BufRead, Write};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "primes-json")]
    #[command(about = "Generate the first N primes and write them as a JSON array")]
    pub struct CliConfig {
        /// Number of primes to generate (prompted when omitted)
        #[arg(long, allow_negative_numbers = true)]
        pub count: Option<i64>,

        /// Output file path (defaults to ./primes.json)
        #[arg(long)]
        pub output_path: Option<String>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Fail instead of prompting when the count is missing
        #[arg(long)]
        pub no_prompt: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[arg(long, help = "Log CPU and memory usage per stage")]
        pub monitor: bool,

        /// Dry run - show what would be generated without writing
        #[arg(long)]
        pub dry_run: bool,
    }

    /// 解析完成的執行設定，加上是否啟用監控
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ResolvedConfig {
        pub run: RunConfig,
        pub monitor_enabled: bool,
    }

    impl CliConfig {
        /// 依序套用設定檔、命令列參數，最後才互動詢問缺少的值
        pub fn resolve<R: BufRead, W: Write>(
            &self,
            input: &mut R,
            output: &mut W,
        ) -> Result<ResolvedConfig> {
            let file = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    let file = TomlConfig::from_file(path)?;
                    file.validate()?;
                    Some(file)
                }
                None => None,
            };

            let mut count = self.count.or_else(|| file.as_ref().and_then(|f| f.count()));
            let mut output_path = self
                .output_path
                .clone()
                .or_else(|| file.as_ref().and_then(|f| f.output_path().map(str::to_string)));

            if count.is_none() && !self.no_prompt {
                count = Some(prompt::prompt_count(input, output)?);
                if output_path.is_none() {
                    output_path = Some(prompt::prompt_output_path(input, output)?);
                }
            }

            let count = *validate_required_field("count", &count)?;
            // --monitor 可開啟監控，設定檔中的 [monitoring] 亦可
            let monitor_enabled =
                self.monitor || file.as_ref().is_some_and(TomlConfig::monitoring_enabled);

            Ok(ResolvedConfig {
                run: RunConfig::new(count, resolve_output_path(output_path.as_deref())),
                monitor_enabled,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path_defaults() {
        assert_eq!(resolve_output_path(None), "./primes.json");
        assert_eq!(resolve_output_path(Some("")), "./primes.json");
        assert_eq!(resolve_output_path(Some("out/p.json")), "out/p.json");
    }

    #[test]
    fn test_run_config_validation() {
        assert!(RunConfig::new(5, "./primes.json").validate().is_ok());
        assert!(RunConfig::new(-5, "./primes.json").validate().is_ok());
        assert!(RunConfig::new(5, "").validate().is_err());
    }

    #[cfg(feature = "cli")]
    mod cli {
        use super::super::*;
        use clap::Parser;
        use std::io::Write as _;
        use tempfile::NamedTempFile;

        fn config_file(content: &str) -> NamedTempFile {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(content.as_bytes()).unwrap();
            file
        }

        #[test]
        fn test_flags_skip_prompt_and_use_default_path() {
            let config = CliConfig::parse_from(["primes-json", "--count", "7"]);
            let mut input: &[u8] = b"";
            let mut output = Vec::new();

            let resolved = config.resolve(&mut input, &mut output).unwrap();

            assert_eq!(resolved.run, RunConfig::new(7, "./primes.json"));
            assert!(!resolved.monitor_enabled);
            assert!(output.is_empty());
        }

        #[test]
        fn test_negative_count_flag_is_accepted() {
            let config = CliConfig::parse_from(["primes-json", "--count", "-4"]);
            let mut input: &[u8] = b"";
            let mut output = Vec::new();

            let resolved = config.resolve(&mut input, &mut output).unwrap();
            assert_eq!(resolved.run.count, -4);
        }

        #[test]
        fn test_missing_count_prompts_for_both_values() {
            let config = CliConfig::parse_from(["primes-json"]);
            let mut input: &[u8] = b"3\nout.json\n";
            let mut output = Vec::new();

            let resolved = config.resolve(&mut input, &mut output).unwrap();

            assert_eq!(resolved.run, RunConfig::new(3, "out.json"));
            let shown = String::from_utf8(output).unwrap();
            assert!(shown.contains("Enter the number of primes to compute: "));
            assert!(shown.contains("Enter the output file location (default ./primes.json): "));
        }

        #[test]
        fn test_whitespace_path_answer_is_kept() {
            let config = CliConfig::parse_from(["primes-json"]);
            let mut input: &[u8] = b"3\n   \n";
            let mut output = Vec::new();

            let resolved = config.resolve(&mut input, &mut output).unwrap();
            assert_eq!(resolved.run.output_path, "   ");
        }

        #[test]
        fn test_no_prompt_without_count_fails() {
            let config = CliConfig::parse_from(["primes-json", "--no-prompt"]);
            let mut input: &[u8] = b"3\n";
            let mut output = Vec::new();

            assert!(config.resolve(&mut input, &mut output).is_err());
        }

        #[test]
        fn test_flags_override_config_file() {
            let file = config_file("[run]\ncount = 10\noutput_path = \"from-file.json\"\n");
            let path = file.path().to_str().unwrap().to_string();

            let config =
                CliConfig::parse_from(["primes-json", "--config", path.as_str(), "--count", "2"]);
            let mut input: &[u8] = b"";
            let mut output = Vec::new();

            let resolved = config.resolve(&mut input, &mut output).unwrap();
            assert_eq!(resolved.run, RunConfig::new(2, "from-file.json"));
        }

        #[test]
        fn test_monitoring_from_file_or_flag() {
            let file = config_file("[run]\ncount = 1\n\n[monitoring]\nenabled = true\n");
            let path = file.path().to_str().unwrap().to_string();
            let mut output = Vec::new();

            let from_file = CliConfig::parse_from(["primes-json", "--config", path.as_str()])
                .resolve(&mut &b""[..], &mut output)
                .unwrap();
            assert!(from_file.monitor_enabled);

            let from_flag = CliConfig::parse_from(["primes-json", "--count", "1", "--monitor"])
                .resolve(&mut &b""[..], &mut output)
                .unwrap();
            assert!(from_flag.monitor_enabled);
        }
    }
}
