#[cfg(feature = "cli")]
pub mod cli;
pub mod scoring;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli_args {
    use crate::config::scoring::PRESET_NAMES;
    use crate::config::toml_config::EngineToml;
    use crate::utils::error::{EngineError, Result};
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "attune")]
    #[command(about = "Derive profiles from survey answers and score their compatibility")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Command,

        #[arg(long, global = true, help = "Engine configuration file (TOML)")]
        pub config: Option<String>,

        #[arg(long, global = true, help = "Scoring preset, overrides the config file")]
        pub preset: Option<String>,

        #[arg(long, global = true, default_value = ".", help = "Base directory for input and output files")]
        pub base_path: String,

        #[arg(long, global = true, help = "Emit JSON logs")]
        pub json_logs: bool,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
    pub enum Command {
        /// Derive a profile from a JSON answer document
        Derive {
            #[arg(long)]
            answers: String,
            #[arg(long)]
            user_id: String,
            #[arg(long, default_value = "profile.json")]
            output: String,
            #[arg(long, help = "Fail on any malformed answer")]
            strict: bool,
        },
        /// Score two profile documents
        Score {
            left: String,
            right: String,
            #[arg(long)]
            output: Option<String>,
        },
        /// Score every pair in a JSON array of profiles
        Batch {
            #[arg(long)]
            profiles: String,
            #[arg(long, default_value = "batch_report.json")]
            output: String,
            #[arg(long, help = "Worker count, overrides the config file")]
            max_concurrency: Option<usize>,
        },
    }

    impl CliConfig {
        /// Config file if given, with `--preset` layered on top.
        pub fn engine_toml(&self) -> Result<EngineToml> {
            let mut toml = match &self.config {
                Some(path) => EngineToml::from_file(path)?,
                None => EngineToml::default(),
            };
            if let Some(preset) = &self.preset {
                toml.engine.preset = Some(preset.clone());
            }
            Ok(toml)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(preset) = &self.preset {
                if !PRESET_NAMES.contains(&preset.as_str()) {
                    return Err(EngineError::UnknownPreset {
                        name: preset.clone(),
                    });
                }
            }
            crate::utils::validation::validate_non_empty_string("base_path", &self.base_path)?;
            if let Command::Batch {
                max_concurrency: Some(workers),
                ..
            } = &self.command
            {
                crate::utils::validation::validate_range("max_concurrency", *workers, 1, 256)?;
            }
            Ok(())
        }
    }

}
