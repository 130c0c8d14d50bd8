use attune_engine::config::Command;
use attune_engine::domain::model::{Profile, SurveyAnswers};
use attune_engine::utils::error::{EngineError, ErrorSeverity};
use attune_engine::utils::{logger, validation::Validate};
use attune_engine::{score_all_pairs, CliConfig, CompatibilityEngine, LocalStorage};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting attune CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2, // 輸入錯誤
            ErrorSeverity::High => 1,   // 配置或版本錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), EngineError> {
    let engine_toml = config.engine_toml()?;
    let (scoring, profile_config) = engine_toml.resolve()?;
    let engine = CompatibilityEngine::new(scoring, profile_config)?;
    let storage = LocalStorage::new(config.base_path.clone());

    tracing::info!(
        "Using scoring config {}",
        engine.scoring_config().name
    );

    match &config.command {
        Command::Derive {
            answers,
            user_id,
            output,
            strict,
        } => {
            let answers: SurveyAnswers = storage.read_json(answers).await?;
            let profile = if *strict {
                engine.derive_validated_profile(user_id, &answers)?
            } else {
                let derivation = engine.derive_profile(user_id, &answers);
                if !derivation.is_clean() {
                    tracing::warn!(
                        "{} malformed answer(s) normalized to 0",
                        derivation.issues.len()
                    );
                }
                derivation.profile
            };
            storage.write_json(output, &profile).await?;
            println!(
                "✅ Profile for {} ({}) saved to {}",
                profile.user_id, profile.power.role, output
            );
        }
        Command::Score {
            left,
            right,
            output,
        } => {
            let a: Profile = storage.read_json(left).await?;
            let b: Profile = storage.read_json(right).await?;
            let result = engine.score(&a, &b)?;

            println!(
                "{} × {}: {} ({})",
                a.user_id, b.user_id, result.overall_score, result.interpretation
            );
            for conflict in &result.boundary_conflicts {
                println!(
                    "⚠️  {} has a hard limit on {:?} ({})",
                    conflict.user_id, conflict.boundary, conflict.activity
                );
            }
            match output {
                Some(path) => storage.write_json(path, &result).await?,
                None => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Command::Batch {
            profiles,
            output,
            max_concurrency,
        } => {
            let profiles: Vec<Profile> = storage.read_json(profiles).await?;
            let workers = max_concurrency.unwrap_or_else(|| engine_toml.max_concurrency());
            let report = score_all_pairs(&engine, profiles, workers).await;

            storage.write_json(output, &report).await?;
            println!(
                "✅ Scored {} pair(s), {} failed. Report saved to {}",
                report.scored, report.failed, output
            );
        }
    }

    Ok(())
}
