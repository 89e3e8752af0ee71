use clap::Parser;
use vehicles_api::app::commands::{self, Action};
use vehicles_api::utils::logger;
use vehicles_api::{CliConfig, Command, ErrorCategory, Settings, VehicleError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting vehicles CLI");
    tracing::debug!("Resolved settings: {:?}", settings);

    let outcome = run(cli.command, &settings).await;

    match outcome {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}

async fn run(command: Command, settings: &Settings) -> vehicles_api::Result<String> {
    let service = commands::build_service(settings).await?;
    let action = match command {
        Command::List => Action::List,
        Command::Get { id } => Action::Get(id),
        Command::Save { file } => Action::Save(commands::read_vehicle(file.as_deref()).await?),
        Command::Delete { id } => Action::Delete(id),
    };
    commands::execute(&service, action).await
}

fn exit_code(e: &VehicleError) -> i32 {
    match e.category() {
        ErrorCategory::NotFound => 2,
        ErrorCategory::Remote => 3,
        ErrorCategory::Storage | ErrorCategory::Configuration | ErrorCategory::Input => 1,
    }
}
