use clap::Parser;
use vaxnotify_client::config::toml_config::LogFormat;
use vaxnotify_client::config::Settings;
use vaxnotify_client::utils::{logger, validation::Validate};
use vaxnotify_client::{
    CliConfig, Command, HttpSubmitter, NotifyError, Pincode, ServiceWorkerContext,
    SubscriptionRequest, Submitter, TracingSink,
};

fn fail(e: &NotifyError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

async fn subscribe(
    settings: &Settings,
    pincode: String,
    age: i64,
    token: String,
) -> vaxnotify_client::Result<()> {
    let submitter = HttpSubmitter::new(settings);
    let request = SubscriptionRequest {
        pincode: Pincode::from(pincode),
        age_limit: age,
        token,
    };
    tracing::info!("Subscribing pincode {} for age {}", request.pincode, request.age_limit);
    submitter.submit(request).await?;
    println!("✅ Subscribed for notifications");
    Ok(())
}

async fn listen(
    settings: &Settings,
    input: Option<std::path::PathBuf>,
) -> vaxnotify_client::Result<()> {
    let provider = settings.provider()?.clone();
    let context = ServiceWorkerContext::bootstrap(provider, TracingSink)?;

    let summary = match input {
        Some(path) => {
            let file = tokio::fs::File::open(&path).await?;
            context
                .deliver_lines(tokio::io::BufReader::new(file))
                .await?
        }
        None => {
            context
                .deliver_lines(tokio::io::BufReader::new(tokio::io::stdin()))
                .await?
        }
    };

    tracing::info!(
        "Input closed: {} messages logged, {} lines skipped",
        summary.delivered,
        summary.skipped
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match settings.log_format {
        LogFormat::Compact => logger::init_cli_logger(settings.verbose),
        LogFormat::Json => logger::init_json_logger(settings.verbose),
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let result = match cli.command {
        Command::Subscribe {
            pincode,
            age,
            token,
        } => subscribe(&settings, pincode, age, token).await,
        Command::Listen { input } => listen(&settings, input).await,
    };

    if let Err(e) = result {
        fail(&e);
    }

    Ok(())
}
