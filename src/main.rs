use clap::Parser;
use portfolio_gateway::config::cli::Command;
use portfolio_gateway::utils::error::ErrorCategory;
use portfolio_gateway::utils::{logger, validation::Validate};
use portfolio_gateway::{
    resolve_config, ApiGateway, CliConfig, ContactMessage, ContactService, DesktopHost,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let mut config = resolve_config();
    if let Some(source) = cli.resume_source {
        config = config.with_resume_source(source.into());
    }
    tracing::debug!("Resolved config: {:?}", config);

    match cli.command {
        Command::Config { check } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if check {
                if let Err(e) = config.validate() {
                    tracing::warn!("Configuration check failed: {}", e);
                    eprintln!("⚠️  {}", e);
                    std::process::exit(1);
                }
                println!("✅ Configuration looks good");
            }
        }
        Command::ViewResume => {
            let gateway = ApiGateway::new(&config, DesktopHost::from_env(".")?);
            gateway.view_resume().await;
        }
        Command::DownloadResume { dir } => {
            let gateway = ApiGateway::new(&config, DesktopHost::from_env(dir)?);
            gateway.download_resume().await;
            println!(
                "📁 Resume requested into {}",
                gateway.host().download_dir().display()
            );
        }
        Command::SendMessage {
            name,
            email,
            subject,
            message,
        } => {
            let data = ContactMessage::new(name, email, subject, message);
            match ContactService::new(&config).send_and_read(&data).await {
                Ok(reply) => {
                    tracing::info!("✅ Contact request accepted");
                    println!("✅ {}", reply.message);
                }
                Err(e) if e.category() == ErrorCategory::Delivered => {
                    tracing::warn!("⚠️  {}", e);
                    println!("✅ {}", e.user_friendly_message());
                }
                Err(e) => {
                    tracing::error!("❌ Contact request failed: {} (Category: {:?})", e, e.category());
                    eprintln!("❌ {}", e.user_friendly_message());

                    let exit_code = match e.category() {
                        ErrorCategory::Backend => 2,
                        ErrorCategory::Network => 3,
                        _ => 1,
                    };
                    std::process::exit(exit_code);
                }
            }
        }
    }

    Ok(())
}
