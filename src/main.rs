use anyhow::Result;
use clap::Parser;
use photoreal_studio::app::App;
use photoreal_studio::models::Config;
use photoreal_studio::web;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "photoreal-studio")]
#[command(about = "Serve a web page that turns text prompts into photorealistic images")]
struct CliArgs {
    /// Address to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT).
    #[arg(long)]
    port: Option<u16>,

    /// Inference endpoint URL (overrides HF_MODEL_URL).
    #[arg(long, value_name = "URL")]
    model_url: Option<String>,
}

impl CliArgs {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(model_url) = self.model_url {
            config.model_url = model_url;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photoreal_studio=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting photoreal-studio");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => args.apply(config),
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = match App::new(&config) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = web::serve(app, &config.host, config.port).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_config() -> Config {
        Config {
            hf_token: "hf_test".to_string(),
            model_url: "https://example.invalid/model".to_string(),
            timeout: Duration::from_secs(120),
            host: "0.0.0.0".to_string(),
            port: 7860,
        }
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = CliArgs::parse_from([
            "photoreal-studio",
            "--port",
            "9000",
            "--model-url",
            "http://localhost:9000/models/sdxl",
        ]);
        let config = args.apply(base_config());
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.model_url, "http://localhost:9000/models/sdxl");
    }

    #[test]
    fn test_cli_rejects_invalid_port() {
        assert!(CliArgs::try_parse_from(["photoreal-studio", "--port", "http"]).is_err());
    }
}
