use clap::Parser;

/// Astra - Local chat backend with AI-generated dashboards
#[derive(Parser, Debug)]
#[command(name = "astra-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to bind the server to
    #[arg(long, env = "ASTRA_PORT")]
    port: Option<u16>,

    /// Address to bind the server to
    #[arg(long)]
    bind: Option<String>,

    /// Path to the config file (defaults to ~/.astra/config.yaml)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Allowed CORS origin (repeat for multiple; defaults to any)
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,

    /// Directory for chat data (defaults to ~/.astra)
    #[arg(long, env = "ASTRA_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Fixed auth token (or set ASTRA_SERVER_TOKEN env var)
    /// If not provided, a random token is generated on each startup
    #[arg(long, env = "ASTRA_SERVER_TOKEN")]
    token: Option<String>,

    /// Disable request authentication (local development only)
    #[arg(long)]
    no_auth: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match astra_server_lib::config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags win over config file and env overrides
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if !cli.cors_origins.is_empty() {
        config.server.cors_origins = cli.cors_origins.clone();
    }
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = Some(data_dir);
    }
    if cli.no_auth {
        config.server.require_auth = false;
    }

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        use astra_server_lib::server::{self, generate_auth_token, ServerAppState};

        let auth_token = if config.server.require_auth {
            Some(cli.token.unwrap_or_else(generate_auth_token))
        } else {
            log::warn!("Authentication disabled; all API requests will be accepted");
            None
        };

        let port = config.server.port;
        let bind = config.server.bind.clone();
        let cors_origins = if config.server.cors_origins.is_empty() {
            None
        } else {
            Some(config.server.cors_origins.clone())
        };

        let state = ServerAppState::new(auth_token, config);

        if state.generative.is_none() {
            log::info!(
                "No API key configured; dashboards will use the built-in fallback templates"
            );
        }

        if let Err(e) = server::run_server(port, &bind, state, cors_origins).await {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
    });
}
