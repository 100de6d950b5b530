use clap::{Parser, Subcommand};

mod directory;

use directory::DirectoryClient;
use funchost_core::{Base64Encode, FunctionRegistry};
use funchost_http::runtime::{FunctionHost, shutdown_signal};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "funchost", version)]
#[command(about = "funchost - serve pure functions over JSON HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP function host
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
        /// Public base URL under which this host is reachable
        #[arg(long, env = "PUBLIC_URL")]
        public_url: Option<String>,
        /// Function directory endpoint to announce functions to
        #[arg(
            long,
            env = "DIRECTORY_URL",
            default_value = "https://api.func.live/functions"
        )]
        directory_url: String,
        /// Bearer token for the function directory
        #[arg(long, env = "FUNC_TOKEN")]
        directory_token: Option<String>,
    },
    /// Announce one function URL to the directory
    Announce {
        /// Full function URL to announce
        #[arg(long)]
        url: String,
        /// Function directory endpoint
        #[arg(
            long,
            env = "DIRECTORY_URL",
            default_value = "https://api.func.live/functions"
        )]
        directory_url: String,
        /// Bearer token for the function directory
        #[arg(long, env = "FUNC_TOKEN")]
        directory_token: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            bind,
            public_url,
            directory_url,
            directory_token,
        } => {
            if let Err(e) = run_serve(port, bind, public_url, directory_url, directory_token).await
            {
                tracing::error!(error = %e, "server failed");
                std::process::exit(1);
            }
        }
        Commands::Announce {
            url,
            directory_url,
            directory_token,
        } => {
            let client = DirectoryClient::new(directory_url, directory_token);
            if let Err(e) = client.announce(&url).await {
                tracing::error!(error = %e, "announcement failed");
                std::process::exit(1);
            }
        }
    }
}

/// Build the function table and serve it until a shutdown signal arrives.
async fn run_serve(
    port: u16,
    bind: String,
    public_url: Option<String>,
    directory_url: String,
    directory_token: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = FunctionRegistry::new().with_function(Arc::new(Base64Encode::new()));
    let host = FunctionHost::new(registry);
    let function_names = host.registry.function_names();

    let listener = tokio::net::TcpListener::bind((bind.as_str(), port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, functions = function_names.len(), "server listening");
    for name in &function_names {
        info!(
            docs = %format!("GET /functions/{name}"),
            invoke = %format!("POST /functions/{name}"),
            "function route"
        );
    }

    if let (Some(public_url), Some(token)) = (public_url, directory_token) {
        let client = DirectoryClient::new(directory_url, token);
        let base = public_url.trim_end_matches('/').to_string();
        let urls: Vec<String> = function_names
            .iter()
            .map(|name| format!("{base}/functions/{name}"))
            .collect();

        // Announce in the background; registration failures never affect
        // request handling.
        tokio::spawn(async move {
            for url in urls {
                if let Err(e) = client.announce(&url).await {
                    warn!(error = %e, "directory announcement failed");
                }
            }
        });
    }

    axum::serve(listener, host.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
