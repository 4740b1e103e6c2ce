#![deny(clippy::unwrap_used)]

use anyhow::{Context, Result};
use clap::Parser;
use std::net::TcpListener;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod assets;
mod content;
mod errors;
mod export;
mod render;
mod routes;
mod settings;
mod start_server;
mod state;
mod static_files;

use content::PageContent;
use settings::Settings;
use state::SharedState;


#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long, default_value = "8501")]
    port: u16,

    /// Deployment root; relative asset paths are resolved against it.
    #[arg(long)]
    root: Option<PathBuf>,

    #[arg(long, default_value = "styles/globals.css")]
    stylesheet: PathBuf,

    #[arg(long, default_value = "images")]
    images: PathBuf,

    /// JSON page content. The built-in portfolio is used when omitted.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Render once to this file ("-" for stdout) instead of starting the server.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_page=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let mut settings = Settings::default(root);
    settings.stylesheet = args.stylesheet;
    settings.image_dir = args.images;

    let content = match &args.content {
        Some(path) => PageContent::from_file(path)
            .with_context(|| format!("Cannot load page content from {}", path.display()))?,
        None => PageContent::builtin()?,
    };

    if let Some(output) = args.output {
        return export::write_page(&settings, &content, &output);
    }

    let listener = TcpListener::bind((args.host.clone(), args.port))
        .with_context(|| format!("Cannot bind to {}:{}", args.host, args.port))?;
    let actual_port = listener.local_addr()?.port();

    tracing::info!("Start server on http://{}:{}", args.host, actual_port);

    start_server::start_server(listener, settings, content).await?;
    Ok(())
}
