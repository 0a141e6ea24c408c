use camino::Utf8PathBuf;
use clap::Parser;

/// Serve the music catalogue handler behind a local HTTP gateway
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML config file (defaults to `catalogue.toml` when present)
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    /// Address to listen on, overrides the config file
    #[arg(short, long)]
    pub address: Option<String>,

    /// Create the catalogue tables before serving
    #[arg(short, long, default_value_t = false)]
    pub migrate: bool,
}
