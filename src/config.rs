use std::{env, fs::File, io::Read};

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Environment variable holding the store connection string.
pub const DATABASE_URL: &str = "DATABASE_URL";

#[derive(Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system: System,
    #[serde(skip)]
    pub database_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct System {
    pub bind_addr: String,
    /// Apply the bundled migrations before serving.
    pub migrate: bool,
}

impl Default for System {
    fn default() -> Self {
        System {
            bind_addr: "localhost:3000".to_string(),
            migrate: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

const DEFAULT_CFG: &str = "catalogue.toml";
impl Config {
    /// Reads `path`, or `catalogue.toml` if it exists, and `DATABASE_URL`
    /// from the environment. Only the latter is mandatory.
    pub fn new(path: Option<Utf8PathBuf>) -> Result<Self, Error> {
        let data = match path {
            Some(path) => read(&path)?,
            None if Utf8Path::new(DEFAULT_CFG).is_file() => {
                info!("no config file path provided, using default ({DEFAULT_CFG})");
                read(Utf8Path::new(DEFAULT_CFG))?
            }
            None => {
                info!("no config file, using built-in defaults");
                String::new()
            }
        };

        Self::from_parts(&data, env::var(DATABASE_URL).ok())
    }

    pub fn from_parts(data: &str, database_url: Option<String>) -> Result<Self, Error> {
        let mut config: Config = toml::from_str(data)?;
        config.database_url = database_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(Error::MissingDatabaseUrl)?;
        Ok(config)
    }
}

fn read(path: &Utf8Path) -> Result<String, Error> {
    let mut fh = File::open(path)?;
    let mut data = String::new();
    fh.read_to_string(&mut data)?;
    Ok(data)
}
