use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug, Default)]
#[command(name = "filecast")]
#[command(about = "Serve a directory of media over HTTP")]
#[command(version)]
pub struct Cli {
    /// Port number [default: 3000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory to serve [default: ./]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Address to bind to [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Directory holding the bundled front-end [default: ./public]
    #[arg(long)]
    pub public: Option<PathBuf>,

    /// TOML config file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base directory every API path is relative to.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 { 3000 }

fn default_root() -> PathBuf {
    PathBuf::from("./")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root: default_root(),
            public_dir: default_public_dir(),
        }
    }
}

impl ServerConfig {
    /// Builds the effective config: defaults, then the TOML file, then flags.
    ///
    /// The root is canonicalised and must be an existing directory.
    pub fn load(cli: Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(host) = cli.host {
            config.host = host;
        }
        if let Some(dir) = cli.dir {
            config.root = dir;
        }
        if let Some(public) = cli.public {
            config.public_dir = public;
        }

        config.root = config
            .root
            .canonicalize()
            .with_context(|| format!("root directory does not exist: {}", config.root.display()))?;
        if !config.root.is_dir() {
            anyhow::bail!("root path is not a directory: {}", config.root.display());
        }

        if !config.public_dir.is_dir() {
            tracing::warn!(
                "front-end directory {} not found; only the API will be served",
                config.public_dir.display()
            );
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
