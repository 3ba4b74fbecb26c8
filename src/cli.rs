use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Serve the current directory over HTTP with caching disabled
#[derive(Parser, Debug)]
#[command(name = "dev-server")]
#[command(author, version, about = "Serve the current directory over HTTP with caching disabled")]
pub struct DevServerCli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Host to bind to [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory to serve [default: current directory]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Answer directories without index.html with 404 instead of a listing
    #[arg(long)]
    pub no_listing: bool,
}

impl DevServerCli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(root) = &self.root {
            config.server.root = root.clone();
        }
        if self.no_listing {
            config.server.directory_listing = false;
        }
    }
}

/// Generate PWA icons from an SVG
#[derive(Parser, Debug)]
#[command(name = "generate-icons")]
#[command(author, version, about = "Generate all PWA icon sizes from icons/icon.svg")]
pub struct GenerateIconsCli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding icon.svg and receiving the PNGs [default: icons]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// SVG source [default: <dir>/icon.svg]
    #[arg(long, conflicts_with = "builtin")]
    pub source: Option<PathBuf>,

    /// Draw the built-in knight icon instead of reading an SVG
    #[arg(long)]
    pub builtin: bool,
}

impl GenerateIconsCli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.icons.dir = dir.clone();
        }
        if let Some(source) = &self.source {
            config.icons.source = Some(source.clone());
            config.icons.builtin = false;
        }
        if self.builtin {
            config.icons.builtin = true;
        }
    }
}
