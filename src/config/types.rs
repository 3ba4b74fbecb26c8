use pwa_icons::PWA_ICON_SIZES;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub icons: IconsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served at `/` (default: current directory)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Render an HTML index for directories without `index.html`
    #[serde(default = "default_directory_listing")]
    pub directory_listing: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_directory_listing() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root: default_root(),
            directory_listing: default_directory_listing(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IconsConfig {
    /// Directory receiving the generated PNGs
    #[serde(default = "default_icons_dir")]
    pub dir: PathBuf,

    /// SVG source (default: `<dir>/icon.svg`)
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Draw the built-in knight instead of reading an SVG
    #[serde(default)]
    pub builtin: bool,

    /// Edge lengths to render, in pixels
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_sizes() -> Vec<u32> {
    PWA_ICON_SIZES.to_vec()
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            dir: default_icons_dir(),
            source: None,
            builtin: false,
            sizes: default_sizes(),
        }
    }
}

impl IconsConfig {
    /// The SVG to rasterize, falling back to `icon.svg` inside `dir`.
    pub fn source_path(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| self.dir.join(pwa_icons::SOURCE_FILE_NAME))
    }
}
