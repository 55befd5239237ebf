//! Command-line and environment configuration for the service

use crate::shopping::models::DATA_FILE_NAME;
use clap::Parser;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

/// Shopping list web service
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "SHOPPING_LIST_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind
    #[arg(short, long, env = "SHOPPING_LIST_PORT", default_value_t = 5001)]
    pub port: u16,

    /// JSON file holding the list [default: shopping_data.json beside the executable]
    #[arg(long, env = "SHOPPING_LIST_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory searched for a shopping-list.html override
    #[arg(long, env = "SHOPPING_LIST_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Do not open the UI in a web browser on startup
    #[arg(long, env = "SHOPPING_LIST_NO_BROWSER")]
    pub no_browser: bool,
}

impl ServerConfig {
    /// Socket address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL of the UI page
    pub fn page_url(&self) -> String {
        format!("http://{}", self.socket_addr())
    }

    /// Data file to use: the configured one, else one beside the executable
    pub fn resolve_data_file(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
    }
}
