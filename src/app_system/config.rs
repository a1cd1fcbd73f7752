use clap::{Parser, ValueEnum};

/// Command-line configuration for the catalog server.
#[derive(Debug, Clone, Parser)]
#[command(name = "product_catalog", about = "In-memory product catalog over HTTP")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// Capacity of the product store's request channel.
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(1..))]
    pub buffer_size: u16,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}
