use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "chatlog-api")]
#[command(about = "A read-only HTTP API fronting a chat client log file")]
pub struct AppArgs {
    #[arg(long, default_value = "./config.json", help = "Config file path")]
    pub config: PathBuf,

    #[arg(long, help = "Port to listen on (overrides the config file)")]
    pub port: Option<u16>,

    #[arg(long, help = "Chat log file path (overrides the config file)")]
    pub chat_log: Option<PathBuf>,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
