use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stationbot")]
#[command(about = "Weather-station project assistant: keyword chatbot and dashboard helpers", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Classify one utterance and print the bot's reply.
    Ask {
        utterance: String,
        /// Output JSON (topic + reply)
        #[arg(long)]
        json: bool,
    },

    /// Interactive chat session on stdin/stdout.
    Chat {
        /// Emit one JSON object per turn instead of plain replies
        #[arg(long)]
        json: bool,
        /// Print the full rendered transcript when the session ends
        #[arg(long)]
        transcript: bool,
    },

    /// Serve the chatbot over HTTP (POST JSON {"text": ...}).
    Serve {
        /// Bind address (default from config, else 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
        /// Bind port (default from config, else 8090)
        #[arg(long)]
        port: Option<u16>,
        /// Config file path (default: ./stationbot.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the chatbot's topics and their trigger phrases.
    Topics {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Filter the dashboard's sensor cards by category text.
    Cards {
        /// Filter text (empty or omitted shows every card)
        filter: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
        /// Config file path (default: ./stationbot.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default config file.
    Init {
        /// Config file path (default: ./stationbot.json)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
