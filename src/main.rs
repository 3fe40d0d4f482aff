// Module declarations
mod cli;
mod config_file;
mod page;
mod responder;
mod server;
mod transcript;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use cli::{Cli, Command};
use config_file::{config_file_path, load_file_config, save_file_config, FileConfig};
use page::filter_cards;
use responder::{classify, classify_match, rules};
use server::run_chat_server;
use transcript::{Speaker, Transcript};

fn resolve_config(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| config_file_path(Path::new(".")))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ask { utterance, json } => {
            if json {
                let matched = classify_match(&utterance);
                let out = serde_json::json!({
                    "utterance": utterance,
                    "topic": matched.topic,
                    "reply": matched.response,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", classify(&utterance));
            }
            Ok(())
        }

        Command::Chat { json, transcript } => run_chat_repl(json, transcript),

        Command::Serve { bind, port, config } => {
            let cfg = load_file_config(&resolve_config(config));
            let bind = bind.unwrap_or(cfg.server.bind);
            let port = port.unwrap_or(cfg.server.port);
            run_chat_server(&bind, port)
        }

        Command::Topics { json } => {
            if json {
                let out: Vec<serde_json::Value> = rules()
                    .iter()
                    .enumerate()
                    .map(|(idx, rule)| {
                        serde_json::json!({
                            "order": idx + 1,
                            "topic": rule.topic,
                            "triggers": rule.triggers,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (idx, rule) in rules().iter().enumerate() {
                    println!("{:>2}. {:<16} {}", idx + 1, rule.topic, rule.triggers.join(", "));
                }
            }
            Ok(())
        }

        Command::Cards { filter, json, config } => {
            let cfg = load_file_config(&resolve_config(config));
            let filter = filter.unwrap_or_default();
            let mask = filter_cards(&cfg.cards, &filter);
            if json {
                let out: Vec<serde_json::Value> = cfg
                    .cards
                    .iter()
                    .zip(&mask)
                    .filter(|(_, visible)| **visible)
                    .map(|(card, _)| serde_json::json!({ "name": card.name, "category": card.category }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (card, visible) in cfg.cards.iter().zip(&mask) {
                    if *visible {
                        println!("{:<16} [{}]", card.name, card.category);
                    }
                }
            }
            Ok(())
        }

        Command::Init { config, force } => {
            let path = resolve_config(config);
            if path.exists() && !force {
                eprintln!("Refusing to overwrite existing file: {}", path.display());
                std::process::exit(2);
            }
            save_file_config(&path, &FileConfig::default())?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

/// Read utterances line by line, answer each, and keep the exchange in an
/// append-only transcript. Empty lines are skipped before the responder is
/// ever invoked; `exit` or `quit` (or EOF) ends the session.
fn run_chat_repl(json: bool, show_transcript: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut log = Transcript::new();

    if !json {
        println!("stationbot ready. Ask about the weather station (exit to quit).");
    }

    loop {
        if !json {
            print!("you> ");
            stdout.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let utterance = line.trim();
        if utterance.is_empty() {
            continue;
        }
        if matches!(utterance, "exit" | "quit") {
            break;
        }

        let matched = classify_match(utterance);
        log.push(Speaker::User, utterance);
        log.push(Speaker::Bot, matched.response);

        if json {
            let turn = serde_json::json!({
                "utterance": utterance,
                "topic": matched.topic,
                "reply": matched.response,
            });
            println!("{turn}");
        } else {
            println!("bot> {}", matched.response);
        }
    }

    if show_transcript && !log.is_empty() {
        if json {
            println!("{}", serde_json::to_string_pretty(&log)?);
        } else {
            print!("{}", log.render());
        }
    }
    Ok(())
}
