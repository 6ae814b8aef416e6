//! # Debate CLI
//!
//! Runs one FOR/AGAINST debate and prints the transcript.
//!
//! Usage: `cargo run --bin debate -- --topic "Should AI replace teachers?" --turns 6`

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use log::{error, info};

use debate::{controller_from_config, Config, DebateConfig, Stance, Transcript};

#[derive(Debug, Parser)]
#[command(name = "debate", about = "Run a debate between two AI personas")]
struct Cli {
    /// Debate topic (defaults to DEBATE_TOPIC)
    #[arg(short, long)]
    topic: Option<String>,

    /// Total number of turns, at least 2 (defaults to DEBATE_MAX_TURNS)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    turns: Option<i64>,

    /// Print the transcript as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let topic = cli.topic.unwrap_or_else(|| config.default_topic.clone());
    let turns = cli.turns.unwrap_or(config.default_max_turns);
    let debate_config = DebateConfig::new(topic, turns)?;

    info!("Using model {} at {}", config.model, config.base_url);

    let controller = controller_from_config(&config);
    let transcript = match controller
        .run_with_observer(&debate_config, |utterance| {
            info!("Turn {}/{} ({}) received", utterance.turn, turns, utterance.speaker);
        })
        .await
    {
        Ok(transcript) => transcript,
        Err(e) => {
            error!("Debate failed: {e}");
            return Err(e.into());
        }
    };

    if cli.json {
        println!("{}", transcript.to_json()?);
    } else {
        print_transcript(&transcript);
    }

    Ok(())
}

fn print_transcript(transcript: &Transcript) {
    println!("Topic: {}\n", transcript.topic());
    for utterance in transcript.utterances() {
        let label = match utterance.speaker {
            Stance::For => "🟢 FOR",
            Stance::Against => "🔴 AGAINST",
        };
        println!(
            "── Turn {} of {} ── {}\n{}\n",
            utterance.turn,
            transcript.max_turns(),
            label,
            utterance.content.trim()
        );
    }
    println!("🎉 Debate completed!");
}
