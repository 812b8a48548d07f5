mod api;
mod render;
mod timer;

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use api::ApiClient;
use timer::TypingTimer;

#[derive(Parser)]
#[command(name = "arena-cli")]
#[command(about = "Code Arena CLI - Submit and score practice solutions", long_about = None)]
struct Cli {
    /// Gateway base URL
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a solution once and show the normalized result
    Submit {
        /// Path to the source file
        #[arg(short, long)]
        file: String,

        /// Language tag (javascript, python, java, cpp, c)
        #[arg(short, long, default_value = "javascript")]
        language: String,

        /// Standard input for the run
        #[arg(long, default_value = "")]
        stdin: String,
    },

    /// Run a solution against the fixture battery and show the score
    Run {
        /// Path to the source file
        #[arg(short, long)]
        file: String,

        /// Language tag (javascript, python, java, cpp, c)
        #[arg(short, long, default_value = "javascript")]
        language: String,
    },

    /// List the problem catalog, or show one problem
    Problems {
        /// Problem id to show in detail
        #[arg(long)]
        id: Option<u32>,

        /// Language used when showing starter code
        #[arg(short, long, default_value = "javascript")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.server);

    match cli.command {
        Commands::Submit {
            file,
            language,
            stdin,
        } => {
            let mut timer = TypingTimer::new();
            timer.start();
            let source = read_source(&file)?;

            println!("Running code...");
            let typing = timer.stop();
            let run = client.begin_run();
            let result = client.submit(&source, &language, &stdin).await?;

            if client.is_current(&run) {
                print!("{}", render::execution(&result));
                println!("{}", render::typing_time(&typing));
            }
        }
        Commands::Run { file, language } => {
            let mut timer = TypingTimer::new();
            timer.start();
            let source = read_source(&file)?;

            println!("Running fixtures...");
            let typing = timer.stop();
            let run = client.begin_run();
            let report = client.run(&source, &language).await?;

            if client.is_current(&run) {
                print!("{}", render::batch(&report));
                println!("{}", render::typing_time(&typing));
            }
        }
        Commands::Problems { id, language } => match id {
            Some(id) => {
                let detail = client.problem(id).await?;
                print!("{}", render::problem_detail(&detail, &language));
            }
            None => {
                let problems = client.problems().await?;
                print!("{}", render::problem_list(&problems));
            }
        },
    }

    Ok(())
}

fn read_source(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read source file: {path}"))
}
