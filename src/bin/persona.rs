use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use log::info;
use std::path::PathBuf;

use reddit_persona::core::{default_output_path, write_persona_file, Config, PersonaError};
use reddit_persona::features::persona::PersonaGenerator;
use reddit_persona::features::reddit::{extract_username, RedditClient};
use reddit_persona::pipeline::run_pipeline;

#[derive(Parser)]
#[command(name = "persona")]
#[command(about = "Generate an AI persona from a Reddit user's public history", long_about = None)]
struct Cli {
    /// Reddit profile URL, e.g. https://www.reddit.com/user/spez/
    url: String,

    /// Maximum number of comments and of submissions to fetch
    #[arg(long, default_value_t = 100)]
    limit: u32,

    /// Output file path (defaults to <username>_persona.txt)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // User-input, configuration, and empty-result failures exit cleanly
        // with code 1; everything else propagates with its original report.
        if err.is::<PersonaError>() {
            eprintln!("{err}");
            std::process::exit(1);
        }
        return Err(err);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let username = extract_username(&cli.url)?;

    let config = Config::from_env()?;

    // Ensure the API key is set in the environment for the openai crate.
    // The openai crate reads from env vars, not from our config.
    // Set both OPENAI_API_KEY and OPENAI_KEY for compatibility.
    std::env::set_var("OPENAI_API_KEY", &config.openai_api_key);
    std::env::set_var("OPENAI_KEY", &config.openai_api_key);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Resolved profile URL to u/{username}");

    let reddit = RedditClient::new(&config);
    let generator = PersonaGenerator::new(config.openai_model.clone());

    let persona = run_pipeline(&reddit, &generator, &username, cli.limit).await?;

    let output = cli.output.unwrap_or_else(|| default_output_path(&username));
    write_persona_file(&output, &persona)?;

    println!("Persona saved to {}", output.display());
    Ok(())
}
