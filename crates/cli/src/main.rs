use std::io::Write;

use anyhow::{bail, Context, Result};
use api_client::{HttpRecommenderClient, RecommenderApi};
use clap::{Parser, Subcommand};
use colored::Colorize;
use frontend::{view, Config, Controller, Flow, Session, Theme};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// movie-recs - browse recommendations from a movie recommendation service
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Pick a movie and get similar titles from a recommendation service", long_about = None)]
struct Cli {
    /// Base URL of the recommendation service (overrides MOVIE_RECS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Colour theme: dark or light (overrides MOVIE_RECS_THEME)
    #[arg(long, global = true)]
    theme: Option<Theme>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse interactively: select a movie, get recommendations, switch theme
    Interactive,

    /// List the movies the service can recommend from
    Movies {
        /// Only show the first N titles
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Get recommendations for a movie
    Recommend {
        /// Movie title (defaults to the first title in the list)
        #[arg(long)]
        movie: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; quiet by default so logs don't interleave with the view
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    info!("Configuration: {:?}", config);

    let client = HttpRecommenderClient::new(&config.api_url)
        .context("Failed to create recommendation service client")?;

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => handle_interactive(client, config.theme).await?,
        Commands::Movies { limit } => handle_movies(client, limit).await?,
        Commands::Recommend { movie } => handle_recommend(client, config.theme, movie).await?,
    }

    Ok(())
}

/// Handle the 'interactive' command
async fn handle_interactive(client: HttpRecommenderClient, theme: Theme) -> Result<()> {
    let session = Session::new(Controller::with_theme(client, theme));

    println!("{}", session.start().await);
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", ">".bold());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            // EOF
            println!();
            break;
        };

        let (flow, output) = session.handle_line(&line).await;
        if !output.is_empty() {
            println!("{}", output);
        }
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Handle the 'movies' command
async fn handle_movies(client: HttpRecommenderClient, limit: Option<usize>) -> Result<()> {
    let movies = client
        .fetch_movies()
        .await
        .context("Failed to fetch movie list")?;

    let shown = limit.unwrap_or(movies.len()).min(movies.len());
    println!("{}", format!("{} movies available:", movies.len()).bold().blue());
    for (i, title) in movies.iter().take(shown).enumerate() {
        println!("{:>5}. {}", (i + 1).to_string().green(), title);
    }
    if shown < movies.len() {
        println!("  ... and {} more", movies.len() - shown);
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    client: HttpRecommenderClient,
    theme: Theme,
    movie: Option<String>,
) -> Result<()> {
    let controller = Controller::with_theme(client, theme);

    match movie {
        Some(movie) => controller.select(movie),
        None => {
            controller.load_catalog().await;
            let state = controller.snapshot();
            if let Some(message) = state.last_error {
                bail!(message);
            }
            if state.selected.is_none() {
                bail!("The service returned an empty movie list");
            }
        }
    }

    controller.recommend().await;
    let state = controller.snapshot();
    if let Some(message) = &state.last_error {
        bail!(message.clone());
    }

    println!("{}", view::render_recommendations(&state));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["movie-recs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.api_url.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "movie-recs",
            "recommend",
            "--movie",
            "The Dark Knight",
            "--theme",
            "light",
            "--api-url",
            "http://localhost:5000",
        ])
        .unwrap();

        assert_eq!(cli.theme, Some(Theme::Light));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:5000"));
        match cli.command {
            Some(Commands::Recommend { movie }) => {
                assert_eq!(movie.as_deref(), Some("The Dark Knight"))
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_bad_theme_rejected() {
        assert!(Cli::try_parse_from(["movie-recs", "--theme", "sepia", "movies"]).is_err());
    }
}
