use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use crop_advisor::console::run_console;
use crop_advisor::constants::DEFAULT_PORT;
use crop_advisor::llm_interaction::{ClientConfig, GeminiClient};
use crop_advisor::models::RequestForm;
use crop_advisor::prompt::build_prompt;
use crop_advisor::variant::Variant;
use crop_advisor::web_server::{self, ServerConfig};

// Define the command-line interface structure using clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Google Gemini API key.
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

// Define the available subcommands
#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the advisor web page.
    Serve {
        #[arg(long, default_value_t = DEFAULT_PORT, help = "Port for the web server.")]
        port: u16,
        #[arg(long, default_value = "en", help = "Variant served at / (en, hi, or, sidebar).")]
        variant: Variant,
        #[arg(long, default_value = "templates", help = "Directory holding index.html.")]
        templates: PathBuf,
        #[arg(long, default_value = "static", help = "Directory served under /static.")]
        static_dir: PathBuf,
    },
    /// Ask for recommendations in the terminal.
    Ask {
        #[arg(long, default_value = "en", help = "Language variant (en, hi, or, sidebar).")]
        variant: Variant,
    },
    /// Print the prompt that would be sent, without calling the model.
    Prompt {
        #[arg(long, default_value = "en")]
        variant: Variant,
        #[arg(long, help = "Month name or number; defaults to the current month.")]
        month: Option<String>,
        #[arg(long)]
        location: String,
        #[arg(long, help = "Budget in the variant's currency.")]
        budget: Option<String>,
        #[arg(long)]
        experience: Option<String>,
        #[arg(long)]
        farm_size: Option<String>,
        #[arg(long, help = "Prefer organic farming.")]
        organic: bool,
    },
}

fn gemini_client() -> Result<GeminiClient> {
    GeminiClient::new(ClientConfig::default()).context("Failed to build HTTP client")
}

// The main entry point of the application, using tokio's async runtime
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for GEMINI_API_KEY and friends)
    dotenvy::dotenv().ok();

    // Reads log level from RUST_LOG (e.g., RUST_LOG=info,crop_advisor=debug)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Crop advisor starting with command: {:?}", cli.command);

    match cli.command {
        Commands::Serve {
            port,
            variant,
            templates,
            static_dir,
        } => {
            let config = ServerConfig {
                port,
                default_variant: variant,
                templates_dir: templates,
                static_dir,
                api_key: cli.api_key,
            };
            let client = gemini_client()?;
            info!(models = ?client.models(), "Using candidate models");

            let mut web_server_handle = tokio::spawn(async move {
                if let Err(e) = web_server::start_web_server(config, client).await {
                    error!("Web server failed: {:?}", e);
                }
            });

            let ctrl_c = tokio::signal::ctrl_c();
            // Pin the ctrl_c future to the stack so its address is stable
            tokio::pin!(ctrl_c);

            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("Ctrl-C received, initiating shutdown...");
                }
                res = &mut web_server_handle => {
                    match res {
                        Ok(_) => info!("Web server task completed unexpectedly."),
                        Err(e) if e.is_panic() => error!("Web server task panicked: {:?}", e),
                        Err(e) => error!("Web server task failed: {:?}", e),
                    }
                }
            }

            if !web_server_handle.is_finished() {
                info!("Aborting web server task...");
                web_server_handle.abort();
            }
            info!("Shutdown complete.");
        }
        Commands::Ask { variant } => {
            let client = gemini_client()?;
            let api_key = cli.api_key;
            let runtime = tokio::runtime::Handle::current();
            // Stdin reads block, so the whole session runs on the blocking pool.
            tokio::task::spawn_blocking(move || {
                runtime.block_on(run_console(
                    io::stdin().lock(),
                    io::stdout(),
                    &client,
                    variant,
                    api_key.as_deref(),
                ))
            })
            .await
            .context("Console task panicked")?
            .context("Console session failed")?;
        }
        Commands::Prompt {
            variant,
            month,
            location,
            budget,
            experience,
            farm_size,
            organic,
        } => {
            let form = RequestForm {
                month: month.unwrap_or_default(),
                location,
                budget: budget.unwrap_or_default(),
                experience: experience.unwrap_or_default(),
                farm_size: farm_size.unwrap_or_default(),
                organic: organic.then(|| "on".to_string()),
                api_key: None,
            };
            let request = form.to_request(variant).context("Invalid request")?;
            println!("{}", build_prompt(&request, variant));
        }
    }

    Ok(())
}
