use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;

use uigen_prompt::config::Config;
use uigen_prompt::export;
use uigen_prompt::request::MessageRequest;
use uigen_prompt::system_prompt::{generation_prompt, verify_markers};

/// React component generator system prompt tool
#[derive(Parser, Debug)]
#[command(author, version, about = "React component generator system prompt tool")]
struct Args {
    /// Config file path (defaults to ~/.uigen/config.toml)
    #[arg(long, global = true, env = "UIGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the system prompt, or export it to a file
    Show {
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Verify required directives, and optionally that an exported file matches byte-for-byte
    Check {
        #[arg(value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Print the JSON request body a generator would send
    Request {
        /// User messages, in order
        #[arg(value_name = "MESSAGE", required = true)]
        messages: Vec<String>,

        /// Model to use (overrides config)
        #[arg(long, short = 'm', env = "UIGEN_MODEL")]
        model: Option<String>,

        /// Maximum tokens to generate (overrides config)
        #[arg(long)]
        max_tokens: Option<u32>,
    },

    /// Write a default config file
    Init,
}

fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Config::config_path(),
    }
}

fn main() -> Result<()> {
    // load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();

    // ログはstderrへ（stdoutはプロンプト本文のため）
    let filter = if args.verbose {
        "uigen_prompt=debug"
    } else {
        "uigen_prompt=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Show { output } => match output {
            Some(path) => {
                export::write_prompt(&path)?;
            }
            None => {
                export::print_prompt(&mut std::io::stdout().lock())?;
            }
        },

        Command::Check { file } => {
            verify_markers(generation_prompt())?;
            tracing::info!("Built-in prompt contains all required markers");

            if let Some(path) = file {
                export::check_file(&path)?;
            }
            println!("ok");
        }

        Command::Request {
            messages,
            model,
            max_tokens,
        } => {
            let config = Config::load_from(&resolve_config_path(args.config)?)?
                .with_overrides(model, max_tokens);

            let request = MessageRequest::new(
                &config.model.default,
                config.request.max_tokens,
                &messages,
            )?;
            println!("{}", request.to_json_pretty()?);
        }

        Command::Init => {
            Config::init_at(&resolve_config_path(args.config)?)?;
        }
    }

    Ok(())
}
