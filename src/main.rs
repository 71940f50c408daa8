//! sitehead - SEO head tags and page shells for static sites.

mod cli;
mod config;
mod data;
mod logger;
mod page;
mod seo;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    let open_config = || cli::common::open_config(&cli.config, &cwd);

    match &cli.command {
        Commands::Init { name, dry } => {
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            cli::init::new_site(&root, &cli.config, *dry)
        }
        Commands::Head { args } => {
            let mut config = open_config()?;
            let markup = cli::render::head_markup(&mut config, args.site_url.as_deref())?;
            cli::render::emit(&markup, None)
        }
        Commands::Render {
            args,
            content,
            output,
        } => {
            let mut config = open_config()?;
            let markup = cli::render::page_markup(
                &mut config,
                args.site_url.as_deref(),
                content.as_deref(),
            )?;
            cli::render::emit(&markup, output.as_deref())
        }
        Commands::Validate => cli::validate::validate_site(&open_config()?),
    }
}
