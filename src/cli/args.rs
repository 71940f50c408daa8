//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Render SEO head tags and page shells for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitehead.toml)
    #[arg(short = 'C', long, global = true, default_value = "sitehead.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented config file
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Print the projected head tags
    #[command(visible_alias = "h")]
    Head {
        #[command(flatten)]
        args: ProjectArgs,
    },

    /// Render a complete page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: ProjectArgs,

        /// Page content: HTML or Markdown file, `-` for stdin
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        content: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Validate config and data sources
    #[command(visible_alias = "v")]
    Validate,
}

/// Shared arguments for Head and Render commands
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Override site URL, e.g. for a deployment whose URL differs from local.
    ///
    /// Example:
    ///   sitehead render --site-url "https://acme.github.io/site"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "sitehead", "render", "-c", "index.md", "-o", "out.html", "-U", "https://a.test",
        ]);
        match cli.command {
            Commands::Render {
                args,
                content,
                output,
            } => {
                assert_eq!(args.site_url.as_deref(), Some("https://a.test"));
                assert_eq!(content, Some(PathBuf::from("index.md")));
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("sitehead.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sitehead", "head", "-C", "site.toml", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
