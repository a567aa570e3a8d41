//! flight CLI - Scaffolds ITCSS projects from the inuitcss module catalog

use anyhow::Result;
use clap::{Parser, Subcommand};
use flight_core::catalog::CatalogCache;
use flight_core::tui::CreateArgs;
use flight_core::ProductConfig;
use std::path::{Path, PathBuf};

/// flight product configuration
#[derive(Clone)]
pub struct FlightConfig;

impl ProductConfig for FlightConfig {
    fn name(&self) -> &'static str {
        "flight"
    }

    fn display_name(&self) -> &'static str {
        "Flight"
    }

    fn organization(&self) -> &'static str {
        "inuitcss"
    }

    fn default_api_url(&self) -> &'static str {
        "https://api.github.com"
    }

    fn api_url_env(&self) -> &'static str {
        "FLIGHT_API_URL"
    }

    fn default_raw_url(&self) -> &'static str {
        "https://raw.githubusercontent.com"
    }

    fn raw_url_env(&self) -> &'static str {
        "FLIGHT_RAW_URL"
    }

    fn cache_file_name(&self) -> &'static str {
        "flight-modules.json"
    }

    fn recommended_modules(&self) -> &'static [&'static str] {
        &[
            "inuit-defaults",
            "inuit-functions",
            "inuit-mixins",
            "inuit-normalize",
            "inuit-box-sizing",
            "inuit-page",
            "inuit-layout",
            "inuit-widths",
            "inuit-tools-widths",
            "inuit-responsive-tools",
            "inuit-responsive-settings",
        ]
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/inuitcss"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_ref() != Some(&dir.to_path_buf()) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: point at the import manifest
        steps.push("Open app/styles/main.scss to see the import order".to_string());
        steps.push("Run `bower install` if you skipped the module install".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "flight")]
#[command(about = "CLI for scaffolding inuitcss-based projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Create(CliCreateArgs),
    /// Remove the cached module catalog
    ClearCache,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project directory to create
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Project name (defaults to the directory name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Modules to include without prompting (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub modules: Option<Vec<String>>,

    /// Bypass the cached catalog and re-resolve from GitHub
    #[arg(long)]
    pub refresh: bool,

    /// Skip the module install step
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            directory: args.directory,
            name: args.name,
            modules: args.modules,
            refresh: args.refresh,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = FlightConfig;

    match args.command {
        Some(Command::Create(create_args)) => {
            let result = flight_core::run(&config, create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::ClearCache) => {
            let cache = CatalogCache::for_product(config.cache_file_name());
            let path = cache.path().to_path_buf();
            cache.clear()?;
            println!("Removed {}", path.display());
            Ok(())
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = flight_core::run(&config, CreateArgs::default()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
