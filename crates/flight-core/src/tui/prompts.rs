//! Charm-style CLI prompts using cliclack

use crate::catalog::{resolve_catalog, Catalog, CatalogCache, CatalogFetcher};
use crate::cascade::{select_modules, CascadeManifest, Selection};
use crate::product::ProductConfig;
use crate::runtime::{check, tool};
use crate::scaffold::{self, ProjectInfo};
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Project name (defaults to the directory basename)
    pub name: Option<String>,

    /// Module names to select without prompting
    pub modules: Option<Vec<String>>,

    /// Bypass the catalog cache and re-resolve from the remote source
    pub refresh: bool,

    /// Skip the package-install step
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Load the module catalog (cache unless refreshing)
    let cache = CatalogCache::for_product(config.cache_file_name());
    let catalog = load_catalog(config, &cache, args.refresh).await?;

    // Step 2: Target directory and project metadata
    let project_dir = select_directory(&args)?;
    let info = collect_project_info(&args, &project_dir)?;

    // Step 3: Narrow the catalog to the chosen modules
    let selection = select_catalog_modules(config, &catalog, &args)?;

    // Step 4: Fix the import order
    let manifest = CascadeManifest::build(&selection);

    // Step 5: Write the project
    create_project(&project_dir, &info, &selection, &manifest).await?;

    // Step 6: Fetch the selected modules
    if !selection.is_empty() && !args.skip_install {
        handle_install(&project_dir, &args).await?;
    }

    // Step 7: Show next steps
    print_next_steps(config, &project_dir)?;

    Ok(())
}

/// Load the catalog from cache when possible, falling back to remote
/// resolution. Discovery is best-effort: every failure degrades to a
/// warning and a smaller (possibly empty) catalog, never an abort.
async fn load_catalog<C: ProductConfig>(
    config: &C,
    cache: &CatalogCache,
    refresh: bool,
) -> Result<Catalog> {
    if refresh {
        cliclack::log::info("Refreshing the module catalog")?;
    } else if cache.exists() {
        let spinner = cliclack::spinner();
        spinner.start("Loading modules from cache...");
        match cache.load() {
            Ok(catalog) => {
                spinner.stop(format!("{} modules (cached)", catalog.len()));
                return Ok(catalog);
            }
            Err(err) => {
                spinner.stop("Cache unreadable");
                cliclack::log::warning(format!("{err}; re-resolving from remote"))?;
            }
        }
    }

    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Discovering modules from the {} organization...",
        config.organization()
    ));

    let fetcher = CatalogFetcher::from_config(config)?;
    match resolve_catalog(&fetcher).await {
        Ok(catalog) => {
            spinner.stop(format!("Discovered {} modules", catalog.len()));
            if let Err(err) = cache.store(&catalog) {
                cliclack::log::warning(format!("Could not cache the catalog: {err}"))?;
            }
            Ok(catalog)
        }
        Err(err) => {
            spinner.stop("Module discovery failed");
            cliclack::log::warning(format!("{err}; continuing without modules"))?;
            cliclack::log::info(format!("Browse the catalog at {}", config.docs_url()))?;
            Ok(Catalog::default())
        }
    }
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;

        if input.is_empty() || input == "." {
            current_dir
        } else {
            let p = PathBuf::from(&input);
            if p.is_absolute() {
                p
            } else {
                current_dir.join(p)
            }
        }
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    // Warn if directory exists and has files
    if path.exists() && path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!("Directory has {} existing items", count))?;

                // Auto-confirm with --yes flag
                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

fn collect_project_info(args: &CreateArgs, project_dir: &Path) -> Result<ProjectInfo> {
    let default_name = args.name.clone().unwrap_or_else(|| {
        project_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app".to_string())
    });

    if args.yes {
        return Ok(ProjectInfo {
            name: default_name,
            version: "1.0.0".to_string(),
            authors: Vec::new(),
            license: "MIT".to_string(),
        });
    }

    let name: String = cliclack::input("Website/application name")
        .default_input(&default_name)
        .interact()?;
    let version: String = cliclack::input("Version")
        .default_input("1.0.0")
        .interact()?;
    let authors: String = cliclack::input("Authors (separated by a comma)")
        .default_input("")
        .interact()?;
    let license: String = cliclack::input("License").default_input("MIT").interact()?;

    Ok(ProjectInfo {
        name,
        version,
        authors: split_authors(&authors),
        license,
    })
}

/// Comma-split and trim the authors answer; empty input means no authors.
fn split_authors(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .map(str::to_string)
        .collect()
}

fn select_catalog_modules<C: ProductConfig>(
    config: &C,
    catalog: &Catalog,
    args: &CreateArgs,
) -> Result<Selection> {
    if catalog.is_empty() {
        cliclack::log::warning("No modules available; scaffolding a bare project")?;
        return Ok(Selection::default());
    }

    let chosen: HashSet<String> = if let Some(requested) = &args.modules {
        let known = catalog.known_names();
        let mut chosen = HashSet::new();
        for name in requested {
            if known.contains(name.as_str()) {
                chosen.insert(name.clone());
            } else {
                cliclack::log::warning(format!("Unknown module: {name}"))?;
            }
        }
        chosen
    } else if args.yes {
        config
            .recommended_modules()
            .iter()
            .map(|name| name.to_string())
            .collect()
    } else {
        let recommended: Vec<String> = config
            .recommended_modules()
            .iter()
            .map(|name| name.to_string())
            .filter(|name| catalog.contains(name))
            .collect();

        let mut multi = cliclack::multiselect("Select the modules you want to install");
        for module in catalog.iter() {
            multi = multi.item(module.name.clone(), &module.name, &module.category);
        }

        let selected: Vec<String> = multi
            .initial_values(recommended)
            .required(false)
            .interact()?;
        selected.into_iter().collect()
    };

    let selection = select_modules(catalog, &chosen);
    cliclack::log::success(format!("Selected {} modules", selection.len()))?;
    Ok(selection)
}

async fn create_project(
    project_dir: &Path,
    info: &ProjectInfo,
    selection: &Selection,
    manifest: &CascadeManifest,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let written = scaffold::generate_project(project_dir, info, selection, manifest).await?;

    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        project_dir.display()
    ));

    Ok(())
}

async fn handle_install(project_dir: &Path, args: &CreateArgs) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");
    let tool_info: Vec<String> = check::check_install_tools()
        .iter()
        .map(|t| {
            if t.available {
                format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", t.name)
            }
        })
        .collect();
    spinner.stop(format!("Detected tools: {}", tool_info.join(", ")));

    let tool = tool::bower_tool();

    if !tool.is_installed() {
        cliclack::log::warning(format!("{} is not installed", tool.config().display_name))?;

        // In non-interactive mode, just skip
        if args.yes {
            cliclack::log::info("Skipping the module install (--yes mode)")?;
            return Ok(());
        }

        let action: &str = cliclack::select("What would you like to do?")
            .item(
                "install",
                format!("Install {} automatically", tool.config().display_name),
                "",
            )
            .item(
                "docs",
                format!("Open documentation ({})", tool.config().docs_url),
                "",
            )
            .item("skip", "Skip the module install", "")
            .interact()?;

        match action {
            "install" => {
                cliclack::log::info(format!("This will execute: {}", tool.install_command()))?;

                let confirm: bool = cliclack::confirm("Proceed with installation?")
                    .initial_value(true)
                    .interact()?;

                if !confirm {
                    cliclack::log::info(format!(
                        "Skipping. Refer to the docs for installation instructions: ({})",
                        tool.config().docs_url
                    ))?;
                    return Ok(());
                }

                if let Err(e) = tool.install().await {
                    cliclack::log::error(format!("{}", e))?;
                    cliclack::log::info("Skipping the module install")?;
                    return Ok(());
                }
                cliclack::log::success(format!(
                    "{} installed successfully",
                    tool.config().display_name
                ))?;
            }
            "docs" => {
                tool.open_docs()?;
                cliclack::log::info(format!(
                    "After installing {}, run `bower install` in the project directory.",
                    tool.config().display_name
                ))?;
                return Ok(());
            }
            _ => return Ok(()),
        }
    }

    let proceed = args.yes
        || cliclack::confirm("Install the selected modules now?")
            .initial_value(true)
            .interact()?;
    if !proceed {
        return Ok(());
    }

    cliclack::log::step("Installing modules...")?;
    match tool::run_package_install(project_dir).await {
        Ok(_) => cliclack::log::success("Modules installed")?,
        Err(e) => {
            // Advisory only: the project is already written
            cliclack::log::warning(format!("Module install failed: {e}"))?;
            cliclack::log::info(format!(
                "You can run it later: cd {} && bower install",
                project_dir.display()
            ))?;
        }
    }
    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_are_split_and_trimmed() {
        assert_eq!(
            split_authors("Ada Lovelace,  Grace Hopper "),
            vec!["Ada Lovelace".to_string(), "Grace Hopper".to_string()]
        );
    }

    #[test]
    fn empty_authors_input_means_none() {
        assert!(split_authors("").is_empty());
        assert!(split_authors(" , ").is_empty());
    }
}
