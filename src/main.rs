//! mmd2png CLI

use clap::{Args, Parser, Subcommand};
use colored::*;
use mmd2png::cli::{init_logging, ConsoleObserver, PromptingInstaller};
use mmd2png::converter::discover_jobs;
use mmd2png::filesystem::LocalFileSystem;
use mmd2png::process::SystemCommandRunner;
use mmd2png::toolchain::{DisabledInstaller, Installer, PackageManagerInstaller};
use mmd2png::{
    ensure_tool_available, generate_gallery, write_report, ConversionJob, GalleryConfig,
    GalleryError, GalleryOptions, Host, SilentObserver, ToolAvailability,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mmd2png")]
#[command(about = "Render Mermaid diagrams to PNG and build an HTML gallery", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check for mermaid-cli, render every diagram, and write the gallery
    Render {
        #[command(flatten)]
        common: CommonArgs,

        /// Render every .mmd file under this directory instead of the configured list
        #[arg(long)]
        discover: Option<PathBuf>,

        /// Install mermaid-cli without asking if it is missing
        #[arg(short = 'y', long)]
        yes: bool,

        /// Never try to install mermaid-cli
        #[arg(long, conflicts_with = "yes")]
        no_install: bool,

        /// Skip writing the HTML gallery
        #[arg(long)]
        no_report: bool,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Mermaid theme (default, dark, forest, neutral)
        #[arg(long)]
        theme: Option<String>,

        /// Background color, e.g. white or transparent
        #[arg(long)]
        background: Option<String>,
    },

    /// Only check whether mermaid-cli is available
    Check {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Rebuild the HTML gallery from images already in the output directory
    Report {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Show the configured diagrams and whether their sources exist
    List {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write a starter config file with the built-in defaults
    Init {
        /// Where to write the config
        #[arg(default_value = "mmd2png.json5")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Config file (JSON5); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for images and the gallery
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl CommonArgs {
    fn load(&self) -> Result<GalleryConfig, GalleryError> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::load(path)?,
            None => GalleryConfig::default(),
        };
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Render {
            common,
            discover,
            yes,
            no_install,
            no_report,
            width,
            height,
            theme,
            background,
        } => {
            let mut config = load_or_exit(&common);
            if let Some(width) = width {
                config.render.width = width;
            }
            if let Some(height) = height {
                config.render.height = height;
            }
            if let Some(theme) = theme {
                config.render.theme = theme;
            }
            if let Some(background) = background {
                config.render.background = background;
            }
            if let Err(e) = config.validate() {
                fail("Invalid options!", &anyhow::Error::from(e));
            }

            let jobs = match discover {
                Some(dir) => match discover_jobs(&dir, "mmd", &config.image_extension) {
                    Ok(jobs) => jobs,
                    Err(e) => fail("Failed to discover diagrams!", &e),
                },
                None => config.jobs(),
            };

            run_render(&config, &jobs, yes, no_install, !no_report)
        }

        Commands::Check { common } => {
            let config = load_or_exit(&common);
            let runner = SystemCommandRunner;
            let availability =
                ensure_tool_available(&config.tool, &runner, &DisabledInstaller, &mut SilentObserver);
            match availability {
                ToolAvailability::Found { version } => {
                    println!("{}", format!("✅ {} found: {}", config.tool.display_name, version).green());
                    0
                }
                _ => {
                    println!("{}", format!("❌ {} not found", config.tool.display_name).red().bold());
                    println!(
                        "  Install with: {} {}",
                        config.tool.install_program,
                        config.tool.install_args.join(" ")
                    );
                    1
                }
            }
        }

        Commands::Report { common } => {
            let config = load_or_exit(&common);
            let mut observer = ConsoleObserver::new(&config.project.name);
            match write_report(&config, &LocalFileSystem, &mut observer) {
                Ok(Some(_)) => 0,
                Ok(None) => {
                    println!(
                        "{}",
                        format!("⚠️  {} does not exist, nothing to report", config.output_dir.display())
                            .yellow()
                    );
                    0
                }
                Err(e) => fail("Failed to write report!", &e),
            }
        }

        Commands::List { common } => {
            let config = load_or_exit(&common);
            print_jobs(&config.jobs(), &config.output_dir);
            0
        }

        Commands::Init { path, force } => init_config(&path, force),
    };

    std::process::exit(code);
}

fn run_render(
    config: &GalleryConfig,
    jobs: &[ConversionJob],
    yes: bool,
    no_install: bool,
    generate_report: bool,
) -> i32 {
    println!("{}", format!("🎨 {} Diagram Image Generator", config.project.name).bold().blue());
    println!("{}", "=".repeat(40).blue());

    let runner = SystemCommandRunner;
    let prompting = PromptingInstaller::new(PackageManagerInstaller::new(&runner), yes);
    let installer: &dyn Installer = if no_install { &DisabledInstaller } else { &prompting };

    let host = Host {
        runner: &runner,
        fs: &LocalFileSystem,
        installer,
    };
    let options = GalleryOptions { generate_report };
    let mut observer = ConsoleObserver::new(&config.project.name);

    match generate_gallery(config, jobs, host, &options, &mut observer) {
        Ok(_) => {
            println!();
            println!(
                "{}",
                format!(
                    "🎉 All done! Check the '{}' folder for your generated diagrams.",
                    config.output_dir.display()
                )
                .green()
                .bold()
            );
            0
        }
        Err(e) if matches!(e.downcast_ref::<GalleryError>(), Some(GalleryError::ToolUnavailable { .. })) => {
            fail(
                &format!("Cannot proceed without {}", config.tool.display_name),
                &e,
            )
        }
        Err(e) => fail("Gallery generation failed!", &e),
    }
}

fn print_jobs(jobs: &[ConversionJob], output_dir: &Path) {
    println!("{}", format!("📋 {} configured diagrams", jobs.len()).bold().blue());
    println!("{}", "=".repeat(50).blue());
    for job in jobs {
        let marker = if job.input_path.exists() { "✅" } else { "❌" };
        println!(
            "  {} {} → {}",
            marker,
            job.input_path.display(),
            output_dir.join(&job.output_path).display().to_string().cyan()
        );
    }
}

fn init_config(path: &Path, force: bool) -> i32 {
    if path.exists() && !force {
        eprintln!(
            "{}",
            format!("❌ {} already exists (use --force to overwrite)", path.display()).red()
        );
        return 1;
    }

    let written = GalleryConfig::default()
        .to_pretty_json()
        .map_err(anyhow::Error::from)
        .and_then(|json| {
            std::fs::write(path, json)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))
        });
    match written {
        Ok(()) => {
            println!("{}", format!("✅ Wrote {}", path.display()).green());
            0
        }
        Err(e) => fail("Failed to write config!", &e),
    }
}

fn load_or_exit(common: &CommonArgs) -> GalleryConfig {
    match common.load() {
        Ok(config) => config,
        Err(e) => fail("Failed to load configuration!", &anyhow::Error::from(e)),
    }
}

fn fail(headline: &str, error: &anyhow::Error) -> ! {
    eprintln!("{}", format!("❌ {headline}").red().bold());
    eprintln!("{}", format!("Error: {error:#}").red());
    std::process::exit(1);
}
