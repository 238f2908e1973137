use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use iconsmith::{Catalog, DeployConfig, Deployer, Generator, Importer, Workspace};

/// iconsmith - Build Android icon-pack resource XMLs from a CSV app map
#[derive(Parser, Debug)]
#[command(name = "iconsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Install root holding input/, map/, output/, templates/ and config/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import new app rows from the input CSV into the data store
    Add,
    /// Generate the five XML resource files from the data store
    Generate,
    /// Copy the generated files into an Android project tree
    Copy {
        /// Target project root; read from config/config.json when omitted
        target_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let workspace = Workspace::new(&cli.root);
    let locale = iconsmith::messages::detect_locale();
    let msg = Catalog::load(&workspace.locales_dir(), locale);

    info!(
        "iconsmith v{} (locale {})",
        env!("CARGO_PKG_VERSION"),
        msg.locale().tag()
    );

    let result = match cli.command {
        Command::Add => Importer::new(&workspace, &msg).run().map(|_| ()),
        Command::Generate => Generator::new(&workspace, &msg).run(),
        Command::Copy { target_dir } => {
            let target = match target_dir {
                Some(dir) => Ok(dir),
                None => {
                    println!("{}", msg.text("copy.read_config"));
                    DeployConfig::load(&workspace.config_file()).map(|c| c.target_dir)
                }
            };
            target.and_then(|t| Deployer::new(&workspace, &msg).run(&t))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.localized(&msg).red());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
