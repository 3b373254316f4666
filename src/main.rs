use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use stepgen::commands::{generate_steps, init_project, load_config, preview};
use stepgen::host::{LineRange, TerminalHost};
use stepgen::models::{ConfigOverrides, Framework};
use stepgen::Result;

/// stepgen - Cucumber step-definition skeletons from Gherkin steps
#[derive(Parser)]
#[command(name = "stepgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a step-definition class from a feature file
    Generate {
        /// Feature file to read (defaults to stdin)
        file: Option<PathBuf>,

        /// Only use these lines of the input, e.g. 12:30
        #[arg(long)]
        lines: Option<LineRange>,

        /// Write the class to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the package name
        #[arg(long)]
        package: Option<String>,

        /// Override the class name
        #[arg(long)]
        class: Option<String>,

        /// Extend this base test class
        #[arg(long)]
        base_class: Option<String>,

        /// Extra imports to add
        #[arg(long = "import", value_delimiter = ',')]
        imports: Vec<String>,

        /// Override the framework tag
        #[arg(long, value_enum)]
        framework: Option<Framework>,

        /// Override the indent size
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Show how each step would be parsed
    Preview {
        /// Feature file to read (defaults to stdin)
        file: Option<PathBuf>,

        /// Only use these lines of the input, e.g. 12:30
        #[arg(long)]
        lines: Option<LineRange>,

        /// Print the parsed steps as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a stepgen.toml config file
    Init {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Accept all defaults without prompting
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries generated code
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            file,
            lines,
            output,
            package,
            class,
            base_class,
            imports,
            framework,
            indent,
        } => {
            let project_root = std::env::current_dir()?;
            let overrides = ConfigOverrides {
                package_name: package,
                class_name: class,
                base_test_class: base_class,
                imports,
                framework,
                indent_size: indent,
            };
            let config = load_config(&project_root, overrides)?;
            let mut host = TerminalHost::new(file, lines);
            generate_steps(&mut host, &config, output.as_deref())?;
            Ok(())
        }

        Commands::Preview { file, lines, json } => {
            let mut host = TerminalHost::new(file, lines);
            preview(&mut host, json)?;
            Ok(())
        }

        Commands::Init { path, yes } => {
            let project_root = match path {
                Some(p) => p,
                None => std::env::current_dir()?,
            };
            let mut host = TerminalHost::new(None, None);
            if yes {
                host = host.non_interactive();
            }
            init_project(&mut host, &project_root)?;
            Ok(())
        }
    }
}
