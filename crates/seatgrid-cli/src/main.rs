use clap::{Parser, Subcommand};

mod commands;
mod report;

#[derive(Parser)]
#[command(
    name = "seatgrid",
    about = "SeatGrid: exam seating plans",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Log placement decisions (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a seating plan from an exam request file.
    ///
    /// Candidates are distributed across the rooms in file order, each room
    /// filled up to its capacity, then seated with the chosen algorithm.
    Plan {
        /// Exam request file (.toml or .json)
        #[arg(short, long, default_value = "exam.toml")]
        config: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Override [exam].algorithm
        #[arg(short, long)]
        algorithm: Option<String>,
        /// Override [exam].seed (used by the shuffled algorithm)
        #[arg(long)]
        seed: Option<u64>,
        /// Plan rooms in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Write a scaffold exam request file
    Init {
        #[arg(short, long, default_value = "exam.toml")]
        path: String,
        /// Exam identifier to put in the scaffold
        #[arg(short, long, default_value = "exam-1")]
        exam: String,
    },
    /// List the available seating algorithms
    Algorithms,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "seatgrid=debug" } else { "seatgrid=info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Plan {
            config,
            format,
            algorithm,
            seed,
            parallel,
        } => commands::plan::plan(&config, &format, algorithm.as_deref(), seed, parallel),
        Commands::Init { path, exam } => commands::init::init(&path, &exam),
        Commands::Algorithms => {
            commands::algorithms::algorithms();
            Ok(())
        }
    }
}
