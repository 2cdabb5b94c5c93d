use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use meetpoint_cli::commands::{
    buildings::handle_buildings, dump::handle_dump, meet::handle_meet, stats::handle_stats,
};
use meetpoint_cli::output::{DataFormat, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find a fair meeting building on campus")]
struct Cli {
    /// Path to the campus map JSON file.
    #[arg(long, env = "MEETPOINT_MAP", global = true)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick the building halfway between two others and route both people to it.
    Meet {
        /// First person's building (abbreviation or name).
        #[arg(long = "from")]
        from: String,
        /// Second person's building (abbreviation or name).
        #[arg(long = "to")]
        to: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print node, footway, building, vertex and edge counts.
    Stats {
        #[arg(long, value_enum, default_value_t = DataFormat::Text)]
        format: DataFormat,
    },
    /// List the buildings in map order.
    Buildings {
        #[arg(long, value_enum, default_value_t = DataFormat::Text)]
        format: DataFormat,
    },
    /// Write the footway graph's vertex list and adjacency matrix.
    Dump,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let Some(map) = cli.map else {
        anyhow::bail!("no campus map given; pass --map <PATH> or set MEETPOINT_MAP");
    };

    match cli.command {
        Command::Meet { from, to, format } => handle_meet(&map, &from, &to, format),
        Command::Stats { format } => handle_stats(&map, format),
        Command::Buildings { format } => handle_buildings(&map, format),
        Command::Dump => handle_dump(&map),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
