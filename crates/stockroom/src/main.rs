use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod list;
mod report;
mod search;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Stock inventory queries for electronics components", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the stock queries for a stock file
    #[command(alias = "r")]
    Report(report::ReportArgs),

    /// List the contents of a stock file
    #[command(alias = "l")]
    List(list::ListArgs),

    /// Find items of one component type
    #[command(alias = "s")]
    Search(search::SearchArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level keeps skipped-record warnings visible; RUST_LOG overrides.
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Report(args) => report::execute(args),
        Commands::List(args) => list::execute(args),
        Commands::Search(args) => search::execute(args),
    }
}
