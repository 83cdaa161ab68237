use anyhow::Result;
use clap::Parser;
use topo_order::areas::repository::Repository;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `topo_order=trace`)
const LOG_ENV: &str = "TOPO_ORDER_LOG";

#[derive(Parser)]
#[command(
    name = "topo-order",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "List commits in topological order with branch names",
    long_about = "Reads the loose objects of the enclosing repository, orders every commit \
    reachable from a local branch so that descendants come before ancestors, and prints one \
    commit per line with the branches pointing at it. Jumps between unrelated chains of \
    commits are delimited by `parents=` and `=children` marker lines.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let pwd = std::env::current_dir()?;
    let repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

    repository.topo_order()
}
