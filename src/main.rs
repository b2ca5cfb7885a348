mod adapters;
mod network;
mod routing;
mod server;

use std::{
    io::{self, Write},
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use clap::{ArgAction, Parser, Subcommand};
use tracing::{Level, info};

use crate::{
    adapters::json::JsonAdapter,
    network::TransportNetwork,
    routing::{Route, RouteReport},
};

#[derive(Parser)]
#[command(version, about = "Least-cost routes over a suburban rail network")]
struct Cli {
    /// JSON network file to use instead of the built-in Mumbai network
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the cheapest route between two stations
    Route {
        from: String,
        to: String,
        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// List stations
    Stations {
        #[arg(long)]
        line: Option<String>,
    },
    /// Serve route queries over HTTP
    Serve {
        #[arg(long, default_value = server::DEFAULT_ADDR)]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let network = load_network(cli.network.as_deref())?;

    match cli.command {
        Command::Route { from, to, json } => {
            let route = routing::route(&network, &from, &to)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&RouteReport::from(route))?);
            } else {
                write_route(&mut io::stdout().lock(), &from, &to, &route)?;
            }
        }
        Command::Stations { line } => {
            for s in network
                .stations()
                .filter(|s| line.as_ref().is_none_or(|line| &s.line == line))
            {
                println!("{}", render_station(s));
            }
        }
        Command::Serve { addr } => server::serve(Arc::new(network), addr).await?,
    }

    Ok(())
}

fn load_network(path: Option<&Path>) -> anyhow::Result<TransportNetwork> {
    let now = Instant::now();
    info!("Loading network");
    let adapter = match path {
        Some(path) => JsonAdapter::from_path(path)?,
        None => JsonAdapter::mumbai()?,
    };
    let network = TransportNetwork::from_adapter(&adapter)?;
    info!(
        stations = network.station_count(),
        connections = network.edge_count(),
        "Done in {:?}",
        now.elapsed()
    );
    Ok(network)
}

fn render_station(station: &network::Station) -> String {
    let kind = if station.major { "Major" } else { "Minor" };
    format!("{} (Line: {}) ({kind})", station.name, station.line)
}

fn write_route<W: Write>(out: &mut W, from: &str, to: &str, route: &Route) -> io::Result<()> {
    writeln!(out, "Shortest path from {from} to {to}:")?;
    writeln!(out, "Total cost: {}", route.total_cost)?;

    writeln!(out, "Stations visited:")?;
    for station in &route.stations {
        writeln!(out, "  {}", render_station(station))?;
    }

    if !route.legs.is_empty() {
        writeln!(out, "Legs:")?;
        for leg in &route.legs {
            writeln!(out, "  {} -> {} ({}, cost {})", leg.from, leg.to, leg.kind, leg.cost)?;
        }
    }

    let mut changes = route.line_changes().peekable();
    if changes.peek().is_some() {
        writeln!(out, "Line changes:")?;
        for c in changes {
            writeln!(
                out,
                "  Change from {} line to {} line at {}",
                c.from_line, c.to_line, c.at
            )?;
        }
    }

    Ok(())
}
