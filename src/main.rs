//! Generates a random graph, classifies it and prints an Eulerian walk if one exists.

use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use fleury::{algo::*, gens::*, io::*, prelude::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(author, about = "Eulerian walks in random graphs via Fleury's algorithm", long_about = None)]
pub struct Args {
    /// Number of vertices
    #[arg(long = "nodes", short = 'n', default_value = "6", env = "FLEURY_NODES")]
    nodes: NumNodes,

    /// Probability with which each ordered pair of distinct vertices creates an edge
    #[arg(long = "probability", short = 'p', default_value = "0.5", env = "FLEURY_PROBABILITY")]
    probability: f64,

    /// Seed of the random generator (random if omitted)
    #[arg(long = "seed", env = "FLEURY_SEED")]
    seed: Option<u64>,

    /// Write the graph (and its walk) in the DOT format to this file
    #[arg(long = "dot", value_name = "PATH")]
    dot: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, nodes = args.nodes, probability = args.probability, "generating graph");
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);

    let mut graph = AdjMatrix::gnp(rng, args.nodes, args.probability)
        .wrap_err("failed to generate random graph")?;
    print!("{graph}");

    let kind = graph.classify();
    println!("{kind}");

    let walk = if kind.has_walk() {
        let walk = graph.find_eulerian_walk()?;
        println!("{}", walk.display(&graph));
        Some(walk)
    } else {
        None
    };

    if let Some(path) = args.dot {
        RandomLayout::new().place(&mut graph, rng)?;
        let written = match &walk {
            Some(walk) => graph.try_write_walk_dot_file(walk, &path),
            None => graph.try_write_dot_file(&path),
        };
        written.wrap_err_with(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote dot file");
    }

    Ok(())
}
