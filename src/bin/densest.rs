//! Command-line entry point: pick a dataset, build the graph, peel it and
//! report the densest subgraph found.

use clap::Parser;
use denser::{
    algorithms::metrics::degree::{average_degree, max_degree},
    graph_loader::{datasets::Dataset, example::karate_club::karate_club_graph},
    prelude::*,
};
use itertools::Itertools;
use std::{error::Error, path::PathBuf, time::Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "densest")]
#[command(about = "Greedy densest-subgraph search over edge-list datasets", long_about = None)]
struct Args {
    /// Named dataset to analyse (see --list), or "demo" for the bundled
    /// karate club graph
    dataset: Option<String>,

    /// Directory containing the dataset files
    #[arg(long, env = "DENSER_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Analyse an arbitrary edge-list file instead of a named dataset
    #[arg(long, conflicts_with = "dataset")]
    file: Option<PathBuf>,

    /// Field delimiter for --file
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Skip the first row of --file
    #[arg(long)]
    header: bool,

    /// List the known datasets and exit
    #[arg(long)]
    list: bool,
}

fn load(args: &Args) -> Result<Graph, Box<dyn Error>> {
    if let Some(file) = &args.file {
        let graph = EdgeListLoader::new(file)
            .set_delimiter(&args.delimiter)
            .set_header(args.header)
            .load_graph()?;
        return Ok(graph);
    }
    match args.dataset.as_deref() {
        None | Some("demo") => Ok(karate_club_graph()),
        Some(name) => match Dataset::find(name) {
            Some(dataset) => Ok(dataset.loader(&args.data_dir).load_graph()?),
            None => Err(format!(
                "unknown dataset {name:?}, available options: demo, {}",
                Dataset::names().join(", ")
            )
            .into()),
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    if args.list {
        for dataset in denser::graph_loader::datasets::DATASETS {
            println!(
                "{:<12} {} (delimiter {:?})",
                dataset.name, dataset.file_name, dataset.delimiter
            );
        }
        return Ok(());
    }

    println!("Building the graph...");
    let now = Instant::now();
    let graph = load(&args)?;
    println!("Build time: {:.3} secs", now.elapsed().as_secs_f64());

    if graph.num_vertices() == 0 {
        return Err(GraphError::EmptyGraph.into());
    }

    println!(
        "Dataset size:\n\tV: {}\n\tE: {}\n\tV + E: {}",
        graph.num_vertices(),
        graph.num_edges(),
        graph.num_vertices() + graph.num_edges()
    );
    println!(
        "Degrees:\n\tmax: {}\n\taverage: {:.4}\n\tdensity: {:.4}",
        max_degree(&graph),
        average_degree(&graph),
        graph.density()
    );

    println!("Looking for the maximum density subgraph...");
    let now = Instant::now();
    let result = densest_subgraph(&graph);
    println!("Algorithm time: {:.3} secs", now.elapsed().as_secs_f64());

    println!(
        "Densest subgraph found:\n\tV: {}\n\tE: {}\n\tdensity: {}",
        result.num_vertices(),
        result.num_edges(),
        result.density
    );
    if result.num_vertices() <= 20 {
        let members = result
            .vertices
            .iter()
            .map(|&v| graph.external_id(v))
            .join(", ");
        println!("\tmembers: {members}");
    }
    Ok(())
}
