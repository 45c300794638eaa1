use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use tracing::debug;

use classic_algos::config::{get_config_path, load_config, load_config_file, save_config, AlgosConfig};
use classic_algos::errors::{AlgoError, Result};
use classic_algos::fibonacci::{
    check_fibonacci_input, checked_fibonacci, fibonacci_memo, fibonacci_traced,
};
use classic_algos::graph::{
    bfs, dfs, dfs_forest, longest_path_from, shortest_path, topological_sort, LineEmitter, Visitor,
};
use classic_algos::logging::init_tracing;
use classic_algos::matrix::{multiply, Matrix};
use classic_algos::output::{format_matrix, format_scalar, format_search_index, format_sequence};
use classic_algos::search::linear_search;
use classic_algos::sort::{bubble_sort, merge_sort};
use classic_algos::types::{Graph, NodeId, OutputFormat};

/// Textbook algorithms with well-known complexity.
#[derive(Parser)]
#[command(name = "classic-algos", about = "Textbook algorithms with well-known complexity")]
struct Cli {
    /// Path to a config file (default: .classic-algos/config.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Output format (text or json); overrides the config
    #[arg(short, long, global = true)]
    format: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort integers (bubble sort unless --merge)
    Sort {
        /// Values to sort, comma or space separated
        #[arg(required = true, num_args = 1.., value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Use merge sort instead of bubble sort
        #[arg(short, long)]
        merge: bool,
    },
    /// Compute the n-th Fibonacci number
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Use the memoized O(n) variant
        #[arg(long, conflicts_with = "trace")]
        memo: bool,
        /// Also report how many recursive calls the naive version made
        #[arg(long)]
        trace: bool,
    },
    /// Find the first index of a target value, or -1
    Search {
        #[arg(allow_negative_numbers = true)]
        target: i64,
        /// Values to scan, comma or space separated
        #[arg(required = true, num_args = 1.., value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Breadth-first traversal from a start node
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(short, long)]
        start: NodeId,
    },
    /// Depth-first pre-order traversal from a start node, or over every node
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(short, long, required_unless_present = "all")]
        start: Option<NodeId>,
        /// Visit every node, starting a new tree at each unvisited id
        #[arg(long, conflicts_with = "start")]
        all: bool,
    },
    /// Topological order of nodes 0..N-1 (Kahn's algorithm)
    Topo {
        #[command(flatten)]
        graph: GraphArgs,
        /// Total node count N
        #[arg(short, long)]
        nodes: usize,
        /// Fail on cycles instead of printing the truncated order
        #[arg(long)]
        strict: bool,
    },
    /// Shortest path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        from: NodeId,
        #[arg(long)]
        to: NodeId,
        /// Treat every edge as bidirectional
        #[arg(short, long)]
        undirected: bool,
    },
    /// Longest path (in edges) from a source in a DAG
    Longest {
        #[command(flatten)]
        graph: GraphArgs,
        /// Total node count N
        #[arg(short, long)]
        nodes: usize,
        #[arg(short, long)]
        source: NodeId,
    },
    /// Multiply two matrices given as JSON arrays of rows
    Matmul {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Write a default config file
    InitConfig {
        /// Directory to write into (default: current directory)
        path: Option<String>,
    },
}

/// Graph input, either inline JSON or a JSON file.
#[derive(Args)]
struct GraphArgs {
    /// Adjacency mapping as JSON, e.g. '{"0":[1,2],"1":[3],"2":[3],"3":[]}'
    #[arg(short, long, conflicts_with = "graph_file")]
    graph: Option<String>,
    /// File containing the adjacency mapping as JSON
    #[arg(long)]
    graph_file: Option<PathBuf>,
}

impl GraphArgs {
    fn load(&self) -> Result<Graph> {
        let text = match (&self.graph, &self.graph_file) {
            (Some(inline), _) => inline.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => {
                return Err(AlgoError::InvalidArgument {
                    message: "either --graph or --graph-file is required".to_string(),
                })
            }
        };
        let graph: Graph = serde_json::from_str(&text)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&resolve_path(None))?,
    };
    init_tracing(&config.log_filter);

    let format = match cli.format.as_deref() {
        Some(s) => OutputFormat::from_str(s).ok_or_else(|| AlgoError::InvalidArgument {
            message: format!("unknown output format '{}' (expected text or json)", s),
        })?,
        None => config.format,
    };

    match cli.command {
        Commands::Sort { mut values, merge } => {
            if merge {
                values = merge_sort(&values);
            } else {
                bubble_sort(&mut values);
            }
            println!("{}", format_sequence(&values, format)?);
        }
        Commands::Fib { n, memo, trace } => {
            if memo {
                let n = u32::try_from(n).map_err(|_| AlgoError::InvalidArgument {
                    message: format!("fibonacci input must be a non-negative 32-bit value, got {}", n),
                })?;
                println!("{}", format_scalar(&fibonacci_memo(n)?, format)?);
            } else if trace {
                let n = check_fibonacci_input(n, config.max_fibonacci_input)?;
                let traced = fibonacci_traced(n)?;
                match format {
                    OutputFormat::Text => {
                        println!("{}", traced.value);
                        println!("calls: {}", traced.calls);
                    }
                    OutputFormat::Json => println!("{}", serde_json::to_string(&traced)?),
                }
            } else {
                let value = checked_fibonacci(n, config.max_fibonacci_input)?;
                println!("{}", format_scalar(&value, format)?);
            }
        }
        Commands::Search { target, values } => {
            let index = linear_search(&values, &target);
            println!("{}", format_search_index(index, format)?);
        }
        Commands::Bfs { graph, start } => {
            let graph = graph.load()?;
            emit_traversal(format, |visitor| bfs(&graph, start, visitor))?;
        }
        Commands::Dfs { graph, start, all } => {
            let graph = graph.load()?;
            match (all, start) {
                (true, _) => emit_traversal(format, |visitor| dfs_forest(&graph, visitor))?,
                (false, Some(start)) => {
                    let mut visited = HashSet::new();
                    emit_traversal(format, |visitor| dfs(&graph, start, &mut visited, visitor))?;
                }
                (false, None) => {
                    return Err(AlgoError::InvalidArgument {
                        message: "either --start or --all is required".to_string(),
                    })
                }
            }
        }
        Commands::Topo {
            graph,
            nodes,
            strict,
        } => {
            let graph = graph.load()?;
            let result = topological_sort(&graph, nodes)?;
            let order = if strict {
                result.into_strict()?
            } else {
                result.order
            };
            println!("{}", format_sequence(&order, format)?);
        }
        Commands::Path {
            graph,
            from,
            to,
            undirected,
        } => {
            let mut graph = graph.load()?;
            if undirected {
                graph = symmetrize(&graph);
            }
            match shortest_path(&graph, from, to)? {
                Some(path) => println!("{}", format_sequence(&path, format)?),
                None => match format {
                    OutputFormat::Text => println!("none"),
                    OutputFormat::Json => println!("null"),
                },
            }
        }
        Commands::Longest {
            graph,
            nodes,
            source,
        } => {
            let graph = graph.load()?;
            let length = longest_path_from(&graph, nodes, source)?;
            println!("{}", format_scalar(&length, format)?);
        }
        Commands::Matmul { a, b } => {
            let a: Matrix = serde_json::from_str(&a)?;
            let b: Matrix = serde_json::from_str(&b)?;
            let product = multiply(&a, &b)?;
            println!("{}", format_matrix(&product, format)?);
        }
        Commands::InitConfig { path } => {
            let root = resolve_path(path);
            save_config(&root, &AlgosConfig::default())?;
            println!("Wrote {}", get_config_path(&root).display());
        }
    }
    Ok(())
}

/// Runs a traversal, streaming ids line by line for text output or
/// collecting them into a JSON array.
fn emit_traversal<F>(format: OutputFormat, traverse: F) -> Result<()>
where
    F: FnOnce(&mut dyn Visitor) -> Result<()>,
{
    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut emitter = LineEmitter::new(stdout.lock());
            traverse(&mut emitter)?;
            debug!(emitted = emitter.emitted(), "traversal written");
            emitter.into_inner()?;
        }
        OutputFormat::Json => {
            let mut order: Vec<NodeId> = Vec::new();
            traverse(&mut order)?;
            println!("{}", format_sequence(&order, format)?);
        }
    }
    Ok(())
}

/// Returns a copy of `graph` with every edge present in both directions.
fn symmetrize(graph: &Graph) -> Graph {
    let edges: Vec<(NodeId, NodeId)> = graph
        .iter()
        .flat_map(|(u, neighbors)| neighbors.iter().map(move |&v| (u, v)))
        .collect();
    let mut undirected = Graph::from_undirected_edges(&edges);
    for node in graph.nodes() {
        undirected.add_node(node);
    }
    undirected
}

/// Resolves an optional path argument to a `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
