use clap::Parser;
use eight_puzzle_solver::board::{Board, BOARD_SIZE};
use eight_puzzle_solver::heuristics::is_solvable;
use eight_puzzle_solver::solver::{
    CostModel, Solver, SolverConfig, Strategy, ASTAR_MAX_MOVES, BFS_MAX_MOVES, DFS_MAX_MOVES,
};
use eight_puzzle_solver::utils::{board_from_str_array, board_from_text};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (nine integers, 0 for the blank, row by row)
    board_file: PathBuf,

    /// Run a single strategy instead of all three
    #[clap(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// How the cost of each move is computed
    #[clap(short, long, value_enum, default_value_t = CostModel::Uniform)]
    cost_model: CostModel,

    /// Depth bound for A*
    #[clap(long, default_value_t = ASTAR_MAX_MOVES)]
    astar_bound: u32,

    /// Depth bound for BFS
    #[clap(long, default_value_t = BFS_MAX_MOVES)]
    bfs_bound: u32,

    /// Depth bound for DFS
    #[clap(long, default_value_t = DFS_MAX_MOVES)]
    dfs_bound: u32,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    // A grid file is read row by row; anything else is taken as nine loose numbers.
    let board = if lines.len() == BOARD_SIZE {
        board_from_str_array(&lines)
    } else {
        board_from_text(&content)
    };
    board.map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let initial = read_board_file(&args.board_file).unwrap_or_else(|e| {
        eprintln!(
            "Failed to read board from file {}: {}",
            args.board_file.display(),
            e
        );
        process::exit(1);
    });
    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", initial);

    if !is_solvable(&initial) {
        eprintln!(
            "Warning: the board has odd parity and cannot reach the goal. \
             Each strategy will still search until it hits its bound.\n"
        );
    }

    let config = SolverConfig {
        astar_bound: args.astar_bound,
        bfs_bound: args.bfs_bound,
        dfs_bound: args.dfs_bound,
        cost_model: args.cost_model,
    };
    let strategies = match args.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    let mut solver = Solver::with_config(initial, config);
    for strategy in strategies {
        let outcome = solver.run(strategy);
        match outcome.cost() {
            Some(cost) => println!(
                "Minimum cost by {:<3}: {} ({} moves, {} nodes expanded)",
                strategy.name(),
                cost,
                outcome.moves().unwrap_or_default(),
                outcome.nodes_expanded()
            ),
            None => println!(
                "Minimum cost by {:<3}: unsolved within {} moves ({} nodes expanded)",
                strategy.name(),
                config.bound(strategy),
                outcome.nodes_expanded()
            ),
        }
    }
}
