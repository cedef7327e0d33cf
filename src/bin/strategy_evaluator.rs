use clap::Parser;
use eight_puzzle_solver::board::Board;
use eight_puzzle_solver::heuristics::hamming_distance;
use eight_puzzle_solver::solver::{CostModel, Solver, SolverConfig, Strategy};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u32,

    /// Random moves applied to the goal to build each board
    #[clap(long, default_value_t = 12)]
    scramble: u32,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// How the cost of each move is computed
    #[clap(short, long, value_enum, default_value_t = CostModel::Uniform)]
    cost_model: CostModel,
}

#[derive(Default)]
struct Totals {
    solved: u32,
    cost: u64,
    nodes_expanded: u64,
}

fn main() {
    let args = Args::parse();
    let config = SolverConfig {
        cost_model: args.cost_model,
        ..SolverConfig::default()
    };

    let mut totals: HashMap<Strategy, Totals> = HashMap::new();

    println!(
        "Starting strategy evaluation for {} boards ({} scramble moves)...",
        args.boards, args.scramble
    );

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let initial = Board::new_scrambled_with_seed(args.scramble, current_seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);
        println!(
            "{}\nManhattan: {}, Hamming: {}",
            initial,
            initial.manhattan(),
            hamming_distance(&initial)
        );

        let mut solver = Solver::with_config(initial, config);
        for strategy in Strategy::ALL {
            let outcome = solver.run(strategy);
            let entry = totals.entry(strategy).or_default();
            entry.nodes_expanded += outcome.nodes_expanded();

            match outcome.cost() {
                Some(cost) => {
                    entry.solved += 1;
                    entry.cost += cost as u64;
                    println!(
                        "  Strategy: {:<4}, Cost: {:<6}, Moves: {:<3}, Expanded: {}",
                        strategy.name(),
                        cost,
                        outcome.moves().unwrap_or_default(),
                        outcome.nodes_expanded()
                    );
                }
                None => println!(
                    "  Strategy: {:<4}, unsolved within {} moves, Expanded: {}",
                    strategy.name(),
                    config.bound(strategy),
                    outcome.nodes_expanded()
                ),
            }
        }

        // Every scramble is solvable, so a missing A* answer means the bound was too tight.
        if !solver.is_solvable(Strategy::AStar) {
            eprintln!(
                "Warning: A* did not solve board {} (Seed: {}) within {} moves.",
                board_idx, current_seed, config.astar_bound
            );
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");

    for strategy in Strategy::ALL {
        let Some(entry) = totals.get(&strategy) else {
            println!("Strategy {}: No results recorded.", strategy.name());
            continue;
        };
        let avg_cost = if entry.solved > 0 {
            entry.cost as f64 / entry.solved as f64
        } else {
            0.0
        };
        let avg_expanded = entry.nodes_expanded as f64 / args.boards.max(1) as f64;
        println!(
            "Strategy {:<4}: Solved {}/{}, Average Cost = {:.2}, Average Expanded = {:.1}",
            strategy.name(),
            entry.solved,
            args.boards,
            avg_cost,
            avg_expanded
        );
    }
}
