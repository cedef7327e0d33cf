//! # 8-Puzzle Solver Library
//!
//! This library solves the 3×3 sliding-tile puzzle with three search strategies and
//! reports, per strategy, whether the goal is reachable within a depth bound and at what
//! path cost.
//!
//! It is used by two binaries:
//! - `solve`: Reads a 3×3 grid from a file and prints the cost found by each strategy.
//! - `strategy_evaluator`: Compares the strategies over seeded random scrambles.
//!
//! ## Modules
//! - `board`: The board representation (`Board`, `Move`), goal test, successor generation
//!   and seeded scrambling.
//! - `solver`: The search engine: `SearchNode`, A*, BFS and DFS, and the `Solver` facade
//!   that runs each strategy at most once.
//! - `heuristics`: Distance estimates and the parity-based solvability check.
//! - `utils`: Parsing boards from text.

pub mod board;
pub mod heuristics;
pub mod solver;
pub mod utils;
