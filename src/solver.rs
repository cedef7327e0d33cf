use crate::board::Board;
use clap::ValueEnum;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

/// Default A* depth bound.
pub const ASTAR_MAX_MOVES: u32 = 30;
/// Default BFS depth bound.
pub const BFS_MAX_MOVES: u32 = 15;
/// Default DFS depth bound.
pub const DFS_MAX_MOVES: u32 = 15;

/// How the cost of reaching a configuration is derived from the tile that was moved.
///
/// An initial configuration has no moved tile and always costs `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum CostModel {
    /// Every move costs 1, so path cost equals the number of moves.
    #[default]
    Uniform,
    /// A move costs the number printed on the tile that slides.
    TileValue,
}

impl CostModel {
    /// Cost attributed to reaching `board`.
    pub fn transition_cost(&self, board: &Board) -> u32 {
        let tile = board.moved_tile();
        if tile == 0 {
            return 0;
        }
        match self {
            CostModel::Uniform => 1,
            CostModel::TileValue => tile as u32,
        }
    }
}

/// The three search strategies the solver can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Best-first search on `manhattan + moves`.
    #[value(name = "astar")]
    AStar,
    /// Level-order search.
    Bfs,
    /// Exhaustive depth-first search keeping the cheapest goal.
    Dfs,
}

impl Strategy {
    /// All strategies, in reporting order.
    pub const ALL: [Strategy; 3] = [Strategy::AStar, Strategy::Bfs, Strategy::Dfs];

    /// Short label used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::AStar => "A*",
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
        }
    }

    fn index(&self) -> usize {
        match self {
            Strategy::AStar => 0,
            Strategy::Bfs => 1,
            Strategy::Dfs => 2,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bounds and cost model shared by every run of a `Solver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// A* gives up when it pops a node with more moves than this.
    pub astar_bound: u32,
    /// BFS gives up when it reaches a node with more moves than this.
    pub bfs_bound: u32,
    /// DFS does not expand nodes with more moves than this.
    pub dfs_bound: u32,
    pub cost_model: CostModel,
}

impl SolverConfig {
    /// The depth bound configured for `strategy`.
    pub fn bound(&self, strategy: Strategy) -> u32 {
        match strategy {
            Strategy::AStar => self.astar_bound,
            Strategy::Bfs => self.bfs_bound,
            Strategy::Dfs => self.dfs_bound,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            astar_bound: ASTAR_MAX_MOVES,
            bfs_bound: BFS_MAX_MOVES,
            dfs_bound: DFS_MAX_MOVES,
            cost_model: CostModel::default(),
        }
    }
}

/// A board together with the path that reached it.
///
/// The predecessor is a copy of the parent's board rather than a link to the parent node.
/// It only serves to stop a node from expanding straight back into the configuration it
/// came from; longer cycles are not detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    board: Board,
    moves: u32,
    path_cost: u32,
    predecessor: Option<Board>,
}

impl SearchNode {
    /// Root node for an initial configuration: no moves, no cost, no predecessor.
    pub fn root(board: Board) -> Self {
        SearchNode {
            board,
            moves: 0,
            path_cost: 0,
            predecessor: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Transitions from the initial configuration.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Sum of transition costs from the initial configuration.
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    pub fn predecessor(&self) -> Option<&Board> {
        self.predecessor.as_ref()
    }

    /// A* ordering key: Manhattan estimate plus moves so far.
    pub fn priority(&self) -> u32 {
        self.board.manhattan() + self.moves
    }

    fn child(&self, board: Board, cost_model: CostModel) -> SearchNode {
        SearchNode {
            moves: self.moves + 1,
            path_cost: self.path_cost + cost_model.transition_cost(&board),
            predecessor: Some(self.board),
            board,
        }
    }

    /// Children for every successor except the configuration this node came from.
    pub fn expand(&self, cost_model: CostModel) -> Vec<SearchNode> {
        self.board
            .neighbors()
            .into_iter()
            .filter(|next| self.predecessor.as_ref() != Some(next))
            .map(|next| self.child(next, cost_model))
            .collect()
    }
}

/// Result of one strategy run. Built once by the search and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    strategy: Strategy,
    goal: Option<SearchNode>,
    cost: Option<u32>,
    nodes_expanded: u64,
}

impl SearchOutcome {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// True when the run recorded a goal node.
    pub fn is_solved(&self) -> bool {
        self.goal.is_some()
    }

    /// The recorded goal node. For DFS this is the cheapest goal seen.
    pub fn goal(&self) -> Option<&SearchNode> {
        self.goal.as_ref()
    }

    /// Path cost of the solution, or `None` if the run ended without one.
    pub fn cost(&self) -> Option<u32> {
        self.goal.as_ref().and(self.cost)
    }

    /// Cost recorded when the run stopped, whether or not it found the goal.
    ///
    /// A* and BFS report the path cost of the last node they popped. DFS reports its
    /// running minimum, which stays `None` when no goal was seen.
    pub fn terminal_cost(&self) -> Option<u32> {
        self.cost
    }

    /// Moves from the initial configuration to the recorded goal.
    pub fn moves(&self) -> Option<u32> {
        self.goal.as_ref().map(SearchNode::moves)
    }

    /// Number of nodes whose successors were generated.
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }
}

/// Priority-queue entry. `BinaryHeap` is a max-heap, so the key is reversed to pop the
/// lowest priority first; among equal priorities the earliest insertion wins.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<(u32, u64)>,
    node: SearchNode,
}

impl FrontierEntry {
    fn new(node: SearchNode, sequence: u64) -> Self {
        FrontierEntry {
            key: Reverse((node.priority(), sequence)),
            node,
        }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Solves the puzzle with A*, stopping once a popped node has more than `max_moves` moves.
///
/// Nodes are popped in increasing `manhattan + moves`. The cost of every popped node within
/// the bound is recorded, so an unsolved outcome still carries the cost of the last node
/// examined.
pub fn solve_astar(initial: &Board, max_moves: u32, cost_model: CostModel) -> SearchOutcome {
    let mut frontier = BinaryHeap::new();
    let mut sequence: u64 = 0;
    let mut cost = 0;
    let mut nodes_expanded = 0;
    frontier.push(FrontierEntry::new(SearchNode::root(*initial), sequence));

    while let Some(FrontierEntry { node, .. }) = frontier.pop() {
        if node.moves > max_moves {
            break;
        }
        cost = node.path_cost;
        if node.board.is_goal() {
            return SearchOutcome {
                strategy: Strategy::AStar,
                goal: Some(node),
                cost: Some(cost),
                nodes_expanded,
            };
        }

        nodes_expanded += 1;
        for child in node.expand(cost_model) {
            sequence += 1;
            frontier.push(FrontierEntry::new(child, sequence));
        }
    }

    SearchOutcome {
        strategy: Strategy::AStar,
        goal: None,
        cost: Some(cost),
        nodes_expanded,
    }
}

/// Solves the puzzle with a level-order BFS, giving up at the first node deeper than
/// `max_moves`.
///
/// Each level drains exactly the nodes queued when the level began. The search returns as
/// soon as it meets a goal or a node beyond the bound, without finishing the level.
pub fn solve_bfs(initial: &Board, max_moves: u32, cost_model: CostModel) -> SearchOutcome {
    let mut queue = VecDeque::new();
    let mut cost = 0;
    let mut nodes_expanded = 0;
    queue.push_back(SearchNode::root(*initial));

    while !queue.is_empty() {
        let level_size = queue.len();
        for _ in 0..level_size {
            let Some(node) = queue.pop_front() else {
                break;
            };
            cost = node.path_cost;
            if node.board.is_goal() {
                return SearchOutcome {
                    strategy: Strategy::Bfs,
                    goal: Some(node),
                    cost: Some(cost),
                    nodes_expanded,
                };
            }
            if node.moves > max_moves {
                return SearchOutcome {
                    strategy: Strategy::Bfs,
                    goal: None,
                    cost: Some(cost),
                    nodes_expanded,
                };
            }

            nodes_expanded += 1;
            queue.extend(node.expand(cost_model));
        }
    }

    SearchOutcome {
        strategy: Strategy::Bfs,
        goal: None,
        cost: Some(cost),
        nodes_expanded,
    }
}

/// State threaded through the recursive DFS.
struct DfsContext {
    max_moves: u32,
    cost_model: CostModel,
    best: Option<SearchNode>,
    min_cost: Option<u32>,
    nodes_expanded: u64,
}

impl DfsContext {
    fn visit(&mut self, node: SearchNode) {
        if node.board.is_goal() {
            if self.min_cost.map_or(true, |min| node.path_cost < min) {
                self.min_cost = Some(node.path_cost);
                self.best = Some(node);
            }
            return;
        }
        if node.moves > self.max_moves {
            return;
        }

        self.nodes_expanded += 1;
        for child in node.expand(self.cost_model) {
            self.visit(child);
        }
    }
}

/// Solves the puzzle with an exhaustive DFS that does not expand nodes deeper than
/// `max_moves`.
///
/// Unlike the other strategies it keeps going after the first goal and reports the
/// cheapest goal found anywhere in the bounded tree. Recursion never continues past a goal.
pub fn solve_dfs(initial: &Board, max_moves: u32, cost_model: CostModel) -> SearchOutcome {
    let mut ctx = DfsContext {
        max_moves,
        cost_model,
        best: None,
        min_cost: None,
        nodes_expanded: 0,
    };
    ctx.visit(SearchNode::root(*initial));

    SearchOutcome {
        strategy: Strategy::Dfs,
        goal: ctx.best,
        cost: ctx.min_cost,
        nodes_expanded: ctx.nodes_expanded,
    }
}

/// Runs the three strategies over one initial configuration.
///
/// Each strategy runs at most once; its outcome is cached and every later query reads the
/// cached result.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::board::Board;
/// use eight_puzzle_solver::solver::{Solver, Strategy};
///
/// let initial = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// let mut solver = Solver::new(initial);
/// assert_eq!(solver.astar_cost(), Some(1));
/// assert!(solver.is_solvable(Strategy::AStar));
/// assert!(!solver.is_solvable(Strategy::Bfs)); // not run yet
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    initial: Board,
    config: SolverConfig,
    outcomes: [Option<SearchOutcome>; 3],
}

impl Solver {
    /// Creates a solver with the default bounds and cost model.
    pub fn new(initial: Board) -> Self {
        Self::with_config(initial, SolverConfig::default())
    }

    pub fn with_config(initial: Board, config: SolverConfig) -> Self {
        Solver {
            initial,
            config,
            outcomes: [None, None, None],
        }
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs `strategy` unless it has already run, and returns its outcome.
    pub fn run(&mut self, strategy: Strategy) -> &SearchOutcome {
        let initial = self.initial;
        let bound = self.config.bound(strategy);
        let cost_model = self.config.cost_model;
        self.outcomes[strategy.index()].get_or_insert_with(|| match strategy {
            Strategy::AStar => solve_astar(&initial, bound, cost_model),
            Strategy::Bfs => solve_bfs(&initial, bound, cost_model),
            Strategy::Dfs => solve_dfs(&initial, bound, cost_model),
        })
    }

    /// The cached outcome of `strategy`, or `None` if it has not run.
    pub fn outcome(&self, strategy: Strategy) -> Option<&SearchOutcome> {
        self.outcomes[strategy.index()].as_ref()
    }

    /// True iff `strategy` has run and recorded a goal.
    pub fn is_solvable(&self, strategy: Strategy) -> bool {
        self.outcome(strategy).map_or(false, SearchOutcome::is_solved)
    }

    /// Runs `strategy` if needed and returns the solution cost, `None` meaning no solution
    /// within the strategy's bound.
    pub fn cost(&mut self, strategy: Strategy) -> Option<u32> {
        self.run(strategy).cost()
    }

    pub fn astar_cost(&mut self) -> Option<u32> {
        self.cost(Strategy::AStar)
    }

    pub fn bfs_cost(&mut self) -> Option<u32> {
        self.cost(Strategy::Bfs)
    }

    pub fn dfs_cost(&mut self) -> Option<u32> {
        self.cost(Strategy::Dfs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: [[u8; 3]; 3]) -> Board {
        Board::from_grid(grid).unwrap()
    }

    fn one_move() -> Board {
        board([[1, 2, 3], [4, 5, 6], [7, 0, 8]])
    }

    fn two_moves() -> Board {
        board([[1, 2, 3], [4, 0, 6], [7, 5, 8]])
    }

    fn four_moves() -> Board {
        board([[0, 1, 3], [4, 2, 5], [7, 8, 6]])
    }

    fn odd_parity() -> Board {
        board([[1, 2, 3], [4, 5, 6], [8, 7, 0]])
    }

    fn tile_value_config() -> SolverConfig {
        SolverConfig {
            cost_model: CostModel::TileValue,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.bound(Strategy::AStar), 30);
        assert_eq!(config.bound(Strategy::Bfs), 15);
        assert_eq!(config.bound(Strategy::Dfs), 15);
        assert_eq!(config.cost_model, CostModel::Uniform);
    }

    #[test]
    fn test_transition_cost() {
        let initial = one_move();
        assert_eq!(CostModel::Uniform.transition_cost(&initial), 0);
        assert_eq!(CostModel::TileValue.transition_cost(&initial), 0);

        let moved = initial.neighbors().into_iter().find(|b| b.is_goal()).unwrap();
        assert_eq!(CostModel::Uniform.transition_cost(&moved), 1);
        assert_eq!(CostModel::TileValue.transition_cost(&moved), 8);
    }

    #[test]
    fn test_child_invariants() {
        let root = SearchNode::root(two_moves());
        for child in root.expand(CostModel::TileValue) {
            assert_eq!(child.moves(), 1);
            assert_eq!(child.path_cost(), child.board().moved_tile() as u32);
            assert_eq!(child.predecessor(), Some(root.board()));
            for grandchild in child.expand(CostModel::TileValue) {
                assert_eq!(grandchild.moves(), 2);
                assert_eq!(
                    grandchild.path_cost(),
                    child.path_cost() + grandchild.board().moved_tile() as u32
                );
            }
        }
    }

    #[test]
    fn test_expand_skips_predecessor() {
        let root = SearchNode::root(two_moves());
        assert_eq!(root.expand(CostModel::Uniform).len(), 4);

        for child in root.expand(CostModel::Uniform) {
            let grandchildren = child.expand(CostModel::Uniform);
            assert_eq!(grandchildren.len(), child.board().neighbors().len() - 1);
            assert!(grandchildren.iter().all(|g| g.board() != root.board()));
        }
    }

    #[test]
    fn test_frontier_pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        let far = SearchNode::root(four_moves());
        let near = SearchNode::root(one_move());
        heap.push(FrontierEntry::new(far, 0));
        heap.push(FrontierEntry::new(near.clone(), 1));
        heap.push(FrontierEntry::new(near, 2));

        let first = heap.pop().unwrap();
        assert_eq!(first.node.priority(), 1);
        assert_eq!(first.key, Reverse((1, 1)));
        assert_eq!(heap.pop().unwrap().key, Reverse((1, 2)));
        assert_eq!(heap.pop().unwrap().node.priority(), 4);
    }

    #[test]
    fn test_already_solved() {
        let mut solver = Solver::new(Board::goal());
        for strategy in Strategy::ALL {
            assert_eq!(solver.cost(strategy), Some(0), "{}", strategy);
            assert!(solver.is_solvable(strategy));
            let outcome = solver.outcome(strategy).unwrap();
            assert_eq!(outcome.moves(), Some(0));
            assert_eq!(outcome.nodes_expanded(), 0);
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        let mut solver = Solver::new(one_move());
        assert_eq!(solver.astar_cost(), Some(1));
        assert_eq!(solver.bfs_cost(), Some(1));
        assert_eq!(solver.dfs_cost(), Some(1));
        assert_eq!(solver.outcome(Strategy::AStar).unwrap().moves(), Some(1));
        assert_eq!(solver.outcome(Strategy::Bfs).unwrap().moves(), Some(1));
        assert_eq!(solver.outcome(Strategy::Dfs).unwrap().moves(), Some(1));
    }

    #[test]
    fn test_tile_value_costs() {
        // Tiles that start off their goal cell must each slide at least once, and the
        // shortest solutions slide each of them exactly once.
        let cases = [(one_move(), 8, 1), (two_moves(), 13, 2), (four_moves(), 14, 4)];
        for (initial, expected_cost, expected_moves) in cases {
            let mut solver = Solver::with_config(initial, tile_value_config());
            for strategy in Strategy::ALL {
                assert_eq!(solver.cost(strategy), Some(expected_cost), "{}", strategy);
            }
            assert_eq!(
                solver.outcome(Strategy::AStar).unwrap().moves(),
                Some(expected_moves)
            );
            assert_eq!(
                solver.outcome(Strategy::Bfs).unwrap().moves(),
                Some(expected_moves)
            );
        }
    }

    #[test]
    fn test_bfs_finds_shortest_path() {
        let outcome = solve_bfs(&four_moves(), BFS_MAX_MOVES, CostModel::Uniform);
        assert!(outcome.is_solved());
        assert_eq!(outcome.moves(), Some(4));
        assert_eq!(outcome.cost(), Some(4));
    }

    #[test]
    fn test_dfs_keeps_minimum_over_all_goals() {
        // From the top-left blank DFS tries Down first, while the only four-move solution
        // starts with Right.
        let outcome = solve_dfs(&four_moves(), DFS_MAX_MOVES, CostModel::Uniform);
        assert_eq!(outcome.cost(), Some(4));
        assert_eq!(outcome.moves(), Some(4));
        assert_eq!(Some(outcome.goal().unwrap().path_cost()), outcome.terminal_cost());
    }

    #[test]
    fn test_dfs_explores_whole_bounded_tree() {
        let dfs = solve_dfs(&one_move(), DFS_MAX_MOVES, CostModel::Uniform);
        let bfs = solve_bfs(&one_move(), BFS_MAX_MOVES, CostModel::Uniform);
        assert!(dfs.nodes_expanded() > bfs.nodes_expanded());
    }

    #[test]
    fn test_astar_not_worse_than_bfs_or_dfs() {
        for seed in 0..8 {
            let initial = Board::new_scrambled_with_seed(10, seed);
            let mut solver = Solver::new(initial);
            let astar = solver.astar_cost().unwrap();
            let bfs = solver.bfs_cost().unwrap();
            let dfs = solver.dfs_cost().unwrap();
            assert!(astar <= bfs, "seed {}: A* {} > BFS {}", seed, astar, bfs);
            assert!(astar <= dfs, "seed {}: A* {} > DFS {}", seed, astar, dfs);
            assert_eq!(
                solver.outcome(Strategy::AStar).unwrap().moves(),
                solver.outcome(Strategy::Bfs).unwrap().moves()
            );
        }
    }

    #[test]
    fn test_odd_parity_unsolved_by_bfs_and_dfs() {
        let mut solver = Solver::new(odd_parity());
        assert_eq!(solver.bfs_cost(), None);
        assert_eq!(solver.dfs_cost(), None);
        assert!(!solver.is_solvable(Strategy::Bfs));
        assert!(!solver.is_solvable(Strategy::Dfs));
    }

    #[test]
    fn test_odd_parity_unsolved_by_astar() {
        let mut solver = Solver::new(odd_parity());
        assert_eq!(solver.astar_cost(), None);
        let outcome = solver.outcome(Strategy::AStar).unwrap();
        assert!(!outcome.is_solved());
        assert!(outcome.goal().is_none());
        assert!(outcome.nodes_expanded() > 0);
    }

    #[test]
    fn test_unsolved_bfs_records_cost_of_first_node_past_bound() {
        // The cost is taken before the bound check, so the node that ends the run counts.
        let outcome = solve_bfs(&odd_parity(), BFS_MAX_MOVES, CostModel::Uniform);
        assert!(!outcome.is_solved());
        assert_eq!(outcome.cost(), None);
        assert_eq!(outcome.terminal_cost(), Some(BFS_MAX_MOVES + 1));
    }

    #[test]
    fn test_unsolved_astar_records_cost_of_last_node_within_bound() {
        // The node popped past the bound is discarded before its cost is taken.
        let outcome = solve_astar(&odd_parity(), ASTAR_MAX_MOVES, CostModel::Uniform);
        assert!(!outcome.is_solved());
        assert_eq!(outcome.cost(), None);
        let terminal = outcome.terminal_cost().unwrap();
        assert!(terminal <= ASTAR_MAX_MOVES);
        assert_eq!(terminal, 25);

        let short = solve_astar(&odd_parity(), 10, CostModel::Uniform);
        assert!(short.terminal_cost().unwrap() <= 10);
    }

    #[test]
    fn test_unsolved_dfs_has_no_terminal_cost() {
        let outcome = solve_dfs(&odd_parity(), DFS_MAX_MOVES, CostModel::Uniform);
        assert_eq!(outcome.terminal_cost(), None);
        assert_eq!(outcome.cost(), None);
    }

    #[test]
    fn test_bound_cuts_off_solvable_board() {
        // Four moves are needed, so a bound of two stops every strategy short.
        let config = SolverConfig {
            astar_bound: 2,
            bfs_bound: 2,
            dfs_bound: 2,
            cost_model: CostModel::Uniform,
        };
        let mut solver = Solver::with_config(four_moves(), config);
        for strategy in Strategy::ALL {
            assert_eq!(solver.cost(strategy), None, "{}", strategy);
        }
    }

    #[test]
    fn test_dfs_goal_just_past_bound_is_found() {
        // Nodes at moves == bound are still expanded, so their goal children count.
        let outcome = solve_dfs(&four_moves(), 3, CostModel::Uniform);
        assert_eq!(outcome.moves(), Some(4));
    }

    #[test]
    fn test_repeated_queries_do_not_rerun() {
        let mut solver = Solver::new(four_moves());
        assert!(solver.outcome(Strategy::Bfs).is_none());
        assert!(!solver.is_solvable(Strategy::Bfs));

        let first = solver.bfs_cost();
        let snapshot = solver.outcome(Strategy::Bfs).cloned().unwrap();
        let second = solver.bfs_cost();
        assert_eq!(first, second);
        assert_eq!(solver.outcome(Strategy::Bfs), Some(&snapshot));
        assert!(solver.outcome(Strategy::Dfs).is_none());
    }

    #[test]
    fn test_strategy_names() {
        let names: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["A*", "BFS", "DFS"]);
    }
}
