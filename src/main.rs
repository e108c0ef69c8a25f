// Command-line driver for the Sokoban solver.
// `solve` prints the move string, `watch` shows live search statistics while solving.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serde::Serialize;
use sokoban_search::console_interface::{
    cleanup_terminal, handle_input, level_to_puzzle, setup_terminal, ConsoleInput,
};
use sokoban_search::core::{replay, step, Direction, GameChangeType, GameState, GameUpdate, HeuristicKind, SharedGameState};
use sokoban_search::puzzle::Puzzle;
use sokoban_search::search::{
    render_search, Search, SearchRenderState, SearchStats, SearchStep, Solution, SolverConfig,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Best-first Sokoban solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a level and print the move string
    Solve(SolveArgs),
    /// Solve a level while rendering live search statistics. Press q to abort.
    Watch(SolveArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Level file: `.json` puzzle description, anything else is single-grid level text
    level: PathBuf,
    #[arg(long, value_enum, default_value_t = HeuristicArg::Nearest)]
    heuristic: HeuristicArg,
    /// Keep states with crates stuck in corners
    #[arg(long)]
    no_prune: bool,
    /// Print a JSON report instead of the bare move string
    #[arg(long)]
    json: bool,
    /// Replay the solution and fail unless it solves the level
    #[arg(long)]
    verify: bool,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Nearest,
    Greedy,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Nearest => HeuristicKind::NearestTarget,
            HeuristicArg::Greedy => HeuristicKind::GreedyAssignment,
        }
    }
}

impl SolveArgs {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            heuristic: self.heuristic.into(),
            prune_deadlocks: !self.no_prune,
        }
    }
}

#[derive(Serialize)]
struct SolveReport<'a> {
    solution: String,
    solved: bool,
    moves: usize,
    pushes: usize,
    stats: &'a SearchStats,
    elapsed_ms: u128,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve(args) => {
            init_logging(args.log_file.as_deref(), false)?;
            run_solve(&args)
        }
        Command::Watch(args) => {
            init_logging(args.log_file.as_deref(), true)?;
            run_watch(&args)
        }
    }
}

/// Logs go to stderr unless a file is given. `quiet` silences stderr logging so a
/// full-screen dashboard is not drawn over.
fn init_logging(log_file: Option<&Path>, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if quiet => {}
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn load_level(path: &Path) -> Result<(GameState, SharedGameState)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading level {}", path.display()))?;

    let puzzle = if path.extension().is_some_and(|ext| ext == "json") {
        Puzzle::from_json(&text).with_context(|| format!("parsing puzzle {}", path.display()))?
    } else {
        level_to_puzzle(&text)
    };

    let (game, shared) = puzzle
        .build()
        .with_context(|| format!("invalid level {}", path.display()))?;
    info!(width = shared.width(), height = shared.height(), "loaded level");
    Ok((game, shared))
}

fn run_solve(args: &SolveArgs) -> Result<()> {
    let (game, shared) = load_level(&args.level)?;

    let start_time = Instant::now();
    let mut search = Search::new(&shared, game.clone(), args.config());
    let solution = search.run();

    report(args, &shared, &game, &solution, search.stats(), start_time.elapsed())
}

fn run_watch(args: &SolveArgs) -> Result<()> {
    let (game, shared) = load_level(&args.level)?;

    let start_time = Instant::now();
    let mut search = Search::new(&shared, game.clone(), args.config());

    let mut terminal = setup_terminal().map_err(|err| anyhow!("setting up terminal: {err}"))?;
    let outcome = watch_search(&mut terminal, &mut search, start_time);
    cleanup_terminal().map_err(|err| anyhow!("restoring terminal: {err}"))?;

    match outcome? {
        Some(solution) => report(args, &shared, &game, &solution, search.stats(), start_time.elapsed()),
        None => {
            eprintln!(
                "Search aborted after expanding {} states.",
                search.stats().expanded
            );
            Ok(())
        }
    }
}

/// Step the search in slices, redrawing between slices. `None` when the user quits.
fn watch_search(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    search: &mut Search,
    start_time: Instant,
) -> Result<Option<Solution>> {
    let mut last_render_time = start_time;
    let mut processed_since_last_render = 0;

    loop {
        let stop_time = Instant::now() + Duration::from_millis(100);
        while Instant::now() < stop_time {
            if let SearchStep::Finished(solution) = search.step() {
                return Ok(Some(solution));
            }
            processed_since_last_render += 1;
        }

        if let ConsoleInput::Quit = handle_input().map_err(|err| anyhow!("reading input: {err}"))? {
            return Ok(None);
        }

        let current_time = Instant::now();
        render_search(terminal, SearchRenderState {
            search: &*search,
            processed_since_last_render,
            start_time,
            last_render_time,
            current_time,
        }).map_err(|err| anyhow!("rendering: {err}"))?;

        last_render_time = current_time;
        processed_since_last_render = 0;
    }
}

fn report(
    args: &SolveArgs,
    shared: &SharedGameState,
    game: &GameState,
    solution: &Solution,
    stats: &SearchStats,
    elapsed: Duration,
) -> Result<()> {
    let moves = solution.moves().unwrap_or_default();

    if args.verify && solution.is_solved() {
        let end = replay(shared, game, moves).context("replaying solution")?;
        if !end.is_won(shared) {
            bail!("solution {moves:?} does not leave every goal covered");
        }
        info!("solution verified");
    }

    if args.json {
        let report = SolveReport {
            solution: solution.to_string(),
            solved: solution.is_solved(),
            moves: moves.len(),
            pushes: count_pushes(shared, game, moves),
            stats,
            elapsed_ms: elapsed.as_millis(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{solution}");
    }
    Ok(())
}

fn count_pushes(shared: &SharedGameState, game: &GameState, moves: &str) -> usize {
    let mut current = game.clone();
    let mut pushes = 0;
    for direction in moves.chars().filter_map(Direction::from_char) {
        let GameUpdate::NextState(next, change_type) = step(shared, &current, direction) else {
            break;
        };
        if change_type == GameChangeType::PlayerAndBoxMove {
            pushes += 1;
        }
        current = next;
    }
    pushes
}
