use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use std::hint::black_box;
use sokoban_search::console_interface::parse_level;
use sokoban_search::core::HeuristicKind;
use sokoban_search::search::{solve_game, Search, SolverConfig};

const PUZZLES: &[(&str, &str, usize, SamplingMode)] = &[
    ("puzzle_1", r#"
######
#@$ .#
######
"#, 100, SamplingMode::Auto),
    ("puzzle_2", r#"
######
#@$  #
# $. #
# .  #
######
"#, 100, SamplingMode::Auto),
    ("two_box_room", r#"
#######
#.    #
# $$ .#
#  @  #
#######
"#, 100, SamplingMode::Auto),
    ("puzzle_3", r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#, 10, SamplingMode::Flat),
];

const HEURISTICS: &[(&str, HeuristicKind)] = &[
    ("nearest_target", HeuristicKind::NearestTarget),
    ("greedy_assignment", HeuristicKind::GreedyAssignment),
];

pub fn bench_game_solve_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_solve_full_search");

    for &(puzzle_name, puzzle, sample_size, sample_mode) in PUZZLES {
        let (game_state, shared) = parse_level(puzzle).unwrap();
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        for &(heuristic_name, heuristic) in HEURISTICS {
            let config = SolverConfig { heuristic, ..SolverConfig::default() };
            group.bench_with_input(
                BenchmarkId::new(heuristic_name, puzzle_name),
                &config,
                |b, &config| {
                    b.iter_with_setup(
                        || game_state.clone(),
                        |game_state| black_box(solve_game(black_box(&shared), game_state, config)),
                    );
                },
            );
        }
    }
    group.finish();
}

pub fn bench_game_solve_single_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_solve_single_node");

    for &(puzzle_name, puzzle, _, _) in PUZZLES {
        let (game_state, shared) = parse_level(puzzle).unwrap();
        group.bench_with_input(
            BenchmarkId::new("single_node_expansion", puzzle_name),
            &game_state,
            |b, game_state| {
                b.iter_with_setup(
                    || Search::new(&shared, game_state.clone(), SolverConfig::default()),
                    |mut search| {
                        let step = search.step();
                        black_box((step, search.frontier_len()))
                    },
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    game_solve_benches,
    bench_game_solve_full_search, bench_game_solve_single_node
);

criterion_main!(game_solve_benches);
