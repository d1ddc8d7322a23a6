use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{
    Board, BotInput, Mark, SearchOptions, TicTacToeGameState, calculate_move,
};

const EXHAUSTIVE: SearchOptions = SearchOptions { alpha_beta: false };
const PRUNED: SearchOptions = SearchOptions { alpha_beta: true };

fn mid_game_board() -> Board {
    use Mark::{Empty as E, O, X};
    Board::from_marks([X, E, E, E, O, E, E, E, X])
}

fn self_play(options: SearchOptions) {
    let mut state = TicTacToeGameState::new();
    while !state.is_over() {
        match calculate_move(BotInput::from_game_state(&state), options) {
            Ok(pos) => {
                if state.place_mark(pos).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    for (name, options) in [("exhaustive", EXHAUSTIVE), ("alpha_beta", PRUNED)] {
        group.bench_function(format!("{}/empty_board", name), |b| {
            b.iter(|| {
                calculate_move(
                    BotInput {
                        board: black_box(Board::new()),
                        current_mark: Mark::X,
                    },
                    options,
                )
            })
        });

        group.bench_function(format!("{}/mid_game", name), |b| {
            b.iter(|| {
                calculate_move(
                    BotInput {
                        board: black_box(mid_game_board()),
                        current_mark: Mark::O,
                    },
                    options,
                )
            })
        });

        group.bench_function(format!("{}/self_play", name), |b| {
            b.iter(|| self_play(options))
        });
    }

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
