use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{
    Board, BotDifficulty, Mark, Position, SessionRng, check_for_winner, play_bot_move,
};

fn build_winning_row_board() -> Board {
    let mut board = Board::new(5).unwrap();
    for col in 0..4 {
        board.make_move(Position::new(1, col), Mark::X).unwrap();
        board.make_move(Position::new(0, col), Mark::O).unwrap();
    }
    board.make_move(Position::new(1, 4), Mark::X).unwrap();
    board
}

fn bench_win_check_on_winning_move(board: &Board) {
    let line = check_for_winner(board, Position::new(1, 4), Mark::X);
    assert!(line.is_some());
}

fn bench_random_bot_full_game() {
    let mut board = Board::new(5).unwrap();
    let mut rng = SessionRng::new(42);
    let mut mark = Mark::X;

    while play_bot_move(&mut board, mark, BotDifficulty::Easy, &mut rng).is_some() {
        mark = mark.opponent().unwrap();
    }
}

fn win_detector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("win_detector");

    let board = build_winning_row_board();
    group.bench_function("winning_move_check", |b| {
        b.iter(|| bench_win_check_on_winning_move(&board))
    });

    group.bench_function("random_bot_full_game", |b| {
        b.iter(bench_random_bot_full_game)
    });

    group.finish();
}

criterion_group!(benches, win_detector_bench);
criterion_main!(benches);
