use lib::chess::Game;
use rayon::prelude::*;

fn perft(game: &Game, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => game.legal_moves().len(),
        d => game
            .legal_moves()
            .into_iter()
            .par_bridge()
            .map(|m| {
                let mut next = game.clone();
                assert_eq!(next.play(m), Ok(()));
                perft(&next, d - 1)
            })
            .sum(),
    }
}

#[test]
fn perft_expands_expected_number_of_nodes() {
    // https://www.chessprogramming.org/Perft_Results#Initial_Position
    let game = Game::default();
    assert_eq!(perft(&game, 1), 20);
    assert_eq!(perft(&game, 2), 400);
    assert_eq!(perft(&game, 3), 8902);
    assert_eq!(perft(&game, 4), 197281);
}
