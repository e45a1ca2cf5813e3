//! Property checks over every board and over random move sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictac_core::rules::win::LINES;
use tictac_core::{BOARD_SIZE, Board, Cell, GameMode, GameState, Player, detect_win, is_tie};

/// Decodes `code` (base 3) into a board: 0 empty, 1 X, 2 O.
fn board_from_code(mut code: u32) -> Board {
    let mut cells = [Cell::Empty; BOARD_SIZE];
    for cell in cells.iter_mut() {
        *cell = match code % 3 {
            1 => Cell::Occupied(Player::X),
            2 => Cell::Occupied(Player::O),
            _ => Cell::Empty,
        };
        code /= 3;
    }
    Board::from_cells(cells)
}

#[test]
fn test_detect_win_matches_first_uniform_line_on_every_board() {
    for code in 0..3u32.pow(BOARD_SIZE as u32) {
        let board = board_from_code(code);
        let cells = board.cells();
        let expected = LINES.iter().find(|line| {
            let [a, b, c] = line.cells();
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
        });

        let result = detect_win(&board);
        match expected {
            Some(line) => {
                assert_eq!(result.line(), Some(line), "board {code}");
                assert_eq!(result.winner(), cells[line.cells()[0]].player());
                assert_eq!(result.cells().len(), 3);
            }
            None => {
                assert_eq!(result.winner(), None, "board {code}");
                assert!(result.cells().is_empty());
                assert_eq!(result.kind(), None);
                assert_eq!(result.index(), None);
            }
        }

        let full = cells.iter().all(|cell| *cell != Cell::Empty);
        assert_eq!(is_tie(&board), full && expected.is_none(), "board {code}");
    }
}

#[test]
fn test_random_clicks_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut state = GameState::new(GameMode::Human);
        let mut accepted = 0usize;
        for _ in 0..30 {
            let before = state.clone();
            let index = rng.random_range(0..12);
            match state.apply_move(index) {
                Ok(player) => {
                    accepted += 1;
                    assert_eq!(player, before.next());
                    assert_eq!(state.next(), before.next().opponent());
                    assert_eq!(state.board().get(index), Some(Cell::Occupied(player)));
                    // Only the chosen cell changed.
                    for other in (0..BOARD_SIZE).filter(|&i| i != index) {
                        assert_eq!(state.board().get(other), before.board().get(other));
                    }
                }
                Err(_) => assert_eq!(state, before),
            }
            state.reconcile();

            let expected_next = if accepted % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(state.next(), expected_next);
            assert!(state.score().get(Player::X) + state.score().get(Player::O) <= 1);
        }
    }
}

#[test]
fn test_occupied_cell_is_a_no_op() {
    let mut state = GameState::default();
    for index in 0..BOARD_SIZE {
        state.reset();
        state.apply_move(index).unwrap();
        let before = state.clone();
        assert!(state.apply_move(index).is_err());
        assert_eq!(state, before);
    }
}
