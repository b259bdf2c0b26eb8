//! Move engine translating directional commands into swaps.
//!
//! The engine holds no state. Given the flat index of the blank it works out which neighbor the
//! blank trades places with, guarding against moves that would leave the grid or wrap around to
//! the adjacent row.

use tracing::{debug, trace};

use crate::{
    board::Board,
    coords::{CELL_COUNT, GRID_SIZE},
    types::Direction,
};

/// Returns the flat index the blank at `blank` swaps with for `direction`.
///
/// Returns `None` when the move is illegal: the neighbor would lie outside the grid, or a
/// horizontal move would wrap into the previous or next row.
#[must_use]
pub const fn swap_target(blank: u8, direction: Direction) -> Option<u8> {
    if blank >= CELL_COUNT {
        return None;
    }

    match direction {
        Direction::Right => {
            // Blank in the leftmost column.
            if blank % GRID_SIZE == 0 {
                None
            } else {
                Some(blank - 1)
            }
        }
        Direction::Left => {
            // Blank in the rightmost column.
            if (blank + 1) % GRID_SIZE == 0 {
                None
            } else {
                Some(blank + 1)
            }
        }
        Direction::Up => {
            if blank + GRID_SIZE > CELL_COUNT - 1 {
                None
            } else {
                Some(blank + GRID_SIZE)
            }
        }
        Direction::Down => blank.checked_sub(GRID_SIZE),
    }
}

/// Slides a tile into the blank in place.
///
/// Returns whether a swap happened. Illegal moves leave the board untouched.
pub fn apply_direction(board: &mut Board, direction: Direction) -> bool {
    let Some(blank) = board.blank_index() else {
        debug!("board has no blank tile, ignoring move");
        return false;
    };

    let Some(target) = swap_target(blank, direction) else {
        trace!(blank, command = direction.repr(), "illegal move ignored");
        return false;
    };

    match board.swap(blank, target) {
        Ok(()) => {
            trace!(blank, target, command = direction.repr(), "move applied");
            true
        }
        Err(err) => {
            debug!(%err, "move rejected by board");
            false
        }
    }
}

/// Applies a command string to a board and returns the resulting board.
///
/// Commands other than `"up"`, `"down"`, `"left"` and `"right"`, as well as illegal moves, return
/// the board unchanged.
#[must_use]
pub fn apply_command(mut board: Board, command: &str) -> Board {
    match Direction::parse(command) {
        Some(direction) => {
            let _ = apply_direction(&mut board, direction);
        }
        None => trace!(command, "unrecognized command ignored"),
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a board from literal values, panicking on malformed fixtures.
    fn board(values: [u8; 16]) -> Board {
        Board::from_values(&values).expect("fixture should be a valid arrangement")
    }

    /// The arrangement with the blank first and the numbers in order after it.
    fn ordered() -> Board {
        board([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
    }

    #[test]
    fn test_swap_target_corners() {
        assert_eq!(swap_target(0, Direction::Right), None);
        assert_eq!(swap_target(0, Direction::Down), None);
        assert_eq!(swap_target(0, Direction::Up), Some(4));
        assert_eq!(swap_target(0, Direction::Left), Some(1));

        assert_eq!(swap_target(3, Direction::Left), None);
        assert_eq!(swap_target(3, Direction::Down), None);
        assert_eq!(swap_target(3, Direction::Right), Some(2));
        assert_eq!(swap_target(3, Direction::Up), Some(7));

        assert_eq!(swap_target(12, Direction::Right), None);
        assert_eq!(swap_target(12, Direction::Up), None);
        assert_eq!(swap_target(12, Direction::Left), Some(13));
        assert_eq!(swap_target(12, Direction::Down), Some(8));

        assert_eq!(swap_target(15, Direction::Left), None);
        assert_eq!(swap_target(15, Direction::Up), None);
        assert_eq!(swap_target(15, Direction::Right), Some(14));
        assert_eq!(swap_target(15, Direction::Down), Some(11));
    }

    #[test]
    fn test_swap_target_does_not_wrap_rows() {
        for blank in [4, 8] {
            assert_eq!(swap_target(blank, Direction::Right), None);
        }
        for blank in [7, 11] {
            assert_eq!(swap_target(blank, Direction::Left), None);
        }
    }

    #[test]
    fn test_swap_target_interior() {
        assert_eq!(swap_target(5, Direction::Up), Some(9));
        assert_eq!(swap_target(5, Direction::Down), Some(1));
        assert_eq!(swap_target(5, Direction::Left), Some(6));
        assert_eq!(swap_target(5, Direction::Right), Some(4));
    }

    #[test]
    fn test_swap_target_blank_outside_grid() {
        assert_eq!(swap_target(16, Direction::Down), None);
        assert_eq!(swap_target(u8::MAX, Direction::Left), None);
    }

    #[test]
    fn test_apply_command_guarded_moves_are_noops() {
        assert_eq!(apply_command(ordered(), "right"), ordered());
        assert_eq!(apply_command(ordered(), "down"), ordered());
    }

    #[test]
    fn test_apply_command_up_then_left() {
        let after_up = apply_command(ordered(), "up");
        assert_eq!(
            after_up,
            board([4, 1, 2, 3, 0, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
        );

        let after_left = apply_command(after_up, "left");
        assert_eq!(
            after_left,
            board([4, 1, 2, 3, 5, 0, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
        );
    }

    #[test]
    fn test_apply_command_left_from_origin() {
        assert_eq!(
            apply_command(ordered(), "left"),
            board([1, 0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
        );
    }

    #[test]
    fn test_apply_command_unknown_is_noop() {
        for command in ["u", "UP", "", "undo", "upward"] {
            assert_eq!(apply_command(ordered(), command), ordered());
        }
    }

    #[test]
    fn test_apply_command_on_solved_board() {
        let solved = Board::solved();

        assert_eq!(apply_command(solved, "left"), solved);
        assert_eq!(apply_command(solved, "up"), solved);
        assert!(!apply_command(solved, "right").is_solved());
        assert!(!apply_command(solved, "down").is_solved());
    }

    #[test]
    fn test_apply_direction_reports_swap() {
        let mut board = Board::solved();

        assert!(!apply_direction(&mut board, Direction::Up));
        assert!(apply_direction(&mut board, Direction::Down));
        assert_eq!(board.blank_index(), Some(11));
    }
}
