use super::board::Board;
use super::types::{Line, Mark, Outcome};

pub const WIN_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some((mark, line));
        }
    }
    None
}

pub fn check_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::Win(winner);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome_of(layout: &str) -> Outcome {
        check_outcome(&Board::parse(layout).unwrap())
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(check_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        assert_eq!(outcome_of("___|OOO|X_X"), Outcome::Win(Mark::O));
        assert_eq!(outcome_of("_X_|OXO|_X_"), Outcome::Win(Mark::X));
        assert_eq!(outcome_of("O_X|_X_|XO_"), Outcome::Win(Mark::X));
        assert_eq!(outcome_of("O_X|XO_|X_O"), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(outcome_of("XOX|XOO|OXX"), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        assert_eq!(outcome_of("XOX|OXO|OXX"), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_winning_line_reported() {
        let board = Board::parse("XO_|_XO|__X").unwrap();
        assert_eq!(check_win_with_line(&board), Some((Mark::X, [0, 4, 8])));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        assert_eq!(outcome_of("XX_|OO_|___"), Outcome::InProgress);
    }
}
