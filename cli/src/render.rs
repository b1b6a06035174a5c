use common::games::tictactoe::{BOARD_SIZE, Mark, Outcome, TicTacToeGameState};

const ROW_SEPARATOR: &str = "---+---+---";

/// Empty cells show the key that plays them; cells of the winning line are starred.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let cells = state.board().cells();

    let rows: Vec<String> = cells
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match mark {
                        Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                        mark => mark.symbol(),
                    };
                    if winning_line.is_some_and(|line| line.contains(&index)) {
                        format!("*{}*", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}

pub fn status_line(state: &TicTacToeGameState) -> String {
    match state.status() {
        Outcome::InProgress => format!("Turn: {}", state.current_mark()),
        Outcome::Win(mark) => format!("Winner: {}", mark),
        Outcome::Draw => "Draw".to_string(),
    }
}
