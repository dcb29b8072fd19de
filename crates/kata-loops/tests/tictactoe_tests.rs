//! Tests for tic-tac-toe evaluation.

use kata_loops::{Mark, evaluate_position};

const X: Option<Mark> = Some(Mark::X);
const O: Option<Mark> = Some(Mark::Nought);
const E: Option<Mark> = None;

#[test]
fn test_diagonal_win() {
    let board = vec![vec![X, E, O], vec![E, X, O], vec![E, E, X]];
    assert_eq!(evaluate_position(&board), Some(Mark::X));
}

#[test]
fn test_row_win() {
    let board = vec![vec![O, O, O], vec![E, X, E], vec![X, E, X]];
    assert_eq!(evaluate_position(&board), Some(Mark::Nought));

    let board = vec![vec![X, X, X], vec![E, O, E], vec![O, E, E]];
    assert_eq!(evaluate_position(&board), Some(Mark::X));
}

#[test]
fn test_column_and_anti_diagonal() {
    let board = vec![vec![O, X, E], vec![E, X, O], vec![E, X, E]];
    assert_eq!(evaluate_position(&board), Some(Mark::X));

    let board = vec![vec![X, X, O], vec![E, O, E], vec![O, E, X]];
    assert_eq!(evaluate_position(&board), Some(Mark::Nought));
}

#[test]
fn test_no_winner() {
    let board = vec![vec![O, X, O], vec![E, X, E], vec![X, O, X]];
    assert_eq!(evaluate_position(&board), None);
}

#[test]
fn test_empty_board() {
    let board = vec![vec![E; 3]; 3];
    assert_eq!(evaluate_position(&board), None);
    assert_eq!(evaluate_position(&[]), None);
}

#[test]
fn test_four_by_four() {
    let mut board = vec![vec![E; 4]; 4];
    for (i, row) in board.iter_mut().enumerate() {
        row[3 - i] = O;
    }
    assert_eq!(evaluate_position(&board), Some(Mark::Nought));
}

#[test]
fn test_board_from_json() {
    let board: Vec<Vec<Option<Mark>>> =
        serde_json::from_str(r#"[["X",null,"0"],[null,"X","0"],[null,null,"X"]]"#).unwrap();
    assert_eq!(evaluate_position(&board), Some(Mark::X));
}

#[test]
fn test_mark_text() {
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::Nought.to_string(), "0");
    assert_eq!("O".parse::<Mark>(), Ok(Mark::Nought));
    assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
    assert!("-".parse::<Mark>().is_err());
}
