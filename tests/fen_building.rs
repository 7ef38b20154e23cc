extern crate chess_search;

use chess_search::board::fen::START_TEXT;
use chess_search::board::*;
use chess_search::core::*;
use chess_search::ChessError;

#[test]
fn basic_fen() {
    let board = Position::start_pos();
    assert_eq!(board.to_text(), START_TEXT);

    let board = Position::from_layout(
        concat!(
            "RNB.KBNR", "PPPP.PPP", "....P...", "........", "......pQ", ".....p..", "ppppp..p",
            "rnbqkbnr"
        ),
        Player::Black,
    )
    .unwrap();
    assert_eq!(
        board.to_text(),
        "rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR b"
    );
}

#[test]
fn fen_after_moves() {
    let mut board = Position::start_pos();
    board.apply_notation("e2", "e4").unwrap();
    assert_eq!(
        board.to_text(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
    );
    board.apply_notation("c7", "c5").unwrap();
    assert_eq!(
        board.to_text(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w"
    );
}

#[test]
fn all_fens() {
    let positions = RandPosition::new().pseudo_random(2017).min_moves(2).many(10);
    for position in positions.iter() {
        let text = position.to_text();
        let read = Position::from_text(&text).unwrap();
        assert_eq!(read.squares(), position.squares());
        assert_eq!(read.turn(), position.turn());
        assert_eq!(read.to_text(), text);
        // Only the placement and side to move survive.
        assert!(read.history().is_empty());
        assert_eq!(read.ply_count(), 0);
    }
}

#[test]
fn empty_board_text() {
    let board = Position::from_layout(&".".repeat(64), Player::White).unwrap();
    assert_eq!(board.to_text(), "8/8/8/8/8/8/8/8 w");
    assert_eq!(Position::from_text("8/8/8/8/8/8/8/8 b").unwrap().turn(), Player::Black);
}

#[test]
fn bad_side_to_move() {
    assert_eq!(
        Position::from_text("8/8/8/8/8/8/8/8 white").map(|p| p.turn()),
        Ok(Player::White)
    );
    match Position::from_text("8/8/8/8/8/8/8/8 g") {
        Err(ChessError::InvalidColor { color }) => assert_eq!(color, "g"),
        other => panic!("unexpected {:?}", other),
    }
}
