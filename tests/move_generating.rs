extern crate chess_search;

use chess_search::board::*;
use chess_search::core::piece_move::*;
use chess_search::core::sq::SQ;
use chess_search::core::*;

fn layout(rows: [&str; 8], turn: Player) -> Position {
    Position::from_layout(&rows.concat(), turn).unwrap()
}

fn sorted(mut sqs: Vec<SQ>) -> Vec<SQ> {
    sqs.sort();
    sqs
}

fn squares(idx: &[u8]) -> Vec<SQ> {
    sorted(idx.iter().map(|&i| SQ(i)).collect())
}

fn dsts(position: &Position, sq: &str) -> Vec<SQ> {
    sorted(position.piece_moves(sq.parse().unwrap()).unwrap())
}

#[test]
fn test_start_move_counts() {
    let board = Position::start_pos();
    assert_eq!(board.generate_moves().len(), 20);
    assert_eq!(board.total_moves(), 20);
    assert_eq!(board.generate_moves_for(Player::Black).len(), 20);
    assert_eq!(board.generate_pseudolegal_moves(Player::White).len(), 20);
    assert!(board
        .generate_moves()
        .iter()
        .all(|m| board.player_at(m.src) == Some(Player::White)));
}

#[test]
fn test_pawn_moves() {
    let board = Position::start_pos();
    assert_eq!(dsts(&board, "b2"), squares(&[41, 33]));
    assert_eq!(dsts(&board, "d7"), squares(&[19, 27]));

    let board = layout(
        [
            "RNBQKBNR", "PPPPPP.P", "...p..P.", "........", "........", "..p.....", "pp..pppp",
            "rnbqkbnr",
        ],
        Player::White,
    );
    // The pawn on d6 can take on c7 or e7, but d7 is blocked.
    assert_eq!(dsts(&board, "d6"), squares(&[10, 12]));
    assert_eq!(dsts(&board, "c3"), squares(&[34]));
    assert_eq!(board.piece_at(SQ(50)), None);
    assert_eq!(dsts(&board, "d7"), squares(&[]));
    assert_eq!(dsts(&board, "g6"), squares(&[30]));
}

#[test]
fn test_knight_moves() {
    let board = Position::start_pos();
    assert_eq!(dsts(&board, "c1"), squares(&[]));
    assert_eq!(dsts(&board, "b1"), squares(&[40, 42]));

    let board = layout(
        [
            "........", "....N...", "........", "...n.N..", "........", "........", "........",
            "........",
        ],
        Player::White,
    );
    assert_eq!(dsts(&board, "d5"), squares(&[44, 42, 37, 21, 12, 10, 33, 17]));
    assert_eq!(dsts(&board, "e7"), squares(&[27, 22, 6, 18, 2]));
}

#[test]
fn test_sliding_moves() {
    let rows = |piece: &'static str| {
        [
            "........", "........", "........", "........", "...P....", "........", piece,
            "........",
        ]
    };
    let bishop = layout(rows("...b...."), Player::White);
    assert_eq!(dsts(&bishop, "d2"), squares(&[44, 37, 30, 23, 42, 33, 24, 60, 58]));

    let rook = layout(rows("...r...."), Player::White);
    assert_eq!(dsts(&rook, "d2"), squares(&[52, 53, 54, 55, 43, 35, 50, 49, 48, 59]));

    let queen = layout(rows("...q...."), Player::White);
    assert_eq!(
        dsts(&queen, "d2"),
        squares(&[44, 37, 30, 23, 42, 33, 24, 60, 58, 52, 53, 54, 55, 43, 35, 50, 49, 48, 59])
    );
}

#[test]
fn test_king_moves() {
    let alone = layout(
        [
            "........", "........", "........", "........", "........", "........", "...k....",
            "........",
        ],
        Player::White,
    );
    assert_eq!(dsts(&alone, "d2"), squares(&[52, 59, 60, 50, 58, 43, 44, 42]));

    let watched = layout(
        [
            "........", "........", "........", "........", "....R...", "........", "...k....",
            "........",
        ],
        Player::White,
    );
    assert_eq!(dsts(&watched, "d2"), squares(&[59, 50, 58, 43, 42]));

    let black = layout(
        [
            "........", "........", "........", "........", "....r...", "........", "...K....",
            "........",
        ],
        Player::Black,
    );
    assert_eq!(dsts(&black, "d2"), squares(&[59, 50, 58, 43, 42]));
}

#[test]
fn test_king_cannot_take_defended_piece() {
    let board = layout(
        [
            "........", "........", "...Kp...", "........", "..p.r...", "........", "........",
            "........",
        ],
        Player::Black,
    );
    let moves = dsts(&board, "d6");
    assert!(!moves.contains(&"e6".parse().unwrap()));
    assert!(!moves.contains(&"d5".parse().unwrap()));

    let board = layout(
        [
            "....K...", "...p....", "........", "........", "........", "........", "........",
            "...q....",
        ],
        Player::Black,
    );
    assert!(!dsts(&board, "e8").contains(&"d7".parse().unwrap()));
}

#[test]
fn test_all_legal_moves() {
    let board = layout(
        [
            ".......K", "........", "........", "........", "...P....", "........", "........",
            "b......k",
        ],
        Player::White,
    );
    assert_eq!(dsts(&board, "a1"), squares(&[49, 42, 35]));
    assert_eq!(dsts(&board, "d4"), squares(&[43]));

    let white: Vec<SQ> = sorted(board.generate_moves_for(Player::White).iter().map(|m| m.dst).collect());
    assert_eq!(white, squares(&[49, 42, 35, 62, 55, 54]));
    let black: Vec<SQ> = sorted(board.generate_moves_for(Player::Black).iter().map(|m| m.dst).collect());
    assert_eq!(black, squares(&[15, 6, 14, 43]));
}

#[test]
fn test_legal_move_pairs() {
    let board = layout(
        [
            "K.......", "........", "........", "........", "....p...", "........", "........",
            "k.......",
        ],
        Player::White,
    );
    let mut white = board.legal_move_pairs(Player::White);
    white.sort();
    assert_eq!(white, vec![("a1", "a2"), ("a1", "b1"), ("a1", "b2"), ("e4", "e5")]);
    let mut black = board.legal_move_pairs(Player::Black);
    black.sort();
    assert_eq!(black, vec![("a8", "a7"), ("a8", "b7"), ("a8", "b8")]);
}

#[test]
fn test_moves_out_of_check() {
    let board = layout(
        [
            "...K....", "........", "........", "...QQ...", "........", "........", "...r....",
            "...k....",
        ],
        Player::White,
    );
    assert!(!dsts(&board, "d1").contains(&"e1".parse().unwrap()));
    assert!(!dsts(&board, "d2").contains(&"e2".parse().unwrap()));
    for mov in board.generate_moves() {
        let next = board.play(mov).unwrap();
        assert!(!next.in_check(Player::White));
    }
}

#[test]
fn test_move_ordering_puts_captures_first() {
    let positions = RandPosition::new().pseudo_random(11).min_moves(10).many(4);
    for position in positions.iter() {
        let ordered = position.generate_ordered_moves();
        assert_eq!(ordered.len(), position.generate_moves().len());
        let first_quiet = ordered
            .iter()
            .position(|&m| !position.is_capture(m))
            .unwrap_or(ordered.len());
        assert!(ordered[first_quiet..].iter().all(|&m| !position.is_capture(m)));
    }
}

#[test]
fn test_legal_moves_are_pseudo_legal() {
    let positions = RandPosition::new().pseudo_random(5).min_moves(6).many(4);
    for position in positions.iter() {
        let pseudo: Vec<Move> = position.generate_pseudolegal_moves(position.turn());
        for mov in position.generate_moves() {
            assert!(pseudo.contains(&mov));
        }
    }
}
