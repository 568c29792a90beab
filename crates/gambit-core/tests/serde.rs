#![cfg(feature = "serde")]

use gambit_core::{Color, PieceKind, Square, SquareSet};

#[test]
fn square_serializes_as_index() {
    assert_eq!(serde_json::to_string(&Square::E4).unwrap(), "28");
    assert_eq!(serde_json::from_str::<Square>("63").unwrap(), Square::H8);
}

#[test]
fn square_rejects_out_of_range_index() {
    assert!(serde_json::from_str::<Square>("64").is_err());
}

#[test]
fn square_set_serializes_as_mask() {
    assert_eq!(serde_json::to_string(&SquareSet::RANK_1).unwrap(), "255");
    assert_eq!(serde_json::from_str::<SquareSet>("255").unwrap(), SquareSet::RANK_1);
}

#[test]
fn enums_roundtrip() {
    let json = serde_json::to_string(&(Color::Black, PieceKind::Rook)).unwrap();
    assert_eq!(serde_json::from_str::<(Color, PieceKind)>(&json).unwrap(), (Color::Black, PieceKind::Rook));
}
