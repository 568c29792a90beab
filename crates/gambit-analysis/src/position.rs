//! Position analyses: properties of a position, including the ways a setup can be unreachable.

use std::sync::OnceLock;

use crate::group::AnalysisGroup;
use crate::mask::AnalysisMask;
use crate::registry::{Analysis, Registry};
use crate::tag::{GroupTag, Legality, Tag};

vocabulary! {
    /// A property of one position. Declaration order fixes the ids.
    pub enum PositionTag {
        Check => "Side with the move is in check",
        DoubleCheck => "Side with the move is checked twice",
        Checkmate => "Side with the move is in checkmate",
        Stalemate => "Side with the move can make no legal moves",
        InsufficientMaterial => "Neither side has enough material to mate the other",
        KingsTouching => "Kings are not separated by at least 1 square",
        IncorrectKingCount => "Each side must have exactly 1 king",
        IncorrectPawnCount => "A side can have at most 8 pawns",
        TooManyChecks => "Either king is attacked 3 or more times",
        EnemyInCheck => "Side not to move is in check, so it did not escape check on its turn",
        PawnOnEndRanks => "A pawn is on the 1st or 8th rank",
        IllogicalCastlingRights => "A side holds castling rights the position makes impossible",
        IllogicalEpSquare => "En passant square is off the 3rd or 6th rank, obstructed, or has no matching pawn",
    }
}

static POSITION_REGISTRY: OnceLock<Registry<PositionTag>> = OnceLock::new();

impl Tag for PositionTag {
    type Group = PositionGroup;

    const ALL: &'static [PositionTag] = PositionTag::VARIANTS;
    const DOMAIN: &'static str = "position";

    #[inline]
    fn id(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        self.variant_name()
    }

    fn description(self) -> &'static str {
        self.variant_description()
    }

    fn legality(self) -> Legality {
        use PositionTag::*;
        match self {
            Check | DoubleCheck | Checkmate | Stalemate | InsufficientMaterial => Legality::Legal,
            _ => Legality::Illegal,
        }
    }

    /// Checkmate and stalemate require generating the legal moves.
    fn is_quick(self) -> bool {
        !matches!(self, PositionTag::Checkmate | PositionTag::Stalemate)
    }

    fn registry() -> &'static Registry<PositionTag> {
        POSITION_REGISTRY.get_or_init(|| {
            Registry::build().expect("built-in position vocabulary failed validation")
        })
    }
}

/// The registered groups of position analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Illegal,
    GameOver,
    Check,
}

impl GroupTag for PositionGroup {
    type Tag = PositionTag;

    const ALL: &'static [PositionGroup] =
        &[PositionGroup::Illegal, PositionGroup::GameOver, PositionGroup::Check];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            PositionGroup::Illegal => "IllegalGroup",
            PositionGroup::GameOver => "GameOverGroup",
            PositionGroup::Check => "CheckGroup",
        }
    }

    fn description(self) -> &'static str {
        match self {
            PositionGroup::Illegal => "Any position that is illegal",
            PositionGroup::GameOver => "Game has come to an end",
            PositionGroup::Check => "Side with the move is in check",
        }
    }

    fn members(self) -> Vec<PositionTag> {
        use PositionTag::*;
        match self {
            PositionGroup::Illegal => PositionTag::ALL
                .iter()
                .copied()
                .filter(|t| !t.legality().is_legal())
                .collect(),
            PositionGroup::GameOver => vec![Checkmate, Stalemate, InsufficientMaterial],
            PositionGroup::Check => vec![Check, DoubleCheck, Checkmate],
        }
    }
}

pub type PositionAnalysis = Analysis<PositionTag>;
pub type PositionAnalysisGroup = AnalysisGroup<PositionTag>;
pub type PositionAnalysisMask = AnalysisMask<PositionTag>;
