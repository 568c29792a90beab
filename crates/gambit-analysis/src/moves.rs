//! Move analyses: properties a proposed move can exhibit, and the reasons it can be illegal.

use std::sync::OnceLock;

use gambit_core::PieceKind;

use crate::group::AnalysisGroup;
use crate::mask::AnalysisMask;
use crate::registry::{Analysis, Registry};
use crate::tag::{GroupTag, Legality, Tag};

vocabulary! {
    /// A property of one proposed move. Declaration order fixes the ids.
    pub enum MoveTag {
        PawnCapture => "Move captures an enemy pawn",
        KnightCapture => "Move captures an enemy knight",
        BishopCapture => "Move captures an enemy bishop",
        RookCapture => "Move captures an enemy rook",
        QueenCapture => "Move captures an enemy queen",

        PawnMove => "Pawn is the moved piece",
        PawnMoveTwo => "Pawn moves 2 squares from the starting rank",
        Promotion => "Pawn move to the final rank",
        UnderPromotion => "Promotion to something other than a queen",
        EnPassant => "Pawn captures an enemy pawn beside it that has just advanced 2 squares",
        IllegalPromotionTargetSquare => "Promotion attempted on a square not on the final rank",
        IllegalPromotionTargetPiece => "Promotion attempted to pawn or king",
        IllegalPromotionSourcePiece => "Promotion attempted from a non-pawn",
        MissedPromotion => "Pawn move to the final rank without promotion",

        KnightMove => "Knight is the moved piece",
        BishopMove => "Bishop is the moved piece",
        RookMove => "Rook is the moved piece",
        QueenMove => "Queen is the moved piece",
        KingMove => "King is the moved piece",

        CastleShort => "Castle is performed to the king side",
        CastleLong => "Castle is performed to the queen side",
        CastleRightsLostAllyShort => "Ally can no longer castle short",
        CastleRightsLostAllyLong => "Ally can no longer castle long",
        CastleRightsLostEnemyShort => "Enemy can no longer castle short",
        CastleRightsLostEnemyLong => "Enemy can no longer castle long",
        IllegalCastleBlocked => "A piece stands between the king and the rook trying to castle",
        IllegalCastleThroughCheck => "The start, middle or end square of the castling king is attacked",
        IllegalCastleNoRights => "Castling rights have been lost for the attempted castle",
        IllegalCastleArrangement => "Castling rights do not reflect the position, e.g. a misplaced castling rook",

        IllegalMoveGeometry => "Piece moves in a way the rules do not allow",
        IllegalMoveBlocked => "Piece moves through another piece",
        IllegalMoveTurn => "Attempt to move an enemy piece",
        IllegalMoveLeavesKingInCheck => "Move leaves the mover's own king attacked",
        IllegalMoveSelfCapture => "Destination square holds a piece of the mover",
    }
}

impl MoveTag {
    /// The capture tag for taking a piece of `kind`. Kings are never captured.
    pub const fn capture_of(kind: PieceKind) -> Option<MoveTag> {
        match kind {
            PieceKind::Pawn => Some(MoveTag::PawnCapture),
            PieceKind::Knight => Some(MoveTag::KnightCapture),
            PieceKind::Bishop => Some(MoveTag::BishopCapture),
            PieceKind::Rook => Some(MoveTag::RookCapture),
            PieceKind::Queen => Some(MoveTag::QueenCapture),
            PieceKind::King => None,
        }
    }

    /// The tag recording which kind of piece moved.
    pub const fn moved(kind: PieceKind) -> MoveTag {
        match kind {
            PieceKind::Pawn => MoveTag::PawnMove,
            PieceKind::Knight => MoveTag::KnightMove,
            PieceKind::Bishop => MoveTag::BishopMove,
            PieceKind::Rook => MoveTag::RookMove,
            PieceKind::Queen => MoveTag::QueenMove,
            PieceKind::King => MoveTag::KingMove,
        }
    }
}

static MOVE_REGISTRY: OnceLock<Registry<MoveTag>> = OnceLock::new();

impl Tag for MoveTag {
    type Group = MoveGroup;

    const ALL: &'static [MoveTag] = MoveTag::VARIANTS;
    const DOMAIN: &'static str = "move";

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
        use MoveTag::*;
        match self {
            IllegalMoveLeavesKingInCheck => Legality::PseudoLegal,
            IllegalPromotionTargetSquare
            | IllegalPromotionTargetPiece
            | IllegalPromotionSourcePiece
            | MissedPromotion
            | IllegalCastleBlocked
            | IllegalCastleThroughCheck
            | IllegalCastleNoRights
            | IllegalCastleArrangement
            | IllegalMoveGeometry
            | IllegalMoveBlocked
            | IllegalMoveTurn
            | IllegalMoveSelfCapture => Legality::Illegal,
            _ => Legality::Legal,
        }
    }

    fn registry() -> &'static Registry<MoveTag> {
        MOVE_REGISTRY.get_or_init(|| {
            Registry::build().expect("built-in move vocabulary failed validation")
        })
    }
}

/// The registered groups of move analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveGroup {
    Illegal,
    NotPseudoLegal,
    IllegalPawn,
    Capture,
    PawnMove,
    SlidingPiece,
    Castle,
    IllegalCastle,
    IllegalMovement,
}

impl GroupTag for MoveGroup {
    type Tag = MoveTag;

    const ALL: &'static [MoveGroup] = &[
        MoveGroup::Illegal,
        MoveGroup::NotPseudoLegal,
        MoveGroup::IllegalPawn,
        MoveGroup::Capture,
        MoveGroup::PawnMove,
        MoveGroup::SlidingPiece,
        MoveGroup::Castle,
        MoveGroup::IllegalCastle,
        MoveGroup::IllegalMovement,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            MoveGroup::Illegal => "IllegalGroup",
            MoveGroup::NotPseudoLegal => "NotPseudoLegalGroup",
            MoveGroup::IllegalPawn => "IllegalPawnGroup",
            MoveGroup::Capture => "CaptureGroup",
            MoveGroup::PawnMove => "PawnMoveGroup",
            MoveGroup::SlidingPiece => "SlidingPieceGroup",
            MoveGroup::Castle => "CastleGroup",
            MoveGroup::IllegalCastle => "IllegalCastleGroup",
            MoveGroup::IllegalMovement => "IllegalMovementGroup",
        }
    }

    fn description(self) -> &'static str {
        match self {
            MoveGroup::Illegal => "Any move that is illegal",
            MoveGroup::NotPseudoLegal => "Any move that breaks movement rules regardless of king safety",
            MoveGroup::IllegalPawn => "Any pawn move that is illegal",
            MoveGroup::Capture => "Any move that is a capture",
            MoveGroup::PawnMove => "All analyses that involve a pawn",
            MoveGroup::SlidingPiece => "Rook, bishop, and queen moves",
            MoveGroup::Castle => "Analyses related to castling",
            MoveGroup::IllegalCastle => "Analyses for illegal castling",
            MoveGroup::IllegalMovement => "Piece movement that breaks the rules",
        }
    }

    fn members(self) -> Vec<MoveTag> {
        use MoveTag::*;
        match self {
            MoveGroup::Illegal => MoveTag::ALL.iter().copied().filter(|t| !t.legality().is_legal()).collect(),
            MoveGroup::NotPseudoLegal => MoveTag::ALL
                .iter()
                .copied()
                .filter(|t| !t.legality().is_pseudo_legal())
                .collect(),
            MoveGroup::IllegalPawn => vec![
                IllegalPromotionTargetSquare,
                IllegalPromotionTargetPiece,
                IllegalPromotionSourcePiece,
                MissedPromotion,
            ],
            MoveGroup::Capture => vec![
                PawnCapture,
                EnPassant,
                KnightCapture,
                BishopCapture,
                RookCapture,
                QueenCapture,
            ],
            MoveGroup::PawnMove => vec![PawnMove, PawnMoveTwo, Promotion, UnderPromotion, EnPassant],
            MoveGroup::SlidingPiece => vec![RookMove, BishopMove, QueenMove],
            MoveGroup::Castle => vec![
                CastleLong,
                CastleShort,
                CastleRightsLostAllyLong,
                CastleRightsLostAllyShort,
                CastleRightsLostEnemyLong,
                CastleRightsLostEnemyShort,
            ],
            MoveGroup::IllegalCastle => vec![
                IllegalCastleNoRights,
                IllegalCastleBlocked,
                IllegalCastleThroughCheck,
                IllegalCastleArrangement,
            ],
            MoveGroup::IllegalMovement => vec![
                IllegalMoveGeometry,
                IllegalMoveBlocked,
                IllegalMoveTurn,
                IllegalMoveSelfCapture,
            ],
        }
    }
}

pub type MoveAnalysis = Analysis<MoveTag>;
pub type MoveAnalysisGroup = AnalysisGroup<MoveTag>;
pub type MoveAnalysisMask = AnalysisMask<MoveTag>;
