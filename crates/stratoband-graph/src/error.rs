use crate::block::Dimension;
use crate::direction::EdgeDirection;
use crate::ids::{BlockId, EdgeId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("block {0} is not in the graph")]
    MissingVertex(BlockId),

    #[error("edge {0} is not in the graph")]
    MissingEdge(EdgeId),

    #[error("cannot connect block {0} to itself")]
    SelfLoop(BlockId),

    #[error("blocks {from} and {to} do not share an id category along {dimension:?}")]
    Incompatible {
        from: BlockId,
        to: BlockId,
        dimension: Dimension,
    },

    #[error("{direction:?} slot of block {block} is already held by edge {edge}")]
    SlotOccupied {
        block: BlockId,
        direction: EdgeDirection,
        edge: EdgeId,
    },

    #[error("direction {direction:?} does not run along {dimension:?}")]
    DirectionMismatch {
        direction: EdgeDirection,
        dimension: Dimension,
    },

    #[error("invalid split of block {block}: {reason}")]
    InvalidSplit { block: BlockId, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
