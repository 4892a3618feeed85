//! Identifier-type compatibility.
//!
//! Two dimensions can be connected or merged when their identifier types belong to the same
//! category (e.g. two gene id flavours that map onto each other).

use serde::{Deserialize, Serialize};

use crate::block::{Block, Dimension};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdType {
    pub name: String,
    pub category: String,
}

impl IdType {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn is_compatible(&self, other: &IdType) -> bool {
        can_merge(self, other)
    }
}

pub fn can_merge(a: &IdType, b: &IdType) -> bool {
    a.category == b.category
}

/// How the dimensions of two blocks line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionMatch {
    /// D1 matches D1 and D2 matches D2.
    Direct,
    /// D1 matches D2 and vice versa; one block must be transposed.
    Transposed,
    Incompatible,
}

pub fn matching(a: &Block, b: &Block) -> DimensionMatch {
    let d1 = Dimension::D1;
    let d2 = Dimension::D2;
    if can_merge(a.id_type(d1), b.id_type(d1)) && can_merge(a.id_type(d2), b.id_type(d2)) {
        DimensionMatch::Direct
    } else if can_merge(a.id_type(d1), b.id_type(d2)) && can_merge(a.id_type(d2), b.id_type(d1))
    {
        DimensionMatch::Transposed
    } else {
        DimensionMatch::Incompatible
    }
}

pub fn need_transpose(a: &Block, b: &Block) -> bool {
    matching(a, b) == DimensionMatch::Transposed
}
