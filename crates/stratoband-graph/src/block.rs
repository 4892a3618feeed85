//! Block vertices and the data they wrap.

use serde::{Deserialize, Serialize};
use stratoband_geom::{Axis, Rect};

use crate::compat::IdType;
use crate::direction::EdgeDirection;
use crate::ids::IdSet;

/// One of the two orthogonal axes of a data slice: D1 holds the "dimension" ids, D2 the
/// "record" ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    D1,
    D2,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::D1, Dimension::D2];

    pub fn other(self) -> Dimension {
        match self {
            Dimension::D1 => Dimension::D2,
            Dimension::D2 => Dimension::D1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Dimension::D1 => 0,
            Dimension::D2 => 1,
        }
    }

    pub fn before(self) -> EdgeDirection {
        match self {
            Dimension::D1 => EdgeDirection::LeftOf,
            Dimension::D2 => EdgeDirection::Above,
        }
    }

    pub fn after(self) -> EdgeDirection {
        self.before().opposite()
    }

    /// Layout axis along which blocks sharing this dimension are placed next to each other.
    pub fn axis(self) -> Axis {
        match self {
            Dimension::D1 => Axis::Horizontal,
            Dimension::D2 => Axis::Vertical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionData {
    pub id_type: IdType,
    pub ids: IdSet,
    /// Extent reported by the data store. Connector widths are measured against it.
    pub size: usize,
}

impl DimensionData {
    /// Dimension whose size is its id count.
    pub fn new(id_type: IdType, ids: impl IntoIterator<Item = crate::ids::DataId>) -> Self {
        let ids: IdSet = ids.into_iter().collect();
        Self {
            id_type,
            size: ids.len(),
            ids,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

/// Sort rank of a block along one dimension.
///
/// `TOP_PRIORITY` drives the sort; larger ranks are secondary keys down to `MIN_PRIORITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SortPriority(i32);

impl SortPriority {
    pub const NO_SORTING: SortPriority = SortPriority(-1);
    pub const TOP_PRIORITY: SortPriority = SortPriority(1);
    pub const MIN_PRIORITY: SortPriority = SortPriority(3);

    pub fn rank(rank: i32) -> SortPriority {
        if (Self::TOP_PRIORITY.0..=Self::MIN_PRIORITY.0).contains(&rank) {
            SortPriority(rank)
        } else {
            Self::NO_SORTING
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn is_active(self) -> bool {
        self != Self::NO_SORTING
    }

    pub fn is_top(self) -> bool {
        self == Self::TOP_PRIORITY
    }

    /// One rank further from the top; falls off to `NO_SORTING` past `MIN_PRIORITY`.
    pub fn demoted(self) -> SortPriority {
        if self.is_active() {
            Self::rank(self.0 + 1)
        } else {
            self
        }
    }

    /// One rank closer to the top, never above `TOP_PRIORITY`.
    pub fn promoted(self) -> SortPriority {
        if self.is_active() {
            SortPriority(self.0.saturating_sub(1).max(Self::TOP_PRIORITY.0))
        } else {
            self
        }
    }
}

impl Default for SortPriority {
    fn default() -> Self {
        Self::NO_SORTING
    }
}

/// Transient interaction state; not read by any graph algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiFlags {
    pub hovered: bool,
    pub selected: bool,
    pub dragged: bool,
}

/// Per-dimension view of a table slice, supplied by the data store.
pub trait DataSlice {
    fn id_type(&self, dimension: Dimension) -> IdType;
    fn ids(&self, dimension: Dimension) -> IdSet;
    fn size(&self, dimension: Dimension) -> usize {
        self.ids(dimension).len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub label: String,
    dims: [DimensionData; 2],
    bounds: Rect,
    sort: [SortPriority; 2],
    pub flags: UiFlags,
    placeholder: bool,
    transposed: bool,
}

impl Block {
    pub fn new(label: impl Into<String>, d1: DimensionData, d2: DimensionData) -> Self {
        Self {
            label: label.into(),
            dims: [d1, d2],
            bounds: Rect::default(),
            sort: [SortPriority::NO_SORTING; 2],
            flags: UiFlags::default(),
            placeholder: false,
            transposed: false,
        }
    }

    pub fn from_slice(label: impl Into<String>, slice: &impl DataSlice) -> Self {
        Self::new(
            label,
            DimensionData::new(slice.id_type(Dimension::D1), slice.ids(Dimension::D1))
                .with_size(slice.size(Dimension::D1)),
            DimensionData::new(slice.id_type(Dimension::D2), slice.ids(Dimension::D2))
                .with_size(slice.size(Dimension::D2)),
        )
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionData {
        &self.dims[dimension.index()]
    }

    pub fn id_type(&self, dimension: Dimension) -> &IdType {
        &self.dims[dimension.index()].id_type
    }

    pub fn ids(&self, dimension: Dimension) -> &IdSet {
        &self.dims[dimension.index()].ids
    }

    pub fn size(&self, dimension: Dimension) -> usize {
        self.dims[dimension.index()].size
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.bounds.translate(dx, dy);
    }

    pub fn sort_priority(&self, dimension: Dimension) -> SortPriority {
        self.sort[dimension.index()]
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Copy of `self` with its two dimensions swapped.
    pub fn transposed(&self) -> Block {
        let mut out = self.clone();
        out.transpose();
        out
    }

    pub(crate) fn transpose(&mut self) {
        self.dims.swap(0, 1);
        self.sort.swap(0, 1);
        let b = self.bounds;
        self.bounds = Rect::new(b.x, b.y, b.height, b.width);
        self.transposed = !self.transposed;
    }

    /// Replaces the ids along `dimension`; the size follows the new id count.
    pub(crate) fn set_ids(&mut self, dimension: Dimension, ids: IdSet) {
        let data = &mut self.dims[dimension.index()];
        data.size = ids.len();
        data.ids = ids;
    }

    pub(crate) fn set_sort_priority(&mut self, dimension: Dimension, priority: SortPriority) {
        self.sort[dimension.index()] = priority;
    }

    /// Drag-preview copy: no sort state, no UI state, not yet placed.
    pub(crate) fn placeholder_of(template: &Block, transpose: bool) -> Block {
        let mut out = template.clone();
        if transpose {
            out.transpose();
        }
        out.placeholder = true;
        out.sort = [SortPriority::NO_SORTING; 2];
        out.flags = UiFlags::default();
        out.bounds = Rect::unplaced(out.bounds.width, out.bounds.height);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demotion_past_min_priority_resets() {
        assert_eq!(SortPriority::TOP_PRIORITY.demoted(), SortPriority::rank(2));
        assert_eq!(SortPriority::MIN_PRIORITY.demoted(), SortPriority::NO_SORTING);
        assert_eq!(SortPriority::NO_SORTING.demoted(), SortPriority::NO_SORTING);
        assert_eq!(SortPriority::TOP_PRIORITY.promoted(), SortPriority::TOP_PRIORITY);
    }

    #[test]
    fn transpose_swaps_dimensions_and_size() {
        let b = Block::new(
            "t",
            DimensionData::new(IdType::new("gene", "gene"), [1, 2, 3]),
            DimensionData::new(IdType::new("sample", "sample"), [7]),
        )
        .with_bounds(Rect::new(0.0, 0.0, 10.0, 30.0));
        let t = b.transposed();
        assert_eq!(t.id_type(Dimension::D1).category, "sample");
        assert_eq!(t.size(Dimension::D2), 3);
        assert_eq!(t.bounds().width, 30.0);
        assert!(t.is_transposed());
        assert!(!t.transposed().is_transposed());
    }

    struct Table;

    impl DataSlice for Table {
        fn id_type(&self, dimension: Dimension) -> IdType {
            match dimension {
                Dimension::D1 => IdType::new("gene", "gene"),
                Dimension::D2 => IdType::new("sample", "sample"),
            }
        }

        fn ids(&self, dimension: Dimension) -> IdSet {
            match dimension {
                Dimension::D1 => IdSet::from([1, 2]),
                Dimension::D2 => IdSet::from([5]),
            }
        }

        fn size(&self, dimension: Dimension) -> usize {
            match dimension {
                Dimension::D1 => 8,
                Dimension::D2 => 1,
            }
        }
    }

    #[test]
    fn slice_size_is_kept_until_ids_change() {
        let mut b = Block::from_slice("t", &Table);
        assert_eq!(b.size(Dimension::D1), 8);
        assert_eq!(b.size(Dimension::D2), 1);
        assert_eq!(b.transposed().size(Dimension::D2), 8);

        b.set_ids(Dimension::D1, IdSet::from([1]));
        assert_eq!(b.size(Dimension::D1), 1);
    }
}
