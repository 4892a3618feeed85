//! Snapshot of the host's current data selection.

use stratoband_graph::compat::can_merge;
use stratoband_graph::{IdSet, IdType};

/// Ids the user has selected, tagged with their type. Passed into each layout pass so that
/// ribbons carrying selected ids get a highlight sub-ribbon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    id_type: Option<IdType>,
    ids: IdSet,
}

impl Selection {
    pub fn new(id_type: IdType, ids: impl IntoIterator<Item = stratoband_graph::DataId>) -> Self {
        Self {
            id_type: Some(id_type),
            ids: ids.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id_type(&self) -> Option<&IdType> {
        self.id_type.as_ref()
    }

    pub fn ids(&self) -> &IdSet {
        &self.ids
    }

    /// Share of `ids` that is selected, or `None` when the types do not match or nothing in
    /// `ids` is selected.
    pub fn fraction_of(&self, id_type: &IdType, ids: &IdSet) -> Option<f64> {
        let own = self.id_type.as_ref()?;
        if ids.is_empty() || !can_merge(own, id_type) {
            return None;
        }
        let hit = ids.intersection(&self.ids).count();
        (hit > 0).then(|| hit as f64 / ids.len() as f64)
    }
}
