use crate::data::filter::{filtered_indices, sort_indices, FilterParams, SortKey, SortOrder};
use crate::data::model::{RestaurantRecord, RestaurantSet};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// One session's view of the listing, independent of rendering.
///
/// Owns the loaded set, the active filter parameters, and the cached visible
/// indices.  This is the whole surface the presentation layer talks to:
/// records flow out through [`SessionState::visible`], and the only things
/// flowing in are filter parameters and a sort selection.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Loaded listing (None until a source has been loaded).
    pub dataset: Option<RestaurantSet>,

    /// Active filter constraints.
    pub filters: FilterParams,

    /// Optional sort applied after filtering; source order when None.
    pub sort: Option<(SortKey, SortOrder)>,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,
}

impl SessionState {
    /// Ingest a newly loaded listing, reset filters, make everything visible.
    pub fn set_dataset(&mut self, dataset: RestaurantSet) {
        self.filters = FilterParams::default();
        self.sort = None;
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
    }

    /// Recompute `visible_indices` after a filter or sort change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            let mut indices = filtered_indices(ds, &self.filters);
            if let Some((key, order)) = self.sort {
                sort_indices(ds, &mut indices, key, order);
            }
            self.visible_indices = indices;
        }
    }

    /// Set the maximum-distance threshold (`None` clears it).  The other
    /// filter fields are mutated directly by the presentation layer, which
    /// then calls [`SessionState::refilter`].
    pub fn set_max_distance(&mut self, max_distance: Option<f64>) {
        self.filters.max_distance = max_distance;
        self.refilter();
    }

    /// Records passing the current filters, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &RestaurantRecord> + '_ {
        let records = self
            .dataset
            .as_ref()
            .map(|ds| ds.records.as_slice())
            .unwrap_or(&[]);
        self.visible_indices.iter().map(move |&i| &records[i])
    }
}
