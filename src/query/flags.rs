//! Host-supplied feature flags gating the pipeline stages.

/// Independently togglable switches, one per pipeline concern.
///
/// `enable_filtering` is the master switch for both filtering stages;
/// `searchable` and `enable_column_filter` gate the search and column filter
/// stages individually underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Allow the engine to sort locally (uncontrolled sort).
    pub enable_internal_sort: bool,
    /// Master switch for search and column filtering.
    pub enable_filtering: bool,
    /// Offer and apply per-column filters.
    pub enable_column_filter: bool,
    /// Offer and apply the free-text search box.
    pub searchable: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_internal_sort: true,
            enable_filtering: true,
            enable_column_filter: true,
            searchable: true,
        }
    }
}

impl FeatureFlags {
    /// Everything off: the view is the input, unchanged.
    pub fn none() -> Self {
        Self {
            enable_internal_sort: false,
            enable_filtering: false,
            enable_column_filter: false,
            searchable: false,
        }
    }

    /// Search stage gate.
    pub fn search_enabled(&self) -> bool {
        self.enable_filtering && self.searchable
    }

    /// Column filter stage gate.
    pub fn column_filter_enabled(&self) -> bool {
        self.enable_filtering && self.enable_column_filter
    }
}
