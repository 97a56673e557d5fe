//! Dashboard counters, recomputed from the whole mirror on every load

use serde::Serialize;
use std::collections::HashSet;

use crate::category;
use crate::store::PlaceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub featured: usize,
    /// Attractions summed over every place
    pub attractions: usize,
    /// Distinct category labels
    pub categories: usize,
}

pub fn dashboard_stats(store: &PlaceStore) -> DashboardStats {
    let categories: HashSet<&str> = store
        .iter()
        .map(|p| category::label(p.categoria.as_deref()))
        .collect();

    DashboardStats {
        total: store.len(),
        featured: store.iter().filter(|p| p.destaque).count(),
        attractions: store.iter().map(|p| p.atracoes.len()).sum(),
        categories: categories.len(),
    }
}
