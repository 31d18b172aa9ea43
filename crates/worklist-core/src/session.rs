//! Session-scoped cache, an explicit keyed store rather than a singleton.

use worklist_model::WorkPackageId;

/// Holds the one cache slot the view keeps across loads: the identifier of
/// the first row seen on a fresh load, used as the navigation target when no
/// item is explicitly selected.
///
/// Reset at session start; overwritten on fresh loads, never on refresh.
#[derive(Debug, Clone, Default)]
pub struct SessionCache {
    preselected_work_package: Option<WorkPackageId>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preselected_work_package(&self) -> Option<WorkPackageId> {
        self.preselected_work_package
    }

    pub fn set_preselected_work_package(&mut self, id: WorkPackageId) {
        self.preselected_work_package = Some(id);
    }
}
