//! Typed signals the orchestrator reacts to.
//!
//! These replace ambient broadcast events with explicit, directed messages
//! delivered through a single dispatch point.

/// A signal from the surrounding UI or navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user changed filters; re-fetch and rebuild, no full resolution.
    FiltersChanged,
    /// Something external invalidated the list; re-fetch and rebuild.
    RefreshRequired,
    /// The user discarded the current query.
    QueryCleared,
    /// The in-memory query diverged from the URL; re-mirror it.
    QueryStateChanged,
    /// A single work package finished loading elsewhere; re-capture the
    /// back reference.
    WorkPackageLoaded,
}
