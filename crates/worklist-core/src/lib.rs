//! Reconciliation core for a filterable, groupable list view.
//!
//! Merges a URL-encoded snapshot, a cached in-memory query, and server
//! metadata into one consistent view state, keeps the URL mirroring the
//! query across refreshes, and gates actions by server-declared
//! capabilities.

#![deny(unsafe_code)]

pub mod authorization;
pub mod events;
pub mod orchestrator;
pub mod pagination;
pub mod resolver;
pub mod services;
pub mod session;
pub mod url_state;

pub use authorization::AuthorizationState;
pub use events::Event;
pub use orchestrator::{Orchestrator, UNRETRIEVABLE_QUERY_MESSAGE};
pub use pagination::PaginationCoordinator;
pub use resolver::{Resolution, resolve_entry, should_merge};
pub use services::{NotificationSink, NullNotificationSink, ProjectService, WorkPackageService};
pub use session::SessionCache;
pub use url_state::UrlState;
