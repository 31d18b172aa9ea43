//! Contracts for the external collaborators.
//!
//! The transport, query language, and access-control model behind these
//! traits are out of scope; the core only depends on the request and
//! response shapes. Implementations are provided by the embedding layer and
//! mocked in tests.

use worklist_model::{
    ColumnDescriptor, ListResponse, PaginationOptions, ProjectInfo, Query, QueryId, SavedQueryRef,
    ServiceError,
};

/// The backend list service.
///
/// `meta.query` in every response echoes the query the backend actually
/// evaluated, so a fetch issued from a decoded token gets its configuration
/// back in the response metadata.
pub trait WorkPackageService {
    /// Fetch the list for a saved query by identifier.
    fn by_query_id(
        &self,
        project: Option<&str>,
        id: &QueryId,
    ) -> Result<ListResponse, ServiceError>;

    /// Fetch the project's default list.
    fn default_list(&self, project: Option<&str>) -> Result<ListResponse, ServiceError>;

    /// Fetch the list for an explicit query configuration.
    fn with_query(
        &self,
        project: Option<&str>,
        query: &Query,
        pagination: &PaginationOptions,
    ) -> Result<ListResponse, ServiceError>;

    /// Column descriptors available for the project, beyond those in use.
    fn available_columns(&self, project: Option<&str>)
    -> Result<Vec<ColumnDescriptor>, ServiceError>;
}

/// The backend project service.
pub trait ProjectService {
    fn project(&self, identifier: &str) -> Result<ProjectInfo, ServiceError>;

    /// Saved queries listed in the project's query menu.
    fn project_queries(&self, identifier: &str) -> Result<Vec<SavedQueryRef>, ServiceError>;
}

/// Sink for user-visible notifications.
pub trait NotificationSink {
    fn error(&self, message: &str);
}

/// Notification sink that drops everything, for embeddings without a
/// notification surface.
#[derive(Debug, Default)]
pub struct NullNotificationSink;

impl NotificationSink for NullNotificationSink {
    fn error(&self, _message: &str) {}
}
