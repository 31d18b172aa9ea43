pub mod error;
pub mod ids;
pub mod query;
pub mod response;
pub mod table;

pub use error::{ModelError, Result, ServiceError};
pub use ids::{ColumnId, QueryId, WorkPackageId};
pub use query::{Filter, Query, QueryData};
pub use response::{
    ColumnDescriptor, LinkSet, ListResponse, ProjectInfo, ResponseMeta, SavedQueryRef, WorkPackage,
};
pub use table::{PaginationOptions, PaginationState, TableRow, TableState};
