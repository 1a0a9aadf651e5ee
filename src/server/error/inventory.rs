use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Relation tables joined onto base server records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Disk,
    Network,
    Partition,
    Repository,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disk => "disk",
            Self::Network => "network",
            Self::Partition => "partition",
            Self::Repository => "repository",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum InventoryError {
    /// Base server query failed.
    #[error("Failed to query server information")]
    ServerQuery(#[source] sea_orm::DbErr),

    /// One of the relation queries failed; the whole request fails with it.
    #[error("Failed to query server {kind} information")]
    RelationQuery {
        kind: RelationKind,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Named lookup matched no server.
    #[error("Server '{0}' not found")]
    ServerNotFound(String),
}

/// Converts inventory errors into HTTP responses.
///
/// Storage failures are logged with the driver error and answered with the domain
/// message only.
///
/// # Returns
/// - 404 Not Found - For `ServerNotFound`
/// - 500 Internal Server Error - For failed base or relation queries
impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        match &self {
            Self::ServerNotFound(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new("NOT_FOUND", self.to_string())),
                )
                    .into_response()
            }
            Self::ServerQuery(source) | Self::RelationQuery { source, .. } => {
                tracing::error!("{}: {}", self, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("DATABASE_ERROR", self.to_string())),
                )
                    .into_response()
            }
        }
    }
}
