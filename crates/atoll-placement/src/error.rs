//! Error types for placement queries.

use atoll_types::{InstanceId, Token};

/// Errors that can occur while answering a placement query.
///
/// All of these indicate a configuration or programming fault on the caller
/// side, not a transient condition: the engine never retries or recovers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The ring has no tokens at all.
    #[error("ring has no tokens")]
    EmptyRing,

    /// An operation that requires an existing ring token was called with a
    /// token that is not on the ring.
    #[error("token {0} is not on the ring")]
    TokenNotOnRing(Token),

    /// The ring holds fewer distinct instances than the replication factor.
    #[error("not enough distinct instances: need {needed}, have {available}")]
    NotEnoughInstances {
        /// Replicas required.
        needed: usize,
        /// Distinct instances present on the ring.
        available: usize,
    },

    /// The ring holds fewer distinct zones than the replication factor.
    #[error("not enough distinct zones: need {needed}, have {available}")]
    NotEnoughZones {
        /// Zones required.
        needed: usize,
        /// Distinct zones present on the ring.
        available: usize,
    },

    /// The replication factor is zero.
    #[error("replication factor must be at least 1, got {got}")]
    InvalidReplicationFactor {
        /// The rejected value.
        got: usize,
    },

    /// A zone-aware walk met an instance with no zone assignment.
    #[error("instance {0} has no zone assigned")]
    MissingZone(InstanceId),
}
