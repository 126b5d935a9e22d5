//! Replica placement over a consistent-hash token ring.
//!
//! This crate answers two questions for a ring of tokens, each owned by an
//! instance, under a replication factor R:
//!
//! - [`ReplicationStrategy::replica_set`] — which R instances replicate the
//!   key that hashes to a given point on the ring?
//! - [`ReplicationStrategy::replica_start`] /
//!   [`ReplicationStrategy::last_replica_token`] — over which arc of the
//!   ring does a given token participate in replication?
//!
//! Two policies implement the contract: [`SimpleStrategy`] picks the next R
//! distinct instances clockwise; [`ZoneAwareStrategy`] additionally requires
//! the R instances to sit in R distinct zones.
//!
//! The engine is purely functional over an immutable [`RingIndex`]: no
//! internal state, no I/O, identical inputs always produce identical
//! outputs. Callers rebuild and swap a fresh index when membership changes.

mod error;
mod index;
mod simple;
mod strategy;
mod zone_aware;

#[cfg(test)]
mod tests;

pub use error::PlacementError;
pub use index::RingIndex;
pub use simple::SimpleStrategy;
pub use strategy::{ReplicaSpan, ReplicationStrategy};
pub use zone_aware::ZoneAwareStrategy;
