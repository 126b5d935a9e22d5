//! Simple placement: the next R distinct instances clockwise.

use atoll_types::{InstanceId, Token};

use crate::strategy::ReplicationStrategy;
use crate::{PlacementError, RingIndex};

/// Places each key on the next `replication_factor` distinct instances
/// found walking clockwise from the key's position.
///
/// Consecutive tokens of the same instance are routine on a real ring; the
/// walks treat them as a single replica, so they neither consume capacity
/// nor cut an arc short.
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    replication_factor: usize,
    seed: Option<u64>,
}

impl SimpleStrategy {
    /// Create a strategy placing `replication_factor` replicas per key.
    ///
    /// `seed` is reserved for future randomised tie-breaking and is not
    /// consulted by the deterministic walks.
    pub fn new(replication_factor: usize, seed: Option<u64>) -> Result<Self, PlacementError> {
        if replication_factor == 0 {
            return Err(PlacementError::InvalidReplicationFactor { got: 0 });
        }
        Ok(Self {
            replication_factor,
            seed,
        })
    }

    /// The reserved randomisation seed, if one was supplied.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl ReplicationStrategy for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn replica_set(
        &self,
        key: Token,
        ring: &RingIndex,
    ) -> Result<Vec<InstanceId>, PlacementError> {
        let anchor = ring.successor_index(key)?;

        let mut replicas: Vec<InstanceId> = Vec::with_capacity(self.replication_factor);
        let mut idx = anchor;
        for _ in 0..ring.len() {
            let instance = ring.instance_at(idx);
            if !replicas.iter().any(|seen| seen == instance) {
                replicas.push(instance.clone());
                if replicas.len() == self.replication_factor {
                    return Ok(replicas);
                }
            }
            idx = ring.next_index(idx);
        }

        Err(PlacementError::NotEnoughInstances {
            needed: self.replication_factor,
            available: replicas.len(),
        })
    }

    fn replica_start(&self, token: Token, ring: &RingIndex) -> Result<Token, PlacementError> {
        let anchor = ring.exact_index(token)?;
        let owner = ring.instance_at(anchor);

        let mut seen: Vec<&InstanceId> = Vec::with_capacity(self.replication_factor);
        seen.push(owner);
        let mut start = token;

        let mut idx = anchor;
        for _ in 1..ring.len() {
            idx = ring.prev_index(idx);
            let instance = ring.instance_at(idx);
            if instance == owner {
                // Keys before this point reach the owner through its earlier
                // token, so the window anchored here no longer needs `token`.
                break;
            }
            if !seen.contains(&instance) {
                if seen.len() == self.replication_factor {
                    // One more distinct instance would push the owner out of
                    // the R-instance window.
                    break;
                }
                seen.push(instance);
            }
            start = ring.token_at(idx);
        }

        Ok(start)
    }

    fn last_replica_token(
        &self,
        replica_start: Token,
        ring: &RingIndex,
    ) -> Result<Token, PlacementError> {
        let anchor = ring.exact_index(replica_start)?;

        let mut seen: Vec<&InstanceId> = Vec::with_capacity(self.replication_factor);
        seen.push(ring.instance_at(anchor));
        let mut last = replica_start;

        let mut idx = anchor;
        for _ in 1..ring.len() {
            idx = ring.next_index(idx);
            let instance = ring.instance_at(idx);
            if !seen.contains(&instance) {
                if seen.len() == self.replication_factor {
                    break;
                }
                seen.push(instance);
            }
            last = ring.token_at(idx);
        }

        Ok(last)
    }
}
