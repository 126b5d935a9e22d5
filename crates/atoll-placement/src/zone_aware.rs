//! Zone-aware placement: R distinct instances from R distinct zones.

use std::collections::HashMap;

use atoll_types::{InstanceId, Token, ZoneId};

use crate::strategy::ReplicationStrategy;
use crate::{PlacementError, RingIndex};

/// Places each key on `replication_factor` instances drawn from
/// `replication_factor` distinct zones.
///
/// The clockwise walk keeps the first instance met in each new zone and
/// skips every further token of an already-represented zone, so the replica
/// set holds exactly one instance per zone. The arc walks apply the same
/// rule: tokens of already-seen zones are traversed freely, and the window
/// boundary sits where a walk step would bring in one zone too many.
#[derive(Debug, Clone)]
pub struct ZoneAwareStrategy {
    replication_factor: usize,
    zone_by_instance: HashMap<InstanceId, ZoneId>,
    instance_seed: Option<u64>,
    zone_seed: Option<u64>,
}

impl ZoneAwareStrategy {
    /// Create a strategy placing one replica in each of
    /// `replication_factor` distinct zones.
    ///
    /// `zone_by_instance` must cover every instance the ring can name;
    /// a walk that meets an unmapped instance fails with
    /// [`PlacementError::MissingZone`]. The seed parameters are reserved
    /// for future randomised tie-breaking and are not consulted by the
    /// deterministic walks.
    pub fn new(
        replication_factor: usize,
        zone_by_instance: HashMap<InstanceId, ZoneId>,
        instance_seed: Option<u64>,
        zone_seed: Option<u64>,
    ) -> Result<Self, PlacementError> {
        if replication_factor == 0 {
            return Err(PlacementError::InvalidReplicationFactor { got: 0 });
        }
        Ok(Self {
            replication_factor,
            zone_by_instance,
            instance_seed,
            zone_seed,
        })
    }

    /// The reserved randomisation seeds, if supplied.
    pub fn seeds(&self) -> (Option<u64>, Option<u64>) {
        (self.instance_seed, self.zone_seed)
    }

    /// The zone of `instance`, or [`PlacementError::MissingZone`] when the
    /// mapping has no entry for it.
    fn zone_of(&self, instance: &InstanceId) -> Result<&ZoneId, PlacementError> {
        self.zone_by_instance
            .get(instance)
            .ok_or_else(|| PlacementError::MissingZone(instance.clone()))
    }
}

impl ReplicationStrategy for ZoneAwareStrategy {
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
        let mut zones: Vec<&ZoneId> = Vec::with_capacity(self.replication_factor);
        let mut idx = anchor;
        for _ in 0..ring.len() {
            let instance = ring.instance_at(idx);
            let zone = self.zone_of(instance)?;
            if !zones.contains(&zone) {
                zones.push(zone);
                replicas.push(instance.clone());
                if zones.len() == self.replication_factor {
                    return Ok(replicas);
                }
            }
            idx = ring.next_index(idx);
        }

        Err(PlacementError::NotEnoughZones {
            needed: self.replication_factor,
            available: zones.len(),
        })
    }

    fn replica_start(&self, token: Token, ring: &RingIndex) -> Result<Token, PlacementError> {
        let anchor = ring.exact_index(token)?;
        let owner_zone = self.zone_of(ring.instance_at(anchor))?;

        let mut seen: Vec<&ZoneId> = Vec::with_capacity(self.replication_factor);
        seen.push(owner_zone);
        let mut start = token;

        let mut idx = anchor;
        for _ in 1..ring.len() {
            idx = ring.prev_index(idx);
            let zone = self.zone_of(ring.instance_at(idx))?;
            if zone == owner_zone {
                // Keys before this point get their replica for the owner's
                // zone from this earlier token.
                break;
            }
            if !seen.contains(&zone) {
                if seen.len() == self.replication_factor {
                    // One more distinct zone would push the owner's zone out
                    // of the R-zone window.
                    break;
                }
                seen.push(zone);
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

        let mut seen: Vec<&ZoneId> = Vec::with_capacity(self.replication_factor);
        seen.push(self.zone_of(ring.instance_at(anchor))?);
        let mut last = replica_start;

        let mut idx = anchor;
        for _ in 1..ring.len() {
            idx = ring.next_index(idx);
            let zone = self.zone_of(ring.instance_at(idx))?;
            if !seen.contains(&zone) {
                if seen.len() == self.replication_factor {
                    break;
                }
                seen.push(zone);
            }
            last = ring.token_at(idx);
        }

        Ok(last)
    }
}
