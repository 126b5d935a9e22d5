//! Shared fixtures for placement tests.

use std::collections::HashMap;

use atoll_types::{InstanceId, Token, ZoneId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{ReplicationStrategy, RingIndex};

pub fn tok(value: u32) -> Token {
    Token::new(value)
}

pub fn inst(name: &str) -> InstanceId {
    InstanceId::from(name)
}

pub fn zone(name: &str) -> ZoneId {
    ZoneId::from(name)
}

/// The deterministic reference ring: twelve tokens over three instances,
/// one instance per zone. The clockwise order around the interesting query
/// points (48, 97, 194, 853, 902, 949) is fixed so scenario expectations
/// can be read straight off the table.
const FIXTURE: &[(u32, &str)] = &[
    (48, "instance-2"),
    (97, "instance-1"),
    (194, "instance-0"),
    (291, "instance-2"),
    (388, "instance-1"),
    (485, "instance-0"),
    (582, "instance-2"),
    (679, "instance-1"),
    (776, "instance-0"),
    (853, "instance-1"),
    (902, "instance-2"),
    (949, "instance-2"),
];

pub fn fixture_ring() -> RingIndex {
    RingIndex::new(FIXTURE.iter().map(|&(t, i)| (tok(t), inst(i))))
}

/// One zone per fixture instance: `instance-N` lives in `zone-N`.
pub fn fixture_zones() -> HashMap<InstanceId, ZoneId> {
    (0..3)
        .map(|n| (inst(&format!("instance-{n}")), zone(&format!("zone-{n}"))))
        .collect()
}

/// Eight tokens over five instances. With R = 3 the counter-clockwise
/// walks on this ring hit the R-distinct limit rather than an owner
/// repeat, which the three-instance fixture can never exercise.
const SPREAD: &[(u32, &str)] = &[
    (100, "a"),
    (200, "b"),
    (300, "c"),
    (400, "d"),
    (500, "e"),
    (600, "a"),
    (700, "c"),
    (800, "e"),
];

pub fn spread_ring() -> RingIndex {
    RingIndex::new(SPREAD.iter().map(|&(t, i)| (tok(t), inst(i))))
}

/// Six tokens over six instances in three zones, two instances per zone.
/// Lets zone walks cross a *different* instance of an already-seen zone.
const ZONED: &[(u32, &str, &str)] = &[
    (100, "a0", "zone-a"),
    (200, "b0", "zone-b"),
    (300, "a1", "zone-a"),
    (400, "c0", "zone-c"),
    (500, "b1", "zone-b"),
    (600, "c1", "zone-c"),
];

pub fn zoned_ring() -> (RingIndex, HashMap<InstanceId, ZoneId>) {
    let ring = RingIndex::new(ZONED.iter().map(|&(t, i, _)| (tok(t), inst(i))));
    let zones = ZONED.iter().map(|&(_, i, z)| (inst(i), zone(z))).collect();
    (ring, zones)
}

/// Build a ring with random token positions, deterministic per seed.
/// Tokens are assigned round-robin over `instances` named instances.
pub fn random_ring(seed: u64, instances: usize, tokens_per_instance: usize) -> RingIndex {
    let mut rng = StdRng::seed_from_u64(seed);
    let entries = (0..instances * tokens_per_instance).map(|k| {
        let token = Token::new(rng.gen::<u32>());
        let instance = inst(&format!("instance-{}", k % instances));
        (token, instance)
    });
    RingIndex::new(entries)
}

/// Zone map striping `instances` named instances over `zones` zones.
pub fn striped_zones(instances: usize, zones: usize) -> HashMap<InstanceId, ZoneId> {
    (0..instances)
        .map(|n| {
            (
                inst(&format!("instance-{n}")),
                zone(&format!("zone-{}", n % zones)),
            )
        })
        .collect()
}

/// Assert the replica-arc consistency law for every token on the ring:
/// the span anchored at a token's replica start must cover the token.
pub fn assert_spans_cover<S: ReplicationStrategy>(strategy: &S, ring: &RingIndex) {
    for &token in ring.tokens() {
        let span = strategy
            .replica_span(token, ring)
            .expect("replica_span should succeed for ring tokens");
        assert!(
            span.covers(token),
            "span [{}, {}] does not cover token {token}",
            span.start,
            span.end
        );
    }
}

/// Compare replica sets ignoring order, which carries no meaning.
pub fn assert_same_instances(mut actual: Vec<InstanceId>, expected: &[&str]) {
    let mut expected: Vec<InstanceId> = expected.iter().map(|i| inst(i)).collect();
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected);
}
