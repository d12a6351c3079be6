use crate::geometry::BoundingBox;
use crate::systems::actor::{Actor, ActorId};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-actor data taken at the start of the collision phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionProbe {
    pub id: ActorId,
    pub bbox: BoundingBox,
    /// Only actors with a collision hook start a scan.
    pub is_source: bool,
}

impl From<&Actor> for CollisionProbe {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id(),
            bbox: actor.bounding_box(),
            is_source: actor.has_collision_hook(),
        }
    }
}

/// (source, target). The source is the actor whose hook fires.
pub type CollisionPair = (ActorId, ActorId);

fn hits_for(index: usize, probes: &[CollisionProbe]) -> Vec<CollisionPair> {
    let source = &probes[index];
    if !source.is_source {
        return Vec::new();
    }
    probes
        .iter()
        .enumerate()
        .filter(|&(j, other)| j != index && source.bbox.overlaps(&other.bbox))
        .map(|(_, other)| (source.id, other.id))
        .collect()
}

/// Every overlapping (source, target) pair, ordered by source position in
/// `probes` and then by target position. The order is the same with or
/// without the `parallel` feature.
pub fn detect_pairs(probes: &[CollisionProbe]) -> Vec<CollisionPair> {
    #[cfg(feature = "parallel")]
    {
        let per_source: Vec<Vec<CollisionPair>> =
            (0..probes.len()).into_par_iter().map(|i| hits_for(i, probes)).collect();
        per_source.into_iter().flatten().collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..probes.len()).flat_map(|i| hits_for(i, probes)).collect()
    }
}
