//! Movement domain: ground and ceiling overlap probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Player, ProbeDef, SensorReadings, SurfaceProbes};

/// Latest probe results, written before the controller tick.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SurfaceContacts(pub SensorReadings);

pub(crate) fn detect_surfaces(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &SurfaceProbes, &mut SurfaceContacts), With<Player>>,
) {
    // Only level geometry counts, never the player's own collider or sensors
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, probes, mut contacts) in &mut query {
        let origin = transform.translation.truncate();

        let grounded = probe_overlaps(&spatial_query, origin, &probes.ground, &ground_filter);
        let ceiling_clear = match &probes.ceiling {
            Some(ceiling) => !probe_overlaps(&spatial_query, origin, ceiling, &ground_filter),
            None => true,
        };

        contacts.0 = SensorReadings {
            grounded,
            ceiling_clear,
        };
    }
}

fn probe_overlaps(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    probe: &ProbeDef,
    filter: &SpatialQueryFilter,
) -> bool {
    let shape = Collider::circle(probe.radius);
    !spatial_query
        .shape_intersections(&shape, origin + probe.offset, 0.0, filter)
        .is_empty()
}
