//! Building the render modes of a map from its configuration.

use std::collections::HashMap;

use isomap_config::{Dimension, MapSection, OverlaySection, OverlayType, WorldSection};

use crate::error::OverlayError;
use crate::mode::{OverlayKind, OverlayRenderMode};
use crate::overlays::{BiomeOverlay, LightingOverlay, SlimeOverlay, SpawnOverlay};
use crate::tint::OverlayRenderer;

/// Builds the render mode for one overlay section of a map rendered at
/// `rotation`.
pub fn create_overlay(
    world: &WorldSection,
    map: &MapSection,
    section: &OverlaySection,
    rotation: u8,
) -> OverlayRenderMode {
    let kind = match section.overlay_type {
        OverlayType::Lighting => OverlayKind::Lighting(LightingOverlay::new(
            section.day,
            map.lighting_intensity,
            map.lighting_water_intensity,
            world.dimension == Dimension::End,
        )),
        OverlayType::Slime => {
            OverlayKind::Slime(SlimeOverlay::new(world.seed, rotation, section.opacity))
        }
        OverlayType::Spawn => OverlayKind::Spawn(SpawnOverlay::new(section.day, section.opacity)),
        OverlayType::Biome => {
            OverlayKind::Biome(BiomeOverlay::with_default_gradient(section.opacity))
        }
    };

    tracing::debug!(
        overlay = %section.id,
        kind = ?section.overlay_type,
        tint = ?section.tint,
        map = %map.name,
        rotation,
        "built overlay"
    );
    OverlayRenderMode::new(&section.id, &section.name, kind, OverlayRenderer::new(section.tint))
}

/// Builds the render modes of every overlay `map` lists, in the listed order.
///
/// Fails with [`OverlayError::UnknownOverlay`] on the first name without a
/// section in `sections`.
pub fn create_overlays(
    world: &WorldSection,
    map: &MapSection,
    sections: &HashMap<String, OverlaySection>,
    rotation: u8,
) -> Result<Vec<OverlayRenderMode>, OverlayError> {
    let modes = map
        .overlays
        .iter()
        .map(|name| {
            sections
                .get(name)
                .map(|section| create_overlay(world, map, section, rotation))
                .ok_or_else(|| OverlayError::UnknownOverlay { name: name.clone() })
        })
        .collect::<Result<Vec<_>, OverlayError>>()?;

    tracing::info!(
        map = %map.name,
        rotation,
        overlays = ?modes.iter().map(OverlayRenderMode::id).collect::<Vec<_>>(),
        "overlays ready"
    );
    Ok(modes)
}
