//! Read-only per-tick view handed to the render layer
//!
//! The engine never formats colors or draws anything; it exposes positions,
//! radii, an opaque color handle and the tapered trail segments.

use serde::Deserialize;

use super::body::{Body, BodyId, BodyKind};
use super::trail::{TrailParams, TrailSegments};
use super::vector::NVec3;

/// Opaque RGB color attached to a body at creation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorHandle(pub [u8; 3]);

impl ColorHandle {
    pub const PLANET: ColorHandle = ColorHandle([80, 80, 255]);
    pub const STAR: ColorHandle = ColorHandle([255, 255, 230]);
}

/// What the render layer needs to draw one body
#[derive(Debug, Clone)]
pub struct BodySnapshot<'a> {
    pub id: BodyId,
    pub position: NVec3,
    pub radius: f64,
    pub color: ColorHandle,
    pub kind: BodyKind,
    pub trail: Option<TrailSegments<'a>>, // None when the body shows no trail this tick
}

impl<'a> BodySnapshot<'a> {
    pub fn of(body: &'a Body, trail_params: &TrailParams) -> Self {
        let trail = body
            .trail_visible(trail_params)
            .then(|| body.trail().render_sequence(body.position));

        Self {
            id: body.id(),
            position: body.position,
            radius: body.radius(),
            color: body.color(),
            kind: body.kind(),
            trail,
        }
    }
}
