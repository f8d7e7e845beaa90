use crate::domain::particle::Drawable;

use super::RenderBuffers;

/// Floats per drawable in the packed buffer:
/// `x, y, radius, r, g, b, a, glow, kind`
pub const DRAWABLE_STRIDE: usize = 9;

pub(super) fn pack_drawables(render: &mut RenderBuffers) -> &[f32] {
    let needed = render.drawables.len() * DRAWABLE_STRIDE;
    render.packed.clear();
    render.packed.reserve(needed);

    for d in render.drawables.iter() {
        render.packed.extend_from_slice(&pack_one(d));
    }

    &render.packed
}

#[inline]
fn pack_one(d: &Drawable) -> [f32; DRAWABLE_STRIDE] {
    [
        d.x as f32,
        d.y as f32,
        d.radius as f32,
        d.color.r as f32,
        d.color.g as f32,
        d.color.b as f32,
        d.color.a as f32,
        d.glow as f32,
        d.kind as f32,
    ]
}
