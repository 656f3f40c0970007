//! Collision detection between the bird and pipe groups

use super::pipes::PipeGroup;
use super::rect::Rect;

/// Check whether two rectangles overlap (symmetric)
#[inline]
pub fn rects_collide(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Check the bird against every present pipe in every group
pub fn bird_hits_pipes(bird: &Rect, groups: &[PipeGroup]) -> bool {
    groups
        .iter()
        .flat_map(|group| group.rects())
        .any(|(_, pipe)| rects_collide(bird, pipe))
}
