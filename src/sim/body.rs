//! Shared position/extent capability and axis-aligned bounds

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of the given size centered on `center`
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Overlap test. Edges are inclusive: boxes that only touch overlap.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Anything with a center and extents that takes part in collisions
pub trait Body {
    fn pos(&self) -> Vec2;
    fn size(&self) -> Vec2;

    fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos(), self.size())
    }

    fn overlaps(&self, other: &impl Body) -> bool
    where
        Self: Sized,
    {
        self.aabb().intersects(&other.aabb())
    }
}
