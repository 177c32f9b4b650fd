//! Polygon entities: asteroids and bullets.
//!
//! A [`Shape`] owns its vertices in screen space together with a cached
//! centroid.  The centroid is the shape's logical position: physics moves it,
//! and [`Shape::translate_to`] drags every vertex along so the polygon stays
//! rigid and the cache stays equal to the vertex mean.

use crate::error::{GameError, GameResult};
use crate::geometry::{self, point_in_polygon};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

/// What a shape is used as.  Both kinds share the same polygon machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Asteroid,
    Bullet,
}

/// A moving closed polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: Vec<Vec2>,
    centroid: Vec2,
    /// Pixels per second; constant between frames.
    pub velocity: Vec2,
    pub kind: ShapeKind,
}

impl Shape {
    /// Generate a lumpy regular-ish polygon around `position`.
    ///
    /// Vertices are evenly spaced in angle, each at an independent random
    /// radius in `[min_radius, max_radius]`.  The centroid is recomputed from
    /// the result, so it usually sits slightly off `position`.  The shape
    /// starts at rest.
    pub fn random(
        rng: &mut impl Rng,
        position: Vec2,
        vertex_count: usize,
        min_radius: f32,
        max_radius: f32,
        kind: ShapeKind,
    ) -> Self {
        let step = TAU / vertex_count as f32;
        let vertices: Vec<Vec2> = (0..vertex_count)
            .map(|i| {
                let radius = rng.gen_range(min_radius..=max_radius);
                position + Vec2::from_angle(i as f32 * step) * radius
            })
            .collect();
        let centroid = geometry::centroid(&vertices).unwrap_or(position);
        Self {
            vertices,
            centroid,
            velocity: Vec2::ZERO,
            kind,
        }
    }

    /// Regular polygon with every vertex exactly `radius` from `center`.
    pub fn regular(center: Vec2, vertex_count: usize, radius: f32, kind: ShapeKind) -> GameResult<Self> {
        let step = TAU / vertex_count.max(1) as f32;
        let vertices = (0..vertex_count)
            .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
            .collect();
        Self::from_vertices(vertices, kind)
    }

    /// Build a shape from explicit vertices (at rest).
    pub fn from_vertices(vertices: Vec<Vec2>, kind: ShapeKind) -> GameResult<Self> {
        if vertices.len() < 3 {
            return Err(GameError::InsufficientVertices {
                got: vertices.len(),
                required: 3,
            });
        }
        let centroid = geometry::centroid(&vertices).unwrap_or(Vec2::ZERO);
        Ok(Self {
            vertices,
            centroid,
            velocity: Vec2::ZERO,
            kind,
        })
    }

    /// Builder-style velocity setter.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Move the shape rigidly so its centroid lands on `new_centroid`.
    ///
    /// This is the only way a shape moves.
    pub fn translate_to(&mut self, new_centroid: Vec2) {
        let delta = new_centroid - self.centroid;
        for v in &mut self.vertices {
            *v += delta;
        }
        self.centroid = new_centroid;
    }

    /// Advance by `velocity * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.translate_to(self.centroid + self.velocity * dt);
    }

    /// Release the vertex buffer and zero every field.
    pub fn destroy(&mut self) {
        self.vertices = Vec::new();
        self.centroid = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
    }

    pub fn is_destroyed(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Point-in-polygon test against this shape's outline.
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// True if any of `points` lies inside this shape.
    pub fn contains_any(&self, points: &[Vec2]) -> bool {
        points.iter().any(|&p| self.contains(p))
    }

    /// Closed outline as consecutive edge pairs, last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mean(shape: &Shape) -> Vec2 {
        shape.vertices().iter().copied().sum::<Vec2>() / shape.vertex_count() as f32
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "expected {b:?}, got {a:?}");
    }

    // ── generation ────────────────────────────────────────────────────────────

    #[test]
    fn random_shape_respects_vertex_count_and_radii() {
        let mut rng = StdRng::seed_from_u64(7);
        let origin = Vec2::new(400.0, 300.0);
        for n in 3..=15 {
            let shape = Shape::random(&mut rng, origin, n, 50.0, 100.0, ShapeKind::Asteroid);
            assert_eq!(shape.vertex_count(), n);
            for v in shape.vertices() {
                let r = v.distance(origin);
                assert!((50.0 - 1e-3..=100.0 + 1e-3).contains(&r), "radius {r} out of range");
            }
        }
    }

    #[test]
    fn random_shape_caches_vertex_mean() {
        let mut rng = StdRng::seed_from_u64(99);
        let shape = Shape::random(&mut rng, Vec2::new(10.0, 20.0), 9, 3.0, 5.0, ShapeKind::Bullet);
        assert_close(shape.centroid(), mean(&shape));
        assert_eq!(shape.velocity, Vec2::ZERO);
        assert_eq!(shape.kind, ShapeKind::Bullet);
    }

    #[test]
    fn too_few_vertices_is_an_error() {
        let err = Shape::from_vertices(vec![Vec2::ZERO, Vec2::X], ShapeKind::Asteroid).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientVertices { got: 2, required: 3 }
        ));
    }

    // ── movement ──────────────────────────────────────────────────────────────

    #[test]
    fn translate_to_lands_exactly_and_stays_rigid() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut shape = Shape::random(&mut rng, Vec2::new(200.0, 200.0), 7, 50.0, 100.0, ShapeKind::Asteroid);
        let offsets: Vec<Vec2> = shape.vertices().iter().map(|&v| v - shape.centroid()).collect();

        let target = Vec2::new(-31.5, 812.25);
        shape.translate_to(target);

        assert_eq!(shape.centroid(), target);
        for (v, offset) in shape.vertices().iter().zip(&offsets) {
            assert_close(*v - target, *offset);
        }
        assert_close(mean(&shape), target);
    }

    #[test]
    fn integrate_moves_by_velocity_times_dt() {
        let mut shape = Shape::regular(Vec2::new(100.0, 100.0), 4, 5.0, ShapeKind::Bullet)
            .unwrap()
            .with_velocity(Vec2::new(60.0, -120.0));
        let start = shape.centroid();
        for _ in 0..60 {
            shape.integrate(1.0 / 60.0);
        }
        assert_close(shape.centroid(), start + Vec2::new(60.0, -120.0));
        assert_close(mean(&shape), shape.centroid());
    }

    #[test]
    fn destroy_releases_and_zeroes() {
        let mut shape = Shape::regular(Vec2::new(5.0, 5.0), 6, 2.0, ShapeKind::Asteroid)
            .unwrap()
            .with_velocity(Vec2::ONE);
        shape.destroy();
        assert!(shape.is_destroyed());
        assert_eq!(shape.vertex_count(), 0);
        assert_eq!(shape.centroid(), Vec2::ZERO);
        assert_eq!(shape.velocity, Vec2::ZERO);
        assert!(!shape.contains(Vec2::ZERO), "a destroyed shape contains nothing");
    }

    // ── containment ───────────────────────────────────────────────────────────

    #[test]
    fn generated_polygons_contain_their_centroid() {
        let mut rng = StdRng::seed_from_u64(2024);
        for n in 3..=15 {
            let shape = Shape::random(&mut rng, Vec2::new(500.0, 500.0), n, 50.0, 100.0, ShapeKind::Asteroid);
            assert!(shape.contains(shape.centroid()), "{n}-gon misses its centroid");
            assert!(!shape.contains(Vec2::new(5000.0, 5000.0)));
        }
    }

    #[test]
    fn edges_close_the_outline() {
        let shape = Shape::regular(Vec2::ZERO, 5, 1.0, ShapeKind::Asteroid).unwrap();
        let edges: Vec<_> = shape.edges().collect();
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[4].1, shape.vertices()[0]);
    }
}
