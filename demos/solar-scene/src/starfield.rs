//! Decorative starfield — a deterministic scatter over a spherical
//! shell well outside the outermost orbit. Generated once at init,
//! never animated.

use orrery_engine::{Rng, StarVertex};

use crate::bodies::{STARFIELD_DEPTH, STARFIELD_RADIUS, STAR_COUNT};

pub fn scatter(rng: &mut Rng) -> Vec<StarVertex> {
    let mut stars = Vec::with_capacity(STAR_COUNT);
    for _ in 0..STAR_COUNT {
        // Uniform direction: y uniform in [-1, 1), azimuth uniform.
        let y = rng.next_range(-1.0, 1.0);
        let azimuth = rng.next_angle();
        let ring = (1.0 - y * y).max(0.0).sqrt();
        let radius = rng.next_range(STARFIELD_RADIUS, STARFIELD_RADIUS + STARFIELD_DEPTH);

        stars.push(StarVertex {
            x: ring * azimuth.cos() * radius,
            y: y * radius,
            z: ring * azimuth.sin() * radius,
            brightness: rng.next_range(0.4, 1.0),
        });
    }
    stars
}
