//! Solar system body data — hand-tuned sizes, rates and radii.
//!
//! Speeds are radians per tick, not derived from real ephemerides: the
//! values are chosen so the inner planets visibly move while Neptune
//! creeps. Distances compress the real scale so Neptune fits on screen.

use orrery_engine::{BodyConfig, MeshColor};

/// Initial-phase / starfield scatter seed.
pub const DEFAULT_SEED: u64 = 42;

// ── Camera (matches the host orbit-control's rest pose) ─────────────

/// Rest pose: above and in front of the sun, roughly (0, 20, 35).
pub const CAMERA_ELEVATION: f32 = 0.5191;
pub const CAMERA_DISTANCE: f32 = 40.311;

// ── Decorative geometry ─────────────────────────────────────────────

/// Orbit-guide rings are hairline annuli at each orbital radius.
pub const GUIDE_RING_WIDTH: f32 = 0.02;
pub const GUIDE_RING_ALPHA: f32 = 0.3;
pub const SATURN_RING_ALPHA: f32 = 0.8;

// ── Starfield ───────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 5000;
/// Inner radius of the star shell, beyond Neptune's orbit.
pub const STARFIELD_RADIUS: f32 = 150.0;
/// Radial depth of the star shell.
pub const STARFIELD_DEPTH: f32 = 100.0;

const SUN_COLOR: MeshColor = MeshColor::new(0.992, 0.722, 0.075); // #FDB813
const MOON_COLOR: MeshColor = MeshColor::new(0.7, 0.7, 0.7);

/// The nine top-level bodies: one star, eight planets, with the Moon
/// nested under Earth.
pub fn solar_registry() -> Vec<BodyConfig> {
    vec![
        BodyConfig::new("sun", "The Sun", 3.0)
            .with_description("The star at the center of our Solar System")
            .with_facts([
                "Surface Temperature: 5,500°C",
                "Age: 4.6 billion years",
                "Type: Yellow Dwarf Star",
                "Mass: 333,000 x Earth",
            ])
            .with_spin_rate(0.002)
            .with_color(SUN_COLOR)
            .with_emissive(2.0)
            .with_texture("/textures/sun_map.jpg"),
        BodyConfig::new("mercury", "Mercury", 0.4)
            .with_description("The smallest and innermost planet in the Solar System")
            .with_facts([
                "Distance from Sun: 57.9 million km",
                "Surface Temperature: -180°C to 430°C",
                "Day length: 176 Earth days",
            ])
            .with_spin_rate(0.01)
            .with_orbit(0.004, 4.0)
            .with_color(MeshColor::new(0.627, 0.322, 0.176)) // #A0522D
            .with_orbit_color(MeshColor::new(0.627, 0.322, 0.176))
            .with_texture("/textures/mercury_map.jpg"),
        BodyConfig::new("venus", "Venus", 0.9)
            .with_description(
                "The second planet from the Sun and Earth's closest planetary neighbor",
            )
            .with_facts([
                "Surface Temperature: 462°C",
                "Similar in size to Earth",
                "Rotates backwards compared to most planets",
            ])
            .with_spin_rate(0.008)
            .with_orbit(0.0035, 7.0)
            .with_color(MeshColor::new(0.871, 0.722, 0.529)) // #DEB887
            .with_orbit_color(MeshColor::new(0.871, 0.722, 0.529))
            .with_texture("/textures/venus_map.jpg"),
        BodyConfig::new("earth", "Earth", 1.0)
            .with_description("Our home planet and the only known planet with life")
            .with_facts([
                "Average Temperature: 15°C",
                "Only planet with liquid water on surface",
                "Has one natural satellite: the Moon",
            ])
            .with_spin_rate(0.02)
            .with_orbit(0.003, 10.0)
            .with_color(MeshColor::new(0.255, 0.412, 0.882)) // #4169E1
            .with_orbit_color(MeshColor::new(0.255, 0.412, 0.882))
            .with_texture("/textures/earth_daymap.jpg")
            .with_child(
                BodyConfig::new("moon", "The Moon", 0.3)
                    .with_description("Earth's only natural satellite")
                    .with_anchor(glam::Vec3::new(2.0, 0.0, 0.0), 5.0f32.to_radians())
                    .with_color(MOON_COLOR)
                    .with_texture("/textures/moon_map.jpg"),
            ),
        BodyConfig::new("mars", "Mars", 0.5)
            .with_description("The fourth planet from the Sun, known as the Red Planet")
            .with_facts([
                "Surface Temperature: -63°C",
                "Has the largest volcano in the solar system",
                "Two small moons: Phobos and Deimos",
            ])
            .with_spin_rate(0.018)
            .with_orbit(0.0024, 13.0)
            .with_color(MeshColor::new(0.804, 0.361, 0.361)) // #CD5C5C
            .with_orbit_color(MeshColor::new(0.804, 0.361, 0.361))
            .with_texture("/textures/mars_map.jpg"),
        BodyConfig::new("jupiter", "Jupiter", 2.0)
            .with_description("The largest planet in our Solar System")
            .with_facts([
                "Great Red Spot is a giant storm",
                "Has at least 79 moons",
                "Mass is more than twice that of all other planets combined",
            ])
            .with_spin_rate(0.04)
            .with_orbit(0.0013, 17.0)
            .with_color(MeshColor::new(0.855, 0.647, 0.125)) // #DAA520
            .with_orbit_color(MeshColor::new(0.855, 0.647, 0.125))
            .with_texture("/textures/jupiter_map.jpg"),
        BodyConfig::new("saturn", "Saturn", 1.8)
            .with_description("The sixth planet from the Sun, famous for its rings")
            .with_facts([
                "Rings are made mostly of ice and rock",
                "Has 82 confirmed moons",
                "Would float in a giant bathtub (less dense than water)",
            ])
            .with_spin_rate(0.038)
            .with_orbit(0.000969, 22.0)
            .with_color(MeshColor::new(0.957, 0.643, 0.376)) // #F4A460
            .with_orbit_color(MeshColor::new(0.957, 0.643, 0.376))
            .with_texture("/textures/saturn_map.jpg")
            .with_ring(2.2, 3.5)
            .with_ring_texture("/textures/saturn_rings.jpg"),
        BodyConfig::new("uranus", "Uranus", 1.2)
            .with_description("The seventh planet from the Sun")
            .with_facts([
                "Rotates on its side",
                "Has 27 known moons",
                "The coldest planetary atmosphere in the Solar System",
            ])
            .with_spin_rate(0.03)
            .with_orbit(0.000681, 26.0)
            .with_color(MeshColor::new(0.529, 0.808, 0.922)) // #87CEEB
            .with_orbit_color(MeshColor::new(0.529, 0.808, 0.922))
            .with_texture("/textures/uranus_map.jpg"),
        BodyConfig::new("neptune", "Neptune", 1.2)
            .with_description("The eighth and most distant planet from the Sun")
            .with_facts([
                "The windiest planet",
                "Has 14 known moons",
                "Takes 165 Earth years to orbit the Sun",
            ])
            .with_spin_rate(0.032)
            .with_orbit(0.000543, 30.0)
            .with_color(MeshColor::new(0.118, 0.565, 1.0)) // #1E90FF
            .with_orbit_color(MeshColor::new(0.118, 0.565, 1.0))
            .with_texture("/textures/neptune_map.jpg"),
    ]
}
