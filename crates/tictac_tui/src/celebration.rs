//! Confetti shown when a game is won. Cosmetic only.

use std::time::Duration;

use rand::Rng;
use ratatui::style::Color;

/// How long the confetti stays on screen.
pub const CELEBRATION_LENGTH: Duration = Duration::from_millis(2000);

const PARTICLES: usize = 80;
const GLYPHS: [char; 6] = ['*', '+', '•', '✦', 'o', '·'];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// One falling piece of confetti, positioned in unit coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    x: f32,
    y: f32,
    drift: f32,
    fall: f32,
    glyph: char,
    color: Color,
}

impl Particle {
    /// Position after `t` seconds as fractions of the drawing area, or
    /// `None` once it has fallen out of view.
    pub fn position_at(&self, t: f32) -> Option<(f32, f32)> {
        let x = (self.x + self.drift * t).rem_euclid(1.0);
        let y = self.y + self.fall * t;
        (0.0..1.0).contains(&y).then_some((x, y))
    }

    /// Character drawn for this particle.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Foreground colour.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A running confetti burst.
#[derive(Debug, Clone)]
pub struct Celebration {
    particles: Vec<Particle>,
    elapsed: Duration,
}

impl Celebration {
    /// Starts a burst with freshly scattered particles.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..PARTICLES)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(-0.6..0.2),
                drift: rng.random_range(-0.15..0.15),
                fall: rng.random_range(0.35..0.9),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();
        Self {
            particles,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the animation clock.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// True once the burst has run its course.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= CELEBRATION_LENGTH
    }

    /// Seconds since the burst started.
    pub fn seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// All particles, visible or not.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
