/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

impl SpringConfig {
    /// Default spring with slight overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
    };

    /// Spring tuned from a damping ratio and a response time.
    ///
    /// `damping_ratio` follows the usual convention: 1.0 is critically
    /// damped, below 1.0 overshoots. `response` is the characteristic
    /// period in seconds; smaller responds faster.
    pub fn with_damping_ratio(damping_ratio: f32, response: f32) -> Self {
        let mass = 1.0;
        let omega = 2.0 * std::f32::consts::PI / response.max(1e-3);
        let stiffness = omega * omega * mass;
        let damping = damping_ratio * 2.0 * (stiffness * mass).sqrt();
        Self {
            mass,
            stiffness,
            damping,
        }
    }
}

/// State for spring physics simulation, animating a normalized position
/// from 0.0 toward a fixed target of 1.0.
#[derive(Clone, Debug)]
pub struct SpringState {
    /// Current position (0.0 = start, 1.0 = target)
    pub position: f32,
    /// Current velocity in position units per second
    pub velocity: f32,
}

impl SpringState {
    pub fn new() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
        }
    }

    /// Step the simulation forward by `dt` seconds and return the new
    /// position (can overshoot 1.0). Integration is semi-implicit Euler;
    /// large timesteps are subdivided for numerical stability.
    pub fn step(&mut self, dt: f32, config: &SpringConfig) -> f32 {
        let mut remaining = dt.max(0.0);
        // ~240 Hz integration cap
        let max_dt = 1.0 / 240.0;

        while remaining > 1e-6 {
            let step = remaining.min(max_dt);
            remaining -= step;

            let displacement = self.position - 1.0;
            let spring_force = -config.stiffness * displacement;
            let damping_force = -config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;

            self.velocity += acceleration * step;
            self.position += self.velocity * step;
        }

        self.position
    }

    /// Whether the spring has settled near the target with near-zero
    /// velocity.
    #[cfg(test)]
    fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::new()
    }
}
