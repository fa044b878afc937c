// Visible playfield extent at the ship's plane.

/// Perspective camera the renderer uses; the simulation only needs its frustum slice.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Camera distance from the ship plane (z = 0).
    pub distance: f32,
    /// Width over height.
    pub aspect: f32,
}

impl Viewport {
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    pub fn height(&self) -> f32 {
        2.0 * (self.fov_deg.to_radians() / 2.0).tan() * self.distance
    }

    pub fn width(&self) -> f32 {
        self.height() * self.aspect
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            distance: 15.0,
            aspect: 16.0 / 9.0,
        }
    }
}
