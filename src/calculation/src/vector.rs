//! 3D vector operations and the disc body frame.
//!
//! Ground frame: x points down the fairway (distance), y to the left (drift),
//! z up (height). The disc frame is spanned by the nose axis, the lateral axis
//! and the disc normal, built from roll, pitch and yaw.

/// 3D vector with the handful of operations the flight model needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector.
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Magnitude (length) of the vector.
    #[inline(always)]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalized vector (unit length).
    pub fn normalized(&self) -> Option<Self> {
        let mag = self.magnitude();
        if mag < 1e-12 {
            None
        } else {
            let inv = 1.0 / mag;
            Some(Self::new(self.x * inv, self.y * inv, self.z * inv))
        }
    }

    /// Dot product.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product: self × other
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Element-wise addition.
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Element-wise subtraction.
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scalar multiplication.
    #[inline(always)]
    pub fn mul(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Convert from array.
    pub fn from_array(arr: &[f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// Orthonormal disc axes expressed in the ground frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscFrame {
    /// Nose direction, in the disc plane.
    pub nose: Vec3,
    /// Lateral direction, in the disc plane.
    pub lateral: Vec3,
    /// Disc normal (spin axis), pointing up for a flat disc.
    pub normal: Vec3,
}

impl DiscFrame {
    /// Builds the disc axes from attitude angles in radians.
    ///
    /// Yaw turns the nose about the vertical, pitch raises it, and roll then
    /// rotates the disc about the nose axis. Positive roll dips the left edge
    /// of the lateral axis towards the ground on the +y side.
    pub fn from_attitude(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let (sr, cr) = roll.sin_cos();

        let nose = Vec3::new(cp * cy, cp * sy, sp);
        let lateral0 = Vec3::new(-sy, cy, 0.0);
        let normal0 = nose.cross(&lateral0);

        Self {
            nose,
            lateral: lateral0.mul(cr).add(&normal0.mul(sr)),
            normal: normal0.mul(cr).sub(&lateral0.mul(sr)),
        }
    }

    /// Expresses a ground-frame vector in disc coordinates (u, v, w).
    pub fn to_body(&self, v: &Vec3) -> Vec3 {
        Vec3::new(v.dot(&self.nose), v.dot(&self.lateral), v.dot(&self.normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(Vec3::new(3.0, 4.0, 12.0).magnitude(), 13.0);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        let normalized = v.normalized().unwrap();
        assert_relative_eq!(normalized.magnitude(), 1.0);
        assert_relative_eq!(normalized.x, 0.6);
        assert_relative_eq!(normalized.y, 0.8);
        assert!(Vec3::zero().normalized().is_none());
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(a.cross(&b), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_flat_frame_matches_ground() {
        let frame = DiscFrame::from_attitude(0.0, 0.0, 0.0);
        assert_relative_eq!(frame.nose.x, 1.0);
        assert_relative_eq!(frame.lateral.y, 1.0);
        assert_relative_eq!(frame.normal.z, 1.0);
    }

    #[test]
    fn test_frame_is_orthonormal() {
        let frame = DiscFrame::from_attitude(0.4, 0.2, -0.3);
        assert_relative_eq!(frame.nose.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.lateral.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.normal.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.nose.dot(&frame.lateral), 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.nose.dot(&frame.normal), 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.lateral.dot(&frame.normal), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pitched_frame_tilts_normal_back() {
        let frame = DiscFrame::from_attitude(0.0, 0.1, 0.0);
        // Nose up means the normal leans towards -x.
        assert!(frame.normal.x < 0.0);
        let body = frame.to_body(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(body.x, 0.1_f64.cos(), epsilon = 1e-12);
        assert_relative_eq!(body.z, -(0.1_f64.sin()), epsilon = 1e-12);
    }
}
