//! 3D vector type and the helper operations the engine needs on top of nalgebra
//!
//! `add`, `sub`, `scale` and `magnitude` come straight from nalgebra;
//! `VectorExt` adds distance, magnitude clamping and fallible normalization

use nalgebra::Vector3;
use thiserror::Error;

pub type NVec3 = Vector3<f64>;

/// Normalizing a vector with zero (or non-finite) length
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("cannot normalize a vector of magnitude {magnitude}")]
pub struct DegenerateVectorError {
    pub magnitude: f64,
}

pub trait VectorExt: Sized {
    /// `|self - other|`
    fn distance(&self, other: &Self) -> f64;

    /// Clamp the magnitude to `max`, keeping the direction
    fn limit(&self, max: f64) -> Self;

    fn try_unit(&self) -> Result<Self, DegenerateVectorError>;

    fn unit_or_zero(&self) -> Self;
}

impl VectorExt for NVec3 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).norm()
    }

    fn limit(&self, max: f64) -> Self {
        let mag2 = self.norm_squared();
        if mag2 > max * max {
            // mag2 > 0 here since max * max >= 0
            self * (max / mag2.sqrt())
        } else {
            *self
        }
    }

    fn try_unit(&self) -> Result<Self, DegenerateVectorError> {
        let magnitude = self.norm();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(DegenerateVectorError { magnitude });
        }
        Ok(self / magnitude)
    }

    fn unit_or_zero(&self) -> Self {
        self.try_unit().unwrap_or_else(|_| NVec3::zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_keeps_direction() {
        let v = NVec3::new(3.0, 4.0, 0.0);
        let l = v.limit(1.0);
        assert!((l.magnitude() - 1.0).abs() < 1e-12);
        assert!((l.x - 0.6).abs() < 1e-12);
        assert!((l.y - 0.8).abs() < 1e-12);

        // already within bound
        assert_eq!(v.limit(10.0), v);
    }

    #[test]
    fn zero_vector_is_degenerate() {
        assert!(NVec3::zeros().try_unit().is_err());
        assert_eq!(NVec3::zeros().unit_or_zero(), NVec3::zeros());
        assert_eq!(NVec3::new(0.0, 2.0, 0.0).try_unit(), Ok(NVec3::y()));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = NVec3::new(-10.0, 0.0, 0.0);
        let b = NVec3::new(10.0, 0.0, 0.0);
        assert_eq!(a.distance(&b), 20.0);
        assert_eq!(b.distance(&a), 20.0);
    }
}
