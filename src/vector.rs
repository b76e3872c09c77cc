use crate::{Result, VectorError};
use ndarray::Array1;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// An immutable n-dimensional Euclidean vector (dimension >= 1).
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub const DEFAULT_TOLERANCE: f64 = 1e-10;

    pub fn new(coordinates: Vec<f64>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self {
            data: Array1::from_vec(coordinates),
        })
    }

    pub fn zeros(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self {
            data: Array1::zeros(dimension),
        })
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn coordinates(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    fn require_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(())
    }

    /// Coordinate-wise sum. Fails when dimensions differ.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.require_same_dimension(other)?;
        Ok(Vector {
            data: &self.data + &other.data,
        })
    }

    /// Coordinate-wise difference (self - other). Fails when dimensions differ.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.require_same_dimension(other)?;
        Ok(Vector {
            data: &self.data - &other.data,
        })
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Vector {
            data: &self.data * factor,
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    /// Unit vector with the same direction. Fails with `ZeroMagnitude`
    /// when the magnitude is exactly zero.
    pub fn normalize(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        Ok(self.scale(1.0 / magnitude))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.require_same_dimension(other)?;
        Ok(self.data.dot(&other.data))
    }

    /// Angle between two vectors in radians, in [0, pi]. The cosine is
    /// clamped to [-1, 1] so floating-point noise cannot push it outside
    /// the arccosine domain. Fails with `UndefinedAngle` when either
    /// vector has zero magnitude.
    pub fn angle_radians(&self, other: &Vector) -> Result<f64> {
        self.require_same_dimension(other)?;
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return Err(VectorError::UndefinedAngle);
        }
        let cosine = (self.data.dot(&other.data) / denominator).clamp(-1.0, 1.0);
        Ok(cosine.acos())
    }

    /// Angle between two vectors in degrees, in [0, 180].
    pub fn angle_degrees(&self, other: &Vector) -> Result<f64> {
        Ok(self.angle_radians(other)?.to_degrees())
    }

    /// Cross product, defined for 3-dimensional vectors only. Fails with
    /// `DimensionMismatch` naming the offending operand's dimension.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        for operand in [self, other] {
            if operand.dimension() != 3 {
                return Err(VectorError::DimensionMismatch {
                    expected: 3,
                    actual: operand.dimension(),
                });
            }
        }
        let (ax, ay, az) = (self.data[0], self.data[1], self.data[2]);
        let (bx, by, bz) = (other.data[0], other.data[1], other.data[2]);
        Ok(Vector {
            data: Array1::from_vec(vec![
                ay * bz - az * by,
                az * bx - ax * bz,
                ax * by - ay * bx,
            ]),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(Self::DEFAULT_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_within(other, Self::DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// True when either vector is zero, or both point in the same or
    /// opposite direction (0 and 180 degrees both count as parallel).
    pub fn is_parallel(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_within(other, Self::DEFAULT_TOLERANCE)
    }

    pub fn is_parallel_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        self.require_same_dimension(other)?;
        if self.is_zero_within(tolerance) || other.is_zero_within(tolerance) {
            return Ok(true);
        }
        // Compare the cosine against 1 instead of the arccosine against
        // 0/180: acos amplifies rounding error without bound near +/-1.
        let cosine = self.data.dot(&other.data) / (self.magnitude() * other.magnitude());
        Ok(cosine.abs() >= 1.0 - tolerance)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::new(coordinates)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (idx, coordinate) in self.data.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, ")")
    }
}

// Operator forms panic on dimension mismatch; the named methods are
// the checked path.
impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        assert_eq!(
            self.dimension(),
            rhs.dimension(),
            "Vector addition requires equal dimensions"
        );
        Vector {
            data: &self.data + &rhs.data,
        }
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        assert_eq!(
            self.dimension(),
            rhs.dimension(),
            "Vector subtraction requires equal dimensions"
        );
        Vector {
            data: &self.data - &rhs.data,
        }
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}
