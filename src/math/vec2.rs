use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Divides by the Euclidean norm. The caller must guarantee the vector
    /// has non-zero length.
    pub fn normalize(&self) -> Self {
        *self * (1.0 / self.magnitude())
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the 2D cross product (the signed area term `a.x*b.y - a.y*b.x`).
    ///
    /// The sign encodes which side of `self` the other vector lies on; the
    /// pipeline uses it for backface culling in screen space.
    pub fn cross(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates by `theta` radians, clockwise-positive:
    ///
    /// ```text
    /// x' =  x·cos θ + y·sin θ
    /// y' = -x·sin θ + y·cos θ
    /// ```
    ///
    /// Note the sign convention is the opposite of the usual counter-clockwise
    /// rotation. Callers relying on a visual rotation direction depend on it.
    pub fn rotate(&self, theta: f32) -> Self {
        let sin = theta.sin();
        let cos = theta.cos();
        Self {
            x: self.x * cos + self.y * sin,
            y: -self.x * sin + self.y * cos,
        }
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Negation of a vector.
impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
