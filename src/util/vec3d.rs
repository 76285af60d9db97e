use num::{Float, Num};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Sub};

/// A 3D vector generic over any numeric type.
///
/// This struct represents a position or displacement in world space. Equality is an
/// exact component-wise comparison, which is what the recording buffer relies on to
/// drop stationary samples.
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Vec3D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
    /// The z-component of the vector.
    z: T,
}

impl<T: Copy> Vec3D<T> {
    /// Creates a new vector with the given components.
    ///
    /// # Arguments
    /// * `x` - The x-component of the vector.
    /// * `y` - The y-component of the vector.
    /// * `z` - The z-component of the vector.
    ///
    /// # Returns
    /// A new `Vec3D` object.
    pub const fn new(x: T, y: T, z: T) -> Self { Self { x, y, z } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }

    /// Returns the z-component of the vector.
    pub const fn z(&self) -> T { self.z }
}

impl<T: Num + Copy> Vec3D<T> {
    /// Creates a zero vector (x = 0, y = 0, z = 0).
    ///
    /// # Returns
    /// A zero-initialized `Vec3D` with member type `T`.
    pub fn zero() -> Self { Self::new(T::zero(), T::zero(), T::zero()) }

    /// Computes the dot product of the current vector with another vector.
    ///
    /// ```text
    /// dot_product = (x1 * x2) + (y1 * y2) + (z1 * z2)
    /// ```
    pub fn dot(self, other: Self) -> T { self.x * other.x + self.y * other.y + self.z * other.z }
}

impl<T: Float> Vec3D<T> {
    /// Computes the magnitude (absolute value) of the vector.
    pub fn abs(&self) -> T { self.dot(*self).sqrt() }

    /// Creates a vector pointing from the current vector (`self`) to another vector (`other`).
    ///
    /// # Arguments
    /// * `other` - The target vector.
    ///
    /// # Returns
    /// A new vector representing the direction from `self` to `other`.
    pub fn to(&self, other: &Self) -> Self { *other - *self }

    /// Normalizes the vector to have a magnitude of 1.
    /// If the magnitude is zero, the original vector is returned unmodified.
    pub fn normalize(self) -> Self {
        let magnitude = self.abs();
        if magnitude.is_zero() { self } else { self * (T::one() / magnitude) }
    }

    /// Computes the Euclidean distance between the current vector and another vector.
    ///
    /// # Arguments
    /// * `other` - The other vector to compute the distance to.
    ///
    /// # Returns
    /// The Euclidean distance as a scalar of type `T`.
    pub fn euclid_distance(&self, other: &Self) -> T { self.to(other).abs() }

    /// Moves from `self` towards `target` by at most `step`.
    ///
    /// # Returns
    /// The new position and whether `target` was reached.
    pub fn step_towards(&self, target: &Self, step: T) -> (Self, bool) {
        let dist = self.euclid_distance(target);
        if dist <= step {
            (*target, true)
        } else {
            (*self + self.to(target).normalize() * step, false)
        }
    }
}

impl<T: Num + Copy> Add for Vec3D<T> {
    type Output = Vec3D<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Vec3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Num + Copy> Sub for Vec3D<T> {
    type Output = Vec3D<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Num + Copy> Mul<T> for Vec3D<T> {
    type Output = Vec3D<T>;

    /// Implements the `*` operator for a `Vec3D` and a scalar.
    fn mul(self, rhs: T) -> Self::Output { Vec3D::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}

impl<T: Display> Display for Vec3D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
