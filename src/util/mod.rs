mod keychain;
mod vec3d;


pub use keychain::Keychain;
pub use vec3d::Vec3D;

/// A world-space position as reported by the vehicle actuator.
pub type Point = Vec3D<f64>;
