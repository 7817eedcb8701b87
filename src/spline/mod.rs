// common helpers
pub mod errors;
pub mod traits;

// construction pipeline: secants, then tangents, then the spline itself
pub mod secant;
pub mod tangent;
pub mod hermite;
pub mod monotone;
