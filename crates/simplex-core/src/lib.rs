//! Deterministic simplex noise over fixed lookup tables.
//!
//! The free functions [`noise2d`], [`noise3d`] and [`noise4d`] are the whole
//! evaluation surface; they are pure and safe to call from any thread.
//! [`SimplexField`] and [`ScaledField`] wrap them as `noise::NoiseFn`
//! implementations for use with the `noise` crate.
//!
//! ```
//! use simplex_core::{noise2d, noise3d, noise4d};
//!
//! let v = noise2d(0.3, 0.7);
//! assert!((-1.0..=1.0).contains(&v));
//! assert_eq!(noise3d(0.0, 0.0, 0.0), 0.0);
//! // 4D is a stub.
//! assert_eq!(noise4d(1.0, 2.0, 3.0, 4.0), 0.0);
//! ```

pub mod error;
pub mod field;
pub mod lattice;
pub mod params;
pub mod simplex;
pub mod tables;

pub use error::NoiseError;
pub use field::{ScaledField, SimplexField};
pub use params::FieldParams;
pub use simplex::{noise2d, noise3d, noise4d, try_noise4d, Dimension};
