//! # Twine Fin
//!
//! Steady-state heat conduction along a fin, with synthetic measurements, for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A fin of rectangular, cylindrical or conical cross-section is described by
//! its geometry, material and boundary conditions. The model returns the
//! closed-form temperature profile, the exact temperature at a probe position,
//! and a repeatable noisy "measured" value of it for lab exercises.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Features
//!
//! - `serde`: Derives `Serialize`/`Deserialize` for inputs and results.

pub mod models;
pub mod support;
