//! Thermal systems models.

pub mod fin;
