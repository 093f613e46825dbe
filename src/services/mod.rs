//! Business logic layer
//!
//! Pure computations over the expense models.

pub mod aggregate;

pub use aggregate::aggregate;
