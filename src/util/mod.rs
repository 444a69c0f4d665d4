//! A set of utility functions shared across the crate.
