//! Integration test modules.

mod lifecycle;
mod persistence;
