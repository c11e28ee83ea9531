//! Shared test helpers.

// Not every test binary uses every helper.
#![allow(dead_code)]

pub mod mocks;
