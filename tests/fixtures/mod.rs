//! Test Fixtures Module
//!
//! Raw classifier responses in the shapes language models actually return
//! them: fenced code blocks, bare objects with chatter around them, trailing
//! commas, and broken payloads.

// Allow dead code in test fixtures - not every test binary uses every fixture
#![allow(dead_code)]

pub mod responses;

pub use responses::*;
