//! Test utilities for Marquee entity tests.
//!
//! This module provides mock implementations of the generative backend, the
//! generation steps, the research source and state observers.

#![allow(dead_code)]

pub mod mock_driver;
pub mod stubs;

#[allow(unused_imports)]
pub use mock_driver::MockDriver;
#[allow(unused_imports)]
pub use stubs::{RecordingObserver, ScriptedGatherer, ScriptedGenerator, StubResearch};
