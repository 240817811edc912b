//! Damped-spring overscroll physics for pull-to-refresh interactions.
//!
//! `overscroll` simulates dragging past a scroll boundary: a 1D
//! damped-spring model tracks a displacement that settles, flings, or pins
//! to a target depending on user input and elapsed time. A frame driver
//! steps the simulation once per tick and paints the offset; a gesture
//! layer feeds in drags, releases, and targets.
//!
//! # Features
//!
//! - **Fixed-timestep spring**: Spring/friction/damping integration with
//!   exact snap-to-target termination
//! - **Fling ramp-in**: Spring force grows over the first half second of a
//!   fling so a release doesn't snap instantly
//! - **Overscroll friction**: Saturating resistance curve for the rendered
//!   offset, bounded by the viewport extent
//! - **Pull-to-refresh controller**: Neutral/pulled/loading gesture state
//!   machine over the simulator
//! - **Observable**: Monitor steps and settling via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

pub mod config;
pub mod error;
pub mod float;
pub mod gesture;
pub mod observer;
pub mod simulator;

// Re-export primary API
pub use config::OverscrollConfig;
pub use error::OverscrollError;
pub use float::Float;
pub use gesture::{PullConfig, PullPhase, PullToRefresh};
pub use observer::{NoOpStepObserver, StepObserver};
pub use simulator::Overscroll;
