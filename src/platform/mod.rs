//! Platform abstraction layer
//!
//! The host-facing boundary around the sim:
//! - `time`: monotonic frame timestamps for the scheduler
//! - `input`: raw key edges in, polled logical input out

pub mod input;
pub mod time;

pub use input::{Held, InputSource, KeyCode, KeyboardState};
pub use time::{Clock, ManualClock, SystemClock};
