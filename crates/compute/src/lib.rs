//! Core of the long computation demo: the brute-force cube, input validation,
//! display strings, and the dispatcher that runs the cube on or off the UI thread.

pub mod controller;
pub mod cube;
pub mod input;
pub mod messages;
pub mod stopwatch;
pub mod worker;

pub use controller::{Controller, Phase, RunOutcome};
pub use cube::cube_brute_force;
pub use input::{parse_input, InputError, InputStyle};
pub use messages::{Language, Messages, Variant};
pub use stopwatch::Stopwatch;
pub use worker::{spawn_cube_worker, Completion};
