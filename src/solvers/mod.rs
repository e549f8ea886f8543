//! Fixed-step explicit integrators.
//!
//! Every method comes as an infallible entry point taking a plain
//! derivative closure, a `try_` twin whose closure returns `Result`, and
//! the single-step function both are built on.

mod runner;

pub mod euler;
pub mod heun;
pub mod method;
pub mod midpoint;
pub mod rk4;
pub mod verlet;

pub use euler::{euler, euler_step, try_euler};
pub use heun::{heun, heun_step, try_heun};
pub use method::{solve, try_solve, Method};
pub use midpoint::{midpoint, midpoint_step, try_midpoint};
pub use rk4::{rk4, rk4_increments, rk4_increments_step, rk4_step, try_rk4, try_rk4_increments};
pub use verlet::{try_verlet, verlet, verlet_step};
