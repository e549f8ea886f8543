//! Fixed-step explicit integrators for `y' = f(t, y)` and `y'' = a(t, y, v)`.
//!
//! Euler, Heun, Midpoint, two forms of classical RK4, and Verlet, generic
//! over any [`State`]: `f64`, `[f64; N]`, `Vec<f64>` or a nalgebra vector.
//!
//! ```
//! use odestep::solvers::{euler, rk4};
//!
//! let traj = euler(|_, y: &f64| *y, 1.0, 0.0, 0.1, 1);
//! assert_eq!(traj.states, vec![1.0, 1.1]);
//!
//! let traj = rk4(|_, y: &f64| *y, 1.0, 0.0, 0.1, 1);
//! assert!((traj.states[1] - 0.1_f64.exp()).abs() < 1e-6);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod solvers;
pub mod state;
pub mod trajectory;

pub use config::StepConfig;
pub use error::{Error, Result};
pub use solvers::Method;
pub use state::State;
pub use trajectory::{SecondOrderTrajectory, Trajectory};
