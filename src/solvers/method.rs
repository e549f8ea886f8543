use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::runner::into_ok;
use super::{try_euler, try_heun, try_midpoint, try_rk4, try_rk4_increments};
use crate::config::StepConfig;
use crate::error::Error;
use crate::state::State;
use crate::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// First-order method catalogue
// ---------------------------------------------------------------------------

/// The first-order integrators, for picking a scheme at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Euler,
    Heun,
    Midpoint,
    /// RK4, slope form.
    RungeKutta4,
    /// RK4, increment form.
    RungeKutta4Increments,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Euler,
        Method::Heun,
        Method::Midpoint,
        Method::RungeKutta4,
        Method::RungeKutta4Increments,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Heun => "heun",
            Method::Midpoint => "midpoint",
            Method::RungeKutta4 => "rk4",
            Method::RungeKutta4Increments => "rk4-increments",
        }
    }

    /// Global order of accuracy.
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Heun | Method::Midpoint => 2,
            Method::RungeKutta4 | Method::RungeKutta4Increments => 4,
        }
    }

    /// Derivative evaluations per step.
    pub fn evaluations_per_step(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::Heun | Method::Midpoint => 2,
            Method::RungeKutta4 | Method::RungeKutta4Increments => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "heun" => Ok(Method::Heun),
            "midpoint" => Ok(Method::Midpoint),
            "rk4" | "runge-kutta-4" => Ok(Method::RungeKutta4),
            "rk4-increments" | "rk4_increments" => Ok(Method::RungeKutta4Increments),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run `method` over the grid described by `config`.
pub fn solve<S, F>(method: Method, mut f: F, y0: S, config: &StepConfig) -> Trajectory<S>
where
    S: State,
    F: FnMut(f64, &S) -> S,
{
    into_ok(try_solve(
        method,
        |t, y: &S| Ok::<S, Infallible>(f(t, y)),
        y0,
        config,
    ))
}

/// Fallible [`solve`].
pub fn try_solve<S, E, F>(
    method: Method,
    f: F,
    y0: S,
    config: &StepConfig,
) -> Result<Trajectory<S>, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    let StepConfig { t0, h, steps } = *config;
    match method {
        Method::Euler => try_euler(f, y0, t0, h, steps),
        Method::Heun => try_heun(f, y0, t0, h, steps),
        Method::Midpoint => try_midpoint(f, y0, t0, h, steps),
        Method::RungeKutta4 => try_rk4(f, y0, t0, h, steps),
        Method::RungeKutta4Increments => try_rk4_increments(f, y0, t0, h, steps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for m in Method::ALL {
            assert_eq!(m.name().parse::<Method>().unwrap(), m);
        }
        assert_eq!(" RK4 ".parse::<Method>().unwrap(), Method::RungeKutta4);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "leapfrog".parse::<Method>().unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(ref s) if s == "leapfrog"));
    }

    #[test]
    fn evaluation_count_matches_catalogue() {
        let config = StepConfig::new(0.0, 0.1, 5);
        for m in Method::ALL {
            let mut calls = 0;
            let traj = solve(
                m,
                |_, y: &f64| {
                    calls += 1;
                    -y
                },
                1.0,
                &config,
            );
            assert_eq!(traj.len(), 6);
            assert_eq!(calls, 5 * m.evaluations_per_step(), "{}", m);
        }
    }

    #[test]
    fn dispatch_matches_direct_call() {
        let config = StepConfig::new(0.0, 0.2, 10);
        let via_solve = solve(Method::Heun, |t, y: &f64| t - y, 0.5, &config);
        let direct = crate::solvers::heun(|t, y: &f64| t - y, 0.5, 0.0, 0.2, 10);
        assert_eq!(via_solve, direct);
    }
}
