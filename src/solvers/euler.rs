use std::convert::Infallible;

use super::runner::{into_ok, march};
use crate::state::State;
use crate::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Forward Euler
// ---------------------------------------------------------------------------

/// Single Euler step: `y + h·f(t, y)`.
pub fn euler_step<S, E, F>(f: &mut F, t: f64, y: &S, h: f64) -> Result<S, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    let dy = f(t, y)?;
    Ok(y.add(&dy.scale(h)))
}

/// Integrate `y' = f(t, y)` with `n` forward Euler steps of size `h`.
pub fn euler<S, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Trajectory<S>
where
    S: State,
    F: FnMut(f64, &S) -> S,
{
    into_ok(try_euler(|t, y: &S| Ok::<S, Infallible>(f(t, y)), y0, t0, h, n))
}

/// Fallible [`euler`]: the first error from `f` is returned as is.
pub fn try_euler<S, E, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Result<Trajectory<S>, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    march(y0, t0, h, n, |t, y| euler_step(&mut f, t, y, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn exponential_single_step() {
        let traj = euler(|_, y: &f64| *y, 1.0, 0.0, 0.1, 1);
        assert_eq!(traj.states, vec![1.0, 1.1]);
        assert_eq!(traj.times, vec![0.0, 0.1]);
    }

    #[test]
    fn linear_growth_is_exact() {
        // y' = 2 has no truncation error under Euler
        let traj = euler(|_, _: &f64| 2.0, 0.0, 0.0, 0.25, 4);
        assert!((traj.states[4] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn vector_rotation() {
        // x' = v, v' = -x from (1, 0): Euler spirals outward
        let traj = euler(
            |_, s: &Vector2<f64>| Vector2::new(s.y, -s.x),
            Vector2::new(1.0, 0.0),
            0.0,
            0.01,
            1000,
        );
        let (_, last) = traj.last().unwrap();
        assert!(last.norm() > 1.0, "Euler should gain energy on a rotation, got {}", last.norm());
    }

    #[test]
    fn derivative_error_propagates() {
        let result = try_euler(
            |t, y: &f64| if t > 0.15 { Err("blew up") } else { Ok(*y) },
            1.0,
            0.0,
            0.1,
            5,
        );
        assert_eq!(result, Err("blew up"));
    }
}
