use std::convert::Infallible;

use super::runner::{into_ok, march};
use crate::state::State;
use crate::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Heun (explicit trapezoid, predictor-corrector)
// ---------------------------------------------------------------------------

/// Single Heun step.
///
/// ```text
/// yp     = y + h·f(t, y)
/// y_next = y + (h/2)·(f(t, y) + f(t + h, yp))
/// ```
pub fn heun_step<S, E, F>(f: &mut F, t: f64, y: &S, h: f64) -> Result<S, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    let slope = f(t, y)?;
    let predictor = y.add(&slope.scale(h));
    let corrected = f(t + h, &predictor)?;
    Ok(y.add(&slope.add(&corrected).scale(h / 2.0)))
}

/// Integrate `y' = f(t, y)` with `n` Heun steps of size `h`.
pub fn heun<S, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Trajectory<S>
where
    S: State,
    F: FnMut(f64, &S) -> S,
{
    into_ok(try_heun(|t, y: &S| Ok::<S, Infallible>(f(t, y)), y0, t0, h, n))
}

/// Fallible [`heun`].
pub fn try_heun<S, E, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Result<Trajectory<S>, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    march(y0, t0, h, n, |t, y| heun_step(&mut f, t, y, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_single_step() {
        // 1 + 0.05 * (1 + 1.1)
        let traj = heun(|_, y: &f64| *y, 1.0, 0.0, 0.1, 1);
        assert!((traj.states[1] - 1.105).abs() < 1e-12);
    }

    #[test]
    fn quadratic_in_time_is_exact() {
        // y' = 2t integrates exactly under the trapezoid rule
        let traj = heun(|t, _: &f64| 2.0 * t, 0.0, 0.0, 0.1, 10);
        let (t, y) = traj.last().unwrap();
        assert!((y - t * t).abs() < 1e-12, "y={} t^2={}", y, t * t);
    }

    #[test]
    fn two_evaluations_per_step() {
        let mut calls = 0;
        let _ = heun(
            |_, y: &[f64; 2]| {
                calls += 1;
                *y
            },
            [1.0, 2.0],
            0.0,
            0.1,
            7,
        );
        assert_eq!(calls, 14);
    }

    #[test]
    fn corrector_time_is_t_plus_h() {
        let mut seen = Vec::new();
        let _ = heun(
            |t, _: &f64| {
                seen.push(t);
                0.0
            },
            0.0,
            1.0,
            0.5,
            1,
        );
        assert_eq!(seen, vec![1.0, 1.5]);
    }
}
