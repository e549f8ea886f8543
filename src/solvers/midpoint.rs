use std::convert::Infallible;

use super::runner::{into_ok, march};
use crate::state::State;
use crate::trajectory::Trajectory;

/// Single explicit midpoint step.
///
/// ```text
/// k1     = h·f(t, y)
/// k2     = h·f(t + h/2, y + k1/2)
/// y_next = y + k2
/// ```
pub fn midpoint_step<S, E, F>(f: &mut F, t: f64, y: &S, h: f64) -> Result<S, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    let k1 = f(t, y)?.scale(h);
    let k2 = f(t + h / 2.0, &y.add(&k1.unscale(2.0)))?.scale(h);
    Ok(y.add(&k2))
}

/// Integrate `y' = f(t, y)` with `n` midpoint steps of size `h`.
pub fn midpoint<S, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Trajectory<S>
where
    S: State,
    F: FnMut(f64, &S) -> S,
{
    into_ok(try_midpoint(|t, y: &S| Ok::<S, Infallible>(f(t, y)), y0, t0, h, n))
}

/// Fallible [`midpoint`].
pub fn try_midpoint<S, E, F>(
    mut f: F,
    y0: S,
    t0: f64,
    h: f64,
    n: usize,
) -> Result<Trajectory<S>, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    march(y0, t0, h, n, |t, y| midpoint_step(&mut f, t, y, h))
}
