use std::convert::Infallible;

use super::runner::{into_ok, march};
use crate::state::State;
use crate::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta
//
// Two algebraically equivalent forms are kept. They round differently, and
// callers comparing against a reference need the form that reference used.
// ---------------------------------------------------------------------------

/// Single RK4 step in slope form: the stages hold `f` values and `h` is
/// applied when they are combined.
///
/// ```text
/// k1 = f(t, y)
/// k2 = f(t + h/2, y + k1·h/2)
/// k3 = f(t + h/2, y + k2·h/2)
/// k4 = f(t + h,   y + k3·h)
/// y_next = y + (k1 + 2·k2 + 2·k3 + k4)·h/6
/// ```
pub fn rk4_step<S, E, F>(f: &mut F, t: f64, y: &S, h: f64) -> Result<S, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    let k1 = f(t, y)?;
    let k2 = f(t + h / 2.0, &y.add(&k1.scale(h).unscale(2.0)))?;
    let k3 = f(t + h / 2.0, &y.add(&k2.scale(h).unscale(2.0)))?;
    let k4 = f(t + h, &y.add(&k3.scale(h)))?;

    let sum = k1.add(&k2.scale(2.0)).add(&k3.scale(2.0)).add(&k4);
    Ok(y.add(&sum.scale(h).unscale(6.0)))
}

/// Single RK4 step in increment form: each stage is already multiplied by
/// `h`.
///
/// ```text
/// k1 = h·f(t, y)
/// k2 = h·f(t + h/2, y + k1/2)
/// k3 = h·f(t + h/2, y + k2/2)
/// k4 = h·f(t + h,   y + k3)
/// y_next = y + (k1 + 2·k2 + 2·k3 + k4)/6
/// ```
pub fn rk4_increments_step<S, E, F>(f: &mut F, t: f64, y: &S, h: f64) -> Result<S, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    let k1 = f(t, y)?.scale(h);
    let k2 = f(t + h / 2.0, &y.add(&k1.unscale(2.0)))?.scale(h);
    let k3 = f(t + h / 2.0, &y.add(&k2.unscale(2.0)))?.scale(h);
    let k4 = f(t + h, &y.add(&k3))?.scale(h);

    let sum = k1.add(&k2.scale(2.0)).add(&k3.scale(2.0)).add(&k4);
    Ok(y.add(&sum.unscale(6.0)))
}

/// Integrate `y' = f(t, y)` with `n` RK4 steps (slope form).
pub fn rk4<S, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Trajectory<S>
where
    S: State,
    F: FnMut(f64, &S) -> S,
{
    into_ok(try_rk4(|t, y: &S| Ok::<S, Infallible>(f(t, y)), y0, t0, h, n))
}

/// Fallible [`rk4`].
pub fn try_rk4<S, E, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Result<Trajectory<S>, E>
where
    S: State,
    F: FnMut(f64, &S) -> Result<S, E>,
{
    march(y0, t0, h, n, |t, y| rk4_step(&mut f, t, y, h))
}

/// Integrate `y' = f(t, y)` with `n` RK4 steps (increment form).
pub fn rk4_increments<S, F>(mut f: F, y0: S, t0: f64, h: f64, n: usize) -> Trajectory<S>
where
    S: State,
    F: FnMut(f64, &S) -> S,
{
    into_ok(try_rk4_increments(
        |t, y: &S| Ok::<S, Infallible>(f(t, y)),
        y0,
        t0,
        h,
        n,
    ))
}

/// Fallible [`rk4_increments`].
pub fn try_rk4_increments<S, E, F>(
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
    march(y0, t0, h, n, |t, y| rk4_increments_step(&mut f, t, y, h))
}
