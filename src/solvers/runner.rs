use std::convert::Infallible;

use crate::trajectory::{SecondOrderTrajectory, Trajectory};

/// Upper bound on samples reserved up front; longer runs grow on demand.
const MAX_PREALLOC: usize = 200_000;

fn capacity(steps: usize) -> usize {
    steps.saturating_add(1).min(MAX_PREALLOC)
}

// ---------------------------------------------------------------------------
// Fixed-step drivers
// ---------------------------------------------------------------------------

/// Apply `step` `n` times from `(t0, y0)`, recording every sample.
///
/// Time advances by repeated addition of `h`, so rounding accumulates the
/// same way it would in a hand-written loop. The first error returned by
/// `step` aborts the run and is handed back unchanged.
pub(crate) fn march<S, E, St>(
    y0: S,
    t0: f64,
    h: f64,
    n: usize,
    mut step: St,
) -> Result<Trajectory<S>, E>
where
    S: Clone,
    St: FnMut(f64, &S) -> Result<S, E>,
{
    let cap = capacity(n);
    let mut times = Vec::with_capacity(cap);
    let mut states = Vec::with_capacity(cap);

    let mut t = t0;
    let mut y = y0;
    times.push(t);
    states.push(y.clone());

    for _ in 0..n {
        y = step(t, &y)?;
        t += h;
        times.push(t);
        states.push(y.clone());
    }

    Ok(Trajectory { times, states })
}

/// Second-order counterpart of [`march`]: `step` maps `(t, y, v)` to the
/// next `(y, v)` pair.
pub(crate) fn march_second_order<S, E, St>(
    y0: S,
    v0: S,
    t0: f64,
    h: f64,
    n: usize,
    mut step: St,
) -> Result<SecondOrderTrajectory<S>, E>
where
    S: Clone,
    St: FnMut(f64, &S, &S) -> Result<(S, S), E>,
{
    let cap = capacity(n);
    let mut times = Vec::with_capacity(cap);
    let mut positions = Vec::with_capacity(cap);
    let mut velocities = Vec::with_capacity(cap);

    let mut t = t0;
    let mut y = y0;
    let mut v = v0;
    times.push(t);
    positions.push(y.clone());
    velocities.push(v.clone());

    for _ in 0..n {
        (y, v) = step(t, &y, &v)?;
        t += h;
        times.push(t);
        positions.push(y.clone());
        velocities.push(v.clone());
    }

    Ok(SecondOrderTrajectory {
        times,
        positions,
        velocities,
    })
}

/// Unwrap the result of a run whose callable cannot fail.
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
