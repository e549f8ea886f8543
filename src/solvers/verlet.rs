use std::convert::Infallible;

use super::runner::{into_ok, march_second_order};
use crate::state::State;
use crate::trajectory::SecondOrderTrajectory;

// ---------------------------------------------------------------------------
// Verlet for y'' = a(t, y, v)
// ---------------------------------------------------------------------------

/// Single Verlet step, returning the next `(y, v)`.
///
/// ```text
/// a      = f(t, y, v)
/// y_next = y + h·v + 0.5·h²·a
/// a_next = f(t + h, y_next, v)
/// v_next = v + 0.5·h·(a + a_next)
/// ```
///
/// `a_next` is evaluated with the old velocity. For velocity-independent
/// forces this is velocity Verlet; damping-like terms lag by one step.
pub fn verlet_step<S, E, F>(f: &mut F, t: f64, y: &S, v: &S, h: f64) -> Result<(S, S), E>
where
    S: State,
    F: FnMut(f64, &S, &S) -> Result<S, E>,
{
    let a = f(t, y, v)?;
    let y_next = y.add(&v.scale(h)).add(&a.scale(0.5 * h * h));
    let a_next = f(t + h, &y_next, v)?;
    let v_next = v.add(&a.add(&a_next).scale(0.5 * h));
    Ok((y_next, v_next))
}

/// Integrate `y'' = f(t, y, v)` from `(y0, v0)` with `n` Verlet steps.
pub fn verlet<S, F>(mut f: F, y0: S, v0: S, t0: f64, h: f64, n: usize) -> SecondOrderTrajectory<S>
where
    S: State,
    F: FnMut(f64, &S, &S) -> S,
{
    into_ok(try_verlet(
        |t, y: &S, v: &S| Ok::<S, Infallible>(f(t, y, v)),
        y0,
        v0,
        t0,
        h,
        n,
    ))
}

/// Fallible [`verlet`].
pub fn try_verlet<S, E, F>(
    mut f: F,
    y0: S,
    v0: S,
    t0: f64,
    h: f64,
    n: usize,
) -> Result<SecondOrderTrajectory<S>, E>
where
    S: State,
    F: FnMut(f64, &S, &S) -> Result<S, E>,
{
    march_second_order(y0, v0, t0, h, n, |t, y, v| verlet_step(&mut f, t, y, v, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn constant_gravity_is_exact() {
        let g = Vector3::new(0.0, 0.0, -9.80665);
        let y0 = Vector3::new(0.0, 0.0, 100.0);
        let v0 = Vector3::new(12.0, 3.0, 40.0);
        let traj = verlet(|_, _: &Vector3<f64>, _: &Vector3<f64>| g, y0, v0, 0.0, 0.05, 200);

        for (t, y, v) in traj.iter() {
            let exact_y = y0 + v0 * t + g * (0.5 * t * t);
            let exact_v = v0 + g * t;
            assert!((y - exact_y).norm() < 1e-9, "position drift at t={:.2}", t);
            assert!((v - exact_v).norm() < 1e-9, "velocity drift at t={:.2}", t);
        }
    }

    #[test]
    fn new_position_sees_old_velocity() {
        let mut seen = Vec::new();
        let _ = verlet(
            |t, y: &f64, v: &f64| {
                seen.push((t, *y, *v));
                0.0
            },
            0.0,
            2.0,
            0.0,
            0.5,
            1,
        );
        // second evaluation: t + h, y_next = 1.0, still v = 2.0
        assert_eq!(seen, vec![(0.0, 0.0, 2.0), (0.5, 1.0, 2.0)]);
    }

    #[test]
    fn spring_energy_stays_bounded() {
        let traj = verlet(|_, y: &f64, _: &f64| -y, 1.0, 0.0, 0.0, 0.01, 10_000);
        let max_energy = traj
            .iter()
            .map(|(_, y, v)| 0.5 * (y * y + v * v))
            .fold(0.0_f64, f64::max);
        assert!(
            (max_energy - 0.5).abs() < 1e-3,
            "energy wandered to {:.6}",
            max_energy
        );
    }

    #[test]
    fn acceleration_error_propagates() {
        let result = try_verlet(
            |_, y: &f64, _: &f64| {
                if *y < 0.0 {
                    Err(format!("hit ground at {:.3}", y))
                } else {
                    Ok(-9.8)
                }
            },
            1.0,
            0.0,
            0.0,
            0.1,
            100,
        );
        let err = result.unwrap_err();
        assert!(err.starts_with("hit ground"), "{}", err);
    }
}
