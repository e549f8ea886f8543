// ---------------------------------------------------------------------------
// First-order trajectory: (t_i, y_i)
// ---------------------------------------------------------------------------

/// Discretized solution of `y' = f(t, y)`.
///
/// `times` and `states` are parallel and always hold at least the initial
/// condition, so a trajectory is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    pub times: Vec<f64>,
    pub states: Vec<S>,
}

impl<S> Trajectory<S> {
    /// Number of samples (`steps + 1`).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.len().saturating_sub(1)
    }

    pub fn initial(&self) -> Option<(f64, &S)> {
        Some((*self.times.first()?, self.states.first()?))
    }

    pub fn last(&self) -> Option<(f64, &S)> {
        Some((*self.times.last()?, self.states.last()?))
    }

    /// Iterate `(t, &y)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Split into the bare `(times, states)` sequences.
    pub fn into_parts(self) -> (Vec<f64>, Vec<S>) {
        (self.times, self.states)
    }
}

// ---------------------------------------------------------------------------
// Second-order trajectory: (t_i, y_i, v_i)
// ---------------------------------------------------------------------------

/// Discretized solution of `y'' = a(t, y, v)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderTrajectory<S> {
    pub times: Vec<f64>,
    pub positions: Vec<S>,
    pub velocities: Vec<S>,
}

impl<S> SecondOrderTrajectory<S> {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn steps(&self) -> usize {
        self.len().saturating_sub(1)
    }

    pub fn initial(&self) -> Option<(f64, &S, &S)> {
        Some((
            *self.times.first()?,
            self.positions.first()?,
            self.velocities.first()?,
        ))
    }

    pub fn last(&self) -> Option<(f64, &S, &S)> {
        Some((
            *self.times.last()?,
            self.positions.last()?,
            self.velocities.last()?,
        ))
    }

    /// Iterate `(t, &y, &v)` triples in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S, &S)> + '_ {
        self.times
            .iter()
            .zip(self.positions.iter().zip(self.velocities.iter()))
            .map(|(t, (y, v))| (*t, y, v))
    }

    /// Split into the bare `(times, positions, velocities)` sequences.
    pub fn into_parts(self) -> (Vec<f64>, Vec<S>, Vec<S>) {
        (self.times, self.positions, self.velocities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_sample_order() {
        let traj = Trajectory {
            times: vec![0.0, 0.5, 1.0],
            states: vec![1.0, 2.0, 3.0],
        };
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.steps(), 2);
        assert_eq!(traj.initial(), Some((0.0, &1.0)));
        assert_eq!(traj.last(), Some((1.0, &3.0)));
        let pairs: Vec<(f64, f64)> = traj.iter().map(|(t, y)| (t, *y)).collect();
        assert_eq!(pairs, vec![(0.0, 1.0), (0.5, 2.0), (1.0, 3.0)]);
    }

    #[test]
    fn second_order_parts_round_out() {
        let traj = SecondOrderTrajectory {
            times: vec![0.0, 0.1],
            positions: vec![0.0, 1.0],
            velocities: vec![10.0, 9.0],
        };
        assert_eq!(traj.last(), Some((0.1, &1.0, &9.0)));
        let (t, y, v) = traj.into_parts();
        assert_eq!(t.len(), y.len());
        assert_eq!(y.len(), v.len());
    }
}
