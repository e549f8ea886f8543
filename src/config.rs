use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Uniform step grid
// ---------------------------------------------------------------------------

/// Start time, step size and step count of a fixed-step run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfig {
    pub t0: f64,
    pub h: f64,
    pub steps: usize,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            t0: 0.0,
            h: 0.01,    // 100 Hz
            steps: 100, // one time unit
        }
    }
}

impl StepConfig {
    pub fn new(t0: f64, h: f64, steps: usize) -> Self {
        Self { t0, h, steps }
    }

    /// Split `[t0, t_end]` into `steps` equal steps. `t_end < t0` gives a
    /// backward run with negative `h`.
    pub fn over_span(t0: f64, t_end: f64, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(Error::ZeroSteps);
        }
        Ok(Self {
            t0,
            h: (t_end - t0) / steps as f64,
            steps,
        })
    }

    /// Nominal final time `t0 + steps·h`.
    pub fn t_end(&self) -> f64 {
        self.t0 + self.steps as f64 * self.h
    }

    /// Same span with twice as many steps of half the size.
    pub fn refined(&self) -> Self {
        Self {
            t0: self.t0,
            h: self.h / 2.0,
            steps: self.steps * 2,
        }
    }
}
