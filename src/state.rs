use nalgebra::{DMatrix, DVector, SMatrix};

// ---------------------------------------------------------------------------
// Numeric state abstraction
// ---------------------------------------------------------------------------

/// A value the integrators can advance: a scalar or a vector of reals.
///
/// Every operation returns a fresh value; nothing is updated in place.
/// Element-wise operations on dynamically sized states of different length
/// panic, the same way `nalgebra` does for mismatched dimensions.
pub trait State: Clone {
    /// Element-wise sum.
    fn add(&self, other: &Self) -> Self;

    /// Multiply every component by `k`.
    fn scale(&self, k: f64) -> Self;

    /// Divide every component by `d`.
    fn unscale(&self, d: f64) -> Self;

    /// Flat view of the components, in storage order.
    fn components(&self) -> Vec<f64>;
}

impl State for f64 {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn scale(&self, k: f64) -> Self {
        self * k
    }

    fn unscale(&self, d: f64) -> Self {
        self / d
    }

    fn components(&self) -> Vec<f64> {
        vec![*self]
    }
}

impl<const N: usize> State for [f64; N] {
    fn add(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] + other[i])
    }

    fn scale(&self, k: f64) -> Self {
        self.map(|a| a * k)
    }

    fn unscale(&self, d: f64) -> Self {
        self.map(|a| a / d)
    }

    fn components(&self) -> Vec<f64> {
        self.to_vec()
    }
}

/// # Panics
/// `add` panics when the two vectors differ in length.
impl State for Vec<f64> {
    fn add(&self, other: &Self) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "state length mismatch: {} vs {}",
            self.len(),
            other.len()
        );
        self.iter().zip(other).map(|(a, b)| a + b).collect()
    }

    fn scale(&self, k: f64) -> Self {
        self.iter().map(|a| a * k).collect()
    }

    fn unscale(&self, d: f64) -> Self {
        self.iter().map(|a| a / d).collect()
    }

    fn components(&self) -> Vec<f64> {
        self.clone()
    }
}

/// Statically sized nalgebra matrices, which covers `Vector3`, `SVector<f64, N>`, ...
impl<const R: usize, const C: usize> State for SMatrix<f64, R, C> {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn scale(&self, k: f64) -> Self {
        self * k
    }

    fn unscale(&self, d: f64) -> Self {
        self / d
    }

    fn components(&self) -> Vec<f64> {
        self.iter().copied().collect()
    }
}

macro_rules! impl_dynamic_state {
    ($ty:ty) => {
        /// # Panics
        /// `add` panics when the shapes differ.
        impl State for $ty {
            fn add(&self, other: &Self) -> Self {
                self + other
            }

            fn scale(&self, k: f64) -> Self {
                self * k
            }

            fn unscale(&self, d: f64) -> Self {
                self / d
            }

            fn components(&self) -> Vec<f64> {
                self.iter().copied().collect()
            }
        }
    };
}

impl_dynamic_state!(DVector<f64>);
impl_dynamic_state!(DMatrix<f64>);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
