extern crate num_traits;

use std::{
    fmt::{Display, Formatter},
    ops::{AddAssign, Deref},
};

use num_traits::{PrimInt, Unsigned};

/// Monotonic unsigned counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter<T>(T)
where
    T: PrimInt + Unsigned;

impl<T> Counter<T>
where
    T: PrimInt + Unsigned,
{
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    pub fn zero() -> Self {
        Self(T::zero())
    }

    /// Saturates at `T::max_value()`.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(T::one());
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0
    }
}

impl<T> Deref for Counter<T>
where
    T: PrimInt + Unsigned,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AddAssign for Counter<T>
where
    T: PrimInt + Unsigned,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl<T> Display for Counter<T>
where
    T: PrimInt + Unsigned + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
