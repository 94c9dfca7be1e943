//! Strongly typed car identifier.

use std::fmt;

/// Index of a car in the roster, assigned in registration order.
///
/// `CarId` is the engine's internal identity; the user-facing identity is
/// the car's unique name.  Ids are dense (`0..roster.len()`) and never
/// change over a run, so they double as direct indices into the roster.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarId(pub u32);

impl CarId {
    /// Cast to `usize` for indexing.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarId({})", self.0)
    }
}

impl From<CarId> for usize {
    #[inline(always)]
    fn from(id: CarId) -> usize {
        id.index()
    }
}

impl TryFrom<usize> for CarId {
    type Error = std::num::TryFromIntError;

    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value).map(CarId)
    }
}
