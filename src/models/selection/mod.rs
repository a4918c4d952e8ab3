// Selection model
// Validated, sorted set of weekday indices shared by the selector and its host

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of toggles in a selector row.
pub const DAYS_IN_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("day index {0} is out of range (expected 0..=6)")]
    OutOfRange(usize),
}

/// Outcome of toggling a single index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(usize),
    Deselected(usize),
}

impl SelectionChange {
    pub fn index(&self) -> usize {
        match self {
            Self::Selected(index) | Self::Deselected(index) => *index,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// Ascending, duplicate-free list of day indices in `0..DAYS_IN_WEEK`.
///
/// Every constructor validates, so a value of this type always upholds the
/// ordering and range guarantees the selector relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct SelectedDays(Vec<usize>);

impl SelectedDays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from arbitrary indices, rejecting anything out of
    /// range and collapsing duplicates.
    pub fn from_indices<I>(indices: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut days = Vec::new();
        for index in indices {
            validate_index(index)?;
            days.push(index);
        }
        days.sort_unstable();
        days.dedup();
        Ok(Self(days))
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// Flip membership of `index`: remove it when present, otherwise insert
    /// it at its sorted position.
    pub fn toggle(&mut self, index: usize) -> Result<SelectionChange, SelectionError> {
        validate_index(index)?;

        match self.0.binary_search(&index) {
            Ok(_) => {
                self.0.retain(|day| *day != index);
                Ok(SelectionChange::Deselected(index))
            }
            Err(position) => {
                self.0.insert(position, index);
                Ok(SelectionChange::Selected(index))
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership flags indexed by day.
    pub fn flags(&self) -> [bool; DAYS_IN_WEEK] {
        let mut flags = [false; DAYS_IN_WEEK];
        for index in self.iter() {
            flags[index] = true;
        }
        flags
    }
}

impl TryFrom<Vec<usize>> for SelectedDays {
    type Error = SelectionError;

    fn try_from(value: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_indices(value)
    }
}

impl From<SelectedDays> for Vec<usize> {
    fn from(value: SelectedDays) -> Self {
        value.0
    }
}

pub fn validate_index(index: usize) -> Result<(), SelectionError> {
    if index < DAYS_IN_WEEK {
        Ok(())
    } else {
        Err(SelectionError::OutOfRange(index))
    }
}
