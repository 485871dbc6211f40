//! Common types for stability analysis.

use serde::{Deserialize, Serialize};

use crate::error::PsiError;

/// Orientation of variables within the input matrices.
///
/// With [`Axis::Columns`] each column is one variable and each row is one
/// observation; with [`Axis::Rows`] the roles are transposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Variables are columns; samples run down the rows. Selector `0`.
    #[default]
    Columns,
    /// Variables are rows; samples run along the columns. Selector `1`.
    Rows,
}

impl Axis {
    /// Resolve an integer axis selector.
    ///
    /// `0` maps to [`Axis::Columns`] and `1` to [`Axis::Rows`]. Any other
    /// value is rejected with [`PsiError::InvalidAxis`] rather than silently
    /// producing an empty or garbage result.
    pub fn from_index(index: usize) -> Result<Self, PsiError> {
        match index {
            0 => Ok(Axis::Columns),
            1 => Ok(Axis::Rows),
            n => Err(PsiError::InvalidAxis(n)),
        }
    }

    /// The integer selector for this axis.
    pub fn index(&self) -> usize {
        match self {
            Axis::Columns => 0,
            Axis::Rows => 1,
        }
    }
}
