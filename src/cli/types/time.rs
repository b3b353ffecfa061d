//! Week numbers for the NFL regular season.

use crate::error::{InsightsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for regular-season week numbers (1..=18).
///
/// # Examples
///
/// ```rust
/// use nfl_insights::Week;
///
/// let week: Week = "5".parse().unwrap();
/// assert_eq!(week.as_u16(), 5);
/// assert_eq!(week.next().as_u16(), 6);
/// assert!("19".parse::<Week>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub const MAX: u16 = 18;

    pub fn new(week: u16) -> Self {
        Self(week)
    }

    /// Construct a week, rejecting values outside the regular season.
    pub fn checked(week: u16) -> Result<Self> {
        if (1..=Self::MAX).contains(&week) {
            Ok(Self(week))
        } else {
            Err(InsightsError::InvalidWeek {
                week,
                max: Self::MAX,
            })
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The week whose matchups follow this one.
    pub fn next(&self) -> Week {
        Week(self.0 + 1)
    }

    /// First week of a trailing window of `len` weeks ending at this week.
    pub fn window_start(&self, len: u16) -> Week {
        Week(self.0.saturating_sub(len.saturating_sub(1)).max(1))
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self> {
        Week::checked(s.trim().parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_bounds() {
        assert!(Week::checked(0).is_err());
        assert!(Week::checked(1).is_ok());
        assert!(Week::checked(18).is_ok());
        assert!(Week::checked(19).is_err());
        assert!("abc".parse::<Week>().is_err());
    }

    #[test]
    fn test_window_start() {
        assert_eq!(Week::new(10).window_start(3), Week::new(8));
        assert_eq!(Week::new(2).window_start(3), Week::new(1));
        assert_eq!(Week::new(1).window_start(3), Week::new(1));
        assert_eq!(Week::new(5).window_start(1), Week::new(5));
    }
}
