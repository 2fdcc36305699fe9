use crate::errors::GeometryError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A parsed NACA 4-digit designation of the form MPTT, where M is the maximum camber in percent
/// of the chord, P is the location of the maximum camber in tenths of the chord, and TT is the
/// maximum thickness in percent of the chord. For example, "2412" is a 2% camber at 40% of the
/// chord with a max thickness of 12%.
///
/// The digits are validated once on parse and the derived fractions are never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Naca4Designation {
    camber_digit: u8,
    position_digit: u8,
    thickness_digits: u8,
}

impl Naca4Designation {
    pub fn new(
        camber_digit: u8,
        position_digit: u8,
        thickness_digits: u8,
    ) -> Result<Self, GeometryError> {
        let d = Naca4Designation {
            camber_digit,
            position_digit,
            thickness_digits,
        };

        if camber_digit > 9 || position_digit > 9 || thickness_digits > 99 {
            return Err(d.invalid("each digit must be between 0 and 9"));
        }

        // A zero thickness section collapses both surfaces onto the camber line
        if thickness_digits == 0 {
            return Err(d.invalid("thickness must be at least 1% of the chord"));
        }

        Ok(d)
    }

    fn invalid(&self, reason: &str) -> GeometryError {
        GeometryError::InvalidDesignation {
            value: format!(
                "{}{}{:02}",
                self.camber_digit, self.position_digit, self.thickness_digits
            ),
            reason: reason.to_string(),
        }
    }

    /// Maximum camber `m` as a fraction of the chord, e.g. 0.02 for a 2412
    pub fn max_camber(&self) -> f64 {
        self.camber_digit as f64 / 100.0
    }

    /// Chordwise location `p` of the maximum camber as a fraction of the chord, e.g. 0.4 for a
    /// 2412
    pub fn camber_position(&self) -> f64 {
        self.position_digit as f64 / 10.0
    }

    /// Maximum thickness `t` as a fraction of the chord, e.g. 0.12 for a 2412
    pub fn thickness(&self) -> f64 {
        self.thickness_digits as f64 / 100.0
    }

    pub fn max_camber_percent(&self) -> u8 {
        self.camber_digit
    }

    pub fn camber_position_percent(&self) -> u8 {
        self.position_digit * 10
    }

    pub fn thickness_percent(&self) -> u8 {
        self.thickness_digits
    }

    /// True when the mean line is flat. A camber without a split location (e.g. "2012") has no
    /// defined mean line and is treated the same way.
    pub fn is_symmetric(&self) -> bool {
        self.camber_digit == 0 || self.position_digit == 0
    }
}

impl FromStr for Naca4Designation {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| GeometryError::InvalidDesignation {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if s.chars().count() != 4 {
            return Err(invalid("designation must be exactly 4 digits"));
        }

        let digits = s
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| invalid("designation must contain only decimal digits"))?;

        Naca4Designation::new(digits[0], digits[1], digits[2] * 10 + digits[3])
    }
}

impl Display for Naca4Designation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{:02}",
            self.camber_digit, self.position_digit, self.thickness_digits
        )
    }
}
