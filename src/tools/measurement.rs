use std::fmt;

use crate::geometry::round2;

/// Unit that calibrated lengths are reported in
pub const LENGTH_UNIT: &str = "mm";

/// Derived measurement of a completed shape, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Length of a distance line
    Length(f64),
    /// Angle at the vertex, in degrees
    Angle(f64),
    /// Area and perimeter of a rectangle or ellipse
    Region { area: f64, perimeter: f64 },
}

impl Measurement {
    pub fn length(length: f64) -> Self {
        Self::Length(round2(length))
    }

    pub fn angle(degrees: f64) -> Self {
        Self::Angle(round2(degrees))
    }

    pub fn region(area: f64, perimeter: f64) -> Self {
        Self::Region {
            area: round2(area),
            perimeter: round2(perimeter),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(f, "{:.2} {}", length, LENGTH_UNIT),
            Self::Angle(degrees) => write!(f, "{:.2}°", degrees),
            Self::Region { area, perimeter } => write!(
                f,
                "A: {:.2} {unit}²\nP: {:.2} {unit}",
                area,
                perimeter,
                unit = LENGTH_UNIT
            ),
        }
    }
}
