//! Closed style enumerations for the flows, parsed from their wire tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlagError;

/// Basis in which the eruption generators are diagonal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EruptionStyle {
    /// Fix the flag points `p` of the triangle.
    P,
    /// Fix the corners of the outer triangle.
    #[default]
    Q,
}

/// Generator family of the quadrilateral flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadStyle {
    #[default]
    Bulge,
    Shear,
}

impl FromStr for EruptionStyle {
    type Err = FlagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(EruptionStyle::P),
            "Q" => Ok(EruptionStyle::Q),
            other => Err(FlagError::InvalidStyle(other.to_string())),
        }
    }
}

impl FromStr for QuadStyle {
    type Err = FlagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bulge" => Ok(QuadStyle::Bulge),
            "shear" => Ok(QuadStyle::Shear),
            other => Err(FlagError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for EruptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EruptionStyle::P => "P",
            EruptionStyle::Q => "Q",
        })
    }
}

impl fmt::Display for QuadStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuadStyle::Bulge => "bulge",
            QuadStyle::Shear => "shear",
        })
    }
}
