//! Animation kinds, per-kind ranges, and sampled frames.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FlagError, FlagResult};
use crate::tessellate::TessellationFrame;

/// Factor from chart coordinates to display coordinates.
pub const DISPLAY_SCALE: f64 = 100.0;

/// One kind of animation, keyed as in the response document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trafo {
    #[serde(rename = "erupt")]
    Erupt,
    #[serde(rename = "shear")]
    Shear,
    #[serde(rename = "bulge")]
    Bulge,
    #[serde(rename = "eruptmp")]
    EruptMinusPlus,
    #[serde(rename = "eruptpp")]
    EruptPlusPlus,
    #[serde(rename = "no_trafo")]
    NoTrafo,
}

impl Trafo {
    pub const ALL: [Trafo; 6] = [
        Trafo::Erupt,
        Trafo::Shear,
        Trafo::Bulge,
        Trafo::EruptMinusPlus,
        Trafo::EruptPlusPlus,
        Trafo::NoTrafo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Trafo::Erupt => "erupt",
            Trafo::Shear => "shear",
            Trafo::Bulge => "bulge",
            Trafo::EruptMinusPlus => "eruptmp",
            Trafo::EruptPlusPlus => "eruptpp",
            Trafo::NoTrafo => "no_trafo",
        }
    }

    /// Minimum number of flags the animation touches.
    pub fn flags_needed(self) -> usize {
        match self {
            Trafo::Erupt | Trafo::NoTrafo => 3,
            Trafo::Shear | Trafo::Bulge | Trafo::EruptMinusPlus | Trafo::EruptPlusPlus => 4,
        }
    }
}

impl FromStr for Trafo {
    type Err = FlagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trafo::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FlagError::InvalidStyle(s.to_string()))
    }
}

impl fmt::Display for Trafo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frames are sampled at `k · t_step` for `k = -trafo_range..=trafo_range`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafoRange {
    pub trafo_range: u32,
    pub t_step: f64,
}

impl Default for TrafoRange {
    fn default() -> Self {
        Self {
            trafo_range: 1000,
            t_step: 0.01,
        }
    }
}

impl TrafoRange {
    /// Keys of the sampled frames.
    pub fn keys(&self) -> std::ops::RangeInclusive<i64> {
        let r = i64::from(self.trafo_range);
        -r..=r
    }
    pub fn frame_count(&self) -> usize {
        2 * self.trafo_range as usize + 1
    }
}

/// Knobs of the step-and-sample loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationCfg {
    /// Range used by every kind without an override.
    pub range: TrafoRange,
    pub overrides: BTreeMap<Trafo, TrafoRange>,
    pub display_scale: f64,
    /// Subdivision depth of the built-in tessellator; `None` skips fills.
    pub tessellation_depth: Option<usize>,
    /// Samples per quarter of the ellipse in four-flag responses.
    pub conic_resolution: usize,
}

impl Default for AnimationCfg {
    fn default() -> Self {
        Self {
            range: TrafoRange::default(),
            overrides: BTreeMap::new(),
            display_scale: DISPLAY_SCALE,
            tessellation_depth: None,
            conic_resolution: 32,
        }
    }
}

impl AnimationCfg {
    pub fn range_for(&self, trafo: Trafo) -> TrafoRange {
        match trafo {
            Trafo::NoTrafo => TrafoRange {
                trafo_range: 0,
                ..self.range
            },
            other => self.overrides.get(&other).copied().unwrap_or(self.range),
        }
    }

    pub(crate) fn validate(&self) -> FlagResult<()> {
        let ranges = std::iter::once(&self.range).chain(self.overrides.values());
        for r in ranges {
            if !r.t_step.is_finite() {
                return Err(FlagError::DegenerateConfiguration("non-finite animation step"));
            }
        }
        if !(self.display_scale.is_finite() && self.display_scale > 0.0) {
            return Err(FlagError::DegenerateConfiguration("display scale must be positive"));
        }
        Ok(())
    }
}

/// Display coordinates of one sampled state; `None` marks a point at infinity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub ps: Vec<Option<[f64; 2]>>,
    pub qs: Vec<Option<[f64; 2]>>,
    pub us: Vec<Vec<Option<[f64; 2]>>>,
    /// Convex hull of the drawn complex, as the polygon the viewer fills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convex: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tessellation: Option<TessellationFrame>,
}

/// Frames of one animation by key.
pub type Frames = BTreeMap<i64, Frame>;
