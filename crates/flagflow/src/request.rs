//! Screen-coordinate requests and the animation response document.
//!
//! A request carries flags as 2D screen points; the response holds one
//! animation per applicable flow (chosen by the number of flags) and a status
//! code: 0 on success, 1 for a non-positive complex, 2 for any other failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::animation::{animate, AnimationCfg, Frames, Trafo, TrafoRange};
use crate::complex::FlagComplex;
use crate::error::{FlagError, FlagResult};
use crate::proj::{rotate_vectors, Vec3};
use crate::tessellate::Tessellator;

/// Homogeneous coordinate given to screen points.
pub const SCREEN_DEPTH: f64 = 100.0;

const UNROTATED: [f64; 3] = [0.0, 0.0, 1.0];

fn default_plane() -> [f64; 3] {
    UNROTATED
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformationRequest {
    pub ps: Vec<[f64; 2]>,
    pub ds: Vec<[f64; 2]>,
    #[serde(default = "default_plane")]
    pub pplane: [f64; 3],
    /// Plane the screen points were drawn in.
    #[serde(default = "default_plane")]
    pub oldpplane: [f64; 3],
}

impl TransformationRequest {
    /// Lift the screen points to `(x, y, 100)`, rotate them out of
    /// `oldpplane`, and build a complex charted by `pplane`.
    pub fn to_complex(&self) -> FlagResult<FlagComplex> {
        if self.ps.len() != self.ds.len() {
            return Err(FlagError::DegenerateConfiguration(
                "request has different numbers of points and directions",
            ));
        }
        let old = Vec3::from(self.oldpplane);
        let rotation = if self.oldpplane == UNROTATED {
            None
        } else {
            if old.norm() == 0.0 {
                return Err(FlagError::ZeroVector);
            }
            Some(rotate_vectors(&Vec3::from(UNROTATED), &old))
        };
        let lift = |[x, y]: [f64; 2]| {
            let v = Vec3::new(x, y, SCREEN_DEPTH);
            match &rotation {
                Some(m) => m * v,
                None => v,
            }
        };

        let mut fc = FlagComplex::new();
        fc.set_projection_plane(&Vec3::from(self.pplane))?;
        for (&p, &d) in self.ps.iter().zip(&self.ds) {
            fc.add_flag(lift(p), lift(d))?;
        }
        Ok(fc)
    }
}

/// Animations by kind, the ranges used, and the status code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformationResponse {
    pub error: u8,
    #[serde(default)]
    pub trafo_range: BTreeMap<Trafo, TrafoRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erupt: Option<Frames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shear: Option<Frames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulge: Option<Frames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eruptmp: Option<Frames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eruptpp: Option<Frames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_trafo: Option<Frames>,
    /// Conic through flags 0 and 2 and the point of flag 1 (four flags only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ellipse: Option<Vec<Option<[f64; 2]>>>,
}

impl TransformationResponse {
    pub fn failed(error: &FlagError) -> Self {
        Self {
            error: error.status_code(),
            ..Self::default()
        }
    }

    pub fn frames(&self, trafo: Trafo) -> Option<&Frames> {
        self.slot(trafo).as_ref()
    }

    fn slot(&self, trafo: Trafo) -> &Option<Frames> {
        match trafo {
            Trafo::Erupt => &self.erupt,
            Trafo::Shear => &self.shear,
            Trafo::Bulge => &self.bulge,
            Trafo::EruptMinusPlus => &self.eruptmp,
            Trafo::EruptPlusPlus => &self.eruptpp,
            Trafo::NoTrafo => &self.no_trafo,
        }
    }

    fn insert(&mut self, trafo: Trafo, range: TrafoRange, frames: Frames) {
        self.trafo_range.insert(trafo, range);
        let slot = match trafo {
            Trafo::Erupt => &mut self.erupt,
            Trafo::Shear => &mut self.shear,
            Trafo::Bulge => &mut self.bulge,
            Trafo::EruptMinusPlus => &mut self.eruptmp,
            Trafo::EruptPlusPlus => &mut self.eruptpp,
            Trafo::NoTrafo => &mut self.no_trafo,
        };
        *slot = Some(frames);
    }
}

/// Flows animated for a complex with `n` flags.
pub fn trafos_for(n: usize) -> &'static [Trafo] {
    match n {
        3 => &[Trafo::Erupt],
        4 => &[
            Trafo::Shear,
            Trafo::Bulge,
            Trafo::EruptMinusPlus,
            Trafo::EruptPlusPlus,
        ],
        n if n > 4 => &[Trafo::NoTrafo],
        _ => &[],
    }
}

/// Build every applicable animation; failures become a status code.
pub fn compute_transformation_data(
    request: &TransformationRequest,
    cfg: &AnimationCfg,
    tessellator: Option<&dyn Tessellator>,
) -> TransformationResponse {
    match try_compute(request, cfg, tessellator) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(
                error = %e,
                code = e.status_code(),
                flags = request.ps.len(),
                "transformation data not computed"
            );
            TransformationResponse::failed(&e)
        }
    }
}

fn try_compute(
    request: &TransformationRequest,
    cfg: &AnimationCfg,
    tessellator: Option<&dyn Tessellator>,
) -> FlagResult<TransformationResponse> {
    let complex = request.to_complex()?;
    complex.ensure_positive()?;

    let mut response = TransformationResponse::default();
    for &trafo in trafos_for(complex.len()) {
        let mut working = complex.clone();
        let frames = animate(&mut working, trafo, cfg, tessellator)?;
        response.insert(trafo, cfg.range_for(trafo), frames);
    }
    if complex.len() == 4 {
        response.ellipse = Some(ellipse(&complex, cfg)?);
    }
    Ok(response)
}

fn ellipse(complex: &FlagComplex, cfg: &AnimationCfg) -> FlagResult<Vec<Option<[f64; 2]>>> {
    let (through, _) = complex.get_flag(1)?;
    complex
        .conic_through_flags_and_point(0, 2, &through, cfg.conic_resolution)?
        .iter()
        .map(|v| Ok(complex.chart_point(v)?.scaled(cfg.display_scale)))
        .collect()
}
