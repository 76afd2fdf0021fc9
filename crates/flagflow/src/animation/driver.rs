//! Step-and-sample loop over one flow.

use std::ops::RangeInclusive;

use super::types::{AnimationCfg, Frame, Frames, Trafo};
use crate::complex::{FlagComplex, Triangle, CANONICAL_TRIANGLE};
use crate::error::{FlagError, FlagResult};
use crate::flows::{CompositeEruption, CompositeStyle, EruptionStyle, QuadStyle};
use crate::tessellate::Tessellator;

const QUAD: [usize; 4] = [0, 1, 2, 3];

/// The flow driven by one animation kind.
enum Flow {
    Erupt,
    Quad(QuadStyle),
    Composite(CompositeEruption),
    Still,
}

impl Flow {
    fn new(trafo: Trafo, complex: &FlagComplex) -> FlagResult<Self> {
        Ok(match trafo {
            Trafo::Erupt => Flow::Erupt,
            Trafo::Shear => Flow::Quad(QuadStyle::Shear),
            Trafo::Bulge => Flow::Quad(QuadStyle::Bulge),
            Trafo::EruptMinusPlus => Flow::Composite(CompositeEruption::new(
                complex,
                QUAD,
                CompositeStyle::MinusPlus,
                EruptionStyle::P,
            )?),
            Trafo::EruptPlusPlus => Flow::Composite(CompositeEruption::new(
                complex,
                QUAD,
                CompositeStyle::PlusPlus,
                EruptionStyle::P,
            )?),
            Trafo::NoTrafo => Flow::Still,
        })
    }

    fn step(&self, complex: &mut FlagComplex, t: f64) -> FlagResult<()> {
        match self {
            Flow::Erupt => complex.erupt_triangle(t, CANONICAL_TRIANGLE, EruptionStyle::Q),
            Flow::Quad(style) => complex.bulge_quadrilateral(t, QUAD, *style),
            Flow::Composite(flow) => flow.step(complex, t),
            Flow::Still => Ok(()),
        }
    }

    /// Triangles whose inner triangle is drawn with every frame.
    fn witnesses(&self, complex: &FlagComplex) -> Vec<Triangle> {
        match self {
            Flow::Erupt => vec![CANONICAL_TRIANGLE],
            Flow::Quad(_) => vec![[0, 1, 2], [0, 2, 3]],
            Flow::Composite(flow) => flow.triangles().to_vec(),
            Flow::Still => complex.triangles().to_vec(),
        }
    }
}

/// Lazily sampled animation of a complex.
///
/// Construction runs the pre-flight checks and the pre-step to
/// `-(range + 1) · t_step`; each `next()` advances by `t_step` and samples one
/// frame. Dropping the iterator early stops the flow between steps. After the
/// first error the iterator is fused.
pub struct Animation<'a> {
    complex: &'a mut FlagComplex,
    flow: Flow,
    witnesses: Vec<Triangle>,
    keys: RangeInclusive<i64>,
    t_step: f64,
    scale: f64,
    tessellator: Option<&'a dyn Tessellator>,
    failed: bool,
}

impl<'a> Animation<'a> {
    pub fn new(
        complex: &'a mut FlagComplex,
        trafo: Trafo,
        cfg: &AnimationCfg,
        tessellator: Option<&'a dyn Tessellator>,
    ) -> FlagResult<Self> {
        cfg.validate()?;
        if complex.projection_plane().is_none() {
            return Err(FlagError::MissingProjectionPlane);
        }
        let needed = trafo.flags_needed();
        if complex.len() < needed {
            return Err(FlagError::TooFewFlags {
                needed,
                len: complex.len(),
            });
        }
        complex.ensure_positive()?;
        complex.create_triangulation();

        let flow = Flow::new(trafo, complex)?;
        let witnesses = flow.witnesses(complex);
        let range = cfg.range_for(trafo);
        flow.step(complex, -(f64::from(range.trafo_range) + 1.0) * range.t_step)?;

        tracing::info!(
            %trafo,
            flags = complex.len(),
            frames = range.frame_count(),
            t_step = range.t_step,
            "animation started"
        );
        Ok(Self {
            complex,
            flow,
            witnesses,
            keys: range.keys(),
            t_step: range.t_step,
            scale: cfg.display_scale,
            tessellator,
            failed: false,
        })
    }

    fn sample(&mut self) -> FlagResult<Frame> {
        let scale = self.scale;
        self.complex.draw_complex()?;
        let ps = self.complex.drawps().iter().map(|c| c.scaled(scale)).collect();
        let qs = self.complex.drawqs().iter().map(|c| c.scaled(scale)).collect();
        let mut us = Vec::with_capacity(self.witnesses.len());
        for &tri in &self.witnesses {
            us.push(projected_inner_triangle(self.complex, tri, scale)?);
        }
        let tessellation = match self.tessellator {
            Some(tess) => Some(tess.generate_tesselation(self.complex)?.scaled(scale)),
            None => None,
        };
        Ok(Frame {
            ps,
            qs,
            us,
            convex: tessellation.as_ref().map(|t| t.convex_hull.clone()),
            tessellation,
        })
    }
}

impl Iterator for Animation<'_> {
    type Item = FlagResult<(i64, Frame)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let key = self.keys.next()?;
        let stepped = self.flow.step(self.complex, self.t_step);
        let result = match stepped {
            Ok(()) => self.sample().map(|frame| (key, frame)),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::debug!(key, error = %e, "animation stopped");
            self.failed = true;
        }
        Some(result)
    }
}

/// A witness triangle whose inner helper lines collapse is drawn as three nulls.
fn projected_inner_triangle(
    complex: &FlagComplex,
    triangle: Triangle,
    scale: f64,
) -> FlagResult<Vec<Option<[f64; 2]>>> {
    match complex.get_projected_us(triangle) {
        Ok(us) => Ok(us.iter().map(|u| u.scaled(scale)).collect()),
        Err(FlagError::CoincidentPoints) => {
            tracing::debug!(?triangle, "inner triangle undefined");
            Ok(vec![None; 3])
        }
        Err(e) => Err(e),
    }
}

/// Run a whole animation and collect its frames by key.
pub fn animate(
    complex: &mut FlagComplex,
    trafo: Trafo,
    cfg: &AnimationCfg,
    tessellator: Option<&dyn Tessellator>,
) -> FlagResult<Frames> {
    let frames = Animation::new(complex, trafo, cfg, tessellator)?.collect::<FlagResult<Frames>>()?;
    tracing::info!(%trafo, frames = frames.len(), "animation finished");
    Ok(frames)
}
