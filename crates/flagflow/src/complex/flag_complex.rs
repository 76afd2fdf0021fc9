//! The `FlagComplex` container: flags, derived lines/corners, chart cache.

use nalgebra::Vector2;

use super::types::{ChartPoint, Triangle};
use crate::error::{FlagError, FlagResult};
use crate::proj::{connecting_line, line_intersection, project_point, rotate_vectors, Mat3, Vec3};

/// An ordered tuple of flags `(p[i], d[i])` in RP².
///
/// Invariants:
/// - `p`, `d`, `l`, `q` always have the same length `n`.
/// - `l[i] = p[i] × d[i]` and `q[i] = l[i-1] × l[i]` (indices mod `n`) hold
///   whenever control returns to the caller; every mutator refreshes.
/// - No flag is degenerate: `p[i]` and `d[i]` are distinct projective points.
/// - `drawps`/`drawqs` are a cache for the projection plane; `draw_complex()`
///   rebuilds them.
#[derive(Clone, Debug, Default)]
pub struct FlagComplex {
    pub(crate) ps: Vec<Vec3>,
    pub(crate) ds: Vec<Vec3>,
    pub(crate) ls: Vec<Vec3>,
    pub(crate) qs: Vec<Vec3>,
    projection_plane: Option<Vec3>,
    drawps: Vec<ChartPoint>,
    drawqs: Vec<ChartPoint>,
    drawps_at_infinity: Vec<usize>,
    drawqs_at_infinity: Vec<usize>,
    triangles: Vec<Triangle>,
}

impl FlagComplex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Complex with the given `(point, direction)` flags and projection plane normal.
    pub fn from_flags(flags: &[(Vec3, Vec3)], projection_plane: &Vec3) -> FlagResult<Self> {
        let mut fc = Self::new();
        fc.set_projection_plane(projection_plane)?;
        for (p, d) in flags {
            fc.add_flag(*p, *d)?;
        }
        Ok(fc)
    }

    /// Append the flag through `p` in the direction of the point `direction`.
    ///
    /// O(1): only the new line, its corner and the wrap-around corner `q[0]`
    /// are computed. Returns the index of the new flag.
    pub fn add_flag(&mut self, p: Vec3, direction: Vec3) -> FlagResult<usize> {
        let index = self.ps.len();
        if p.norm() == 0.0 || direction.norm() == 0.0 {
            return Err(FlagError::ZeroVector);
        }
        if !p.iter().chain(direction.iter()).all(|x| x.is_finite()) {
            return Err(FlagError::DegenerateConfiguration("non-finite flag coordinates"));
        }
        let l = connecting_line(&p, &direction).map_err(|_| FlagError::DegenerateFlag { index })?;

        self.ps.push(p);
        self.ds.push(direction);
        self.ls.push(l);
        let prev = self.ls[index.saturating_sub(1)];
        self.qs.push(line_intersection(&prev, &l));
        self.qs[0] = line_intersection(&self.ls[index], &self.ls[0]);
        Ok(index)
    }

    /// Recompute all lines `l[i]` and corners `q[i]` from `p`, `d`. Idempotent.
    pub fn refresh(&mut self) {
        let n = self.ps.len();
        self.ls = self
            .ps
            .iter()
            .zip(self.ds.iter())
            .map(|(p, d)| p.cross(d))
            .collect();
        self.qs = (0..n)
            .map(|i| line_intersection(&self.ls[(i + n - 1) % n], &self.ls[i]))
            .collect();
    }

    /// Number of flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.ps.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ps.is_empty()
    }
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.ps
    }
    #[inline]
    pub fn directions(&self) -> &[Vec3] {
        &self.ds
    }
    #[inline]
    pub fn lines(&self) -> &[Vec3] {
        &self.ls
    }
    /// Corners `q[i] = l[i-1] × l[i]`.
    #[inline]
    pub fn intersections(&self) -> &[Vec3] {
        &self.qs
    }

    /// Point and line `(p[i], l[i])` of flag `index`.
    pub fn get_flag(&self, index: usize) -> FlagResult<(Vec3, Vec3)> {
        self.check_indices(&[index])?;
        Ok((self.ps[index], self.ls[index]))
    }

    pub(crate) fn check_indices(&self, indices: &[usize]) -> FlagResult<()> {
        let len = self.len();
        match indices.iter().find(|&&i| i >= len) {
            Some(&index) => Err(FlagError::IndexOutOfRange { index, len }),
            None => Ok(()),
        }
    }

    /// Apply `m` to every point and direction, then refresh.
    pub(crate) fn apply_to_all(&mut self, m: &Mat3) {
        for (p, d) in self.ps.iter_mut().zip(self.ds.iter_mut()) {
            *p = m * *p;
            *d = m * *d;
        }
        self.refresh();
    }

    // ---- Triangulation ----------------------------------------------------

    /// Regenerate the fan triangulation `[0, i, i+1]`, `i = 1..n-2`.
    pub fn create_triangulation(&mut self) -> &[Triangle] {
        let n = self.len();
        self.triangles = (1..n.saturating_sub(1)).map(|i| [0, i, i + 1]).collect();
        &self.triangles
    }
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    // ---- Chart projection -------------------------------------------------

    /// Normalize and store the chart normal; does not touch the draw cache.
    pub fn set_projection_plane(&mut self, normal: &Vec3) -> FlagResult<()> {
        let norm = normal.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(FlagError::ZeroVector);
        }
        self.projection_plane = Some(normal / norm);
        Ok(())
    }
    #[inline]
    pub fn projection_plane(&self) -> Option<Vec3> {
        self.projection_plane
    }

    fn chart(&self) -> FlagResult<(Vec3, Mat3)> {
        let plane = self.projection_plane.ok_or(FlagError::MissingProjectionPlane)?;
        Ok((plane, rotate_vectors(&plane, &Vec3::new(0.0, 0.0, 1.0))))
    }

    /// Refresh, then project every `p[i]` and `q[i]` into the chart.
    ///
    /// Points at infinity become `ChartPoint::AtInfinity` and their indices are
    /// recorded; they never abort the batch.
    pub fn draw_complex(&mut self) -> FlagResult<()> {
        let (plane, rotation) = self.chart()?;
        self.refresh();

        let (drawps, at_inf_p) = project_all(&self.ps, &plane, &rotation, "p");
        let (drawqs, at_inf_q) = project_all(&self.qs, &plane, &rotation, "q");
        self.drawps = drawps;
        self.drawps_at_infinity = at_inf_p;
        self.drawqs = drawqs;
        self.drawqs_at_infinity = at_inf_q;
        Ok(())
    }

    /// Draw the complex and return the projected flag points.
    pub fn get_projected_ps(&mut self) -> FlagResult<&[ChartPoint]> {
        self.draw_complex()?;
        Ok(&self.drawps)
    }

    #[inline]
    pub fn drawps(&self) -> &[ChartPoint] {
        &self.drawps
    }
    #[inline]
    pub fn drawqs(&self) -> &[ChartPoint] {
        &self.drawqs
    }
    #[inline]
    pub fn drawps_at_infinity(&self) -> &[usize] {
        &self.drawps_at_infinity
    }
    #[inline]
    pub fn drawqs_at_infinity(&self) -> &[usize] {
        &self.drawqs_at_infinity
    }

    /// Chart coordinates of a single point; propagates `AtInfinity`.
    pub fn get_two_dimensional_point(&self, point: &Vec3) -> FlagResult<Vector2<f64>> {
        let (plane, rotation) = self.chart()?;
        to_chart(&plane, &rotation, point)
    }

    /// Like `get_two_dimensional_point`, with points at infinity folded into the result.
    pub fn chart_point(&self, point: &Vec3) -> FlagResult<ChartPoint> {
        match self.get_two_dimensional_point(point) {
            Ok(v) => Ok(ChartPoint::Finite(v)),
            Err(FlagError::AtInfinity) => Ok(ChartPoint::AtInfinity),
            Err(e) => Err(e),
        }
    }

    /// Drawable segment on the line through `a` and `b`.
    ///
    /// If one endpoint is at infinity, `a + b` stands in for it. `None` if the
    /// line is the line at infinity of the chart.
    pub fn connecting_segment(&self, a: &Vec3, b: &Vec3) -> FlagResult<Option<[Vector2<f64>; 2]>> {
        let sum = a + b;
        let candidates = [(a, b), (&sum, b), (&sum, a)];
        for (x, y) in candidates {
            match (self.chart_point(x)?, self.chart_point(y)?) {
                (ChartPoint::Finite(u), ChartPoint::Finite(v)) => return Ok(Some([u, v])),
                _ => continue,
            }
        }
        tracing::debug!(?a, ?b, "connecting line lies at infinity");
        Ok(None)
    }
}

fn to_chart(plane: &Vec3, rotation: &Mat3, point: &Vec3) -> FlagResult<Vector2<f64>> {
    let projected = rotation * project_point(plane, point)?;
    Ok(Vector2::new(projected.x, projected.y))
}

fn project_all(
    points: &[Vec3],
    plane: &Vec3,
    rotation: &Mat3,
    label: &'static str,
) -> (Vec<ChartPoint>, Vec<usize>) {
    let mut drawn = Vec::with_capacity(points.len());
    let mut at_infinity = Vec::new();
    for (i, point) in points.iter().enumerate() {
        match to_chart(plane, rotation, point) {
            Ok(v) => drawn.push(ChartPoint::Finite(v)),
            Err(_) => {
                tracing::debug!(label, index = i, ?point, "point at infinity, not projected");
                at_infinity.push(i);
                drawn.push(ChartPoint::AtInfinity);
            }
        }
    }
    (drawn, at_infinity)
}
