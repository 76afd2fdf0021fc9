//! Tessellation contract for fill rendering, plus a built-in implementation.
//!
//! The animation driver calls a `Tessellator` once per frame, after the
//! complex has been drawn, and rescales its output like the flag points.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::complex::{ChartPoint, FlagComplex};
use crate::error::FlagResult;

/// Output of one tessellation pass, in chart coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tessellation {
    pub initial_polygon: Vec<Vector2<f64>>,
    pub convex_hull: Vec<Vector2<f64>>,
    pub tiles: Vec<Vec<Vector2<f64>>>,
}

/// A tessellation rescaled to display coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TessellationFrame {
    pub initial_polygon: Vec<[f64; 2]>,
    pub convex_hull: Vec<[f64; 2]>,
    pub tiles: Vec<Vec<[f64; 2]>>,
}

impl Tessellation {
    pub fn scaled(&self, scale: f64) -> TessellationFrame {
        let sc = |v: &Vector2<f64>| [v.x * scale, v.y * scale];
        TessellationFrame {
            initial_polygon: self.initial_polygon.iter().map(sc).collect(),
            convex_hull: self.convex_hull.iter().map(sc).collect(),
            tiles: self
                .tiles
                .iter()
                .map(|tile| tile.iter().map(sc).collect())
                .collect(),
        }
    }
}

/// Recursive subdivision of a drawn flag complex.
pub trait Tessellator {
    /// Called after `draw_complex()`; reads the chart cache and triangulation.
    fn generate_tesselation(&self, complex: &FlagComplex) -> FlagResult<Tessellation>;
}

/// Hull of the drawn flag points and corners, with the fan triangles of the
/// flag points split `depth` times into four midpoint triangles.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullTessellator {
    pub depth: usize,
}

impl Tessellator for HullTessellator {
    fn generate_tesselation(&self, complex: &FlagComplex) -> FlagResult<Tessellation> {
        let initial_polygon: Vec<_> = complex.drawps().iter().filter_map(ChartPoint::finite).collect();
        let mut cloud = initial_polygon.clone();
        cloud.extend(complex.drawqs().iter().filter_map(ChartPoint::finite));
        let convex_hull = convex_hull(&cloud);

        let mut tiles = Vec::new();
        for tri in complex.triangles() {
            let corners = tri.map(|i| complex.drawps().get(i).and_then(ChartPoint::finite));
            if let [Some(a), Some(b), Some(c)] = corners {
                subdivide([a, b, c], self.depth, &mut tiles);
            }
        }
        Ok(Tessellation {
            initial_polygon,
            convex_hull,
            tiles,
        })
    }
}

fn subdivide(tri: [Vector2<f64>; 3], depth: usize, out: &mut Vec<Vec<Vector2<f64>>>) {
    if depth == 0 {
        out.push(tri.to_vec());
        return;
    }
    let [a, b, c] = tri;
    let (ab, bc, ca) = ((a + b) * 0.5, (b + c) * 0.5, (c + a) * 0.5);
    for t in [[a, ab, ca], [ab, b, bc], [ca, bc, c], [ab, bc, ca]] {
        subdivide(t, depth - 1, out);
    }
}

/// Counter-clockwise hull of `points`; repeated and collinear points are dropped.
fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if sorted.len() < 3 {
        return sorted;
    }
    let lower = left_turn_chain(sorted.iter());
    let upper = left_turn_chain(sorted.iter().rev());
    // Each chain ends where the other one starts.
    lower[..lower.len() - 1]
        .iter()
        .chain(&upper[..upper.len() - 1])
        .copied()
        .collect()
}

/// Chain through `points` in order that only ever turns left.
fn left_turn_chain<'a>(points: impl Iterator<Item = &'a Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut chain: Vec<Vector2<f64>> = Vec::new();
    for &p in points {
        while let [.., a, b] = chain.as_slice() {
            if (b - a).perp(&(p - a)) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
