use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::geometry::{Triangle, Vector3};

/// Number of decimal places coordinates are rounded to before welding.
///
/// This is the only knob controlling how aggressively points are merged: two points weld iff
/// all three coordinates are identical after rounding. There is no distance search, so two
/// points a hair apart that round to different values stay separate however close they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(u32);

impl Precision {
    /// Used by the detailed part builders.
    pub const FINE: Precision = Precision(5);
    /// Enough for coarse parts where seams are generated from the same source points.
    pub const COARSE: Precision = Precision(3);

    /// Beyond 15 places an f64 has no digits left to round.
    const MAX_DECIMALS: u32 = 15;

    pub fn decimals(decimals: u32) -> Self {
        Precision(decimals.min(Self::MAX_DECIMALS))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::FINE
    }
}

trait RoundTo {
    fn round_to(self, precision: Precision) -> Self;
}

impl RoundTo for f64 {
    fn round_to(self, precision: Precision) -> Self {
        // Ties go toward positive infinity, so -2.5 rounds to -2.
        let factor = 10f64.powi(precision.0 as i32);
        (self * factor + 0.5).floor() / factor
    }
}

impl RoundTo for Vector3 {
    fn round_to(self, precision: Precision) -> Self {
        Vector3 {
            x: self.x.round_to(precision),
            y: self.y.round_to(precision),
            z: self.z.round_to(precision),
        }
    }
}

/// Floats are not hash nor eq, so rounded points are keyed through the ordered-float crate.
/// That also folds -0.0 onto 0.0, which rounding tiny negative values produces.
type WeldKey = cgmath::Vector3<OrderedFloat<f64>>;

fn weld_key(p: Vector3) -> WeldKey {
    WeldKey {
        x: OrderedFloat(p.x),
        y: OrderedFloat(p.y),
        z: OrderedFloat(p.z),
    }
}

/// One triangle of an index buffer, as three indices into the matching point list.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

/// A welded triangle stream: unique rounded points plus one index per stream entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexIndex {
    pub points: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl VertexIndex {
    /// Welds a flat triangle stream (three points per triangle).
    ///
    /// Points are visited in stream order; the first occurrence of each rounded position is
    /// appended to `points` and every entry, repeated or not, emits one index. The index
    /// buffer therefore keeps the triangle order and winding of the stream. A trailing partial
    /// triangle is ignored.
    pub fn weld(stream: &[Vector3], precision: Precision) -> Self {
        let usable = stream.len() / 3 * 3;
        let mut points = Vec::new();
        let mut indices = Vec::with_capacity(usable);
        let mut seen: HashMap<WeldKey, u32> = HashMap::new();

        for &point in &stream[..usable] {
            let rounded = point.round_to(precision);
            let index = *seen.entry(weld_key(rounded)).or_insert_with(|| {
                points.push(rounded);
                (points.len() - 1) as u32
            });
            indices.push(index);
        }

        if usable != stream.len() {
            log::warn!(
                "dropping {} trailing points that do not form a triangle",
                stream.len() - usable
            );
        }
        log::trace!(
            "welded {} stream points into {} unique points",
            usable,
            points.len()
        );

        VertexIndex { points, indices }
    }

    pub fn from_triangles(triangles: &[Triangle], precision: Precision) -> Self {
        let stream: Vec<Vector3> = triangles.iter().flat_map(|t| t.points()).collect();
        Self::weld(&stream, precision)
    }

    /// Rebuilds the (rounded) triangle stream this index was welded from.
    pub fn expand(&self) -> Vec<Vector3> {
        self.indices
            .iter()
            .map(|&i| self.points[i as usize])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriangleMesh;

    #[test]
    fn round_to_decimals() {
        assert_eq!(1.234_567_f64.round_to(Precision::decimals(3)), 1.235);
        assert_eq!((-1.234_4_f64).round_to(Precision::decimals(3)), -1.234);
        assert_eq!(2.5_f64.round_to(Precision::decimals(0)), 3.0);
    }

    #[test]
    fn ties_round_up() {
        assert_eq!((-2.5_f64).round_to(Precision::decimals(0)), -2.0);
        assert_eq!((-0.125_f64).round_to(Precision::decimals(2)), -0.12);
        assert_eq!((-2.6_f64).round_to(Precision::decimals(0)), -3.0);
    }

    #[test]
    fn negative_ties_weld_with_the_value_above() {
        let stream = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-0.5, 0.0, 0.0),
        ];
        let index = VertexIndex::weld(&stream, Precision::decimals(0));
        assert_eq!(index.indices, vec![0, 1, 0]);
    }

    #[test]
    fn precision_is_capped() {
        assert_eq!(Precision::decimals(40).get(), 15);
        assert_eq!(Precision::default(), Precision::FINE);
    }

    #[test]
    fn negative_zero_welds_with_zero() {
        let stream = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-0.000_001, 0.0, -0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ];
        let index = VertexIndex::weld(&stream, Precision::FINE);
        assert_eq!(index.points.len(), 4);
        assert_eq!(index.indices, vec![0, 1, 2, 0, 1, 3]);
    }

    #[test]
    fn trailing_points_are_dropped() {
        let stream = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(5.0, 5.0, 5.0),
        ];
        let index = VertexIndex::weld(&stream, Precision::FINE);
        assert_eq!(index.indices.len(), 3);
        assert_eq!(index.points.len(), 3);
    }

    #[test]
    fn facets_follow_indices() {
        let triangles = [
            Triangle::new(
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ),
            Triangle::new(
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
        ];
        let index = VertexIndex::from_triangles(&triangles, Precision::COARSE);
        let facets = index.facets().collect::<Vec<_>>();
        assert_eq!(
            facets,
            vec![
                Facet { p0: 0, p1: 1, p2: 2 },
                Facet { p0: 0, p1: 2, p2: 3 }
            ]
        );
    }
}
