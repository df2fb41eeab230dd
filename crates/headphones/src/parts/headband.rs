use muffle_mesh::{
    arc, grid_fill, quads_from_lines, scale_about_by, stitch_rings, Closure, Curve, MeshBuffer,
    MeshBuilder, MeshError, Result, Vector3, Winding,
};

use super::{column, firsts, lasts, reversed};
use crate::BuildConfig;

/// Points along every headband arc.
const BAND_POINTS: usize = 64;

/// One corner of a headband cross-section: an arc of `radius` around the Z axis at depth `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileBase {
    pub radius: f64,
    pub z: f64,
}

impl ProfileBase {
    pub const fn new(radius: f64, z: f64) -> Self {
        Self { radius, z }
    }

    fn arc(&self, start_deg: f64, end_deg: f64) -> Result<Curve> {
        arc(
            Vector3::new(0.0, 0.0, self.z),
            self.radius,
            BAND_POINTS,
            start_deg,
            end_deg,
            Closure::Open,
        )
    }
}

/// How a cross-section loop splits into the four sides of the end cap patches.
///
/// The profile bases are listed in loop order: `top` bases, then `left`, `bottom` and `right`.
/// `left` and `right` exclude the corners shared with `top` and `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideCounts {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl SideCounts {
    pub const fn total(&self) -> usize {
        self.top + self.left + self.bottom + self.right
    }
}

/// Cross-section of the side bars: twelve bases around a flat rectangle.
pub fn side_bar_profile(radius: f64, z: f64) -> (Vec<ProfileBase>, SideCounts) {
    bar_profile(radius, radius * 1.1, z)
}

/// The center bar is slightly thinner so it slides inside the side bars.
pub fn center_bar_profile(radius: f64, z: f64) -> (Vec<ProfileBase>, SideCounts) {
    bar_profile(radius * 1.02, radius * 1.08, z)
}

fn bar_profile(inner: f64, outer: f64, z: f64) -> (Vec<ProfileBase>, SideCounts) {
    let middle = (inner + outer) / 2.0;
    let bases = vec![
        ProfileBase::new(inner, z),
        ProfileBase::new(inner, z * 0.8),
        ProfileBase::new(inner, 0.0),
        ProfileBase::new(inner, -z * 0.8),
        ProfileBase::new(inner, -z),
        ProfileBase::new(middle, -z),
        ProfileBase::new(outer, -z),
        ProfileBase::new(outer, -z * 0.8),
        ProfileBase::new(outer, 0.0),
        ProfileBase::new(outer, z * 0.8),
        ProfileBase::new(outer, z),
        ProfileBase::new(middle, z),
    ];
    let counts = SideCounts {
        top: 5,
        left: 1,
        bottom: 5,
        right: 1,
    };
    (bases, counts)
}

/// The spine running inside the whole band. A plain rectangle, so the end caps need no
/// generated rows.
pub fn inner_bar_profile(radius: f64, z: f64) -> (Vec<ProfileBase>, SideCounts) {
    let bases = vec![
        ProfileBase::new(radius * 1.04, z * 0.8),
        ProfileBase::new(radius * 1.04, -z * 0.8),
        ProfileBase::new(radius * 1.06, -z * 0.8),
        ProfileBase::new(radius * 1.06, z * 0.8),
    ];
    let counts = SideCounts {
        top: 2,
        left: 0,
        bottom: 2,
        right: 0,
    };
    (bases, counts)
}

/// Top and bottom edges of the pad under the center bar.
pub fn cushion_profile(radius: f64, z: f64) -> [ProfileBase; 2] {
    [
        ProfileBase::new(radius * 1.02, z * 0.75),
        ProfileBase::new(radius * 1.02, -z * 0.6),
    ]
}

/// A curved bar of the headband spanning `start_deg..end_deg` around the Z axis.
///
/// One arc is swept per profile base and consecutive arcs are stitched into a closed tube.
/// Both ends are capped by patches lofted from the arc end points with [`grid_fill`].
pub fn headband_bar(
    config: &BuildConfig,
    bases: &[ProfileBase],
    counts: SideCounts,
    start_deg: f64,
    end_deg: f64,
) -> Result<MeshBuffer> {
    if counts.total() > bases.len() {
        return Err(MeshError::LengthMismatch(counts.total(), bases.len()));
    }

    let arcs = bases
        .iter()
        .map(|base| base.arc(start_deg, end_deg))
        .collect::<Result<Vec<Curve>>>()?;

    let (top, rest) = arcs.split_at(counts.top);
    let (left, rest) = rest.split_at(counts.left);
    let (bottom, rest) = rest.split_at(counts.bottom);
    let right = &rest[..counts.right];

    let mut builder = MeshBuilder::new(config.precision);
    builder.add_quads(stitch_rings(&arcs, Closure::Closed, Winding::Reversed)?);

    for (end, winding) in [(0, Winding::Forward), (BAND_POINTS - 1, Winding::Reversed)] {
        let rows = grid_fill(
            &reversed(&column(top, end)),
            &column(bottom, end),
            &reversed(&column(left, end)),
            &column(right, end),
        )?;
        builder.add_grid(&rows, winding)?;
    }

    Ok(builder.build())
}

/// The pad hanging under the center bar.
///
/// The underside is a stack of arcs from the top base down to the bottom base, all on the top
/// base's radius except the last, sagging slightly. A band around the underside's edge lifts
/// and widens into the pad's outline.
pub fn headband_cushion(
    config: &BuildConfig,
    bases: [ProfileBase; 2],
    start_deg: f64,
    end_deg: f64,
) -> Result<MeshBuffer> {
    const INNER_ARCS: usize = BAND_POINTS / 16;

    let [upper, lower] = bases;
    let sag = Vector3::new(0.0, -upper.radius / 20.0, 0.0);
    let sagging = |base: ProfileBase| -> Result<Curve> {
        Ok(base
            .arc(start_deg, end_deg)?
            .into_iter()
            .map(|p| p + sag)
            .collect())
    };

    let step = (upper.z - lower.z) / (INNER_ARCS + 1) as f64;
    let mut layers = vec![sagging(upper)?];
    for i in 0..INNER_ARCS {
        layers.push(sagging(ProfileBase::new(
            upper.radius,
            upper.z - step * (i + 1) as f64,
        ))?);
    }
    layers.push(sagging(lower)?);

    let top = &layers[0];
    let bottom = &layers[layers.len() - 1];
    let inner = &layers[1..layers.len() - 1];

    let mut edge = top.clone();
    edge.extend(lasts(inner));
    edge.extend(reversed(bottom));
    edge.extend(reversed(&firsts(inner)));
    edge.push(top[0]);

    let widen = Vector3::new(1.1, 1.0, 1.1);
    let origin = Vector3::new(0.0, 0.0, 0.0);
    let pad: Curve = edge
        .iter()
        .map(|&p| scale_about_by(p - sag, origin, widen))
        .collect();

    let mut builder = MeshBuilder::new(config.precision);
    builder
        .add_quads(stitch_rings(&layers, Closure::Open, Winding::Reversed)?)
        .add_quads(quads_from_lines(&edge, &pad)?);
    Ok(builder.build())
}
