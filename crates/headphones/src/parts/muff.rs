use muffle_mesh::{
    arc, centroid, circle, quads_from_lines, rotate_about, scale_about, scale_about_by,
    stitch_rings, Closure, Curve, MeshBuffer, MeshBuilder, Result, Vector3, Winding,
};

use super::{column, firsts, lasts, reversed};
use crate::BuildConfig;

const UNIT_X: Vector3 = Vector3 {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};
const UNIT_Y: Vector3 = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};
const UNIT_Z: Vector3 = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 1.0,
};

/// Points on a full ring. The last point repeats the first so ribbons close the seam.
const RING_POINTS: usize = 64 + 1;

fn offset_z(center: Vector3, z: f64) -> Vector3 {
    center + Vector3::new(0.0, 0.0, z)
}

/// The disc-shaped shell of the ear cup: a band between two circles with the back closed.
pub fn muff_base(
    config: &BuildConfig,
    center: Vector3,
    radius: f64,
    thickness: f64,
) -> Result<MeshBuffer> {
    let front = circle(offset_z(center, thickness / 2.0), radius, RING_POINTS, Closure::Open)?;
    let back = circle(offset_z(center, -thickness / 2.0), radius, RING_POINTS, Closure::Open)?;

    let mut builder = MeshBuilder::new(config.precision);
    builder
        .add_quads(quads_from_lines(&front, &back)?)
        .add_fan(&back, None);
    Ok(builder.build())
}

/// (radius factor, z as a fraction of the thickness) for each ring of a button profile.
const BUTTON_PROFILE: [(f64, f64); 7] = [
    (0.98, 0.5),
    (1.01, 0.5),
    (1.04, 0.5),
    (1.04, -1.0 / 3.0),
    (1.04, -0.5),
    (1.01, -0.5),
    (0.98, -0.5),
];

/// Buttons along the lower rim of the cup, one mesh per button.
///
/// `amount` buttons share `total_angle` degrees centered on 270°, separated by `gap_angle`
/// degrees. Each button gets the same share of the rim's 64 segments per full turn.
pub fn muff_buttons(
    config: &BuildConfig,
    center: Vector3,
    radius: f64,
    thickness: f64,
    amount: usize,
    total_angle: f64,
    gap_angle: f64,
) -> Result<Vec<MeshBuffer>> {
    if amount == 0 {
        return Ok(Vec::new());
    }

    let point_count = (64.0 * total_angle / 360.0).round() as usize;
    let gaps = gap_angle * (amount - 1) as f64;
    let angle_per_button = (total_angle - gaps) / amount as f64;
    let start = 270.0 - total_angle / 2.0;

    (0..amount)
        .map(|i| -> Result<MeshBuffer> {
            let i = i as f64;
            let button_start = start + angle_per_button * i + gap_angle * i;
            let button_end = button_start + angle_per_button;

            let arcs = BUTTON_PROFILE
                .iter()
                .map(|&(factor, z)| {
                    arc(
                        offset_z(center, thickness * z),
                        radius * factor,
                        point_count,
                        button_start,
                        button_end,
                        Closure::Open,
                    )
                })
                .collect::<Result<Vec<Curve>>>()?;

            let mut builder = MeshBuilder::new(config.precision);
            builder
                .add_quads(stitch_rings(&arcs, Closure::Open, Winding::Forward)?)
                .add_fan(&reversed(&lasts(&arcs)), None)
                .add_fan(&firsts(&arcs), None);
            Ok(builder.build())
        })
        .collect()
}

const BRACE_POINTS: usize = 55;
const BRACE_CAP_POINTS: usize = 15;

/// Half-round end cap of the brace, hanging below `pivot` in the YZ plane.
fn brace_cap(pivot: Vector3, thickness: f64) -> Result<Curve> {
    Ok(
        arc(pivot, thickness / 2.0, BRACE_CAP_POINTS, 180.0, 360.0, Closure::Open)?
            .into_iter()
            .map(|p| rotate_about(p, pivot, UNIT_Y, 90.0))
            .collect(),
    )
}

/// The half-ring yoke holding the cup, with the screw column that mounts it to the band.
///
/// The cross-section is a rectangle traced by ten arcs: five on the outer radius
/// (`radius * 1.1`) going front to back, then five on the inner radius going back to front.
/// The ends are closed by half-round caps, and the upper surface has a hole under the screw
/// column.
pub fn muff_brace(
    config: &BuildConfig,
    center: Vector3,
    radius: f64,
    thickness: f64,
    width: f64,
) -> Result<MeshBuffer> {
    let outer = radius * 1.1;
    let t = thickness;
    let profile = [
        (outer, -t / 2.0),
        (outer, -t / 4.0),
        (outer, 0.0),
        (outer, t / 4.0),
        (outer, t / 2.0),
        (radius, t / 2.0),
        (radius, t / 4.0),
        (radius, 0.0),
        (radius, -t / 4.0),
        (radius, -t / 2.0),
    ];
    let arcs = profile
        .iter()
        .map(|&(r, z)| arc(offset_z(center, z), r, BRACE_POINTS, 0.0, 180.0, Closure::Open))
        .collect::<Result<Vec<Curve>>>()?;

    let top = &arcs[..5];
    let center_top = &arcs[1..4];
    let center_bottom = &arcs[6..9];
    let (top_middle, bottom_middle) = (&arcs[2], &arcs[7]);

    let front_caps = [
        brace_cap(top_middle[BRACE_POINTS - 1], t)?,
        brace_cap(bottom_middle[BRACE_POINTS - 1], t)?,
    ];
    let back_caps = [brace_cap(top_middle[0], t)?, brace_cap(bottom_middle[0], t)?];

    // The screw column sits on points mid-2..=mid+2 of the outer arcs.
    let mid = BRACE_POINTS / 2;
    let (lo, hi) = (mid - 2, mid + 2);

    let mut quads = Vec::new();
    for i in 0..arcs.len() {
        let mut ribbon = quads_from_lines(&arcs[(i + 1) % arcs.len()], &arcs[i])?;
        if i < top.len() - 1 {
            ribbon.drain(lo..hi);
        }
        quads.extend(ribbon);
    }

    let mut screw_base = reversed(&top[0][lo..=hi]);
    screw_base.extend(column(center_top, lo));
    screw_base.extend_from_slice(&top[top.len() - 1][lo..=hi]);
    screw_base.extend(reversed(&column(center_top, hi)));
    screw_base.push(screw_base[0]);

    let lower_y = screw_base[0].y + width / 3.0;
    let lower: Curve = screw_base
        .iter()
        .map(|p| Vector3::new(p.x, lower_y, p.z))
        .collect();
    let lower_center = centroid(&lower[..lower.len() - 1]) + Vector3::new(0.0, 0.2, 0.0);
    let lower: Curve = lower
        .into_iter()
        .map(|p| scale_about(p, lower_center, 0.7))
        .collect();

    let upper_center = lower_center + Vector3::new(0.0, width / 3.0, 0.0);
    let upper: Curve = circle(upper_center, width / 2.0, screw_base.len(), Closure::Open)?
        .into_iter()
        .map(|p| rotate_about(p, upper_center, UNIT_X, 90.0))
        .map(|p| rotate_about(p, upper_center, UNIT_Y, 135.0))
        .collect();
    let column_top: Curve = upper
        .iter()
        .map(|&p| p + Vector3::new(0.0, width / 2.0, 0.0))
        .collect();

    quads.extend(quads_from_lines(&front_caps[1], &front_caps[0])?);
    quads.extend(quads_from_lines(&back_caps[0], &back_caps[1])?);
    quads.extend(stitch_rings(
        &[screw_base, lower, upper, column_top],
        Closure::Open,
        Winding::Forward,
    )?);

    let end_loop = |cap: &Curve, rest: Vec<Vector3>| -> Vec<Vector3> {
        cap.iter().copied().chain(rest).collect()
    };

    let mut builder = MeshBuilder::new(config.precision);
    builder
        .add_quads(quads)
        .add_fan(&end_loop(&front_caps[0], lasts(center_top)), None)
        .add_fan(&reversed(&end_loop(&back_caps[0], firsts(center_top))), None)
        .add_fan(&end_loop(&back_caps[1], firsts(center_bottom)), None)
        .add_fan(&reversed(&end_loop(&front_caps[1], lasts(center_bottom))), None);
    Ok(builder.build())
}

const CUSHION_PROFILE_POINTS: usize = 16;

/// The padded ring in front of the cup.
///
/// A 240° profile arc is swept around the cup axis to form a half torus. Each profile gets a
/// short skirt hanging from its last point, then the whole cushion is pushed back by a fifth
/// of the thickness and flattened along the axis.
pub fn muff_cushion(
    config: &BuildConfig,
    center: Vector3,
    radius: f64,
    thickness: f64,
) -> Result<MeshBuffer> {
    let sub_radius = radius * 0.3;
    let ring = circle(center, radius * 1.075 - sub_radius, RING_POINTS, Closure::Open)?;
    let step = 360.0 / (RING_POINTS - 1) as f64;
    let squash = Vector3::new(1.0, 1.0, 0.8);
    let push = Vector3::new(0.0, 0.0, -thickness / 5.0);

    let profiles = ring
        .iter()
        .enumerate()
        .map(|(i, &sub_center)| -> Result<Curve> {
            let mut profile: Curve = arc(
                sub_center,
                sub_radius,
                CUSHION_PROFILE_POINTS,
                -60.0,
                180.0,
                Closure::Open,
            )?
            .into_iter()
            .map(|p| rotate_about(p, sub_center, UNIT_Z, step * i as f64))
            .map(|p| rotate_about(p, center, sub_center - center, 90.0))
            .collect();

            let rim = profile[profile.len() - 1];
            profile.extend(
                [thickness / 4.0, thickness / 4.0 * 3.0, thickness]
                    .iter()
                    .map(|&drop| rim + Vector3::new(0.0, 0.0, -drop)),
            );

            Ok(profile
                .into_iter()
                .map(|p| scale_about_by(p + push, center, squash))
                .collect())
        })
        .collect::<Result<Vec<Curve>>>()?;

    let mut builder = MeshBuilder::new(config.precision);
    builder
        .add_quads(stitch_rings(&profiles, Closure::Closed, Winding::Forward)?)
        .add_fan(&reversed(&lasts(&profiles)), None);
    Ok(builder.build())
}
