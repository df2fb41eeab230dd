use std::f64::consts::PI;

use muffle_mesh::{MeshBuffer, Vector3};

use crate::error::{BuildError, Result};
use crate::parts::*;
use crate::BuildConfig;

/// Handle to a part of an [`Assembly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(usize);

impl PartId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Local transform of a part relative to its parent. Rotations are Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Vector3,
    pub scaling: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scaling: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

/// A node of the assembly. Pure pivots have no mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub mesh: Option<MeshBuffer>,
    pub transform: Transform,
    pub parent: Option<PartId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headband {
    /// Spine of the band. Every other band part hangs from it.
    pub inner: PartId,
    pub center: PartId,
    pub left: PartId,
    pub right: PartId,
    pub cushion: PartId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Muff {
    pub root: PartId,
    pub brace: PartId,
    pub base: PartId,
    pub cushion: PartId,
    pub buttons: Vec<PartId>,
}

/// The headphones as a flat list of parts linked by parent handles.
///
/// Parents are always added before their children, so walking a part's ancestry always
/// terminates.
#[derive(Debug, Clone)]
pub struct Assembly {
    parts: Vec<Part>,
    pub headband: Headband,
    pub left_muff: Muff,
    pub right_muff: Muff,
}

const BAND_RADIUS: f64 = 5.5;
const BAND_DEPTH: f64 = 0.75;
const BAND_GAP: f64 = 2.0;
const SIDE_BAR_START: f64 = -15.0;
const SIDE_BAR_END: f64 = 180.0 + 15.0;
const SIDE_BAR_SWEEP: f64 = 60.0;
const BAND_LIFT: f64 = 4.0;
/// Roll of the side bars before the rig takes over.
const BAND_SPREAD: f64 = 1.5 * PI / 16.0;

const MUFF_RADIUS: f64 = 3.5;
const MUFF_BASE_THICKNESS: f64 = 1.5;
const MUFF_CUSHION_THICKNESS: f64 = 1.5;
const MUFF_BRACE_THICKNESS: f64 = 1.0;
const MUFF_BRACE_WIDTH: f64 = 0.5;
const MUFF_OFFSET_X: f64 = 4.9;
const MUFF_OFFSET_Y: f64 = -4.8 * 1.05;
const MUFF_SCALE: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Mirrors values for the right-hand side.
    fn mirror(&self, value: f64) -> f64 {
        match self {
            Side::Left => value,
            Side::Right => -value,
        }
    }
}

impl Assembly {
    pub fn build(config: &BuildConfig) -> Result<Self> {
        let mut parts = Vec::new();
        let headband = build_headband(config, &mut parts)?;
        let left_muff = build_muff(config, &mut parts, Side::Left, headband.left, false)?;
        let right_muff = build_muff(config, &mut parts, Side::Right, headband.right, true)?;

        log::debug!("assembled {} parts", parts.len());
        Ok(Self {
            parts,
            headband,
            left_muff,
            right_muff,
        })
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<PartId> {
        self.parts.iter().position(|p| p.name == name).map(PartId)
    }

    pub fn transform_mut(&mut self, id: PartId) -> Option<&mut Transform> {
        self.parts.get_mut(id.0).map(|p| &mut p.transform)
    }

    /// Parents of `id`, closest first.
    pub fn ancestors(&self, id: PartId) -> Ancestors<'_> {
        Ancestors {
            assembly: self,
            next: self.part(id).and_then(|p| p.parent),
        }
    }

    /// Ids of the parts that carry geometry.
    pub fn meshes(&self) -> impl Iterator<Item = (PartId, &MeshBuffer)> + '_ {
        self.parts
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.mesh.as_ref().map(|m| (PartId(i), m)))
    }
}

pub struct Ancestors<'a> {
    assembly: &'a Assembly,
    next: Option<PartId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = PartId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.assembly.part(current).and_then(|p| p.parent);
        Some(current)
    }
}

fn add_part(
    parts: &mut Vec<Part>,
    name: String,
    mesh: Option<MeshBuffer>,
    parent: Option<PartId>,
) -> PartId {
    if let Some(mesh) = &mesh {
        log::debug!(
            "{}: {} points, {} triangles",
            name,
            mesh.points.len(),
            mesh.indices.len() / 3
        );
    }
    parts.push(Part {
        name,
        mesh,
        transform: Transform::default(),
        parent,
    });
    PartId(parts.len() - 1)
}

fn build_headband(config: &BuildConfig, parts: &mut Vec<Part>) -> Result<Headband> {
    let build = |name: &str, result: muffle_mesh::Result<MeshBuffer>| {
        result.map_err(BuildError::part(name))
    };

    let (inner_bases, inner_counts) = inner_bar_profile(BAND_RADIUS, BAND_DEPTH);
    let inner_mesh = build(
        "headband_inner",
        headband_bar(
            config,
            &inner_bases,
            inner_counts,
            SIDE_BAR_START + BAND_GAP,
            SIDE_BAR_END - BAND_GAP,
        ),
    )?;
    let inner = add_part(parts, "headband_inner".into(), Some(inner_mesh), None);
    parts[inner.0].transform.position.y += BAND_LIFT;

    let (center_bases, center_counts) = center_bar_profile(BAND_RADIUS, BAND_DEPTH);
    let center_mesh = build(
        "headband_center",
        headband_bar(
            config,
            &center_bases,
            center_counts,
            SIDE_BAR_START + SIDE_BAR_SWEEP + BAND_GAP,
            SIDE_BAR_END - SIDE_BAR_SWEEP - BAND_GAP,
        ),
    )?;
    let center = add_part(parts, "headband_center".into(), Some(center_mesh), Some(inner));

    // The right bar starts at -15°, on the +X side; the left one ends at 195°.
    let (side_bases, side_counts) = side_bar_profile(BAND_RADIUS, BAND_DEPTH);
    let right_mesh = build(
        "headband_right",
        headband_bar(
            config,
            &side_bases,
            side_counts,
            SIDE_BAR_START,
            SIDE_BAR_START + SIDE_BAR_SWEEP,
        ),
    )?;
    let right = add_part(parts, "headband_right".into(), Some(right_mesh), Some(inner));
    parts[right.0].transform.rotation.z = -BAND_SPREAD;

    let left_mesh = build(
        "headband_left",
        headband_bar(
            config,
            &side_bases,
            side_counts,
            SIDE_BAR_END - SIDE_BAR_SWEEP,
            SIDE_BAR_END,
        ),
    )?;
    let left = add_part(parts, "headband_left".into(), Some(left_mesh), Some(inner));
    parts[left.0].transform.rotation.z = BAND_SPREAD;

    let cushion_mesh = build(
        "headband_cushion",
        headband_cushion(
            config,
            cushion_profile(BAND_RADIUS, BAND_DEPTH),
            SIDE_BAR_START + SIDE_BAR_SWEEP + BAND_GAP * 5.0,
            SIDE_BAR_END - SIDE_BAR_SWEEP - BAND_GAP * 5.0,
        ),
    )?;
    let cushion = add_part(parts, "headband_cushion".into(), Some(cushion_mesh), Some(inner));

    Ok(Headband {
        inner,
        center,
        left,
        right,
        cushion,
    })
}

fn build_muff(
    config: &BuildConfig,
    parts: &mut Vec<Part>,
    side: Side,
    hanger: PartId,
    has_buttons: bool,
) -> Result<Muff> {
    let prefix = format!("{}_muff", side.name());
    let center = Vector3::new(0.0, 0.0, 0.0);

    let root = add_part(parts, prefix.clone(), None, Some(hanger));
    parts[root.0].transform = Transform {
        position: Vector3::new(side.mirror(-MUFF_OFFSET_X), MUFF_OFFSET_Y, 0.0),
        rotation: Vector3::new(-PI / 16.0, side.mirror(PI / 2.0), 0.0),
        scaling: Vector3::new(MUFF_SCALE, MUFF_SCALE * 1.1, MUFF_SCALE),
    };

    let name = format!("{prefix}_brace");
    let mesh = muff_brace(
        config,
        center,
        MUFF_RADIUS * 1.01,
        MUFF_BRACE_THICKNESS,
        MUFF_BRACE_WIDTH,
    )
    .map_err(BuildError::part(&name))?;
    let brace = add_part(parts, name, Some(mesh), Some(root));

    let name = format!("{prefix}_base");
    let mesh = muff_base(config, center, MUFF_RADIUS, MUFF_BASE_THICKNESS)
        .map_err(BuildError::part(&name))?;
    let base = add_part(parts, name, Some(mesh), Some(brace));
    parts[base.0].transform.rotation.x = PI / 16.0;

    let name = format!("{prefix}_cushion");
    let mesh = muff_cushion(config, center, MUFF_RADIUS, MUFF_CUSHION_THICKNESS)
        .map_err(BuildError::part(&name))?;
    let cushion = add_part(parts, name, Some(mesh), Some(base));
    parts[cushion.0].transform.position.z = MUFF_BASE_THICKNESS;

    let mut buttons = Vec::new();
    if has_buttons {
        let name = format!("{prefix}_buttons");
        let meshes = muff_buttons(
            config,
            center,
            MUFF_RADIUS,
            MUFF_BASE_THICKNESS / 3.0,
            3,
            72.0,
            3.0,
        )
        .map_err(BuildError::part(&name))?;
        for (i, mesh) in meshes.into_iter().enumerate() {
            buttons.push(add_part(parts, format!("{name}_{i}"), Some(mesh), Some(base)));
        }
    }

    Ok(Muff {
        root,
        brace,
        base,
        cushion,
        buttons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_defaults_to_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(t.rotation, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(t.scaling, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn sides_mirror() {
        assert_eq!(Side::Left.mirror(2.0), 2.0);
        assert_eq!(Side::Right.mirror(2.0), -2.0);
        assert_eq!(Side::Right.name(), "right");
    }

    #[test]
    fn ancestry_walks_to_the_root() {
        let mut parts = Vec::new();
        let a = add_part(&mut parts, "a".into(), None, None);
        let b = add_part(&mut parts, "b".into(), None, Some(a));
        let c = add_part(&mut parts, "c".into(), None, Some(b));
        let headband = Headband {
            inner: a,
            center: a,
            left: a,
            right: a,
            cushion: a,
        };
        let muff = Muff {
            root: a,
            brace: a,
            base: a,
            cushion: a,
            buttons: Vec::new(),
        };
        let assembly = Assembly {
            parts,
            headband,
            left_muff: muff.clone(),
            right_muff: muff,
        };
        assert_eq!(assembly.ancestors(c).collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(assembly.ancestors(a).count(), 0);
        assert_eq!(assembly.find("b"), Some(b));
        assert_eq!(assembly.find("d"), None);
        assert_eq!(assembly.meshes().count(), 0);
    }
}
