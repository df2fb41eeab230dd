//! Mesh builders for the individual headphone parts.
//!
//! Every builder works in the part's local frame and hands its triangle stream to a
//! [`MeshBuilder`](muffle_mesh::MeshBuilder) configured from [`BuildConfig`](crate::BuildConfig).

mod headband;
mod muff;

pub use headband::*;
pub use muff::*;

use muffle_mesh::{Curve, Vector3};

/// The first point of every curve.
fn firsts(curves: &[Curve]) -> Vec<Vector3> {
    curves.iter().filter_map(|c| c.first().copied()).collect()
}

/// The last point of every curve.
fn lasts(curves: &[Curve]) -> Vec<Vector3> {
    curves.iter().filter_map(|c| c.last().copied()).collect()
}

/// The `index`-th point of every curve. Curves too short to have one are skipped.
fn column(curves: &[Curve], index: usize) -> Vec<Vector3> {
    curves.iter().filter_map(|c| c.get(index).copied()).collect()
}

fn reversed(points: &[Vector3]) -> Vec<Vector3> {
    points.iter().rev().copied().collect()
}
