use crate::curve::Closure;
use crate::error::{MeshError, Result};
use crate::geometry::{Quad, Vector3};

/// Which way a stitched ribbon faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    /// `quads_from_lines(a, b)`.
    #[default]
    Forward,
    /// `quads_from_lines(b, a)`, which is the forward ribbon with every quad reversed.
    Reversed,
}

/// Bridges two parallel lines with one quad per pair of neighbouring points.
///
/// For each `i` the quad is `(a[i], a[i + 1], b[i + 1], b[i])`, so lines of `n` points give
/// `n - 1` quads. The lines must be the same length; nothing is truncated.
pub fn quads_from_lines(line_a: &[Vector3], line_b: &[Vector3]) -> Result<Vec<Quad>> {
    if line_a.len() != line_b.len() {
        return Err(MeshError::LengthMismatch(line_a.len(), line_b.len()));
    }
    Ok(line_a
        .windows(2)
        .zip(line_b.windows(2))
        .map(|(a, b)| Quad::new(a[0], a[1], b[1], b[0]))
        .collect())
}

/// Flips the winding of every quad in a ribbon.
pub fn reverse_quads(quads: Vec<Quad>) -> Vec<Quad> {
    quads.into_iter().map(|q| q.reversed()).collect()
}

/// Stitches each curve to the next one.
///
/// With `Closure::Closed` the last curve is also stitched back to the first, which is how the
/// profile rings of a swept part are joined into a tube.
pub fn stitch_rings<C: AsRef<[Vector3]>>(
    curves: &[C],
    closure: Closure,
    winding: Winding,
) -> Result<Vec<Quad>> {
    let n = curves.len();
    if n < 2 {
        return Ok(Vec::new());
    }
    let pairs = match closure {
        Closure::Open => n - 1,
        Closure::Closed => n,
    };

    let mut quads = Vec::new();
    for i in 0..pairs {
        let current = curves[i].as_ref();
        let next = curves[(i + 1) % n].as_ref();
        let ribbon = match winding {
            Winding::Forward => quads_from_lines(current, next)?,
            Winding::Reversed => quads_from_lines(next, current)?,
        };
        quads.extend(ribbon);
    }
    Ok(quads)
}
