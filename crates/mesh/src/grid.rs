use crate::curve::Closure;
use crate::error::{MeshError, Result};
use crate::geometry::{Curve, Quad, Vector3};
use crate::ribbon::{stitch_rings, Winding};

/// Fills the patch enclosed by four boundary chains with rows of points.
///
/// `top` and `bottom` run left to right and must have the same length (at least 2). `left` and
/// `right` run top to bottom, exclude the corners, and must have the same length N. The result
/// has N + 2 rows: `top`, N generated rows, then `bottom`. Generated row `i` starts with
/// `left[i - 1]`, ends with `right[i - 1]`, and in between each point is extrapolated from the
/// three neighbours already known:
///
/// ```text
///   top_left ---- top_right
///       |        /
///       |   center
///       |    /
///   bottom_left    new = top_left + 2 * (center - top_left)
/// ```
///
/// Rows are produced top to bottom and left to right, so the fill leans towards the top-left
/// corner and does not reach the `right` or `bottom` chains exactly. This is not a bilinear
/// patch and should not be replaced by one; the lofted caps depend on this shape.
pub fn grid_fill(
    top: &[Vector3],
    bottom: &[Vector3],
    left: &[Vector3],
    right: &[Vector3],
) -> Result<Vec<Curve>> {
    if top.len() != bottom.len() || top.len() < 2 || left.len() != right.len() {
        return Err(MeshError::GridShape {
            top: top.len(),
            bottom: bottom.len(),
            left: left.len(),
            right: right.len(),
        });
    }

    let lines = left.len();
    let columns = top.len() - 2;

    let mut rows: Vec<Curve> = Vec::with_capacity(lines + 2);
    rows.push(top.to_vec());
    for i in 1..=lines {
        let previous = &rows[i - 1];
        let mut row = Curve::with_capacity(columns + 2);
        row.push(left[i - 1]);
        for j in 1..=columns {
            let bottom_left = row[j - 1];
            let top_right = previous[j];
            let top_left = previous[j - 1];

            let center = (bottom_left + top_right) * 0.5;
            row.push(top_left + (center - top_left) * 2.0);
        }
        row.push(right[i - 1]);
        rows.push(row);
    }
    rows.push(bottom.to_vec());

    Ok(rows)
}

/// Stitches the rows produced by [`grid_fill`] into quads.
pub fn grid_quads(rows: &[Curve], winding: Winding) -> Result<Vec<Quad>> {
    stitch_rings(rows, Closure::Open, winding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector3 {
        Vector3::new(x, y, 0.0)
    }

    #[test]
    fn flat_square_patch() {
        // A 4x4 lattice with the interior left for the fill.
        let top = [v(0.0, 3.0), v(1.0, 3.0), v(2.0, 3.0), v(3.0, 3.0)];
        let bottom = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)];
        let left = [v(0.0, 2.0), v(0.0, 1.0)];
        let right = [v(3.0, 2.0), v(3.0, 1.0)];

        let rows = grid_fill(&top, &bottom, &left, &right).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert_eq!(rows[0], top.to_vec());
        assert_eq!(rows[3], bottom.to_vec());

        // On a regular lattice the doubling rule lands exactly on the lattice points.
        assert_eq!(rows[1], vec![v(0.0, 2.0), v(1.0, 2.0), v(2.0, 2.0), v(3.0, 2.0)]);
        assert_eq!(rows[2], vec![v(0.0, 1.0), v(1.0, 1.0), v(2.0, 1.0), v(3.0, 1.0)]);
    }

    #[test]
    fn doubling_rule_is_biased() {
        // A skewed boundary: the generated point follows the top-left corner, not the average
        // of all four sides.
        let top = [v(0.0, 2.0), v(1.0, 2.5), v(2.0, 2.0)];
        let bottom = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)];
        let left = [v(0.0, 1.0)];
        let right = [v(2.0, 1.0)];

        let rows = grid_fill(&top, &bottom, &left, &right).unwrap();
        // center = ((0,1) + (1,2.5)) / 2 = (0.5, 1.75); new = (0,2) + 2 * (0.5, -0.25)
        assert_eq!(rows[1][1], v(1.0, 1.5));
        // A bilinear blend would give (1.0, 1.125).
        assert_ne!(rows[1][1], v(1.0, 1.125));
    }

    #[test]
    fn empty_sides_only_keep_top_and_bottom() {
        let top = [v(0.0, 1.0), v(1.0, 1.0)];
        let bottom = [v(0.0, 0.0), v(1.0, 0.0)];
        let rows = grid_fill(&top, &bottom, &[], &[]).unwrap();
        assert_eq!(rows, vec![top.to_vec(), bottom.to_vec()]);
        assert_eq!(grid_quads(&rows, Winding::Forward).unwrap().len(), 1);
    }

    #[test]
    fn mismatched_boundary() {
        let top = [v(0.0, 1.0), v(1.0, 1.0), v(2.0, 1.0)];
        let bottom = [v(0.0, 0.0), v(1.0, 0.0)];
        assert_eq!(
            grid_fill(&top, &bottom, &[], &[]),
            Err(MeshError::GridShape {
                top: 3,
                bottom: 2,
                left: 0,
                right: 0
            })
        );
        assert!(grid_fill(&top, &top, &[v(0.0, 0.5)], &[]).is_err());
        assert!(grid_fill(&top[..1], &top[..1], &[], &[]).is_err());
    }

    #[test]
    fn grid_quads_cover_every_cell() {
        let top = [v(0.0, 3.0), v(1.0, 3.0), v(2.0, 3.0), v(3.0, 3.0)];
        let bottom = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)];
        let left = [v(0.0, 2.0), v(0.0, 1.0)];
        let right = [v(3.0, 2.0), v(3.0, 1.0)];
        let rows = grid_fill(&top, &bottom, &left, &right).unwrap();

        let forward = grid_quads(&rows, Winding::Forward).unwrap();
        assert_eq!(forward.len(), 9);
        let reversed = grid_quads(&rows, Winding::Reversed).unwrap();
        assert_eq!(reversed[0], forward[0].reversed());
    }
}
