#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("an arc requires at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("cannot stitch lines of different lengths ({0} and {1})")]
    LengthMismatch(usize, usize),
    #[error(
        "grid boundary does not line up: top/bottom have {top}/{bottom} points, \
         left/right have {left}/{right} points"
    )]
    GridShape {
        top: usize,
        bottom: usize,
        left: usize,
        right: usize,
    },
}

pub type Result<T, E = MeshError> = std::result::Result<T, E>;
