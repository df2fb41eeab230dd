use muffle_mesh::MeshError;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to build part `{part}`")]
    Part {
        part: String,
        #[source]
        source: MeshError,
    },
}

impl BuildError {
    pub(crate) fn part(part: &str) -> impl FnOnce(MeshError) -> BuildError + '_ {
        move |source| BuildError::Part {
            part: part.to_string(),
            source,
        }
    }
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
