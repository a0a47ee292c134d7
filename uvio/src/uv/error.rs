use thiserror::Error;

/// Shape mismatch between a UV payload and the mesh it is applied to.
/// Correspondence is positional only, so a mismatch means the file was
/// written for a different topology and nothing can be mapped safely.
#[derive(Debug, Error)]
pub enum UvError {
    #[error("data has {} faces, the mesh has {}", got, expected)]
    FaceCountMismatch { expected: usize, got: usize },

    #[error("data face {} has {} loops, the mesh face has {}", face, got, expected)]
    LoopCountMismatch {
        face: usize,
        expected: usize,
        got: usize,
    },
}
