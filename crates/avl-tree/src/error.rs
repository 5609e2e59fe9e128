use thiserror::Error;

/// Recoverable failures of tree operations.
///
/// Neither variant leaves a partial edit behind: the tree is unchanged
/// whenever one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AvlError {
    #[error("key already exists in tree")]
    DuplicateKey,
    #[error("key not found in tree")]
    NotFound,
}
