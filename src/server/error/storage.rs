use thiserror::Error;

/// Failures talking to the object storage backing the photo gallery.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Storage API answered with a non-success status.
    #[error("Storage request to {path} failed with status {status}: {body}")]
    Rejected {
        path: String,
        status: u16,
        body: String,
    },

    /// Transport level failure reaching the storage API.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
