//! Byte-level persistence of fitted parameters.
//!
//! Anything that is `Serialize + Deserialize` gets [`SerializableParams`] for
//! free through bincode, and with it file save/load helpers.

use crate::error::PipelineError;
use std::error::Error;
use std::path::Path;

/// Parameters that can be written to and read back from bytes.
///
/// Implementors should hold only plain data (vectors, maps, scalars).
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;

    /// Write the parameters to `path`, replacing any existing file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        let bytes = self
            .to_bytes()
            .map_err(|e| PipelineError::Serialization(e.to_string()))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read parameters previously written by [`save_to_file`](Self::save_to_file).
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes).map_err(|e| PipelineError::Serialization(e.to_string()))
    }
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
