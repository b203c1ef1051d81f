//! Categorical feature encoding transformers.
//!
//! ## OneHotEncoder
//! Converts string categories to one-hot (dummy) columns.
//!
//! ```text
//! // Input:  os = [Mac, Windows, Mac]
//! // Output: os_Mac, os_Windows = [[1,0], [0,1], [1,0]]
//! ```
//!
//! Categories not seen during fit produce all-zero rows in that column's
//! block; the output width is fixed by the fit.

mod one_hot;

pub use one_hot::{expand, FittedOneHotEncoder, OneHotEncoder, DEFAULT_SEPARATOR};
