//! Pearson hashing with the RFC 3074 permutation table.
//!
//! Three 8-bit variants differ only in seed and byte order, and a 16-bit variant hashes the key
//! twice with a perturbed first byte. None of them are cryptographic.
//!
//! ```
//! assert_eq!(pearson::hash_wikipedia(b"a"), 113);
//! assert_eq!(pearson::hash_rfc3074(b"abc"), Ok(170));
//! assert_eq!(pearson::hash16(b"hello"), Ok(0xb9c0));
//! ```

mod consts;

mod error;
pub use error::{PearsonError, Result};

mod helper;
pub use crate::helper::Variant;

mod hash_funcs;
pub use crate::hash_funcs::hasher;

mod pearson;
pub use crate::pearson::{
    fold, hash16, hash_original, hash_rfc3074, hash_wikipedia, intermediates, RFC3074_MAX_KEY_LEN,
};

/// Returns the RFC 3074 permutation table.
pub fn table() -> &'static [u8; 256] {
    &consts::PEARSON_T
}

#[cfg(feature = "python")]
mod py {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::PearsonError;

    impl From<PearsonError> for PyErr {
        fn from(err: PearsonError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Exposed to Python as hash_rfc3074
    #[pyfunction]
    fn hash_rfc3074(key: &[u8]) -> PyResult<u8> {
        Ok(crate::hash_rfc3074(key)?)
    }

    /// Exposed to Python as hash_original
    #[pyfunction]
    fn hash_original(key: &[u8]) -> PyResult<u8> {
        Ok(crate::hash_original(key)?)
    }

    /// Exposed to Python as hash_wikipedia
    #[pyfunction]
    fn hash_wikipedia(key: &[u8]) -> PyResult<u8> {
        Ok(crate::hash_wikipedia(key))
    }

    /// Exposed to Python as hash16
    #[pyfunction]
    fn hash16(key: &[u8]) -> PyResult<u16> {
        Ok(crate::hash16(key)?)
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    fn pearson(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(hash_rfc3074, m)?)?;
        m.add_function(wrap_pyfunction!(hash_original, m)?)?;
        m.add_function(wrap_pyfunction!(hash_wikipedia, m)?)?;
        m.add_function(wrap_pyfunction!(hash16, m)?)?;
        Ok(())
    }
}
