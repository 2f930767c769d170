/// A fixed-length buffer of local degrees of freedom.
///
/// Solvers hold a small number of these for the lifetime of a run: the
/// committed state plus candidate results for in-flight steps. The length is
/// fixed at allocation, taken from [`Model::local_len`], and never changes.
/// The backing storage is released when the buffer is dropped, on every exit
/// path.
///
/// [`Model::local_len`]: crate::Model::local_len
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateVec {
    data: Box<[f64]>,
}

impl StateVec {
    /// Allocates a zero-filled buffer of the given length.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len].into_boxed_slice(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the entries as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Exchanges the contents of two buffers in constant time.
    ///
    /// Only the backing storage changes hands; nothing is copied.
    pub fn swap(&mut self, other: &mut StateVec) {
        std::mem::swap(&mut self.data, &mut other.data);
    }
}
