// The code in this file is heavily based on [Carl Lerche's LRU implementation](https://github.com/tokio-rs/bytes).
//
// MIT License
//
// Copyright (c) 2022 Al Liu (https://github.com/al8n/rcbytes)
//
// Copyright (c) 2018 Carl Lerche (https://github.com/tokio-rs/bytes)
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
use thiserror::Error;

/// Errors returned by fallible [`ByteBuffer`](crate::ByteBuffer) operations.
///
/// A failed operation never changes the buffer. The variants that describe a
/// request running past a bound carry the number of bytes by which it did,
/// available uniformly through [`overage`](BufferError::overage).
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum BufferError {
    /// The requested span ends past the current limit.
    #[error("access out of bounds: span ends {overage} bytes past the limit")]
    OutOfBounds {
        /// Bytes past the limit.
        overage: usize,
    },
    /// A new limit would exceed the capacity.
    #[error("limit exceeds capacity by {overage} bytes")]
    LimitExceedsCapacity {
        /// Bytes past the capacity.
        overage: usize,
    },
    /// A new position would lie past the current limit.
    #[error("position is {overage} bytes past the limit")]
    PositionBeyondLimit {
        /// Bytes past the limit.
        overage: usize,
    },
    /// A write was attempted on a read-only buffer.
    #[error("buffer is read-only")]
    ReadOnly,
    /// An element count or offset does not fit in `usize` once scaled to bytes.
    #[error("length overflows usize")]
    LengthOverflow,
    /// The region is too short for the requested offset and capacity.
    #[error("region too small: requested {required} bytes, but only {available} bytes available")]
    RegionTooSmall {
        /// `offset + capacity`.
        required: usize,
        /// Length of the region.
        available: usize,
    },
    /// A view was requested at an offset past the parent's capacity.
    #[error("view offset {offset} is beyond parent capacity {capacity}")]
    ViewOffsetOutOfBounds {
        /// Requested offset.
        offset: usize,
        /// Capacity of the parent buffer.
        capacity: usize,
    },
    /// A strict view request does not fit in the parent.
    #[error("view exceeds parent capacity by {overage} bytes")]
    ViewExceedsCapacity {
        /// Bytes past the parent's capacity.
        overage: usize,
    },
}

impl BufferError {
    /// Returns how many bytes the failed request was over its bound, if the
    /// error describes such a request.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::{BufferError, ByteBuffer};
    ///
    /// let mut region = [0u8; 4];
    /// let mut buf = ByteBuffer::new(&mut region);
    ///
    /// let err = buf.put(1u64).unwrap_err();
    /// assert_eq!(err, BufferError::OutOfBounds { overage: 4 });
    /// assert_eq!(err.overage(), Some(4));
    /// assert_eq!(BufferError::ReadOnly.overage(), None);
    /// ```
    pub fn overage(&self) -> Option<usize> {
        match *self {
            BufferError::OutOfBounds { overage }
            | BufferError::LimitExceedsCapacity { overage }
            | BufferError::PositionBeyondLimit { overage }
            | BufferError::ViewExceedsCapacity { overage } => Some(overage),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        let kind = match err {
            BufferError::ReadOnly => std::io::ErrorKind::PermissionDenied,
            _ => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}
