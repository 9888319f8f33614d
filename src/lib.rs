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

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! Provides a bounds-checked cursor over borrowed bytes.
//!
//! The `viewbuf` crate provides [`ByteBuffer`], a view over a fixed region of
//! bytes that tracks a *position*, a *limit* and a *capacity*, and reads and
//! writes typed values at the position (relative access) or at an explicit
//! offset (absolute access).
//!
//! # `ByteBuffer`
//!
//! A `ByteBuffer` never owns its bytes. It borrows a slice supplied by the
//! caller, so the buffer never allocates and can wrap a stack array, a `Vec`,
//! or another buffer's storage. Typical use alternates between filling the
//! buffer and draining it:
//!
//! ```rust
//! use viewbuf::ByteBuffer;
//!
//! let mut region = [0u8; 64];
//! let mut buf = ByteBuffer::new(&mut region);
//!
//! buf.put(42i32).unwrap();
//! buf.put(b'a').unwrap();
//! buf.put(42.42f32).unwrap();
//!
//! buf.flip();
//!
//! assert_eq!(buf.read_value::<i32>(), Some(42));
//! assert_eq!(buf.read_value::<u8>(), Some(b'a'));
//! assert_eq!(buf.read_value::<f32>(), Some(42.42));
//! assert_eq!(buf.remaining(), 0);
//! ```
//!
//! # Position, limit and capacity
//!
//! The three cursor values are always kept in bytes and always satisfy
//! `position <= limit <= capacity`. [`clear`] prepares a buffer for a fresh
//! round of writes over the whole capacity; [`flip`] turns what was just
//! written into the readable window. The `_of::<T>` accessors convert to and
//! from element counts of `T`.
//!
//! # Views
//!
//! [`view`] and [`view_ref`] derive a new `ByteBuffer` sharing part of the
//! parent's storage, with its own cursor. Views borrow their parent, so the
//! borrow checker guarantees a view never outlives the bytes it points to. A
//! view of a read-only buffer is read-only.
//!
//! # Elements
//!
//! Any type implementing [`Element`] can be read and written. `Element` is
//! implemented for every plain-old-data type that `zerocopy` can reinterpret
//! from raw bytes, so the integer and float primitives, arrays of them, and
//! `#[repr(C)]` structs deriving the `zerocopy` traits all qualify. Values are
//! stored in native byte order with no alignment requirement.
//!
//! [`clear`]: ByteBuffer::clear
//! [`flip`]: ByteBuffer::flip
//! [`view`]: ByteBuffer::view
//! [`view_ref`]: ByteBuffer::view_ref

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod buf;
pub use crate::buf::{Element, Elements};

mod byte_buffer;
mod error;
mod fmt;
mod tracing_compat;
pub use crate::byte_buffer::ByteBuffer;
pub use crate::error::BufferError;

// Optional Serde support
#[cfg(feature = "serde")]
mod serde;
