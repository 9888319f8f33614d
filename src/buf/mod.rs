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
//! Element types and adapters for working with a [`ByteBuffer`].
//!
//! A [`ByteBuffer`] reads and writes values of any [`Element`] type. A read
//! hands back an [`Elements`] run borrowing the buffer, which can be indexed,
//! iterated with [`Iter`], or reinterpreted as a slice in place.
//!
//! # `Reader`, `Writer`
//!
//! With the `std` feature, [`ByteBuffer::reader`] and [`ByteBuffer::writer`]
//! wrap a buffer in adapters implementing `std::io::Read` and
//! `std::io::Write`, so a buffer can be filled or drained by anything that
//! speaks `std::io`.
//!
//! [`ByteBuffer`]: crate::ByteBuffer
//! [`ByteBuffer::reader`]: crate::ByteBuffer::reader
//! [`ByteBuffer::writer`]: crate::ByteBuffer::writer

mod element;
mod iter;
#[cfg(feature = "std")]
pub(crate) mod reader;
#[cfg(feature = "std")]
pub(crate) mod writer;

pub use self::element::{Element, Elements};
pub use self::iter::Iter;

#[cfg(feature = "std")]
pub use self::{reader::Reader, writer::Writer};
