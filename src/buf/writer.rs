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
use crate::ByteBuffer;

use std::{cmp, io};

/// A [`ByteBuffer`] adapter which implements `io::Write` for the inner value.
///
/// This struct is generally created by calling `writer()` on `ByteBuffer`.
/// See documentation of [`writer()`](ByteBuffer::writer) for more details.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: ByteBuffer<'a>,
}

pub(crate) fn new(buf: ByteBuffer<'_>) -> Writer<'_> {
    Writer { buf }
}

impl<'a> Writer<'a> {
    /// Gets a reference to the underlying `ByteBuffer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewbuf::ByteBuffer;
    ///
    /// let mut region = [0u8; 1024];
    /// let writer = ByteBuffer::new(&mut region).writer();
    ///
    /// assert_eq!(1024, writer.get_ref().remaining());
    /// ```
    pub fn get_ref(&self) -> &ByteBuffer<'a> {
        &self.buf
    }

    /// Gets a mutable reference to the underlying `ByteBuffer`.
    pub fn get_mut(&mut self) -> &mut ByteBuffer<'a> {
        &mut self.buf
    }

    /// Consumes this `Writer`, returning the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewbuf::ByteBuffer;
    /// use std::io;
    ///
    /// let mut region = [0u8; 32];
    /// let mut writer = ByteBuffer::new(&mut region).writer();
    /// let mut src = &b"hello world"[..];
    ///
    /// io::copy(&mut src, &mut writer).unwrap();
    ///
    /// let mut buf = writer.into_inner();
    /// buf.flip();
    /// assert_eq!(buf.chunk(), b"hello world");
    /// ```
    pub fn into_inner(self) -> ByteBuffer<'a> {
        self.buf
    }
}

impl io::Write for Writer<'_> {
    fn write(&mut self, src: &[u8]) -> io::Result<usize> {
        let n = cmp::min(self.buf.remaining(), src.len());

        self.buf.put_slice(&src[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
