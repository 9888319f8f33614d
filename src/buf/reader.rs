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

/// A [`ByteBuffer`] adapter which implements `io::Read` for the inner value.
///
/// This struct is generally created by calling `reader()` on `ByteBuffer`.
/// See documentation of [`reader()`](ByteBuffer::reader) for more details.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: ByteBuffer<'a>,
}

pub(crate) fn new(buf: ByteBuffer<'_>) -> Reader<'_> {
    Reader { buf }
}

impl<'a> Reader<'a> {
    /// Gets a reference to the underlying `ByteBuffer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewbuf::ByteBuffer;
    ///
    /// let region = *b"hello world";
    /// let reader = ByteBuffer::read_only(&region).reader();
    ///
    /// assert_eq!(b"hello world", reader.get_ref().chunk());
    /// ```
    pub fn get_ref(&self) -> &ByteBuffer<'a> {
        &self.buf
    }

    /// Gets a mutable reference to the underlying `ByteBuffer`.
    ///
    /// Moving the cursor through it changes what is read next.
    pub fn get_mut(&mut self) -> &mut ByteBuffer<'a> {
        &mut self.buf
    }

    /// Consumes this `Reader`, returning the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewbuf::ByteBuffer;
    /// use std::io;
    ///
    /// let region = *b"hello world";
    /// let mut reader = ByteBuffer::read_only(&region).reader();
    /// let mut dst = vec![];
    ///
    /// io::copy(&mut reader, &mut dst).unwrap();
    ///
    /// let buf = reader.into_inner();
    /// assert_eq!(0, buf.remaining());
    /// ```
    pub fn into_inner(self) -> ByteBuffer<'a> {
        self.buf
    }
}

impl io::Read for Reader<'_> {
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        let len = cmp::min(self.buf.remaining(), dst.len());

        dst[..len].copy_from_slice(&self.buf.chunk()[..len]);
        self.buf.skip(len);
        Ok(len)
    }
}

impl io::BufRead for Reader<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.buf.chunk())
    }

    fn consume(&mut self, amt: usize) {
        self.buf.skip(amt)
    }
}
