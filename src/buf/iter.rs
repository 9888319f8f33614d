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
use core::fmt;

use crate::buf::{Element, Elements};

/// Iterator over the values of an [`Elements`] run.
///
/// This struct is created by the [`iter`] method on [`Elements`], or by
/// iterating an `Elements` by value.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use viewbuf::ByteBuffer;
///
/// let mut region = [0u8; 6];
/// let mut buf = ByteBuffer::new(&mut region);
/// buf.put_slice(&[1u16, 2, 3]).unwrap();
/// buf.flip();
///
/// let mut iter = buf.read::<u16>(3).unwrap().into_iter();
///
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), Some(3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: Elements::iter
pub struct Iter<'a, T> {
    inner: Elements<'a, T>,
    front: usize,
    back: usize,
}

impl<'a, T: Element> Iter<'a, T> {
    pub(crate) fn new(inner: Elements<'a, T>) -> Iter<'a, T> {
        let back = inner.len();
        Iter {
            inner,
            front: 0,
            back,
        }
    }

    /// Returns the elements not yet yielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewbuf::ByteBuffer;
    ///
    /// let region = [1u8, 2, 3];
    /// let mut buf = ByteBuffer::read_only(&region);
    /// let mut iter = buf.read::<u8>(3).unwrap().iter();
    ///
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.as_elements().len(), 2);
    /// ```
    pub fn as_elements(&self) -> Elements<'a, T> {
        let bytes = self.inner.as_bytes();
        Elements::new(&bytes[self.front * T::SIZE..self.back * T::SIZE])
    }
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let value = self.inner.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T: Element> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        self.inner.get(self.back)
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {}

impl<T: Element + fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_elements()).finish()
    }
}
