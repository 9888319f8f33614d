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
use core::marker::PhantomData;
use core::mem;

use alloc::vec::Vec;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::buf::Iter;

/// A value that can be read from and written to a [`ByteBuffer`].
///
/// `Element` is implemented for every `Copy` type that `zerocopy` can turn
/// into bytes and back without validation: every bit pattern of the right
/// size is a valid value. This covers the integer and float primitives,
/// arrays of elements, and `#[repr(C)]` structs deriving `FromBytes`,
/// `IntoBytes` and `Immutable`. Types with invalid bit patterns, such as
/// `bool` or `char`, are not elements.
///
/// Zero-sized types are rejected when [`SIZE`](Element::SIZE) is evaluated,
/// which makes using one with a buffer a compile error.
///
/// ```compile_fail
/// use viewbuf::ByteBuffer;
///
/// let buf = ByteBuffer::read_only(&[]);
/// let _ = buf.capacity_of::<()>();
/// ```
///
/// [`ByteBuffer`]: crate::ByteBuffer
pub trait Element: FromBytes + IntoBytes + Immutable + Copy {
    /// Size of one element in bytes, never zero.
    const SIZE: usize = {
        assert!(mem::size_of::<Self>() != 0, "zero-sized element type");
        mem::size_of::<Self>()
    };
}

impl<T: FromBytes + IntoBytes + Immutable + Copy> Element for T {}

/// A run of `T` values returned by a successful read.
///
/// The bytes are borrowed from the buffer and decoded on access, so no
/// alignment is required. Use [`as_slice`](Elements::as_slice) to get a
/// `&[T]` without copying when the run happens to be suitably aligned.
pub struct Elements<'a, T> {
    bytes: &'a [u8],
    _marker: PhantomData<T>,
}

impl<'a, T: Element> Elements<'a, T> {
    /// `bytes.len()` must be a multiple of `T::SIZE`.
    pub(crate) fn new(bytes: &'a [u8]) -> Elements<'a, T> {
        debug_assert_eq!(bytes.len() % T::SIZE, 0);
        Elements {
            bytes,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let region = [0u8; 16];
    /// let mut buf = ByteBuffer::read_only(&region);
    ///
    /// assert_eq!(buf.read::<u32>(3).unwrap().len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / T::SIZE
    }

    /// Returns true if no elements were read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let mut region = [0u8; 8];
    /// let mut buf = ByteBuffer::new(&mut region);
    /// buf.put_slice(&[7u16, 8, 9]).unwrap();
    /// buf.flip();
    ///
    /// let values = buf.read::<u16>(3).unwrap();
    /// assert_eq!(values.get(1), Some(8));
    /// assert_eq!(values.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<T> {
        let start = index.checked_mul(T::SIZE)?;
        let bytes = self.bytes.get(start..)?.get(..T::SIZE)?;
        T::read_from_bytes(bytes).ok()
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    /// Returns the raw bytes backing the elements.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Reinterprets the bytes as `&[T]` in place.
    ///
    /// Returns `None` if the bytes are not aligned for `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let region = [1u8, 2, 3, 4];
    /// let mut buf = ByteBuffer::read_only(&region);
    ///
    /// let bytes = buf.read::<u8>(4).unwrap();
    /// assert_eq!(bytes.as_slice(), Some(&[1u8, 2, 3, 4][..]));
    /// ```
    pub fn as_slice(&self) -> Option<&'a [T]> {
        <[T]>::ref_from_bytes(self.bytes).ok()
    }

    /// Returns an iterator over the decoded elements.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(*self)
    }

    /// Copies the elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Elements<'_, T> {}

impl<'a, T: Element> IntoIterator for Elements<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<T: Element> PartialEq<[T]> for Elements<'_, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == *b)
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for Elements<'_, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
