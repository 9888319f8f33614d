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
use core::ops::Range;
use core::{cmp, slice};

use zerocopy::IntoBytes;

use crate::buf::{Element, Elements};
use crate::tracing_compat::{debug, trace};
use crate::BufferError;

/// A bounds-checked cursor over a borrowed region of bytes.
///
/// `ByteBuffer` tracks three byte offsets into its region:
///
/// - the *capacity*, fixed at construction, is the length of the region;
/// - the *limit* bounds every read and write, `limit <= capacity`;
/// - the *position* is where the next relative read or write happens,
///   `position <= limit`.
///
/// Values of any [`Element`] type are read and written either relatively,
/// at the position (which then advances past them), or absolutely, at an
/// explicit offset (the position is left alone). Every access must end at or
/// before the limit.
///
/// ```
/// use viewbuf::ByteBuffer;
///
/// let mut region = [0u8; 64];
/// let mut buf = ByteBuffer::new(&mut region);
///
/// buf.set_position_of::<i32>(10).unwrap();
/// assert_eq!(buf.position(), 40);
///
/// buf.set_limit_of::<i32>(12).unwrap();
/// assert_eq!(buf.limit(), 48);
///
/// // Three `i32` from byte 40 would end at byte 52.
/// let err = buf.put_slice(&[1i32, 2, 3]).unwrap_err();
/// assert_eq!(err.overage(), Some(4));
/// assert_eq!(buf.position(), 40);
/// ```
///
/// # Storage
///
/// The buffer never owns or allocates its bytes. A writable buffer borrows
/// `&'a mut [u8]`, a read-only one `&'a [u8]`. Read-only-ness is therefore a
/// property of the borrow and cannot be undone.
///
/// # Views
///
/// A *view* is a buffer over a sub-range of another buffer's storage, with a
/// cursor of its own:
///
/// ```text
///
///   parent  position      limit   capacity
///   ┌───────────┬──────────┬─────────┐
///   │           │          │         │
///   └───────────┴──────────┴─────────┘
///         ^                     ^
///   offset│  view               │ offset + capacity
///         ┌─────────────────────┐
///         │                     │
///         └─────────────────────┘
/// ```
///
/// A view borrows its parent, so the parent cannot be used to write while a
/// writable view is alive, and no view can outlive the region.
pub struct ByteBuffer<'a> {
    storage: Storage<'a>,
    limit: usize,
    position: usize,
}

enum Storage<'a> {
    Writable(&'a mut [u8]),
    ReadOnly(&'a [u8]),
}

impl Storage<'_> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Writable(bytes) => &**bytes,
            Storage::ReadOnly(bytes) => *bytes,
        }
    }
}

impl<'a> ByteBuffer<'a> {
    /// Creates a writable buffer over the whole of `region`.
    ///
    /// The limit is set to the capacity and the position to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let mut region = [0u8; 16];
    /// let buf = ByteBuffer::new(&mut region);
    ///
    /// assert_eq!(buf.capacity(), 16);
    /// assert_eq!(buf.limit(), 16);
    /// assert_eq!(buf.position(), 0);
    /// ```
    #[inline]
    pub fn new(region: &'a mut [u8]) -> ByteBuffer<'a> {
        ByteBuffer::with_storage(Storage::Writable(region))
    }

    /// Creates a writable buffer over `capacity` bytes of `region`, starting
    /// at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::RegionTooSmall` if `offset + capacity` is past
    /// the end of `region`.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::{BufferError, ByteBuffer};
    ///
    /// let mut region = [0u8; 16];
    ///
    /// let buf = ByteBuffer::from_region(&mut region, 8, 4).unwrap();
    /// assert_eq!(buf.capacity(), 8);
    ///
    /// let err = ByteBuffer::from_region(&mut region, 16, 4).unwrap_err();
    /// assert_eq!(err, BufferError::RegionTooSmall { required: 20, available: 16 });
    /// ```
    pub fn from_region(
        region: &'a mut [u8],
        capacity: usize,
        offset: usize,
    ) -> Result<ByteBuffer<'a>, BufferError> {
        let range = region_range(region.len(), capacity, offset)?;
        Ok(ByteBuffer::new(&mut region[range]))
    }

    /// Creates a read-only buffer over the whole of `region`.
    #[inline]
    pub fn read_only(region: &'a [u8]) -> ByteBuffer<'a> {
        ByteBuffer::with_storage(Storage::ReadOnly(region))
    }

    /// Creates a read-only buffer over `capacity` bytes of `region`, starting
    /// at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::RegionTooSmall` if `offset + capacity` is past
    /// the end of `region`.
    pub fn read_only_from_region(
        region: &'a [u8],
        capacity: usize,
        offset: usize,
    ) -> Result<ByteBuffer<'a>, BufferError> {
        let range = region_range(region.len(), capacity, offset)?;
        Ok(ByteBuffer::read_only(&region[range]))
    }

    /// Converts this buffer into a read-only one, keeping its cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::{BufferError, ByteBuffer};
    ///
    /// let mut region = [0u8; 4];
    /// let mut buf = ByteBuffer::new(&mut region);
    /// buf.put(7u8).unwrap();
    ///
    /// let mut buf = buf.into_read_only();
    /// assert!(buf.is_read_only());
    /// assert_eq!(buf.position(), 1);
    /// assert_eq!(buf.put(8u8), Err(BufferError::ReadOnly));
    /// ```
    pub fn into_read_only(self) -> ByteBuffer<'a> {
        let storage = match self.storage {
            Storage::Writable(bytes) => Storage::ReadOnly(bytes),
            storage => storage,
        };

        ByteBuffer {
            storage,
            limit: self.limit,
            position: self.position,
        }
    }

    fn with_storage(storage: Storage<'a>) -> ByteBuffer<'a> {
        let capacity = storage.as_slice().len();
        ByteBuffer {
            storage,
            limit: capacity,
            position: 0,
        }
    }

    /// Returns true if writes to this buffer are rejected.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        matches!(self.storage, Storage::ReadOnly(_))
    }

    /// Creates a view over `capacity` bytes of this buffer's storage,
    /// starting `offset` bytes from its start.
    ///
    /// The view's limit is its capacity and its position is zero; the
    /// parent's cursor is not consulted. A capacity running past the end of
    /// the parent is clamped to what remains after `offset`. The view is
    /// read-only if this buffer is or if `read_only` is set.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::ViewOffsetOutOfBounds` if `offset` is past this
    /// buffer's capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let mut region = [0u8; 64];
    /// let mut buf = ByteBuffer::new(&mut region);
    ///
    /// {
    ///     let mut view = buf.view(1000, 0, false).unwrap();
    ///     assert_eq!(view.capacity(), 64);
    ///     view.put_at(8, 0xffu8).unwrap();
    /// }
    ///
    /// assert_eq!(buf.read_value_at::<u8>(8), Some(0xff));
    /// ```
    pub fn view(
        &mut self,
        capacity: usize,
        offset: usize,
        read_only: bool,
    ) -> Result<ByteBuffer<'_>, BufferError> {
        let range = self.view_range(capacity, offset)?;
        Ok(self.view_of(range, read_only))
    }

    /// Like [`view`](ByteBuffer::view), but fails instead of clamping.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::ViewOffsetOutOfBounds` if `offset` is past this
    /// buffer's capacity, and `BufferError::ViewExceedsCapacity` if
    /// `offset + capacity` is.
    pub fn view_exact(
        &mut self,
        capacity: usize,
        offset: usize,
        read_only: bool,
    ) -> Result<ByteBuffer<'_>, BufferError> {
        let parent = self.capacity();
        if offset > parent {
            return Err(BufferError::ViewOffsetOutOfBounds {
                offset,
                capacity: parent,
            });
        }

        let end = offset
            .checked_add(capacity)
            .ok_or(BufferError::LengthOverflow)?;
        if end > parent {
            return Err(BufferError::ViewExceedsCapacity {
                overage: end - parent,
            });
        }

        Ok(self.view_of(offset..end, read_only))
    }

    /// Creates a read-only view sharing this buffer by reference.
    ///
    /// Several read-only views of one buffer can be alive at once. Bounds
    /// follow [`view`](ByteBuffer::view).
    ///
    /// # Errors
    ///
    /// Returns `BufferError::ViewOffsetOutOfBounds` if `offset` is past this
    /// buffer's capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let region = *b"header:payload";
    /// let buf = ByteBuffer::read_only(&region);
    ///
    /// let mut head = buf.view_ref(6, 0).unwrap();
    /// let body = buf.view_ref(usize::MAX, 7).unwrap();
    ///
    /// assert_eq!(head.read::<u8>(6).unwrap().as_bytes(), b"header");
    /// assert_eq!(body.chunk(), b"payload");
    /// ```
    pub fn view_ref(&self, capacity: usize, offset: usize) -> Result<ByteBuffer<'_>, BufferError> {
        let range = self.view_range(capacity, offset)?;
        Ok(ByteBuffer::read_only(&self.storage.as_slice()[range]))
    }

    fn view_range(&self, capacity: usize, offset: usize) -> Result<Range<usize>, BufferError> {
        let parent = self.capacity();
        if offset > parent {
            return Err(BufferError::ViewOffsetOutOfBounds {
                offset,
                capacity: parent,
            });
        }

        let available = parent - offset;
        if capacity > available {
            debug!(
                requested = capacity,
                clamped = available,
                offset,
                "view capacity clamped to parent"
            );
            return Ok(offset..parent);
        }

        Ok(offset..offset + capacity)
    }

    fn view_of(&mut self, range: Range<usize>, read_only: bool) -> ByteBuffer<'_> {
        match (&mut self.storage, read_only) {
            (Storage::Writable(bytes), false) => ByteBuffer::new(&mut bytes[range]),
            (Storage::Writable(bytes), true) => ByteBuffer::read_only(&bytes[range]),
            (Storage::ReadOnly(bytes), _) => ByteBuffer::read_only(&bytes[range]),
        }
    }

    /// Sets the position to zero and the limit to the capacity.
    ///
    /// Typically called before a fresh round of writes.
    #[inline]
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }

    /// Sets the limit to the position and the position to zero.
    ///
    /// Typically called between writing values and reading them back.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let mut region = [0u8; 16];
    /// let mut buf = ByteBuffer::new(&mut region);
    ///
    /// buf.put(1u32).unwrap();
    /// buf.flip();
    ///
    /// assert_eq!(buf.limit(), 4);
    /// assert_eq!(buf.position(), 0);
    /// ```
    #[inline]
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.as_slice().len()
    }

    /// Returns how many whole `T` fit in the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let region = [0u8; 10];
    /// let buf = ByteBuffer::read_only(&region);
    ///
    /// assert_eq!(buf.capacity_of::<u32>(), 2);
    /// ```
    #[inline]
    pub fn capacity_of<T: Element>(&self) -> usize {
        self.capacity() / T::SIZE
    }

    /// Returns the limit in bytes.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the limit as a count of whole `T`.
    #[inline]
    pub fn limit_of<T: Element>(&self) -> usize {
        self.limit / T::SIZE
    }

    /// Sets the limit, in bytes.
    ///
    /// If the position lies past the new limit it is moved back to it.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::LimitExceedsCapacity` if `limit` is greater than
    /// the capacity. The limit is left unchanged.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), BufferError> {
        let capacity = self.capacity();
        if limit > capacity {
            trace!(limit, capacity, "limit rejected");
            return Err(BufferError::LimitExceedsCapacity {
                overage: limit - capacity,
            });
        }

        self.limit = limit;
        self.position = cmp::min(self.position, limit);
        Ok(())
    }

    /// Sets the limit to `limit` elements of `T`.
    ///
    /// # Errors
    ///
    /// See [`set_limit`](ByteBuffer::set_limit); the overage is in bytes.
    /// Returns `BufferError::LengthOverflow` if `limit` elements of `T` do
    /// not fit in `usize` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::{BufferError, ByteBuffer};
    ///
    /// let mut region = [0u8; 64];
    /// let mut buf = ByteBuffer::new(&mut region);
    ///
    /// assert_eq!(buf.set_limit_of::<u32>(12), Ok(()));
    /// assert_eq!(buf.limit(), 48);
    ///
    /// let err = buf.set_limit_of::<u32>(17).unwrap_err();
    /// assert_eq!(err, BufferError::LimitExceedsCapacity { overage: 4 });
    /// assert_eq!(buf.limit(), 48);
    /// ```
    #[inline]
    pub fn set_limit_of<T: Element>(&mut self, limit: usize) -> Result<(), BufferError> {
        self.set_limit(byte_len::<T>(limit)?)
    }

    /// Returns the position in bytes.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Sets the position, in bytes.
    ///
    /// A position equal to the limit is valid; it leaves nothing remaining.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::PositionBeyondLimit` if `position` is greater
    /// than the limit. The position is left unchanged.
    pub fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.limit {
            trace!(position, limit = self.limit, "position rejected");
            return Err(BufferError::PositionBeyondLimit {
                overage: position - self.limit,
            });
        }

        self.position = position;
        Ok(())
    }

    /// Sets the position to `position` elements of `T`.
    ///
    /// # Errors
    ///
    /// See [`set_position`](ByteBuffer::set_position); the overage is in
    /// bytes. Returns `BufferError::LengthOverflow` if `position` elements of
    /// `T` do not fit in `usize` bytes.
    #[inline]
    pub fn set_position_of<T: Element>(&mut self, position: usize) -> Result<(), BufferError> {
        self.set_position(byte_len::<T>(position)?)
    }

    /// Returns the number of bytes between the position and the limit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Returns how many whole `T` fit between the position and the limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let region = [0u8; 11];
    /// let buf = ByteBuffer::read_only(&region);
    ///
    /// assert_eq!(buf.remaining_of::<u16>(), 5);
    /// assert_eq!(buf.remaining_of::<[u8; 12]>(), 0);
    /// ```
    #[inline]
    pub fn remaining_of<T: Element>(&self) -> usize {
        self.remaining() / T::SIZE
    }

    /// Returns true if at least one byte remains before the limit.
    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.remaining() != 0
    }

    /// Returns true if at least one whole `T` remains before the limit.
    #[inline]
    pub fn has_remaining_of<T: Element>(&self) -> bool {
        self.remaining_of::<T>() != 0
    }

    /// Returns the bytes between the position and the limit.
    #[inline]
    pub fn chunk(&self) -> &[u8] {
        &self.storage.as_slice()[self.position..self.limit]
    }

    /// Moves the position forward by `cnt` bytes, stopping at the limit.
    pub(crate) fn skip(&mut self, cnt: usize) {
        self.position += cmp::min(cnt, self.remaining());
    }

    /// Reads `n` values of `T` at the position and advances past them.
    ///
    /// Returns `None`, leaving the position unchanged, if the values would
    /// end past the limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let mut region = [0u8; 8];
    /// let mut buf = ByteBuffer::new(&mut region);
    /// buf.put_slice(&[10u16, 20, 30]).unwrap();
    /// buf.flip();
    ///
    /// assert_eq!(buf.read::<u16>(2).unwrap(), [10, 20]);
    /// assert!(buf.read::<u16>(2).is_none());
    /// assert_eq!(buf.position(), 4);
    /// ```
    pub fn read<T: Element>(&mut self, n: usize) -> Option<Elements<'_, T>> {
        let len = byte_len::<T>(n).ok()?;
        let range = span(self.position, len, self.limit).ok()?;
        self.position = range.end;
        Some(Elements::new(&self.storage.as_slice()[range]))
    }

    /// Reads `n` values of `T` starting at byte `pos`, without moving the
    /// position.
    ///
    /// Returns `None` if the values would end past the limit.
    pub fn read_at<T: Element>(&self, pos: usize, n: usize) -> Option<Elements<'_, T>> {
        let len = byte_len::<T>(n).ok()?;
        let range = span(pos, len, self.limit).ok()?;
        Some(Elements::new(&self.storage.as_slice()[range]))
    }

    /// Reads one `T` at the position and advances past it.
    #[inline]
    pub fn read_value<T: Element>(&mut self) -> Option<T> {
        self.read::<T>(1)?.first()
    }

    /// Reads one `T` at byte `pos`, without moving the position.
    #[inline]
    pub fn read_value_at<T: Element>(&self, pos: usize) -> Option<T> {
        self.read_at::<T>(pos, 1)?.first()
    }

    /// Writes `value` at the position and advances past it.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::ReadOnly` on a read-only buffer, and
    /// `BufferError::OutOfBounds` if the value would end past the limit.
    /// Nothing is written and the position is unchanged on error.
    #[inline]
    pub fn put<T: Element>(&mut self, value: T) -> Result<(), BufferError> {
        self.put_slice(slice::from_ref(&value))
    }

    /// Writes all of `values` at the position and advances past them.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::ReadOnly` on a read-only buffer, even for an
    /// empty slice. Returns `BufferError::OutOfBounds` if the values would
    /// end past the limit, with `position + len - limit` as the overage.
    /// Nothing is written and the position is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::{BufferError, ByteBuffer};
    ///
    /// let mut region = [0u8; 8];
    /// let mut buf = ByteBuffer::new(&mut region);
    ///
    /// assert_eq!(buf.put_slice(&[1u16, 2, 3]), Ok(()));
    /// assert_eq!(buf.position(), 6);
    /// assert_eq!(
    ///     buf.put_slice(&[4u16, 5]),
    ///     Err(BufferError::OutOfBounds { overage: 2 })
    /// );
    /// ```
    pub fn put_slice<T: Element>(&mut self, values: &[T]) -> Result<(), BufferError> {
        let src = values.as_bytes();
        let position = self.position;

        self.writable_span(position, src.len())?
            .copy_from_slice(src);
        self.position = position + src.len();
        Ok(())
    }

    /// Writes `value` at byte `pos`, without moving the position.
    ///
    /// # Errors
    ///
    /// As [`put_slice_at`](ByteBuffer::put_slice_at).
    #[inline]
    pub fn put_at<T: Element>(&mut self, pos: usize, value: T) -> Result<(), BufferError> {
        self.put_slice_at(pos, slice::from_ref(&value))
    }

    /// Writes all of `values` starting at byte `pos`, without moving the
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::ReadOnly` on a read-only buffer, even for an
    /// empty slice. Returns `BufferError::OutOfBounds` if the values would
    /// end past the limit, with `pos + len - limit` as the overage.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    ///
    /// let mut region = [0u8; 32];
    /// let mut buf = ByteBuffer::new(&mut region);
    ///
    /// buf.put_slice_at(20, b"Awesome !").unwrap();
    ///
    /// assert_eq!(buf.position(), 0);
    /// assert_eq!(buf.read_at::<u8>(20, 9).unwrap().as_bytes(), b"Awesome !");
    /// ```
    pub fn put_slice_at<T: Element>(&mut self, pos: usize, values: &[T]) -> Result<(), BufferError> {
        let src = values.as_bytes();

        self.writable_span(pos, src.len())?.copy_from_slice(src);
        Ok(())
    }

    /// Single gate for every write: read-only first, then bounds.
    fn writable_span(&mut self, start: usize, len: usize) -> Result<&mut [u8], BufferError> {
        let limit = self.limit;
        match &mut self.storage {
            Storage::ReadOnly(_) => {
                trace!(start, len, "write rejected: read-only");
                Err(BufferError::ReadOnly)
            }
            Storage::Writable(bytes) => match span(start, len, limit) {
                Ok(range) => Ok(&mut bytes[range]),
                Err(err) => {
                    trace!(start, len, limit, error = %err, "write rejected");
                    Err(err)
                }
            },
        }
    }

    /// Creates an adaptor which implements the `Read` and `BufRead` traits
    /// for this buffer.
    ///
    /// Reading consumes the bytes between the position and the limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    /// use std::io::Read;
    ///
    /// let region = *b"hello world";
    /// let mut reader = ByteBuffer::read_only(&region).reader();
    /// let mut dst = [0u8; 5];
    ///
    /// reader.read_exact(&mut dst).unwrap();
    /// assert_eq!(&dst, b"hello");
    /// assert_eq!(reader.get_ref().position(), 5);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn reader(self) -> crate::buf::Reader<'a> {
        crate::buf::reader::new(self)
    }

    /// Creates an adaptor which implements the `Write` trait for this
    /// buffer.
    ///
    /// Writing fills the bytes between the position and the limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewbuf::ByteBuffer;
    /// use std::io::Write;
    ///
    /// let mut region = [0u8; 4];
    /// let mut writer = ByteBuffer::new(&mut region).writer();
    ///
    /// assert_eq!(writer.write(b"hello").unwrap(), 4);
    /// assert!(!writer.get_ref().has_remaining());
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn writer(self) -> crate::buf::Writer<'a> {
        crate::buf::writer::new(self)
    }
}

impl<'a> From<&'a mut [u8]> for ByteBuffer<'a> {
    fn from(region: &'a mut [u8]) -> ByteBuffer<'a> {
        ByteBuffer::new(region)
    }
}

impl<'a> From<&'a [u8]> for ByteBuffer<'a> {
    fn from(region: &'a [u8]) -> ByteBuffer<'a> {
        ByteBuffer::read_only(region)
    }
}

/// `count` elements of `T`, in bytes.
#[inline]
fn byte_len<T: Element>(count: usize) -> Result<usize, BufferError> {
    count
        .checked_mul(T::SIZE)
        .ok_or(BufferError::LengthOverflow)
}

/// `[start, start + len)` if it ends at or before `limit`.
#[inline]
fn span(start: usize, len: usize, limit: usize) -> Result<Range<usize>, BufferError> {
    let end = start
        .checked_add(len)
        .ok_or(BufferError::LengthOverflow)?;
    if end > limit {
        return Err(BufferError::OutOfBounds {
            overage: end - limit,
        });
    }

    Ok(start..end)
}

fn region_range(len: usize, capacity: usize, offset: usize) -> Result<Range<usize>, BufferError> {
    let end = offset
        .checked_add(capacity)
        .ok_or(BufferError::LengthOverflow)?;
    if end > len {
        return Err(BufferError::RegionTooSmall {
            required: end,
            available: len,
        });
    }

    Ok(offset..end)
}
