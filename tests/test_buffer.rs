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
#![warn(rust_2018_idioms)]

use viewbuf::{BufferError, ByteBuffer};

#[test]
fn new_starts_at_zero_with_full_limit() {
    for len in [0usize, 1, 7, 64, 1000] {
        let mut region = vec![0u8; len];
        let buf = ByteBuffer::new(&mut region);

        assert_eq!(buf.capacity(), len);
        assert_eq!(buf.limit(), len);
        assert_eq!(buf.position(), 0);
        assert!(!buf.is_read_only());
    }
}

#[test]
fn from_region_applies_offset() {
    let mut region: Vec<u8> = (0..32).collect();
    let mut buf = ByteBuffer::from_region(&mut region, 8, 10).unwrap();

    assert_eq!(buf.capacity(), 8);
    assert_eq!(buf.limit(), 8);
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.read_value::<u8>(), Some(10));
    assert_eq!(buf.chunk(), &[11, 12, 13, 14, 15, 16, 17]);
}

#[test]
fn from_region_rejects_short_region() {
    let mut region = [0u8; 16];

    assert_eq!(
        ByteBuffer::from_region(&mut region, 10, 8).unwrap_err(),
        BufferError::RegionTooSmall {
            required: 18,
            available: 16
        }
    );
    assert_eq!(
        ByteBuffer::from_region(&mut region, usize::MAX, 1).unwrap_err(),
        BufferError::LengthOverflow
    );
    assert!(ByteBuffer::from_region(&mut region, 0, 16).is_ok());
}

#[test]
fn read_only_from_region() {
    let region = *b"0123456789";
    let buf = ByteBuffer::read_only_from_region(&region, 4, 3).unwrap();

    assert!(buf.is_read_only());
    assert_eq!(buf.chunk(), b"3456");
    assert!(ByteBuffer::read_only_from_region(&region, 4, 7).is_err());
}

#[test]
fn from_slices() {
    let mut region = [0u8; 4];
    let buf = ByteBuffer::from(&mut region[..]);
    assert!(!buf.is_read_only());

    let buf = ByteBuffer::from(&region[..]);
    assert!(buf.is_read_only());
}

#[test]
fn clear_resets_cursor() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    buf.put(1u64).unwrap();
    buf.set_limit(20).unwrap();
    buf.clear();

    assert_eq!(buf.position(), 0);
    assert_eq!(buf.limit(), 64);

    buf.put(1u64).unwrap();
    buf.flip();
    buf.clear();

    assert_eq!(buf.position(), 0);
    assert_eq!(buf.limit(), 64);
}

#[test]
fn flip_limits_to_written() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    buf.put(1u32).unwrap();
    buf.put(2u16).unwrap();
    let written = buf.position();
    buf.flip();

    assert_eq!(buf.limit(), written);
    assert_eq!(buf.position(), 0);

    // flipping again with nothing consumed empties the window
    buf.flip();
    assert_eq!(buf.limit(), 0);
    assert_eq!(buf.position(), 0);
    assert!(!buf.has_remaining());
}

#[test]
fn typed_capacity_truncates() {
    let region = [0u8; 10];
    let buf = ByteBuffer::read_only(&region);

    assert_eq!(buf.capacity_of::<u8>(), 10);
    assert_eq!(buf.capacity_of::<u16>(), 5);
    assert_eq!(buf.capacity_of::<u32>(), 2);
    assert_eq!(buf.capacity_of::<u64>(), 1);
    assert_eq!(buf.capacity_of::<[u8; 11]>(), 0);
    assert_eq!(buf.limit_of::<u32>(), 2);
}

#[test]
fn set_limit_within_capacity() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    assert_eq!(buf.set_limit(64), Ok(()));
    assert_eq!(buf.set_limit(0), Ok(()));
    assert_eq!(buf.limit(), 0);
    assert_eq!(buf.set_limit_of::<u32>(16), Ok(()));
    assert_eq!(buf.limit(), 64);
}

#[test]
fn set_limit_past_capacity_reports_overage() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);
    buf.set_limit(32).unwrap();

    assert_eq!(
        buf.set_limit(65),
        Err(BufferError::LimitExceedsCapacity { overage: 1 })
    );
    assert_eq!(
        buf.set_limit_of::<u64>(9),
        Err(BufferError::LimitExceedsCapacity { overage: 8 })
    );
    assert_eq!(
        buf.set_limit_of::<u64>(usize::MAX),
        Err(BufferError::LengthOverflow)
    );
    assert_eq!(buf.limit(), 32);
}

#[test]
fn set_limit_below_position_pulls_position_back() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    buf.set_position(40).unwrap();
    buf.set_limit(16).unwrap();

    assert_eq!(buf.position(), 16);
    assert_eq!(buf.remaining(), 0);
}

#[test]
fn set_position_up_to_limit() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);
    buf.set_limit(48).unwrap();

    assert_eq!(buf.set_position(47), Ok(()));
    assert_eq!(buf.set_position(48), Ok(()));
    assert_eq!(buf.position(), 48);
    assert!(!buf.has_remaining());

    assert_eq!(
        buf.set_position(50),
        Err(BufferError::PositionBeyondLimit { overage: 2 })
    );
    assert_eq!(
        buf.set_position_of::<u32>(13),
        Err(BufferError::PositionBeyondLimit { overage: 4 })
    );
    assert_eq!(buf.position(), 48);
}

#[test]
fn remaining_in_elements() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    buf.set_position(3).unwrap();
    assert_eq!(buf.remaining(), 61);
    assert_eq!(buf.remaining_of::<u32>(), 15);
    assert_eq!(buf.remaining_of::<[u8; 32]>(), 1);
    assert!(buf.has_remaining_of::<[u8; 61]>());
    assert!(!buf.has_remaining_of::<[u8; 62]>());
}

#[test]
fn mixed_values_round_trip() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    buf.put(42i32).unwrap();
    buf.put(b'a').unwrap();
    buf.put(42.42f32).unwrap();
    buf.flip();

    assert_eq!(buf.limit(), 9);
    assert_eq!(buf.read_value::<i32>(), Some(42));
    assert_eq!(buf.read_value::<u8>(), Some(b'a'));
    assert_eq!(buf.read_value::<f32>(), Some(42.42));
    assert_eq!(buf.remaining(), 0);
    assert_eq!(buf.read_value::<u8>(), None);
}

#[test]
fn typed_cursor_then_overlong_write() {
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    buf.clear();
    assert_eq!(buf.set_position_of::<i32>(10), Ok(()));
    assert_eq!(buf.position(), 40);
    assert_eq!(buf.set_limit_of::<i32>(12), Ok(()));
    assert_eq!(buf.limit(), 48);

    assert_eq!(
        buf.put_slice(&[1i32, 2, 3]),
        Err(BufferError::OutOfBounds { overage: 4 })
    );
    assert_eq!(buf.position(), 40);

    assert_eq!(buf.put_slice(&[1i32, 2]), Ok(()));
    assert_eq!(buf.position(), 48);
}

#[test]
fn debug_shows_cursor_and_window() {
    let mut region = [0u8; 8];
    let mut buf = ByteBuffer::new(&mut region);
    buf.put_slice(b"hi\n").unwrap();
    buf.flip();

    assert_eq!(
        format!("{:?}", buf),
        "ByteBuffer { position: 0, limit: 3, capacity: 8, read_only: false, remaining: b\"hi\\n\" }"
    );
}
