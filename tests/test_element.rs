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

use viewbuf::{ByteBuffer, Element};
use zerocopy::{FromBytes, Immutable, IntoBytes};

#[derive(FromBytes, IntoBytes, Immutable, Clone, Copy, Debug, PartialEq)]
#[repr(C)]
struct Header {
    kind: u16,
    flags: u16,
    len: u32,
}

#[repr(C, align(8))]
struct Aligned([u8; 16]);

#[test]
fn element_sizes() {
    assert_eq!(<u8 as Element>::SIZE, 1);
    assert_eq!(<i32 as Element>::SIZE, 4);
    assert_eq!(<f64 as Element>::SIZE, 8);
    assert_eq!(<[u16; 3] as Element>::SIZE, 6);
    assert_eq!(<Header as Element>::SIZE, 8);
}

#[test]
fn struct_round_trip() {
    let header = Header {
        kind: 3,
        flags: 0x8001,
        len: 1500,
    };
    let mut region = [0u8; 32];
    let mut buf = ByteBuffer::new(&mut region);

    buf.put(0u8).unwrap();
    buf.put(header).unwrap();
    buf.put_slice(&[header, header]).unwrap();
    buf.flip();

    assert_eq!(buf.remaining(), 25);
    assert_eq!(buf.remaining_of::<Header>(), 3);
    assert_eq!(buf.read_value::<u8>(), Some(0));
    assert_eq!(buf.read_value::<Header>(), Some(header));
    assert_eq!(buf.read::<Header>(2).unwrap(), [header, header]);
    assert!(!buf.has_remaining_of::<Header>());
}

#[test]
fn array_elements() {
    let mut region = [0u8; 9];
    let mut buf = ByteBuffer::new(&mut region);

    buf.put_slice(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    buf.flip();

    let triples = buf.read::<[u8; 3]>(3).unwrap();
    assert_eq!(triples.len(), 3);
    assert_eq!(triples.get(1), Some([4, 5, 6]));
    assert_eq!(triples.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn as_slice_needs_alignment() {
    let mut region = Aligned([0u8; 16]);
    let mut buf = ByteBuffer::new(&mut region.0);

    buf.put_slice(&[1u32, 2, 3, 4]).unwrap();
    buf.flip();

    assert_eq!(buf.read_at::<u32>(0, 2).unwrap().as_slice(), Some(&[1u32, 2][..]));
    assert_eq!(buf.read_at::<u32>(1, 2).unwrap().as_slice(), None);
    // still decodable when unaligned
    assert_eq!(buf.read_at::<u32>(4, 2).unwrap().get(1), Some(3));
}

#[test]
fn elements_compare_with_slices() {
    let region: Vec<u8> = (1..=4).collect();
    let mut buf = ByteBuffer::read_only(&region);
    let values = buf.read::<u8>(4).unwrap();

    assert!(values == [1, 2, 3, 4]);
    assert!(values == [1u8, 2, 3, 4][..]);
    assert!(values != [1, 2, 3]);
}
