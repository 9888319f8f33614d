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
#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use viewbuf::{BufferError, ByteBuffer};

type Events = Arc<Mutex<Vec<(Level, String)>>>;

struct EventRecorder {
    events: Events,
}

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut events = self.events.lock().unwrap();
        events.push((*event.metadata().level(), format!("{:?}", event)));
    }
}

fn record<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    let events = Events::default();
    let subscriber = tracing_subscriber::registry().with(EventRecorder {
        events: events.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);
    let recorded = events.lock().unwrap().clone();
    recorded
}

#[test]
fn clamped_view_emits_debug() {
    let events = record(|| {
        let mut region = [0u8; 64];
        let mut buf = ByteBuffer::new(&mut region);
        let view = buf.view(1000, 0, false).unwrap();
        assert_eq!(view.capacity(), 64);
    });

    let clamp = events
        .iter()
        .find(|(_, msg)| msg.contains("view capacity clamped to parent"))
        .expect("clamp event");
    assert_eq!(clamp.0, Level::DEBUG);
    assert!(clamp.1.contains("1000"));
    assert!(clamp.1.contains("64"));
}

#[test]
fn fitting_view_is_silent() {
    let events = record(|| {
        let mut region = [0u8; 64];
        let mut buf = ByteBuffer::new(&mut region);
        assert!(buf.view(32, 16, false).is_ok());
    });

    assert!(events.iter().all(|(_, msg)| !msg.contains("clamped")));
}

#[test]
fn read_only_write_emits_trace() {
    let events = record(|| {
        let region = [0u8; 8];
        let mut buf = ByteBuffer::read_only(&region);
        assert_eq!(buf.put(1u32), Err(BufferError::ReadOnly));
    });

    let rejected = events
        .iter()
        .find(|(_, msg)| msg.contains("write rejected: read-only"))
        .expect("read-only rejection event");
    assert_eq!(rejected.0, Level::TRACE);
}

#[test]
fn out_of_bounds_write_emits_trace() {
    let events = record(|| {
        let mut region = [0u8; 4];
        let mut buf = ByteBuffer::new(&mut region);
        assert!(buf.put(1u64).is_err());
    });

    let rejected = events
        .iter()
        .find(|(_, msg)| msg.contains("write rejected") && msg.contains("access out of bounds"))
        .expect("bounds rejection event");
    assert_eq!(rejected.0, Level::TRACE);
}
