//! A tour of `ByteBuffer`: mixed relative writes, reading them back, typed
//! cursor moves, absolute access, and views.

use viewbuf::ByteBuffer;

fn main() {
    // The region we will wrap.
    let mut region = [0u8; 64];
    let mut buf = ByteBuffer::new(&mut region);

    // Values of different types go in one after another.
    buf.put(42i32).unwrap();
    buf.put(b'a').unwrap();
    buf.put(42.42f32).unwrap();

    // `flip` turns what was written into the readable window.
    buf.flip();

    println!("int : {:?}", buf.read_value::<i32>());
    println!("char : {:?}", buf.read_value::<u8>().map(char::from));
    println!("float : {:?}", buf.read_value::<f32>());
    println!("remaining : {}", buf.remaining());

    // `clear` makes the whole capacity writable again.
    buf.clear();

    // Position ten `i32` from the start.
    buf.set_position_of::<i32>(10).unwrap();
    println!("new position in bytes = {}", buf.position());

    // Room for two more `i32` only.
    buf.set_limit_of::<i32>(12).unwrap();

    match buf.put_slice(&[1i32, 2, 3]) {
        Ok(()) => println!("wrote three ints"),
        Err(err) => println!("write failed: {} ({:?} bytes short)", err, err.overage()),
    }

    // Absolute access leaves the position alone.
    buf.put_slice_at(20, b"Awesome !").unwrap();
    if let Some(text) = buf.read_at::<u8>(20, 9) {
        println!("{}", String::from_utf8_lossy(text.as_bytes()));
    }

    // Arguments are (capacity, offset, read_only): ten read-only bytes
    // starting at byte ten.
    let view = buf.view(10, 10, true).unwrap();
    println!("{:?}", view);
}
