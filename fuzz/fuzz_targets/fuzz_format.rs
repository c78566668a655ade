#![no_main]

use arbitrary::Arbitrary;
use formatbuf::{Arg, FormatBuffer, format_slice};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    /// Destination size; zero exercises the error path.
    capacity: u8,
    fmt: &'a [u8],
    args: Vec<Arg<'a>>,
}

fn check(input: &Input<'_>) {
    let capacity = usize::from(input.capacity);
    let mut out = vec![0xffu8; capacity];

    let Ok(len) = format_slice(&mut out, input.fmt, &input.args) else {
        assert_eq!(capacity, 0, "only an empty destination may be rejected");
        return;
    };

    // Terminated, within capacity, and nothing written past the terminator.
    assert!(len < capacity);
    assert_eq!(out[len], 0);
    assert!(!out[..len].contains(&0));
    assert!(out[len + 1..].iter().all(|&b| b == 0xff));

    // The owned buffer agrees with the slice entry point up to its own size.
    let owned = FormatBuffer::<32>::with_format(input.fmt, &input.args);
    let shared = len.min(owned.len());
    assert_eq!(&out[..shared], &owned.as_bytes()[..shared]);
}

fuzz_target!(|input: Input<'_>| {
    check(&input);
});
