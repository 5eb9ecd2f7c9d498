#![no_main]

use libfuzzer_sys::fuzz_target;
use pgp_wire_util::core::consttime::{double, shift_right};
use pgp_wire_util::core::mpi::{read_mpi, take_left_bits, to_mpi};

fuzz_target!(|data: &[u8]| {
    // Walk the input as a sequence of MPIs until framing fails
    let mut rest = data;
    while let Ok((magnitude, used)) = read_mpi(rest) {
        if to_mpi(&magnitude).is_ok() {
            assert_eq!(read_mpi(&to_mpi(&magnitude).unwrap()).unwrap().0, magnitude);
        }
        rest = &rest[used..];
    }

    if let Some((&n, body)) = data.split_first() {
        let _ = take_left_bits(body, usize::from(n));
        let mut shifted = body.to_vec();
        let _ = shift_right(&mut shifted, u32::from(n % 8));
        let _ = double(body);
    }
});
