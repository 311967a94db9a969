use libc::c_int;

use crate::algorithm::floyd_warshall::floyd_warshall_in_place;

/// Status code for a successful call
pub const DENSE_APSP_OK: c_int = 0;
/// Status code for input rejected before any mutation
pub const DENSE_APSP_INVALID: c_int = -1;

/// C entry point for the in-place Floyd-Warshall relaxation
///
/// `dm` must point to `n * n` contiguous `int` entries laid out row-major,
/// symmetric, with `0` meaning "no path known". The buffer stays owned by
/// the caller and is rewritten in place with shortest-path distances.
///
/// Returns [`DENSE_APSP_OK`] on success. A null pointer, a negative `n`, or
/// an `n` whose square does not fit in the address space yields
/// [`DENSE_APSP_INVALID`] with the buffer untouched.
#[no_mangle]
pub extern "C" fn dense_apsp_floyd_warshall(n: c_int, dm: *mut c_int) -> c_int {
    if n < 0 || dm.is_null() {
        return DENSE_APSP_INVALID;
    }

    let n = n as usize;
    let len = match n.checked_mul(n) {
        Some(len) => len,
        None => return DENSE_APSP_INVALID,
    };

    let buffer = unsafe { std::slice::from_raw_parts_mut(dm, len) };
    match floyd_warshall_in_place(n, buffer) {
        Ok(()) => DENSE_APSP_OK,
        Err(_) => DENSE_APSP_INVALID,
    }
}
