/// XOR every byte of ``source`` into the byte at the same position of ``dest``. Both slices must
/// have the same length, otherwise this function panics.
pub(crate) fn xor_in_place(dest: &mut [u8], source: &[u8]) {
    assert_eq!(dest.len(), source.len(), "xor of slices with different lengths");

    for (d, s) in dest.iter_mut().zip(source.iter()) {
        *d ^= *s;
    }
}
