use ff::Field;

/// Returned by [`batch_inverse`] when one of the inputs is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroElementError;

/// Replaces every element of `v` with its multiplicative inverse using a
/// single field inversion (Montgomery's trick).
///
/// If any element is zero, `v` is left untouched and an error is returned.
pub fn batch_inverse<F: Field>(v: &mut [F]) -> Result<(), ZeroElementError> {
    if v.is_empty() {
        return Ok(());
    }

    // prefix[i] = v[0] * ... * v[i]
    let mut prefix = Vec::with_capacity(v.len());
    let mut acc = F::ONE;
    for element in v.iter() {
        acc *= element;
        prefix.push(acc);
    }

    let mut acc_inv: F = Option::from(acc.invert()).ok_or(ZeroElementError)?;

    for i in (0..v.len()).rev() {
        let before = if i == 0 { F::ONE } else { prefix[i - 1] };
        let inverse = acc_inv * before;
        acc_inv *= v[i];
        v[i] = inverse;
    }

    Ok(())
}
