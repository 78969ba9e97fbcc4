use std::ops::{Add, Mul, Neg, Sub};

use bls12_381::{ff::Field, group::Group, G1Projective, Scalar};
use maybe_rayon::prelude::*;

/// Values an FFT can be taken over.
///
/// Scalars give the usual polynomial transform. G1 points give the additive
/// FFT used by FK20, where the butterfly is group addition and scalar
/// multiplication by the twiddle.
pub trait FFTElement:
    Sized
    + Send
    + Sync
    + Copy
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Scalar, Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
}

impl FFTElement for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }
}

impl FFTElement for G1Projective {
    fn zero() -> Self {
        Self::identity()
    }
}

/// In-place radix-2 decimation-in-time FFT.
///
/// `roots` is a table of consecutive powers of some root of unity ρ, and
/// `stride` selects the transform root `ω = ρ^stride`, which must have order
/// exactly `values.len()`. The table must hold at least
/// `stride * values.len() / 2` entries.
///
/// Input and output are both in natural order.
pub(crate) fn fft_inplace<T: FFTElement>(roots: &[Scalar], stride: usize, values: &mut [T]) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    debug_assert!(roots.len() * 2 >= stride * n);

    reverse_bit_order(values);

    let mut half = 1;
    while half < n {
        let block = 2 * half;
        // Twiddle j of this layer is ω_block^j = ρ^(j * stride * n / block)
        let step = stride * (n / block);
        values.maybe_par_chunks_mut(block).for_each(|chunk| {
            let (lo, hi) = chunk.split_at_mut(half);
            for (j, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                butterfly(a, b, roots[j * step]);
            }
        });
        half = block;
    }
}

#[inline]
fn butterfly<T: FFTElement>(a: &mut T, b: &mut T, twiddle: Scalar) {
    let t = if twiddle == Scalar::ONE {
        *b
    } else if *b == T::zero() {
        T::zero()
    } else {
        *b * twiddle
    };
    *b = *a - t;
    *a = *a + t;
}

/// Reverses the `bits` least significant bits of `n`.
///
/// `reverse_bits(0, 0) == 0`.
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    // overflowing_shr so that bits == 0 does not trip the shift-overflow check
    n.reverse_bits().overflowing_shr(usize::BITS - bits).0
}

/// Permutes `a` in place so that the element at index `i` moves to
/// `reverse_bits(i, log2(len))`.
///
/// The permutation is an involution. An empty slice is left as is.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn reverse_bit_order<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(n.is_power_of_two(), "n must be a power of two");

    let log_n = log2_pow2(n);
    for k in 0..n {
        let rk = reverse_bits(k, log_n);
        if k < rk {
            a.swap(rk, k);
        }
    }
}

/// `n` must be a power of two.
pub(crate) const fn log2_pow2(n: usize) -> u32 {
    n.trailing_zeros()
}

/// Returns `[1, ω, ω², ..., ω^(n-1)]`.
pub(crate) fn powers_of<F: Field>(omega: &F, n: usize) -> Vec<F> {
    std::iter::successors(Some(F::ONE), |power| Some(*power * omega))
        .take(n)
        .collect()
}
