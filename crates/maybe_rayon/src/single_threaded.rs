//! Sequential stand-ins for the rayon entry points used across the workspace.

pub use std::slice::{ChunksMut, Iter};

/// Runs both closures on the calling thread, `oper_a` first.
#[inline]
pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    let a = oper_a();
    (a, oper_b())
}

pub trait MaybeParallelExt: IntoIterator + Sized {
    fn maybe_into_par_iter(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<T: IntoIterator> MaybeParallelExt for T {}

/// Borrowing iteration, `par_iter` under rayon and `iter` otherwise.
pub trait MaybeParallelRefExt<T> {
    fn maybe_par_iter(&self) -> Iter<'_, T>;
}

impl<T> MaybeParallelRefExt<T> for [T] {
    fn maybe_par_iter(&self) -> Iter<'_, T> {
        self.iter()
    }
}

pub trait MaybeParallelSliceMut<T> {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T>;
}

impl<T: Send> MaybeParallelSliceMut<T> for [T] {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T> {
        self.chunks_mut(chunk_size)
    }
}
