//! Parallel iteration that degrades to plain iterators.
//!
//! With the `multithreaded` feature every `maybe_*` method dispatches to rayon.
//! Without it the same call sites compile to sequential std iterators, so the
//! numeric code is written once and produces identical output either way.
//!
//! Both modes are tested:
//!
//! ```text
//! cargo test --workspace
//! cargo test --workspace --features rust_das_kzg/multithreaded
//! ```
//!
//! `singlethreaded` and `multithreaded` are mutually exclusive, so
//! `--all-features` does not build.

#[cfg(feature = "multithreaded")]
mod multi_threaded;
#[cfg(not(feature = "multithreaded"))]
mod single_threaded;

#[cfg(feature = "multithreaded")]
pub use multi_threaded::*;
#[cfg(not(feature = "multithreaded"))]
pub use single_threaded::*;

pub mod prelude {
    #[cfg(feature = "multithreaded")]
    pub use rayon::prelude::*;

    pub use crate::{MaybeParallelExt, MaybeParallelRefExt, MaybeParallelSliceMut};
}
