//! Iterators that are parallel when the `multithreaded` feature is enabled
//! and plain sequential iterators otherwise.
//!
//! Callers write `items.maybe_par_iter().map(..).sum()` once and get the
//! right behaviour for either build.

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

    pub use crate::MaybeParallelSliceExt;
}
