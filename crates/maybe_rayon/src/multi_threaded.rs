pub use rayon::join;
use rayon::{prelude::*, slice::Iter};

pub trait MaybeParallelSliceExt<T: Sync> {
    fn maybe_par_iter(&self) -> Iter<'_, T>;
}

impl<T: Sync> MaybeParallelSliceExt<T> for [T] {
    fn maybe_par_iter(&self) -> Iter<'_, T> {
        self.par_iter()
    }
}
