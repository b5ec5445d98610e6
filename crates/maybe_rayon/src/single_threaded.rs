use std::slice::Iter;

/// Runs both closures on the current thread, `oper_a` first.
#[inline]
pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (oper_a(), oper_b())
}

pub trait MaybeParallelSliceExt<T> {
    fn maybe_par_iter(&self) -> Iter<'_, T>;
}

impl<T> MaybeParallelSliceExt<T> for [T] {
    fn maybe_par_iter(&self) -> Iter<'_, T> {
        self.iter()
    }
}
