/// Collapse a nested optional into a single layer.
#[inline]
pub fn flatten<A>(nested: Option<Option<A>>) -> Option<A> {
    nested.flatten()
}

/// Thread an optional value through a transformation that may itself be
/// absent. The result is never doubly wrapped.
#[inline]
pub fn bind<A, B, F>(optional: Option<A>, f: F) -> Option<B>
where
    F: FnOnce(A) -> Option<B>,
{
    flatten(optional.map(f))
}
