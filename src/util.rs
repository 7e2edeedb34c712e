use std::fmt;

/// What a list renders as when it has no nodes.
pub(crate) const EMPTY_LIST: &str = "Empty Linked List";

/// Writes `values` as `a -> b -> c`, or [`EMPTY_LIST`] if there are none.
pub(crate) fn write_chain<I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        return f.write_str(EMPTY_LIST);
    };

    write!(f, "{first}")?;
    for value in values {
        write!(f, " -> {value}")?;
    }
    Ok(())
}

/// Adapter so a borrowed traversal can be handed out as an `impl Display`.
///
/// `F` is called every time the value is formatted so the traversal is redone on each render.
pub(crate) struct Chain<F>(pub(crate) F);

impl<F, I> fmt::Display for Chain<F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, (self.0)())
    }
}
