use std::iter;

/// Yields each adjacent pair of `items`, in order.
///
/// `[a, b, c]` gives `(a, b)`, `(b, c)`. Fewer than two items give nothing.
pub fn neighbors<I>(items: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
  I: IntoIterator,
  I::Item: Clone,
{
  let mut items = items.into_iter();
  let mut prev = items.next();

  iter::from_fn(move || {
    let next = items.next()?;
    let prev = prev.replace(next.clone())?;
    Some((prev, next))
  })
}

/// Count the neighbor pairs two sequences have in common.
///
/// Every pair of `a` is compared against every pair of `b`, so a pair that
/// occurs `k1` times in `a` and `k2` times in `b` contributes `k1 * k2`.
/// Pairs are ordered: `(x, y)` does not match `(y, x)` unless `x == y`.
#[must_use]
pub fn count_common_neighbors<T: PartialEq>(a: &[T], b: &[T]) -> usize {
  let other: Vec<_> = neighbors(b).collect();
  if other.is_empty() {
    return 0;
  }

  neighbors(a)
    .map(|pair| other.iter().filter(|candidate| **candidate == pair).count())
    .sum()
}

/// Distinct neighbor pairs of `seq` with how often each occurs, in order of
/// first occurrence.
#[must_use]
pub fn neighbor_multiplicities<T: PartialEq + Clone>(seq: &[T]) -> Vec<((T, T), usize)> {
  let mut counts: Vec<((T, T), usize)> = Vec::new();

  for (x, y) in neighbors(seq) {
    match counts
      .iter_mut()
      .find(|((px, py), _)| px == x && py == y)
    {
      Some((_, n)) => *n += 1,
      None => counts.push(((x.clone(), y.clone()), 1)),
    }
  }

  counts
}
