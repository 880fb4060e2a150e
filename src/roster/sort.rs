use std::cmp::Ordering;

/// Recursive merge sort over any element type with an injected comparator.
///
/// The comparator follows the ranking convention: `Greater` means the first
/// argument is emitted ahead of the second. Ties emit the right-hand element
/// first.
pub fn merge_sort<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], compare);
    merge_sort(&mut items[mid..], compare);
    merge(items, mid, compare);
}

/// Merge two ordered halves split at `mid` back into `items`.
fn merge<T, F>(items: &mut [T], mid: usize, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    // transient buffers, dropped when the merge returns
    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    for slot in items.iter_mut() {
        let take_left = if i < left.len() && j < right.len() {
            compare(&left[i], &right[j]) == Ordering::Greater
        } else {
            i < left.len()
        };
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
