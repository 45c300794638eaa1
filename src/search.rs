/// Returns the index of the first element equal to `target`, scanning left
/// to right, or `None` when no element matches.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    for (i, item) in arr.iter().enumerate() {
        if item == target {
            return Some(i);
        }
    }
    None
}
