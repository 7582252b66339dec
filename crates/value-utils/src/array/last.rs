/// Returns the last element of a slice, or `None` if it is empty.
///
/// # Examples
///
/// ```
/// use value_utils::last;
///
/// assert_eq!(last(&[1, 2, 3, 4]), Some(&4));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}
