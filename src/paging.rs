//! Fixed-size paging over a sequence.
//!
//! Splits a slice into successive pages of at most `page_size` items,
//! used when presenting ranked results a screenful at a time.

use std::slice::Chunks;

/// Splits `items` into pages of at most `page_size` items.
///
/// The final page may be shorter. A `page_size` of zero is rejected.
///
/// # Examples
///
/// ```
/// use rankheap::paging::paginate;
///
/// let data = [1, 2, 3, 4, 5];
/// let pages: Vec<&[i32]> = paginate(&data, 2).unwrap().collect();
/// assert_eq!(pages, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// ```
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Chunks<'_, T>, String> {
    if page_size == 0 {
        return Err("page size must be greater than zero".into());
    }
    Ok(items.chunks(page_size))
}
