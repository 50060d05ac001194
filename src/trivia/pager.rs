//! Fixed-size windows over ordered collections.
//!
//! Pages are 1-based. Asking for a page that starts past the end of the
//! collection is not an error: it yields an empty slice, and the caller decides
//! whether that means "not found".

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the `page`-th window of `page_size` items.
///
/// Page `0`, a zero page size, or a window that would overflow `usize` all
/// produce an empty slice.
pub fn paginate<T>(page: usize, page_size: usize, items: &[T]) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = match page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
    {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_at_most_page_size() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(1, 10, &items), &items[0..10]);
        assert_eq!(paginate(3, 10, &items), &items[20..25]);
    }

    #[test]
    fn pages_concatenate_back_to_input() {
        let items: Vec<u32> = (0..37).collect();
        for size in 1..=12 {
            let mut rebuilt = Vec::new();
            let mut page = 1;
            loop {
                let window = paginate(page, size, &items);
                if window.is_empty() {
                    break;
                }
                assert!(window.len() <= size);
                rebuilt.extend_from_slice(window);
                page += 1;
            }
            assert_eq!(rebuilt, items);
        }
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = vec!["a", "b", "c"];
        assert!(paginate(2, 3, &items).is_empty());
        assert!(paginate(1000, 10, &items).is_empty());
        assert!(paginate(usize::MAX, usize::MAX, &items).is_empty());
    }

    #[test]
    fn page_zero_and_zero_size_are_empty() {
        let items = vec![1, 2, 3];
        assert!(paginate(0, 10, &items).is_empty());
        assert!(paginate(1, 0, &items).is_empty());
    }

    #[test]
    fn empty_input_is_empty_page() {
        let items: Vec<u8> = Vec::new();
        assert!(paginate(1, DEFAULT_PAGE_SIZE, &items).is_empty());
    }
}
