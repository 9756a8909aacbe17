//! Pure pagination math shared by every page-selector surface.
//!
//! There is exactly one implementation of the page-index window; callers
//! render the markers however they like but never re-derive the math.

/// One entry in a rendered page index.
///
/// A gap is its own variant rather than a sentinel page number, so a
/// consumer cannot mistake it for something clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u64),
    Ellipsis,
}

/// Pages shown on each side of the current page before a gap appears.
pub const DEFAULT_DELTA: u32 = 2;

/// Build the page index for a selector with the default neighborhood.
pub fn page_index(current: i64, total: u64) -> Vec<PageMarker> {
    page_index_with_delta(current, total, DEFAULT_DELTA)
}

/// Build the ordered page index: first page, last page, and the pages
/// within `delta` of `current`, with runs of omitted pages collapsed into
/// a single [`PageMarker::Ellipsis`].
///
/// `current` is not validated; out-of-range values (zero, negative, past
/// the end) only shift which interior pages count as "near" and never put
/// an out-of-range page in the output. `total == 0` yields an empty index.
pub fn page_index_with_delta(current: i64, total: u64, delta: u32) -> Vec<PageMarker> {
    let lo = current.saturating_sub(i64::from(delta));
    let hi = current.saturating_add(i64::from(delta));

    let mut markers: Vec<PageMarker> = Vec::new();
    for page in 1..=total {
        let near = i64::try_from(page).is_ok_and(|p| p >= lo && p <= hi);
        if page == 1 || page == total || near {
            markers.push(PageMarker::Page(page));
        } else if markers.last() != Some(&PageMarker::Ellipsis) {
            markers.push(PageMarker::Ellipsis);
        }
    }
    markers
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: u64, per_page: u64) -> u64 {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: u64, total_pages: u64) -> u64 {
    page.clamp(1, total_pages.max(1))
}

/// Inclusive item bounds for a one-based page, as the hosted service's
/// `Range` header expects them.
pub fn page_window(page: u64, per_page: u64) -> (u64, u64) {
    let per = per_page.max(1);
    let from = page.max(1).saturating_sub(1).saturating_mul(per);
    (from, from.saturating_add(per - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(markers: &[PageMarker]) -> Vec<u64> {
        markers
            .iter()
            .filter_map(|m| match m {
                PageMarker::Page(p) => Some(*p),
                PageMarker::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn empty_when_no_pages() {
        assert!(page_index(1, 0).is_empty());
        assert!(page_index(-4, 0).is_empty());
        assert!(page_index_with_delta(7, 0, 0).is_empty());
    }

    #[test]
    fn single_page() {
        assert_eq!(page_index(1, 1), vec![PageMarker::Page(1)]);
        // Same result even when current is nonsense
        assert_eq!(page_index(99, 1), vec![PageMarker::Page(1)]);
    }

    #[test]
    fn neighborhood_covers_everything() {
        // From page 3 the default window spans all five pages
        let expected: Vec<PageMarker> = (1..=5).map(PageMarker::Page).collect();
        assert_eq!(page_index(3, 5), expected);
    }

    #[test]
    fn gap_past_the_window_collapses_to_one_ellipsis() {
        // From page 1 the window ends at 3, so 4 becomes the gap
        assert_eq!(
            page_index(1, 5),
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Page(3),
                PageMarker::Ellipsis,
                PageMarker::Page(5),
            ]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_index(5, 10),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(3),
                PageMarker::Page(4),
                PageMarker::Page(5),
                PageMarker::Page(6),
                PageMarker::Page(7),
                PageMarker::Ellipsis,
                PageMarker::Page(10),
            ]
        );
    }

    #[test]
    fn window_at_the_start() {
        assert_eq!(
            page_index(1, 10),
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Page(3),
                PageMarker::Ellipsis,
                PageMarker::Page(10),
            ]
        );
    }

    #[test]
    fn window_at_the_end() {
        assert_eq!(
            page_index(10, 10),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(8),
                PageMarker::Page(9),
                PageMarker::Page(10),
            ]
        );
    }

    #[test]
    fn zero_delta_keeps_only_anchors_and_current() {
        assert_eq!(
            page_index_with_delta(5, 9, 0),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(5),
                PageMarker::Ellipsis,
                PageMarker::Page(9),
            ]
        );
    }

    #[test]
    fn wide_delta_never_produces_ellipsis() {
        let markers = page_index_with_delta(3, 7, 7);
        assert_eq!(pages(&markers), (1..=7).collect::<Vec<_>>());
        assert!(!markers.contains(&PageMarker::Ellipsis));
    }

    #[test]
    fn out_of_range_current_still_anchors_first_and_last() {
        assert_eq!(
            page_index(-5, 10),
            vec![PageMarker::Page(1), PageMarker::Ellipsis, PageMarker::Page(10)]
        );
        assert_eq!(
            page_index(99, 10),
            vec![PageMarker::Page(1), PageMarker::Ellipsis, PageMarker::Page(10)]
        );
    }

    #[test]
    fn invariants_hold_across_small_inputs() {
        for current in -3i64..15 {
            for total in 1u64..12 {
                for delta in 0u32..4 {
                    let markers = page_index_with_delta(current, total, delta);
                    let nums = pages(&markers);

                    // First and last page exactly once each
                    assert_eq!(nums.iter().filter(|&&p| p == 1).count(), 1);
                    assert_eq!(nums.iter().filter(|&&p| p == total).count(), 1);

                    // Strictly increasing, all in range
                    assert!(nums.windows(2).all(|w| w[0] < w[1]));
                    assert!(nums.iter().all(|&p| p >= 1 && p <= total));

                    // No adjacent ellipses, length bounded by total
                    assert!(!markers
                        .windows(2)
                        .any(|w| w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis));
                    assert!(markers.len() as u64 <= total);
                }
            }
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        assert_eq!(page_index(4, 20), page_index(4, 20));
        assert_eq!(
            page_index_with_delta(-1, 6, 3),
            page_index_with_delta(-1, 6, 3)
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5); // per_page floored to 1
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(9, 0), 1);
    }

    #[test]
    fn page_window_is_inclusive() {
        assert_eq!(page_window(1, 10), (0, 9));
        assert_eq!(page_window(2, 10), (10, 19));
        assert_eq!(page_window(0, 10), (0, 9)); // page floored to 1
    }

    #[test]
    fn page_window_saturates_instead_of_overflowing() {
        assert_eq!(page_window(u64::MAX, 10), (u64::MAX, u64::MAX));
    }
}
