/// Wraps `value` into the half-open range `[min, max)`, for negative values too.
///
/// `loop_number(-1, 0, 3) == 2`. Panics if `max <= min`.
#[must_use]
pub fn loop_number(value: i64, min: i64, max: i64) -> i64 {
    assert!(max > min, "empty range {}..{}", min, max);

    (value - min).rem_euclid(max - min) + min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_range_are_unchanged() {
        assert_eq!(loop_number(0, 0, 3), 0);
        assert_eq!(loop_number(2, 0, 3), 2);
    }

    #[test]
    fn test_wraps_past_the_end() {
        assert_eq!(loop_number(3, 0, 3), 0);
        assert_eq!(loop_number(7, 0, 3), 1);
    }

    #[test]
    fn test_wraps_negative_values() {
        assert_eq!(loop_number(-1, 0, 3), 2);
        assert_eq!(loop_number(-4, 0, 3), 2);
    }

    #[test]
    fn test_non_zero_min() {
        assert_eq!(loop_number(0, 1, 4), 3);
        assert_eq!(loop_number(4, 1, 4), 1);
    }

    #[test]
    #[should_panic]
    fn test_empty_range_panics() {
        let _ = loop_number(1, 3, 3);
    }
}
