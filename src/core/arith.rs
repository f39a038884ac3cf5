/// Returns `a + b`.
///
/// Overflow wraps around in every build profile; no check is performed.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(1, 2), 3);
        assert_eq!(add(-5, 5), 0);
        assert_eq!(add(123, 456), 579);
        assert_eq!(add(-10, -20), -30);
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
        assert_eq!(add(i64::MIN, -1), i64::MAX);
    }
}
