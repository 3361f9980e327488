/// Compute effective limit with precedence: `--limit` flag -> configured default.
///
/// Zero means "no limit".
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> Option<usize> {
    let limit = flag.unwrap_or(configured);
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 20), Some(5));
    }

    #[test]
    fn configured_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 20), Some(20));
    }

    #[test]
    fn zero_is_unlimited() {
        assert_eq!(effective_limit(Some(0), 20), None);
        assert_eq!(effective_limit(None, 0), None);
    }
}
