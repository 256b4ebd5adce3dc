/// Compute the display cap with precedence: global flag -> configured default.
/// Zero from either source means "no cap".
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> Option<usize> {
    match global.unwrap_or(configured) {
        0 => None,
        limit => usize::try_from(limit).ok(),
    }
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
    fn zero_means_everything() {
        assert_eq!(effective_limit(None, 0), None);
        assert_eq!(effective_limit(Some(0), 20), None);
    }
}
