//! Masking of personal data before it reaches the logs.

/// Number of leading characters of the local part kept visible.
const VISIBLE_PREFIX: usize = 2;

/// Mask an e-mail address, keeping the first characters of the local part and
/// the full domain.
///
/// Works on characters rather than bytes, so multi-byte addresses never split
/// inside a code point.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("ada@example.com"), "ad***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (email, None),
    };

    let prefix: String = local.chars().take(VISIBLE_PREFIX).collect();
    match domain {
        Some(domain) => format!("{}***@{}", prefix, domain),
        None => format!("{}***", prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com", "ad***@example.com")]
    #[case("a@example.com", "a***@example.com")]
    #[case("@example.com", "***@example.com")]
    #[case("plainstring", "pl***")]
    #[case("élodie@exemple.fr", "él***@exemple.fr")]
    fn masks_local_part(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask_email(input), expected);
    }
}
