//! Formatting helpers shared by the dashboard views

/// Base of every WhatsApp click-to-chat link
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// Treat empty or whitespace-only strings as absent
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Keep only the ASCII digits of a phone number, in order
#[must_use]
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Build a WhatsApp deep link for a phone number with a prefilled message
///
/// Returns `None` when the phone contains no digits.
#[must_use]
pub fn whatsapp_link(phone: &str, message: Option<&str>) -> Option<String> {
    let digits = phone_digits(phone);
    if digits.is_empty() {
        return None;
    }

    let text = urlencoding::encode(message.unwrap_or_default());
    Some(format!("{WHATSAPP_BASE}{digits}?text={text}"))
}

/// Format age and gender as `"<age> / <gender>"`
///
/// Absent parts are dropped along with the separator; `None` when both are
/// absent.
#[must_use]
pub fn format_age_gender(age: Option<u32>, gender: Option<&str>) -> Option<String> {
    match (age, non_empty(gender)) {
        (Some(age), Some(gender)) => Some(format!("{age} / {gender}")),
        (Some(age), None) => Some(age.to_string()),
        (None, Some(gender)) => Some(gender.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("+1 (555) 010-2000", "15550102000")]
    #[case("0044 20 7946 0000", "00442079460000")]
    #[case("no phone", "")]
    #[case("", "")]
    fn test_phone_digits(#[case] phone: &str, #[case] expected: &str) {
        assert_eq!(phone_digits(phone), expected);
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("+91 98765-43210", Some("Reply YES & confirm: https://x.io/d?p=1"));

        assert_eq!(
            link.as_deref(),
            Some(
                "https://wa.me/919876543210?text=Reply%20YES%20%26%20confirm%3A%20https%3A%2F%2Fx.io%2Fd%3Fp%3D1"
            )
        );
    }

    #[test]
    fn test_whatsapp_link_without_message() {
        assert_eq!(
            whatsapp_link("555", None).as_deref(),
            Some("https://wa.me/555?text=")
        );
    }

    #[test]
    fn test_whatsapp_link_requires_digits() {
        assert_eq!(whatsapp_link("", Some("hello")), None);
        assert_eq!(whatsapp_link("(--) +", Some("hello")), None);
    }

    #[rstest]
    #[case(Some(42), Some("Female"), Some("42 / Female"))]
    #[case(Some(42), None, Some("42"))]
    #[case(Some(42), Some(""), Some("42"))]
    #[case(None, Some("Male"), Some("Male"))]
    #[case(None, Some("  "), None)]
    #[case(None, None, None)]
    #[case(Some(0), None, Some("0"))]
    fn test_format_age_gender(
        #[case] age: Option<u32>,
        #[case] gender: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(format_age_gender(age, gender).as_deref(), expected);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Main St")), Some("Main St"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    proptest! {
        #[test]
        fn prop_link_present_iff_phone_has_digit(phone in "\\PC{0,24}", message in "\\PC{0,40}") {
            let link = whatsapp_link(&phone, Some(&message));
            let has_digit = phone.chars().any(|c| c.is_ascii_digit());

            prop_assert_eq!(link.is_some(), has_digit);

            if let Some(link) = link {
                let expected: String = phone.chars().filter(char::is_ascii_digit).collect();
                let rest = link.strip_prefix(WHATSAPP_BASE).unwrap();
                let (path, _) = rest.split_once("?text=").unwrap();
                prop_assert_eq!(path, expected.as_str());
            }
        }
    }
}
