/// Conversion between a typed attribute value and its wire string.
///
/// `from_attribute` returns `None` for anything it cannot parse; callers then
/// fall back to the field's documented default.
pub trait AttributeValue: Sized {
    /// String written into the XML attribute.
    fn to_attribute(&self) -> String;

    /// Parse a stored attribute string.
    fn from_attribute(raw: &str) -> Option<Self>;
}

impl AttributeValue for bool {
    fn to_attribute(&self) -> String {
        self.to_string()
    }

    fn from_attribute(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl AttributeValue for u32 {
    fn to_attribute(&self) -> String {
        self.to_string()
    }

    fn from_attribute(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl AttributeValue for String {
    fn to_attribute(&self) -> String {
        self.clone()
    }

    fn from_attribute(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_accept_any_case_and_reject_garbage() {
        assert_eq!(bool::from_attribute("true"), Some(true));
        assert_eq!(bool::from_attribute("True"), Some(true));
        assert_eq!(bool::from_attribute(" FALSE "), Some(false));
        assert_eq!(bool::from_attribute("1"), None);
        assert_eq!(bool::from_attribute("yes"), None);
        assert_eq!(true.to_attribute(), "true");
    }

    #[test]
    fn integers_trim_and_reject_negative_or_garbage() {
        assert_eq!(u32::from_attribute(" 42 "), Some(42));
        assert_eq!(u32::from_attribute("-1"), None);
        assert_eq!(u32::from_attribute("five"), None);
        assert_eq!(3600u32.to_attribute(), "3600");
    }

    #[test]
    fn strings_are_kept_verbatim() {
        assert_eq!(
            String::from_attribute(" # ").as_deref(),
            Some(" # ")
        );
    }
}
