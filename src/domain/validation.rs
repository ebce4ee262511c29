use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },
    InvalidSid { input: String },
    InvalidPhoneNumber { input: String },
    InvalidUrl { field: &'static str, input: String },
    InvalidCountryCode { input: String },
    InvalidDigits { input: String },
    MissingEnvVar { name: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{field} out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::InvalidSid { input } => write!(f, "invalid sid: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidUrl { field, input } => write!(f, "invalid {field} url: {input}"),
            Self::InvalidCountryCode { input } => write!(f, "invalid country code: {input}"),
            Self::InvalidDigits { input } => write!(f, "invalid digits: {input}"),
            Self::MissingEnvVar { name } => {
                write!(f, "{name} environment variable is required")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "To" };
        assert_eq!(err.to_string(), "To must not be empty");

        let err = ValidationError::OutOfRange {
            field: "PageSize",
            min: 1,
            max: 1000,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "PageSize out of range: 0 (expected 1..=1000)"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidUrl {
            field: "Url",
            input: "ftp://x".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid Url url: ftp://x");

        let err = ValidationError::MissingEnvVar {
            name: "ZANG_ACCOUNT_SID",
        };
        assert_eq!(
            err.to_string(),
            "ZANG_ACCOUNT_SID environment variable is required"
        );
    }
}
