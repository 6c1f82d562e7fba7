use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Two lowercase ASCII letters, e.g. `en` or `es`.
pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("language_code");
        err.message = Some(Cow::from("language must be an ISO 639-1 code such as \"en\""));
        Err(err)
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("value must not be blank"));
        Err(err)
    } else {
        Ok(())
    }
}

/// Absolute `http`/`https` URL with a host. Anything else, including
/// `javascript:` and `data:` targets, is rejected.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => Ok(()),
        _ => {
            let mut err = ValidationError::new("http_url");
            err.message = Some(Cow::from("url must be an absolute http(s) link"));
            Err(err)
        }
    }
}
