//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_references() {
        assert_eq!(expand_env("dist/out.html", "output.path").unwrap(), "dist/out.html");
    }

    #[test]
    fn test_default_value() {
        assert_eq!(
            expand_env("${SHPP_TEST_SURELY_UNSET:-build}/x.html", "output.path").unwrap(),
            "build/x.html"
        );
    }

    #[test]
    fn test_unset_variable() {
        let err = expand_env("${SHPP_TEST_SURELY_UNSET}", "output.path").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "output.path"));
    }
}
