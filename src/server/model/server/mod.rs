//! Server inventory domain models.
//!
//! Records are read per table by the repositories in `data::server`, joined by
//! [`aggregate::assemble`] and shaped into DTOs by the `into_dto` conversions.

pub mod aggregate;
pub mod kind;
pub mod record;

use crate::{
    model::server::{FlagParam, ServerFilterQuery},
    server::{
        middleware::validation::Validate,
        model::server::kind::{LicenseFilter, OsType, VALID_STATES},
        util::convert::convert_to_boolean,
    },
};

/// Normalized server filter.
///
/// Empty strings mean "no filter"; flags select which relations are fetched and
/// whether the detailed view is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerFilterOptions {
    pub os: String,
    pub state: String,
    pub license: String,
    pub network: bool,
    pub disk: bool,
    pub partition: bool,
    pub repository: bool,
    pub detail: bool,
}

impl ServerFilterOptions {
    /// Normalizes raw query parameters. Never fails.
    ///
    /// # Arguments
    /// - `query` - Raw query parameters
    ///
    /// # Returns
    /// - `ServerFilterOptions` - Absent strings become `""`, flags are coerced to bool
    pub fn from_query(query: ServerFilterQuery) -> Self {
        Self {
            network: convert_to_boolean(query.network.as_ref()),
            disk: convert_to_boolean(query.disk.as_ref()),
            partition: convert_to_boolean(query.partition.as_ref()),
            repository: convert_to_boolean(query.repository.as_ref()),
            detail: convert_to_boolean(query.detail.as_ref()),
            os: query.os.unwrap_or_default(),
            state: query.state.unwrap_or_default(),
            license: query.license.unwrap_or_default(),
        }
    }

    /// OS filter resolved to its stored code, `None` when no OS predicate applies.
    pub fn os_code(&self) -> Option<i32> {
        OsType::from_filter(&self.os).and_then(|os| os.code())
    }

    pub fn license_filter(&self) -> Option<LicenseFilter> {
        LicenseFilter::from_filter(&self.license)
    }
}

/// Flag spellings accepted by validation. Only `true` turns a flag on; `1` and `0`
/// pass validation but normalize to `false`.
fn is_flag_text(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
        || text.eq_ignore_ascii_case("false")
        || text == "1"
        || text == "0"
}

fn validate_flag(name: &str, value: Option<&FlagParam>, errors: &mut Vec<String>) {
    if let Some(FlagParam::Text(text)) = value {
        if !is_flag_text(text) {
            errors.push(format!("{} must be a boolean value", name));
        }
    }
}

impl Validate for ServerFilterQuery {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(os) = &self.os {
            if OsType::from_filter(os).is_none() {
                errors.push("os must be one of: win, lin".to_string());
            }
        }
        if let Some(state) = &self.state {
            if !VALID_STATES.contains(&state.as_str()) {
                errors.push(format!("state must be one of: {}", VALID_STATES.join(", ")));
            }
        }
        if let Some(license) = &self.license {
            if LicenseFilter::from_filter(license).is_none() {
                errors.push("license must be one of: assign, unassign".to_string());
            }
        }

        validate_flag("network", self.network.as_ref(), &mut errors);
        validate_flag("disk", self.disk.as_ref(), &mut errors);
        validate_flag("partition", self.partition.as_ref(), &mut errors);
        validate_flag("repository", self.repository.as_ref(), &mut errors);
        validate_flag("detail", self.detail.as_ref(), &mut errors);

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_normalizes_to_defaults() {
        let options = ServerFilterOptions::from_query(ServerFilterQuery::default());

        assert_eq!(options, ServerFilterOptions::default());
        assert_eq!(options.os_code(), None);
        assert_eq!(options.license_filter(), None);
    }

    #[test]
    fn flags_accept_bool_and_text() {
        let options = ServerFilterOptions::from_query(ServerFilterQuery {
            os: Some("win".to_string()),
            network: Some(FlagParam::Text("TRUE".to_string())),
            disk: Some(FlagParam::Bool(true)),
            partition: Some(FlagParam::Text("false".to_string())),
            detail: Some(FlagParam::Text("nope".to_string())),
            ..Default::default()
        });

        assert_eq!(options.os, "win");
        assert_eq!(options.os_code(), Some(1));
        assert!(options.network);
        assert!(options.disk);
        assert!(!options.partition);
        assert!(!options.repository);
        assert!(!options.detail);
    }

    #[test]
    fn validation_accepts_known_values() {
        let query = ServerFilterQuery {
            os: Some("lin".to_string()),
            state: Some("disconnect".to_string()),
            license: Some("unassign".to_string()),
            detail: Some(FlagParam::Text("False".to_string())),
            ..Default::default()
        };

        assert!(query.validate().is_empty());
    }

    #[test]
    fn validation_rejects_unknown_values() {
        let query = ServerFilterQuery {
            os: Some("mac".to_string()),
            state: Some("online".to_string()),
            license: Some("maybe".to_string()),
            disk: Some(FlagParam::Text("yes".to_string())),
            ..Default::default()
        };

        assert_eq!(query.validate().len(), 4);
    }

    #[test]
    fn numeric_flags_pass_validation_but_stay_off() {
        let query = ServerFilterQuery {
            disk: Some(FlagParam::Text("1".to_string())),
            detail: Some(FlagParam::Text("0".to_string())),
            ..Default::default()
        };

        assert!(query.validate().is_empty());

        let options = ServerFilterOptions::from_query(query);
        assert!(!options.disk);
        assert!(!options.detail);
    }

    #[test]
    fn other_numbers_are_not_flags() {
        let query = ServerFilterQuery {
            network: Some(FlagParam::Text("2".to_string())),
            ..Default::default()
        };

        assert_eq!(query.validate(), vec!["network must be a boolean value"]);
    }
}
