//! Domain types for the found-report search.

use core_config::{ConfigError, FromEnv, env_or_default};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::LostFoundError;

/// Tag value every indexed report carries; all queries filter on it.
pub const FOUND_TAG: &str = "Found";

/// Sentinel partner value meaning "no selection" in the UI.
pub const NO_PARTNER_SELECTED: &str = "00000";

/// The enumerated set of partner ids the demo accepts.
///
/// Partner ids outside this set are rejected at the API boundary; the
/// sentinel (`00000` or empty) is not an error, it just disables the search.
#[derive(Clone, Debug)]
pub struct PartnerSet {
    ids: Vec<String>,
}

impl PartnerSet {
    /// Build a partner set from explicit ids.
    ///
    /// Ids must be non-empty and alphanumeric; they are spliced into the
    /// RediSearch TAG filter expression verbatim.
    pub fn new<I, S>(ids: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();

        if ids.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "PARTNER_IDS".to_string(),
                details: "at least one partner id is required".to_string(),
            });
        }

        for id in &ids {
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::InvalidValue {
                    key: "PARTNER_IDS".to_string(),
                    details: format!("partner id '{}' must be non-empty alphanumeric", id),
                });
            }
        }

        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Interpret a raw partner selection from the UI.
    ///
    /// The sentinel value (`00000` or empty/whitespace) maps to
    /// [`PartnerFilter::None`]; a known id maps to [`PartnerFilter::Id`];
    /// anything else is an [`LostFoundError::UnknownPartner`] validation
    /// error.
    pub fn parse_filter(&self, raw: &str) -> Result<PartnerFilter, LostFoundError> {
        let raw = raw.trim();

        if raw.is_empty() || raw == NO_PARTNER_SELECTED {
            return Ok(PartnerFilter::None);
        }

        if self.contains(raw) {
            Ok(PartnerFilter::Id(raw.to_string()))
        } else {
            Err(LostFoundError::UnknownPartner(raw.to_string()))
        }
    }
}

/// Load the partner set from `PARTNER_IDS` (comma-separated).
///
/// Defaults to the two demo partners when unset.
impl FromEnv for PartnerSet {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("PARTNER_IDS", "6392,16130");
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        )
    }
}

/// Partner selection after validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartnerFilter {
    /// Sentinel "no selection": the search is skipped entirely
    None,
    /// A validated partner id to filter on
    Id(String),
}

/// One user interaction: free text plus a partner selection
#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub text: String,
    pub partner: PartnerFilter,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, partner: PartnerFilter) -> Self {
        Self {
            text: text.into(),
            partner,
        }
    }
}

/// A ranked search hit from the report index.
///
/// `score` is cosine distance: smaller means more similar. Hits arrive from
/// the index sorted ascending and that order is preserved end to end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoundReport {
    /// Short item name (e.g., "iPhone 14")
    pub item: String,
    /// Free-text description from the original report
    pub description: String,
    /// Owning partner id
    pub partner_id: String,
    /// Cosine distance to the query embedding, ascending = better
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_set_contains() {
        let set = PartnerSet::new(["6392", "16130"]).unwrap();
        assert!(set.contains("6392"));
        assert!(set.contains("16130"));
        assert!(!set.contains("9999"));
    }

    #[test]
    fn test_partner_set_rejects_empty() {
        let result = PartnerSet::new(Vec::<String>::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_partner_set_rejects_non_alphanumeric() {
        let result = PartnerSet::new(["63}92"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("63}92"));
    }

    #[test]
    fn test_parse_filter_sentinel_is_none() {
        let set = PartnerSet::new(["6392"]).unwrap();
        assert_eq!(set.parse_filter("00000").unwrap(), PartnerFilter::None);
        assert_eq!(set.parse_filter("").unwrap(), PartnerFilter::None);
        assert_eq!(set.parse_filter("   ").unwrap(), PartnerFilter::None);
    }

    #[test]
    fn test_parse_filter_known_id() {
        let set = PartnerSet::new(["6392", "16130"]).unwrap();
        assert_eq!(
            set.parse_filter("6392").unwrap(),
            PartnerFilter::Id("6392".to_string())
        );
    }

    #[test]
    fn test_parse_filter_unknown_id_is_error() {
        let set = PartnerSet::new(["6392"]).unwrap();
        let err = set.parse_filter("31337").unwrap_err();
        assert!(matches!(err, LostFoundError::UnknownPartner(_)));
    }

    #[test]
    fn test_partner_set_from_env_defaults() {
        temp_env::with_var_unset("PARTNER_IDS", || {
            let set = PartnerSet::from_env().unwrap();
            assert_eq!(set.ids(), &["6392".to_string(), "16130".to_string()]);
        });
    }

    #[test]
    fn test_partner_set_from_env_custom() {
        temp_env::with_var("PARTNER_IDS", Some("100, 200,300"), || {
            let set = PartnerSet::from_env().unwrap();
            assert_eq!(set.ids().len(), 3);
            assert!(set.contains("200"));
        });
    }

    #[test]
    fn test_found_report_serializes_fields() {
        let report = FoundReport {
            item: "iPhone 14".to_string(),
            description: "Black phone found near gate B".to_string(),
            partner_id: "6392".to_string(),
            score: 0.12,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["item"], "iPhone 14");
        assert_eq!(json["partner_id"], "6392");
    }
}
