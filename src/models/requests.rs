//! Request DTOs for the cache debug API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

// == Cache Target ==
/// Which cache instance a flush applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTarget {
    /// The short-TTL project listing cache
    Project,
    /// The long-TTL general-purpose cache
    General,
    /// Both instances
    All,
}

impl CacheTarget {
    /// Parses a query-parameter value, case-insensitively.
    ///
    /// Returns None for values that name no known cache.
    pub fn parse(value: &str) -> Option<CacheTarget> {
        match value.trim().to_lowercase().as_str() {
            "project" => Some(CacheTarget::Project),
            "general" => Some(CacheTarget::General),
            "all" => Some(CacheTarget::All),
            _ => None,
        }
    }
}

// == Flush Params ==
/// Query parameters for the flush operation (DELETE /flush)
///
/// # Fields
/// - `cache`: Which instance to clear; omitted means both
#[derive(Debug, Clone, Deserialize)]
pub struct FlushParams {
    /// The cache to clear
    #[serde(default)]
    pub cache: Option<String>,
}

impl FlushParams {
    /// Resolves the requested target.
    ///
    /// An absent parameter means every instance; an unrecognized value
    /// resolves to None so the handler can reject it.
    pub fn target(&self) -> Option<CacheTarget> {
        match self.cache.as_deref() {
            None => Some(CacheTarget::All),
            Some(raw) => CacheTarget::parse(raw),
        }
    }
}

// == Price Query ==
/// Query parameters for the price parse probe (GET /price/parse)
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuery {
    /// Raw price text to parse
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_target_parse() {
        assert_eq!(CacheTarget::parse("project"), Some(CacheTarget::Project));
        assert_eq!(CacheTarget::parse("general"), Some(CacheTarget::General));
        assert_eq!(CacheTarget::parse("all"), Some(CacheTarget::All));
    }

    #[test]
    fn test_cache_target_parse_is_case_insensitive() {
        assert_eq!(CacheTarget::parse("Project"), Some(CacheTarget::Project));
        assert_eq!(CacheTarget::parse(" GENERAL "), Some(CacheTarget::General));
    }

    #[test]
    fn test_cache_target_parse_rejects_unknown() {
        assert_eq!(CacheTarget::parse("projects"), None);
        assert_eq!(CacheTarget::parse(""), None);
        assert_eq!(CacheTarget::parse("everything"), None);
    }

    #[test]
    fn test_flush_params_default_to_all() {
        let params = FlushParams { cache: None };
        assert_eq!(params.target(), Some(CacheTarget::All));
    }

    #[test]
    fn test_flush_params_named_target() {
        let params = FlushParams {
            cache: Some("project".to_string()),
        };
        assert_eq!(params.target(), Some(CacheTarget::Project));
    }

    #[test]
    fn test_flush_params_unknown_target() {
        let params = FlushParams {
            cache: Some("bogus".to_string()),
        };
        assert_eq!(params.target(), None);
    }

    #[test]
    fn test_price_query_deserialize() {
        let query: PriceQuery = serde_json::from_str(r#"{"text": "2.2 Crore"}"#).unwrap();
        assert_eq!(query.text, "2.2 Crore");

        let empty: PriceQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text, "");
    }
}
