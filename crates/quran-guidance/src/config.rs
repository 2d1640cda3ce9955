use guidance_common::guidance::CategoryFilter;

use crate::error::AppError;
use crate::search::EmptyQueryPolicy;

/// Server settings beyond the backend client's own configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Guidance types dropped from backend results unless a call overrides it.
    pub guidance_filter: CategoryFilter,
    pub empty_query_policy: EmptyQueryPolicy,
    /// `None` serves MCP on stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `GUIDANCE_EXCLUDE_TYPES` (default: "Quran"; empty keeps every type)
    /// - `SURAH_SEARCH_EMPTY_QUERY` ("all" or "none", default: "all")
    /// - `MCP_TCP_LISTEN_ADDR`
    pub fn from_env() -> Result<Self, AppError> {
        let exclude =
            std::env::var("GUIDANCE_EXCLUDE_TYPES").unwrap_or_else(|_| "Quran".to_string());
        let guidance_filter = CategoryFilter::parse_list(&exclude)
            .map_err(|e| AppError::Config(format!("GUIDANCE_EXCLUDE_TYPES: {e}")))?;

        let empty_query_policy = match std::env::var("SURAH_SEARCH_EMPTY_QUERY") {
            Ok(value) => value
                .parse::<EmptyQueryPolicy>()
                .map_err(|e| AppError::Config(format!("SURAH_SEARCH_EMPTY_QUERY: {e}")))?,
            Err(_) => EmptyQueryPolicy::default(),
        };

        Ok(Self {
            guidance_filter,
            empty_query_policy,
            tcp_listen_addr: std::env::var("MCP_TCP_LISTEN_ADDR").ok(),
        })
    }
}
