//! Endpoint construction for application command registration.
//!
//! build_url -> guild-scoped or global `.../commands` endpoint.
//! parse_api_base validates an `--api-base` override (http/https only).
//!
use anyhow::{Context, Result, bail};
use url::Url;

/// Default REST API root (v10).
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Registration scope derived from the optional guild id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    Guild(&'a str),
    Global,
}

impl<'a> Scope<'a> {
    /// An empty guild id counts as absent.
    pub fn from_guild(guild_id: Option<&'a str>) -> Self {
        match guild_id {
            Some(g) if !g.is_empty() => Scope::Guild(g),
            _ => Scope::Global,
        }
    }
}

/// Build the commands endpoint against the default API root.
pub fn build_url(app_id: &str, guild_id: Option<&str>) -> String {
    build_url_with_base(DISCORD_API_BASE, app_id, guild_id)
}

/// Build the commands endpoint against an explicit API root.
pub fn build_url_with_base(base: &str, app_id: &str, guild_id: Option<&str>) -> String {
    let base = format!("{}/applications", base.trim_end_matches('/'));
    match Scope::from_guild(guild_id) {
        Scope::Guild(guild) => format!("{base}/{app_id}/guilds/{guild}/commands"),
        Scope::Global => format!("{base}/{app_id}/commands"),
    }
}

/// Validate a user-supplied API root, returning it without a trailing slash.
pub fn parse_api_base(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("API base is empty");
    }
    let url = Url::parse(trimmed).with_context(|| format!("Invalid API base URL: '{trimmed}'"))?;
    match url.scheme() {
        "http" | "https" => {}
        other => bail!("Unsupported API base scheme '{other}' (expected http or https)"),
    }
    if url.host_str().is_none() {
        bail!("API base has no host: '{trimmed}'");
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_url() {
        assert_eq!(
            build_url("123", None),
            "https://discord.com/api/v10/applications/123/commands"
        );
    }

    #[test]
    fn guild_url() {
        assert_eq!(
            build_url("123", Some("456")),
            "https://discord.com/api/v10/applications/123/guilds/456/commands"
        );
    }

    #[test]
    fn empty_guild_is_global() {
        assert_eq!(build_url("123", Some("")), build_url("123", None));
        assert_eq!(Scope::from_guild(Some("")), Scope::Global);
    }

    #[test]
    fn custom_base_trailing_slash() {
        assert_eq!(
            build_url_with_base("http://127.0.0.1:8080/api/", "1", Some("2")),
            "http://127.0.0.1:8080/api/applications/1/guilds/2/commands"
        );
    }

    #[test]
    fn api_base_accepts_http() {
        assert_eq!(
            parse_api_base("http://localhost:3000/api/v10/").unwrap(),
            "http://localhost:3000/api/v10"
        );
    }

    #[test]
    fn api_base_rejects_other_schemes() {
        let err = parse_api_base("ftp://discord.com/api").unwrap_err();
        assert!(err.to_string().contains("ftp"));
        assert!(parse_api_base("not a url").is_err());
    }

    #[test]
    fn empty_api_base_rejected() {
        let err = parse_api_base("   ").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
