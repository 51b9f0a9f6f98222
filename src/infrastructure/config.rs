use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub powerbi: PowerBiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Service principal credentials and endpoint URLs
#[derive(Deserialize, Clone)]
pub struct PowerBiSettings {
    pub application_id: String,
    pub application_secret: String,
    pub tenant_id: String,
    pub authority_uri: String,
    pub api_url: String,
    pub scope: String,
}

impl PowerBiSettings {
    /// Application id, secret and tenant id are all set
    pub fn is_complete(&self) -> bool {
        !self.application_id.trim().is_empty()
            && !self.application_secret.trim().is_empty()
            && !self.tenant_id.trim().is_empty()
    }

    pub fn authority(&self) -> String {
        format!("{}/{}", self.authority_uri.trim_end_matches('/'), self.tenant_id)
    }

    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth2/v2.0/token", self.authority())
    }
}

impl std::fmt::Debug for PowerBiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PowerBiSettings")
            .field("application_id", &self.application_id)
            .field("application_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("authority_uri", &self.authority_uri)
            .field("api_url", &self.api_url)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Defaults, then `config/powerbi.*` if present, then `APP__SECTION__KEY` environment variables
pub fn load_settings() -> anyhow::Result<Settings> {
    build_settings(config::File::with_name("config/powerbi").required(false))
}

fn build_settings<S>(file: S) -> anyhow::Result<Settings>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("powerbi.application_id", "")?
        .set_default("powerbi.application_secret", "")?
        .set_default("powerbi.tenant_id", "")?
        .set_default("powerbi.authority_uri", "https://login.microsoftonline.com/")?
        .set_default("powerbi.api_url", "https://api.powerbi.com/")?
        .set_default("powerbi.scope", "https://analysis.windows.net/powerbi/api/.default")?
        .add_source(file)
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
pub fn test_settings(authority_uri: &str, api_url: &str) -> PowerBiSettings {
    PowerBiSettings {
        application_id: "5f4d3b2a-0000-4c1e-9a7b-123456789abc".to_string(),
        application_secret: "s3cr3t".to_string(),
        tenant_id: "contoso-tenant".to_string(),
        authority_uri: authority_uri.to_string(),
        api_url: api_url.to_string(),
        scope: "https://analysis.windows.net/powerbi/api/.default".to_string(),
    }
}
