use crate::ice::{CredentialError, IceCredentialProvider};
use async_trait::async_trait;
use beacon_core::IceServerConfig;
use serde::Deserialize;
use tracing::debug;

const XIRSYS_HOST: &str = "https://global.xirsys.net";

/// Fetches short-lived TURN credentials from the Xirsys API.
///
/// One `PUT /_turn/{channel}` with basic auth per client request. Xirsys
/// mints ephemeral credentials on every call; nothing is cached here.
pub struct XirsysProvider {
    http: reqwest::Client,
    ident: String,
    secret: String,
    channel: String,
}

impl XirsysProvider {
    pub fn new(ident: String, secret: String, channel: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            ident,
            secret,
            channel,
        }
    }
}

#[async_trait]
impl IceCredentialProvider for XirsysProvider {
    async fn fetch(&self) -> Result<Vec<IceServerConfig>, CredentialError> {
        let url = format!("{XIRSYS_HOST}/_turn/{}", self.channel);
        debug!(channel = %self.channel, "requesting ICE servers from Xirsys");

        let response: XirsysResponse = self
            .http
            .put(&url)
            .basic_auth(&self.ident, Some(&self.secret))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.into_servers()
    }
}

/// Xirsys wraps every response in `{s, v}`: `s == "ok"` means `v` holds the
/// payload, anything else means `v` is an error string.
#[derive(Debug, Deserialize)]
struct XirsysResponse {
    s: String,
    v: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct XirsysPayload {
    #[serde(rename = "iceServers")]
    ice_servers: Vec<RawIceServer>,
}

/// Xirsys historically returns a singular `url` key; normalize to `urls`.
#[derive(Debug, Deserialize)]
struct RawIceServer {
    #[serde(alias = "url")]
    urls: UrlField,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    credential: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UrlField {
    One(String),
    Many(Vec<String>),
}

impl XirsysResponse {
    fn into_servers(self) -> Result<Vec<IceServerConfig>, CredentialError> {
        if self.s != "ok" {
            let reason = match self.v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            return Err(CredentialError::Rejected(reason));
        }

        let payload: XirsysPayload = serde_json::from_value(self.v)
            .map_err(|e| CredentialError::Rejected(format!("unexpected payload shape: {e}")))?;

        Ok(payload
            .ice_servers
            .into_iter()
            .map(|raw| IceServerConfig {
                urls: match raw.urls {
                    UrlField::One(url) => vec![url],
                    UrlField::Many(urls) => urls,
                },
                username: raw.username,
                credential: raw.credential,
            })
            .collect())
    }
}
