use async_trait::async_trait;
use beacon_core::IceServerConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("credential provider rejected the request: {0}")]
    Rejected(String),
}

/// Source of TURN/STUN server credentials handed to clients on request.
///
/// Purely a collaborator of the relay: failures here never touch room or
/// routing state.
#[async_trait]
pub trait IceCredentialProvider: Send + Sync {
    async fn fetch(&self) -> Result<Vec<IceServerConfig>, CredentialError>;
}

/// Fixed server list from configuration; the default when no Xirsys account
/// is set up. An empty list is valid and leaves clients with host
/// candidates only.
#[derive(Debug, Default)]
pub struct StaticIceServers(Vec<IceServerConfig>);

impl StaticIceServers {
    pub fn new(servers: Vec<IceServerConfig>) -> Self {
        Self(servers)
    }
}

#[async_trait]
impl IceCredentialProvider for StaticIceServers {
    async fn fetch(&self) -> Result<Vec<IceServerConfig>, CredentialError> {
        Ok(self.0.clone())
    }
}
