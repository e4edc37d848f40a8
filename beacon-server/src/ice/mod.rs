mod provider;
mod xirsys;

pub use provider::{CredentialError, IceCredentialProvider, StaticIceServers};
pub use xirsys::XirsysProvider;
