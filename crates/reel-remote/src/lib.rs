mod config;
mod error;
mod http_remote;
mod remote;

pub use config::RemoteConfig;
pub use error::RemoteError;
pub use http_remote::HttpRemote;
pub use remote::Remote;
