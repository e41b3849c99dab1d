// Adapters layer: concrete implementations of the domain ports (carrier http client, session file).

pub mod carrier_client;
pub mod session_file;

pub use carrier_client::CarrierClient;
pub use session_file::{FileSessionStore, SessionFile};
