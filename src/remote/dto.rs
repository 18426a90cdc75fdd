use serde::Deserialize;

/// Raw user shape returned by the remote list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<RemoteCompany>,
}

/// Nested organization object on a raw user.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCompany {
    pub name: String,
}

/// Tolerant shape for create/update responses.
///
/// The mock backend echoes the posted fields back instead of returning a
/// list-shaped record, so only the id is decoded. The controller discards
/// even that when it assigns the next local id.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteWriteAck {
    #[serde(default)]
    pub id: Option<u64>,
}
