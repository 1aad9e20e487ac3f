use std::fmt;

/// Wire formats a [`PresenceBackend`](crate::PresenceBackend) can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Protocol Buffers binary, proto2 optional fields (`protobuf`)
    Protobuf,
    /// JSON object document (`json`)
    Json,
    /// Arrow IPC stream holding a one-row batch (`arrow-ipc`)
    ArrowIpc,
    /// Unknown/custom format
    Unknown(String),
}

impl WireFormat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Protobuf => "protobuf",
            Self::Json => "json",
            Self::ArrowIpc => "arrow-ipc",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for WireFormat {
    fn from(s: &str) -> Self {
        match s {
            "protobuf" => Self::Protobuf,
            "json" => Self::Json,
            "arrow-ipc" => Self::ArrowIpc,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
