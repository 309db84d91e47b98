use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Backend the original deployment ships against; overridable at login.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Pet species as the backend names them. Unknown values are kept verbatim so
/// a newer backend does not break older clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PetType {
    Vegeta,
    Frezer,
    MrSatan,
    Goku,
    Krillin,
    Other(String),
}

pub const KNOWN_PET_TYPES: [&str; 5] = ["VEGETA", "FREZER", "MR_SATAN", "GOKU", "KRILLIN"];

impl PetType {
    pub fn as_str(&self) -> &str {
        match self {
            PetType::Vegeta => "VEGETA",
            PetType::Frezer => "FREZER",
            PetType::MrSatan => "MR_SATAN",
            PetType::Goku => "GOKU",
            PetType::Krillin => "KRILLIN",
            PetType::Other(s) => s,
        }
    }
}

impl From<String> for PetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "VEGETA" => PetType::Vegeta,
            "FREZER" => PetType::Frezer,
            "MR_SATAN" => PetType::MrSatan,
            "GOKU" => PetType::Goku,
            "KRILLIN" => PetType::Krillin,
            _ => PetType::Other(s),
        }
    }
}

impl From<PetType> for String {
    fn from(t: PetType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display mood. Unrecognized backend values are shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Angry,
    Excited,
    Other(String),
}

impl Mood {
    pub fn as_str(&self) -> &str {
        match self {
            Mood::Happy => "HAPPY",
            Mood::Neutral => "NEUTRAL",
            Mood::Sad => "SAD",
            Mood::Angry => "ANGRY",
            Mood::Excited => "EXCITED",
            Mood::Other(s) => s,
        }
    }
}

impl From<String> for Mood {
    fn from(s: String) -> Self {
        match s.as_str() {
            "HAPPY" => Mood::Happy,
            "NEUTRAL" => Mood::Neutral,
            "SAD" => Mood::Sad,
            "ANGRY" => Mood::Angry,
            "EXCITED" => Mood::Excited,
            _ => Mood::Other(s),
        }
    }
}

impl From<Mood> for String {
    fn from(m: Mood) -> Self {
        m.as_str().to_string()
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pet record as owned by the backend. The client only ever holds a cached
/// copy, replaced wholesale by each successful response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: u64,
    pub name: String,

    #[serde(rename = "type")]
    pub pet_type: PetType,

    pub mood: Mood,
    pub energy_level: u8,
    pub hunger_level: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,

    /// Whether an observed 401/403 on a protected call forces a logout.
    #[serde(default)]
    pub logout_on_denied: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            remote: None,
            logout_on_denied: false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientState {
    pub version: u32,

    /// Session token per remote base URL. A remote has at most one token.
    #[serde(default)]
    pub session_tokens: HashMap<String, String>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            version: 1,
            session_tokens: HashMap::new(),
        }
    }
}
