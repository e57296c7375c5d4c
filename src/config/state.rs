use serde::{Deserialize, Serialize};

/// Persisted between runs so invoice numbers keep counting up
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    #[serde(default)]
    pub counter: Counter,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Counter {
    pub last_number: u32,
}
