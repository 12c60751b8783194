use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Seed the incumbent with the greedy baseline before searching
    pub warm_start: bool,
}

impl Params {
    pub fn initialize(h: &Option<Map<String, Value>>) -> Self {
        let mut p = Self { warm_start: false };
        if let Some(m) = h {
            if let Some(v) = m.get("warm_start").and_then(|v| v.as_bool()) {
                p.warm_start = v;
            }
        }
        p
    }
}
