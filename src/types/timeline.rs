use serde::{Deserialize, Serialize};

/// One day of a sparse per-series count.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DatedCountPoint {
    pub date: String,
    pub count: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TimelineData {
    #[serde(default)]
    pub created_timeline: Vec<DatedCountPoint>,
    #[serde(default)]
    pub resolved_timeline: Vec<DatedCountPoint>,
}
