use crate::errors::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressKind {
    Rub,
    Tasks,
}

impl ProgressKind {
    pub const ALL: [ProgressKind; 2] = [ProgressKind::Rub, ProgressKind::Tasks];

    pub fn as_str(self) -> &'static str {
        match self {
            ProgressKind::Rub => "rub",
            ProgressKind::Tasks => "tasks",
        }
    }

    /// Decimal places used for both the current and the goal label.
    pub fn decimals(self) -> usize {
        match self {
            ProgressKind::Rub => 2,
            ProgressKind::Tasks => 0,
        }
    }
}

impl fmt::Display for ProgressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressKind {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "rub" => Ok(ProgressKind::Rub),
            "tasks" => Ok(ProgressKind::Tasks),
            other => Err(TrackerError::UnknownKind(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub rub: i64,
    pub tasks: i64,
}

impl GoalRecord {
    pub fn get(&self, kind: ProgressKind) -> i64 {
        match kind {
            ProgressKind::Rub => self.rub,
            ProgressKind::Tasks => self.tasks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgressRecord {
    pub rub: f64,
    pub tasks: f64,
}

impl ProgressRecord {
    pub fn get(&self, kind: ProgressKind) -> f64 {
        match kind {
            ProgressKind::Rub => self.rub,
            ProgressKind::Tasks => self.tasks,
        }
    }

    pub fn add(&mut self, kind: ProgressKind, value: f64) -> f64 {
        let field = match kind {
            ProgressKind::Rub => &mut self.rub,
            ProgressKind::Tasks => &mut self.tasks,
        };
        *field += value;
        *field
    }
}

pub fn parse_record<T: for<'de> Deserialize<'de>>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|err| TrackerError::Parse {
        key: key.to_owned(),
        reason: err.to_string(),
    })
}

pub fn serialize_record<T: Serialize>(key: &str, record: &T) -> Result<String> {
    serde_json::to_string(record).map_err(|err| TrackerError::Parse {
        key: key.to_owned(),
        reason: err.to_string(),
    })
}

/// Raw user input as typed into a field: either a JSON number or text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: InputValue,
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub target: String,
}

/// Rendered state of one percentage-fill bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillBar {
    pub percentage: f64,
    pub width: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralView {
    pub site: String,
    pub balance_label: String,
    pub target_label: String,
    pub fill: FillBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBarView {
    pub site: String,
    pub kind: ProgressKind,
    pub current_label: String,
    pub goal_label: String,
    pub fill: FillBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySiteView {
    pub site: String,
    pub rub: DailyBarView,
    pub tasks: DailyBarView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PanelResponse {
    pub visible: bool,
    pub sites: Vec<DailySiteView>,
}
