use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// Single-character weekday token used in program schedule data.
///
/// Declaration order is Sunday first, which is also the column order of the
/// calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BroadcastDay {
    #[serde(rename = "日")]
    Sunday,
    #[serde(rename = "月")]
    Monday,
    #[serde(rename = "火")]
    Tuesday,
    #[serde(rename = "水")]
    Wednesday,
    #[serde(rename = "木")]
    Thursday,
    #[serde(rename = "金")]
    Friday,
    #[serde(rename = "土")]
    Saturday,
}

impl BroadcastDay {
    pub const ALL: [BroadcastDay; 7] = [
        BroadcastDay::Sunday,
        BroadcastDay::Monday,
        BroadcastDay::Tuesday,
        BroadcastDay::Wednesday,
        BroadcastDay::Thursday,
        BroadcastDay::Friday,
        BroadcastDay::Saturday,
    ];

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => BroadcastDay::Sunday,
            Weekday::Mon => BroadcastDay::Monday,
            Weekday::Tue => BroadcastDay::Tuesday,
            Weekday::Wed => BroadcastDay::Wednesday,
            Weekday::Thu => BroadcastDay::Thursday,
            Weekday::Fri => BroadcastDay::Friday,
            Weekday::Sat => BroadcastDay::Saturday,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    pub fn token(self) -> char {
        match self {
            BroadcastDay::Sunday => '日',
            BroadcastDay::Monday => '月',
            BroadcastDay::Tuesday => '火',
            BroadcastDay::Wednesday => '水',
            BroadcastDay::Thursday => '木',
            BroadcastDay::Friday => '金',
            BroadcastDay::Saturday => '土',
        }
    }

    /// Column index in a Sunday-first week.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Long label, e.g. `月曜日`.
    pub fn label_ja(self) -> String {
        format!("{}曜日", self.token())
    }
}

impl fmt::Display for BroadcastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for BroadcastDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(token), None) => BroadcastDay::ALL
                .into_iter()
                .find(|day| day.token() == token)
                .ok_or_else(|| SlotError::Validation(format!("Unknown broadcast day: {}", s))),
            _ => Err(SlotError::Validation(format!("Unknown broadcast day: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub program_id: String,
    pub program_name: String,
    #[serde(default)]
    pub program_info: Option<String>,
    /// Names of the navigators hosting the program.
    #[serde(default)]
    pub navigators: Vec<String>,
    #[serde(default)]
    pub broadcast_days: BTreeSet<BroadcastDay>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Program {
    pub fn airs_on(&self, day: BroadcastDay) -> bool {
        self.broadcast_days.contains(&day)
    }

    pub fn is_hosted_by(&self, navigator_name: &str) -> bool {
        self.navigators.iter().any(|name| name == navigator_name)
    }

    /// Schedule line such as `月・水・金曜日 07:00～09:00`.
    pub fn schedule_label(&self) -> String {
        let days = self
            .broadcast_days
            .iter()
            .map(|day| day.token().to_string())
            .collect::<Vec<_>>()
            .join("・");
        format!("{}曜日 {}～{}", days, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigator {
    pub navigator_id: String,
    pub name: String,
    pub name_reading: String,
    #[serde(default)]
    pub bio: String,
    /// Program names as listed on the navigator's profile.
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub social_media: BTreeMap<String, String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDetailResponse {
    #[serde(flatten)]
    pub program: Program,
    pub schedule_label: String,
    pub navigator_profiles: Vec<Navigator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorDetailResponse {
    #[serde(flatten)]
    pub navigator: Navigator,
    pub hosted_programs: Vec<Program>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramScheduleResponse {
    pub program_id: String,
    pub upcoming: Vec<NaiveDate>,
    pub past: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramNotesResponse {
    pub parsed: usize,
    pub updated: Vec<String>,
    pub unmatched: Vec<String>,
}
