use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue workflow states, matching the server's wire spellings exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Incomplete,
    #[serde(rename = "In-Progress")]
    InProgress,
    Complete,
}

impl Status {
    /// Board column order.
    pub const ALL: [Status; 3] = [Status::Incomplete, Status::InProgress, Status::Complete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Incomplete => "Incomplete",
            Status::InProgress => "In-Progress",
            Status::Complete => "Complete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "incomplete" => Ok(Status::Incomplete),
            "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            "complete" => Ok(Status::Complete),
            _ => Err(format!(
                "Invalid status '{}'. Must be one of: incomplete, in-progress, complete",
                s
            )),
        }
    }
}

fn default_permissions() -> i32 {
    crate::permissions::PERM_DEFAULT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default = "default_permissions")]
    pub permissions: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-status issue count in the admin aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueStatusCount {
    pub status: String,
    pub count: i64,
}

/// Read-only aggregate computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_issues: i64,
    pub issues_by_status: Vec<IssueStatusCount>,
}
