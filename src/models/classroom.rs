//! Classroom model with embedded smartboards

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Smartboard status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SmartboardStatus {
    Available,
    Maintenance,
    Unavailable,
}

impl SmartboardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmartboardStatus::Available => "Available",
            SmartboardStatus::Maintenance => "Maintenance",
            SmartboardStatus::Unavailable => "Unavailable",
        }
    }
}

/// Smartboard embedded in a classroom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Smartboard {
    /// Identifier, unique within its classroom
    pub number: String,
    pub status: SmartboardStatus,
}

/// Internal row structure (smartboards stored as a JSONB array)
#[derive(Debug, Clone, FromRow)]
pub struct ClassroomRow {
    id: Uuid,
    branch: String,
    label: String,
    smartboards: Json<Vec<Smartboard>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClassroomRow> for Classroom {
    fn from(row: ClassroomRow) -> Self {
        Classroom {
            id: row.id,
            branch: row.branch,
            label: row.label,
            smartboards: row.smartboards.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Classroom record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Classroom {
    pub id: Uuid,
    /// Branch / department code (upper-case)
    pub branch: String,
    /// Human readable label, unique within the branch
    pub label: String,
    /// Ordered smartboards
    pub smartboards: Vec<Smartboard>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Classroom {
    pub fn smartboard(&self, number: &str) -> Option<&Smartboard> {
        self.smartboards.iter().find(|sb| sb.number == number)
    }
}

/// Create classroom request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassroom {
    #[serde(alias = "Branch")]
    #[validate(length(min = 1, message = "Branch is required"))]
    pub branch: String,
    #[serde(alias = "Classroom")]
    #[validate(length(min = 1, message = "Classroom label is required"))]
    pub label: String,
    /// Initial smartboard numbers
    #[serde(default)]
    pub smartboards: Vec<String>,
}

/// Add smartboard request; the classroom is created when missing
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddSmartboard {
    /// Smartboard number
    #[serde(alias = "name")]
    #[validate(length(min = 1, message = "Smartboard number is required"))]
    pub number: String,
    /// Classroom label
    #[validate(length(min = 1, message = "Room is required"))]
    pub room: String,
    /// Branch code
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
}

/// Update smartboard status request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSmartboardStatus {
    pub status: SmartboardStatus,
}

/// Smartboard flattened with its classroom, for admin listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SmartboardView {
    pub classroom_id: Uuid,
    pub number: String,
    pub status: SmartboardStatus,
    pub room: String,
    pub department: String,
}

impl SmartboardView {
    pub fn flatten(classrooms: &[Classroom]) -> Vec<SmartboardView> {
        classrooms
            .iter()
            .flat_map(|c| {
                c.smartboards.iter().map(move |sb| SmartboardView {
                    classroom_id: c.id,
                    number: sb.number.clone(),
                    status: sb.status,
                    room: c.label.clone(),
                    department: c.branch.clone(),
                })
            })
            .collect()
    }
}

/// Department derived from the branches in use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Department {
    pub code: String,
    pub name: String,
}

impl From<String> for Department {
    fn from(code: String) -> Self {
        Department {
            name: format!("{} Department", code),
            code,
        }
    }
}

/// Build the initial smartboard list, rejecting blank or repeated numbers
pub fn build_smartboards(numbers: &[String]) -> Result<Vec<Smartboard>, AppError> {
    let mut smartboards: Vec<Smartboard> = Vec::with_capacity(numbers.len());
    for number in numbers {
        let number = number.trim();
        if number.is_empty() {
            return Err(AppError::Validation("Smartboard number cannot be empty".to_string()));
        }
        if smartboards.iter().any(|sb| sb.number == number) {
            return Err(AppError::Validation(format!("Duplicate smartboard number {}", number)));
        }
        smartboards.push(Smartboard {
            number: number.to_string(),
            status: SmartboardStatus::Available,
        });
    }
    Ok(smartboards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom(branch: &str, label: &str, boards: &[&str]) -> Classroom {
        let numbers: Vec<String> = boards.iter().map(|s| s.to_string()).collect();
        Classroom {
            id: Uuid::new_v4(),
            branch: branch.to_string(),
            label: label.to_string(),
            smartboards: build_smartboards(&numbers).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_build_smartboards_keeps_order() {
        let boards = build_smartboards(&["SB-2".into(), " SB-1 ".into()]).unwrap();
        assert_eq!(boards[0].number, "SB-2");
        assert_eq!(boards[1].number, "SB-1");
        assert!(boards.iter().all(|b| b.status == SmartboardStatus::Available));
    }

    #[test]
    fn test_build_smartboards_rejects_duplicates() {
        let result = build_smartboards(&["SB-1".into(), "SB-1".into()]);
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(build_smartboards(&["  ".into()]).is_err());
    }

    #[test]
    fn test_flatten_smartboards() {
        let rooms = vec![classroom("CSE", "207", &["A", "B"]), classroom("ECE", "101", &[])];
        let flat = SmartboardView::flatten(&rooms);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[1].number, "B");
        assert_eq!(flat[1].room, "207");
        assert_eq!(flat[1].department, "CSE");
    }

    #[test]
    fn test_smartboard_lookup() {
        let room = classroom("CSE", "207", &["A"]);
        assert!(room.smartboard("A").is_some());
        assert!(room.smartboard("Z").is_none());
    }

    #[test]
    fn test_create_classroom_accepts_legacy_field_names() {
        let req: CreateClassroom =
            serde_json::from_str(r#"{"Branch": "CSE", "Classroom": "207 (CSE)"}"#).unwrap();
        assert_eq!(req.branch, "CSE");
        assert_eq!(req.label, "207 (CSE)");
        assert!(req.smartboards.is_empty());
    }

    #[test]
    fn test_department_name() {
        let dept = Department::from("CSE".to_string());
        assert_eq!(dept.name, "CSE Department");
    }
}
