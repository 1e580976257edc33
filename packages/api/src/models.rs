//! Row types for the tables the landing page reads.
//!
//! These mirror the hosted schema: money columns are integer minor units
//! (cents), nullable columns are `Option`, and array columns default to empty
//! when the backend sends `null`. All rows are owned and mutated by the
//! hosted service; this crate only ever deserializes them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Nullable columns that should read as their default: PostgREST sends an
/// explicit `null`, which `#[serde(default)]` alone does not cover.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A service category shown in the category grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Icon name as stored in the database. Untrusted input: the UI maps it
    /// through a closed lookup table with a fallback.
    pub icon: Option<String>,
    pub active_projects_count: Option<i64>,
}

/// Whether a project pays a fixed amount or an hourly rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetType {
    Fixed,
    Hourly,
}

/// The client columns embedded into a project row for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
}

/// An open project shown in the slider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget_type: BudgetType,
    pub fixed_amount: Option<i64>,
    pub hourly_min: Option<i64>,
    pub hourly_max: Option<i64>,
    pub estimated_hours: Option<i64>,
    pub deadline: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub skills_required: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Denormalized join through `projects_client_id_fkey`.
    #[serde(default)]
    pub profiles: ClientProfile,
}

/// A freelancer profile row shown on the leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate: Option<i64>,
    /// Pre-aggregated by the backend; never recomputed here.
    #[serde(default, deserialize_with = "null_to_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub reviews_count: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub projects_completed: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_earned: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub skills: Vec<String>,
    pub availability_status: Option<String>,
}

impl FreelancerProfile {
    pub fn is_available(&self) -> bool {
        self.availability_status.as_deref() == Some("available")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_row_with_null_icon() {
        let json = r#"{
            "id": "c1",
            "name": "Programiranje",
            "slug": "programiranje",
            "description": null,
            "icon": null,
            "active_projects_count": 12
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Programiranje");
        assert!(category.icon.is_none());
        assert_eq!(category.active_projects_count, Some(12));
    }

    #[test]
    fn fixed_project_row_with_embedded_client() {
        let json = r#"{
            "id": "p1",
            "title": "Web shop",
            "description": "Izrada web shopa",
            "budget_type": "fixed",
            "fixed_amount": 250000,
            "hourly_min": null,
            "hourly_max": null,
            "estimated_hours": null,
            "deadline": "2025-03-15",
            "skills_required": ["React", "Rust"],
            "created_at": "2025-01-10T09:30:00+00:00",
            "profiles": {
                "first_name": null,
                "last_name": null,
                "company_name": "Acme d.o.o.",
                "location": "Zagreb"
            }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.budget_type, BudgetType::Fixed);
        assert_eq!(project.fixed_amount, Some(250_000));
        assert_eq!(
            project.deadline,
            Some(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
        );
        assert_eq!(project.profiles.company_name.as_deref(), Some("Acme d.o.o."));
    }

    #[test]
    fn hourly_project_without_join_defaults_to_empty_client() {
        let json = r#"{
            "id": "p2",
            "title": "Logo",
            "description": "Dizajn loga",
            "budget_type": "hourly",
            "fixed_amount": null,
            "hourly_min": 2500,
            "hourly_max": 5000,
            "estimated_hours": 20,
            "deadline": null,
            "skills_required": [],
            "created_at": "2025-01-11T08:00:00+00:00"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.budget_type, BudgetType::Hourly);
        assert_eq!(project.profiles, ClientProfile::default());
        assert!(project.deadline.is_none());
    }

    #[test]
    fn freelancer_row_null_columns_read_as_defaults() {
        let json = r#"{
            "id": "f1",
            "first_name": "Ana",
            "last_name": "Horvat",
            "avatar_url": null,
            "location": "Split",
            "bio": null,
            "hourly_rate": 3500,
            "rating": null,
            "reviews_count": 27,
            "projects_completed": 31,
            "total_earned": 1250000,
            "skills": null,
            "availability_status": "available"
        }"#;
        let freelancer: FreelancerProfile = serde_json::from_str(json).unwrap();
        assert!(freelancer.skills.is_empty());
        assert_eq!(freelancer.rating, 0.0);
        assert!(freelancer.is_available());
        assert_eq!(freelancer.projects_completed, 31);
    }

    #[test]
    fn project_row_null_skill_list_reads_as_empty() {
        let json = r#"{
            "id": "p3",
            "title": "Prijevod",
            "description": "Prijevod dokumentacije",
            "budget_type": "fixed",
            "fixed_amount": 50000,
            "hourly_min": null,
            "hourly_max": null,
            "estimated_hours": null,
            "deadline": null,
            "skills_required": null,
            "created_at": "2025-01-12T10:00:00+00:00"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.skills_required.is_empty());
    }

    #[test]
    fn busy_freelancer_is_not_available() {
        let json = r#"{
            "id": "f2",
            "first_name": null,
            "last_name": null,
            "avatar_url": null,
            "location": null,
            "bio": null,
            "hourly_rate": null,
            "rating": 4.1,
            "reviews_count": 3,
            "projects_completed": 2,
            "total_earned": 40000,
            "skills": ["SEO"],
            "availability_status": "busy"
        }"#;
        let freelancer: FreelancerProfile = serde_json::from_str(json).unwrap();
        assert!(!freelancer.is_available());
    }
}
