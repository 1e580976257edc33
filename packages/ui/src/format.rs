//! Display formatting for money, deadlines and people.
//!
//! Money columns arrive as integer minor units (cents) and are rendered in
//! hr-HR conventions: `.` groups thousands, `,` separates decimals, whole
//! amounts drop the decimals entirely.

use api::{BudgetType, ClientProfile, FreelancerProfile, Project};
use chrono::{Datelike, NaiveDate};

/// Render a cent amount as euros, e.g. `250000` → `"2.500 €"`,
/// `123456` → `"1.234,56 €"`.
pub fn format_money(cents: i64) -> String {
    format!("{} €", euros(cents))
}

/// Hourly range, e.g. `"25 - 50 €/h"`.
pub fn format_hourly_range(min_cents: i64, max_cents: i64) -> String {
    format!("{} - {} €/h", euros(min_cents), euros(max_cents))
}

/// Hourly rate with the negotiable fallback.
pub fn format_hourly_rate(cents: Option<i64>) -> String {
    match cents {
        Some(rate) => format!("{} €/h", euros(rate)),
        None => "Dogovorivo".to_string(),
    }
}

/// Budget line for a project card. Incomplete amounts fall back to
/// "negotiable" rather than rendering a partial figure.
pub fn format_budget(project: &Project) -> String {
    match project.budget_type {
        BudgetType::Fixed => match project.fixed_amount {
            Some(amount) => format_money(amount),
            None => "Dogovorivo".to_string(),
        },
        BudgetType::Hourly => match (project.hourly_min, project.hourly_max) {
            (Some(min), Some(max)) => format_hourly_range(min, max),
            _ => "Dogovorivo".to_string(),
        },
    }
}

/// Deadline in hr-HR date form (`15. 3. 2025.`); no deadline reads as
/// flexible.
pub fn format_deadline(deadline: Option<NaiveDate>) -> String {
    match deadline {
        Some(date) => format!("{}. {}. {}.", date.day(), date.month(), date.year()),
        None => "Fleksibilno".to_string(),
    }
}

/// Client display name: company first, then person, then the anonymous
/// placeholder.
pub fn client_display_name(profile: &ClientProfile) -> String {
    if let Some(company) = profile.company_name.as_deref().filter(|c| !c.is_empty()) {
        return company.to_string();
    }
    match (profile.first_name.as_deref(), profile.last_name.as_deref()) {
        (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
            format!("{first} {last}")
        }
        _ => "Anonimni klijent".to_string(),
    }
}

pub fn freelancer_display_name(freelancer: &FreelancerProfile) -> String {
    match (
        freelancer.first_name.as_deref(),
        freelancer.last_name.as_deref(),
    ) {
        (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
            format!("{first} {last}")
        }
        _ => "Anonimni freelancer".to_string(),
    }
}

/// Uppercase initials for the avatar fallback, e.g. "Ana Horvat" → "AH".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn euros(cents: i64) -> String {
    let negative = cents < 0;
    let cents = cents.abs();
    let whole = group_thousands(cents / 100);
    let rest = cents % 100;
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&whole);
    if rest != 0 {
        out.push_str(&format!(",{rest:02}"));
    }
    out
}

fn group_thousands(mut value: i64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();
    groups.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{BudgetType, Project};
    use chrono::{TimeZone, Utc};

    fn project(budget_type: BudgetType) -> Project {
        Project {
            id: "p".to_string(),
            title: String::new(),
            description: String::new(),
            budget_type,
            fixed_amount: None,
            hourly_min: None,
            hourly_max: None,
            estimated_hours: None,
            deadline: None,
            skills_required: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            profiles: ClientProfile::default(),
        }
    }

    #[test]
    fn money_groups_thousands_and_drops_zero_cents() {
        assert_eq!(format_money(250_000), "2.500 €");
        assert_eq!(format_money(123_456), "1.234,56 €");
        assert_eq!(format_money(99), "0,99 €");
        assert_eq!(format_money(125_000_000), "1.250.000 €");
    }

    #[test]
    fn budget_prefers_amounts_and_falls_back_to_negotiable() {
        let mut fixed = project(BudgetType::Fixed);
        fixed.fixed_amount = Some(250_000);
        assert_eq!(format_budget(&fixed), "2.500 €");
        fixed.fixed_amount = None;
        assert_eq!(format_budget(&fixed), "Dogovorivo");

        let mut hourly = project(BudgetType::Hourly);
        hourly.hourly_min = Some(2_500);
        hourly.hourly_max = Some(5_000);
        assert_eq!(format_budget(&hourly), "25 - 50 €/h");
        hourly.hourly_max = None;
        assert_eq!(format_budget(&hourly), "Dogovorivo");
    }

    #[test]
    fn deadline_renders_hr_date_or_flexible() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(format_deadline(Some(date)), "15. 3. 2025.");
        assert_eq!(format_deadline(None), "Fleksibilno");
    }

    #[test]
    fn client_name_prefers_company() {
        let profile = ClientProfile {
            first_name: Some("Ana".to_string()),
            last_name: Some("Horvat".to_string()),
            company_name: Some("Acme d.o.o.".to_string()),
            location: None,
        };
        assert_eq!(client_display_name(&profile), "Acme d.o.o.");

        let person = ClientProfile {
            company_name: None,
            ..profile
        };
        assert_eq!(client_display_name(&person), "Ana Horvat");
        assert_eq!(client_display_name(&ClientProfile::default()), "Anonimni klijent");
    }

    #[test]
    fn initials_come_from_each_word() {
        assert_eq!(initials("Ana Horvat"), "AH");
        assert_eq!(initials("Anonimni freelancer"), "AF");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn hourly_rate_negotiable_when_missing() {
        assert_eq!(format_hourly_rate(Some(3_500)), "35 €/h");
        assert_eq!(format_hourly_rate(None), "Dogovorivo");
    }
}
