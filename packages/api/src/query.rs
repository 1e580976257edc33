//! Read-only PostgREST query construction.
//!
//! Covers exactly what the landing page needs: column selection (including
//! embedded joins), equality and greater-than filters, multi-key ordering and
//! a row limit. Rendering is deterministic so the resulting paths can be
//! asserted in tests.

use std::fmt::Write;

/// Sort direction for an `order` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn suffix(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// A single table read: filters, ordering and limit accumulate through the
/// builder methods and render into a `rest/v1` request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    table: String,
    select: String,
    filters: Vec<String>,
    order: Vec<String>,
    limit: Option<u32>,
}

impl Query {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table: name.into(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Column list, `*` by default. Embedded joins use the PostgREST
    /// `relation!fk(columns)` syntax.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = columns.into();
        self
    }

    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push(format!("{column}=eq.{value}"));
        self
    }

    pub fn gt(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push(format!("{column}=gt.{value}"));
        self
    }

    /// Add an ordering key. Multiple calls accumulate in priority order.
    pub fn order(mut self, column: &str, direction: Order) -> Self {
        self.order.push(format!("{column}.{}", direction.suffix()));
        self
    }

    pub fn limit(mut self, rows: u32) -> Self {
        self.limit = Some(rows);
        self
    }

    /// Render the request path relative to the project URL.
    pub fn to_path(&self) -> String {
        let mut path = format!("rest/v1/{}?select={}", self.table, self.select);
        for filter in &self.filters {
            let _ = write!(path, "&{filter}");
        }
        if !self.order.is_empty() {
            let _ = write!(path, "&order={}", self.order.join(","));
        }
        if let Some(rows) = self.limit {
            let _ = write!(path, "&limit={rows}");
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_table_selects_everything() {
        assert_eq!(
            Query::table("categories").to_path(),
            "rest/v1/categories?select=*"
        );
    }

    #[test]
    fn categories_listing_orders_by_name() {
        let query = Query::table("categories").order("name", Order::Asc);
        assert_eq!(
            query.to_path(),
            "rest/v1/categories?select=*&order=name.asc"
        );
    }

    #[test]
    fn open_projects_with_client_join() {
        let query = Query::table("projects")
            .select("*,profiles!projects_client_id_fkey(first_name,last_name,company_name,location)")
            .eq("status", "open")
            .order("created_at", Order::Desc)
            .limit(5);
        assert_eq!(
            query.to_path(),
            "rest/v1/projects?select=*,profiles!projects_client_id_fkey(first_name,last_name,company_name,location)&status=eq.open&order=created_at.desc&limit=5"
        );
    }

    #[test]
    fn leaderboard_orders_by_rating_then_completed() {
        let query = Query::table("profiles")
            .eq("role", "freelancer")
            .gt("projects_completed", 0)
            .order("rating", Order::Desc)
            .order("projects_completed", Order::Desc)
            .limit(8);
        assert_eq!(
            query.to_path(),
            "rest/v1/profiles?select=*&role=eq.freelancer&projects_completed=gt.0&order=rating.desc,projects_completed.desc&limit=8"
        );
    }
}
