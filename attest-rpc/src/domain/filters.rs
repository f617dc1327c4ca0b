use chrono::NaiveDate;
use serde::Serialize;

/// Filters for the approval report fetch.
///
/// Unset fields are omitted from the request so the server applies its own
/// defaults (managed projects of the calling user, last 30 days).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<String>,
}

impl ReportFilters {
    pub fn for_project(project: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            ..Default::default()
        }
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date = Some(from);
        self.to_date = Some(to);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_omitted() {
        let filters = ReportFilters::for_project("PROJ-0001");
        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(json, r#"{"project":"PROJ-0001"}"#);
    }

    #[test]
    fn date_range_serializes_as_iso() {
        let filters = ReportFilters::default().with_date_range(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        );
        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(json, r#"{"from_date":"2025-06-01","to_date":"2025-06-30"}"#);
    }
}
