use async_trait::async_trait;
use iq_license_report::prelude::*;
use std::collections::HashMap;

/// Mock ReportRepository holding one report per (application, stage)
#[derive(Default)]
pub struct MockReportRepository {
    reports: HashMap<(String, String), Report>,
}

impl MockReportRepository {
    pub fn new() -> Self {
        Self {
            reports: HashMap::new(),
        }
    }

    pub fn with_report(mut self, app_id: &str, stage: &str, report: Report) -> Self {
        self.reports
            .insert((app_id.to_string(), stage.to_string()), report);
        self
    }
}

#[async_trait]
impl ReportRepository for MockReportRepository {
    async fn fetch_report(&self, app_id: &str, stage: &str) -> Result<Report> {
        self.reports
            .get(&(app_id.to_string(), stage.to_string()))
            .cloned()
            .ok_or_else(|| {
                ReportError::Backend {
                    app_id: app_id.to_string(),
                    stage: stage.to_string(),
                    details: format!("No report for stage '{}'", stage),
                }
                .into()
            })
    }
}
