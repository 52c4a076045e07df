use crate::license_report::domain::License;
use crate::ports::outbound::ReportRenderer;
use crate::shared::error::ReportError;
use crate::shared::Result;
use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tera::Tera;

const TEMPLATE_NAME: &str = "licenses.html";

/// Page layout. The `.html` template name turns on Tera's autoescaping.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
	<head>
		<meta charset="utf-8">
		<title>{{ title }}</title>
	</head>
	<body>
		<h1>{{ title }}</h1>
		<ul>
		{%- for license in licenses %}
			<li><code>{{ license.license_id }}</code> {{ license.license_name }}</li>
		{%- endfor %}
		</ul>
		<footer>Created {{ created }}</footer>
	</body>
</html>
"#;

/// RFC 1123 layout, always in UTC
const CREATED_FORMAT: &str = "%a, %d %b %Y %H:%M:%S UTC";

#[derive(Serialize)]
struct PageContext<'a> {
    title: String,
    created: String,
    licenses: Vec<LicenseEntry<'a>>,
}

#[derive(Serialize)]
struct LicenseEntry<'a> {
    license_id: &'a str,
    license_name: &'a str,
}

/// HtmlReportRenderer adapter rendering the license list as an HTML page
///
/// The template is compiled once when the renderer is built; a broken
/// template is a startup error, never a per-request one.
pub struct HtmlReportRenderer {
    tera: Tera,
}

impl HtmlReportRenderer {
    pub fn new() -> Result<Self> {
        Self::with_template(PAGE_TEMPLATE)
    }

    /// Builds a renderer from a custom template using the same context
    /// (`title`, `created`, `licenses[].license_id`, `licenses[].license_name`).
    pub fn with_template(template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, template)
            .context("Failed to compile the license report template")?;
        Ok(Self { tera })
    }

    /// Renders the page with an explicit creation time
    pub fn render_at(
        &self,
        app_id: &str,
        licenses: &[License],
        created: DateTime<Utc>,
    ) -> Result<String> {
        let page = PageContext {
            title: format!("Licenses for {}", app_id),
            created: created.format(CREATED_FORMAT).to_string(),
            licenses: licenses
                .iter()
                .map(|license| LicenseEntry {
                    license_id: license.license_id(),
                    license_name: license.license_name(),
                })
                .collect(),
        };

        let context = tera::Context::from_serialize(&page).map_err(render_error)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(render_error)
    }
}

fn render_error(error: tera::Error) -> anyhow::Error {
    ReportError::Render {
        details: format!("{:#}", anyhow::Error::from(error)),
    }
    .into()
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(&self, app_id: &str, licenses: &[License]) -> Result<String> {
        self.render_at(app_id, licenses, Utc::now())
    }
}
