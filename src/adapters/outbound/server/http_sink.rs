use crate::license_report::domain::License;
use crate::ports::outbound::{OutputSink, ReportRenderer};
use crate::shared::error::ReportError;
use crate::shared::Result;
use actix_web::http::header::ContentType;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only state shared by all request handlers
pub struct ReportPage {
    app_id: String,
    licenses: Vec<License>,
    renderer: Arc<dyn ReportRenderer>,
}

impl ReportPage {
    pub fn new(
        app_id: impl Into<String>,
        licenses: Vec<License>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            licenses,
            renderer,
        }
    }
}

async fn serve_report(page: web::Data<ReportPage>) -> HttpResponse {
    match page.renderer.render(&page.app_id, &page.licenses) {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            tracing::error!("could not serve page: {:#}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Registers the report handler: `/` and every other path, any method.
pub fn configure(config: &mut web::ServiceConfig, page: web::Data<ReportPage>) {
    config
        .app_data(page)
        .route("/", web::to(serve_report))
        .default_service(web::to(serve_report));
}

/// ServerSink adapter serving the rendered report over HTTP
///
/// The page is re-rendered for every request from the license set captured
/// when the server starts. A failed render only turns that response into a
/// 500.
pub struct ServerSink {
    host: String,
    port: u16,
    renderer: Arc<dyn ReportRenderer>,
}

impl ServerSink {
    pub fn new(host: impl Into<String>, port: u16, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            host: host.into(),
            port,
            renderer,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[async_trait(?Send)]
impl OutputSink for ServerSink {
    async fn deliver(&self, app_id: &str, licenses: &[License]) -> Result<()> {
        let page = web::Data::new(ReportPage::new(
            app_id,
            licenses.to_vec(),
            Arc::clone(&self.renderer),
        ));
        let address = self.address();

        let server = HttpServer::new(move || {
            let page = page.clone();
            App::new()
                .wrap(Logger::default())
                .configure(move |config| configure(config, page))
        })
        .bind(address.as_str())
        .map_err(|e| ReportError::ServerBind {
            address: address.clone(),
            details: e.to_string(),
        })?;

        tracing::info!("Serving licenses report on {}", address);

        server
            .run()
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server on {} failed: {}", address, e))
    }
}
