use crate::adapters::github::{self, GithubSource};
use crate::core::card::CardRenderer;
use crate::core::favicon::FaviconRounder;
use crate::core::loader::ProjectLoader;
use crate::core::page::{GridContent, PageDocument};
use crate::core::templates;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;

pub const PAGE_FILE: &str = "index.html";

/// Builds the portfolio page: the project load and the favicon rounding run
/// as two independent tasks, then the page is rendered and written.
pub struct SiteEngine<S: Storage, C: ConfigProvider> {
    storage: Arc<S>,
    config: C,
    client: Client,
}

impl<S: Storage + 'static, C: ConfigProvider> SiteEngine<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage: Arc::new(storage),
            config,
            client: github::http_client()?,
        })
    }

    /// Returns the path of the written page. Load and favicon failures are
    /// reflected in the page, not returned.
    pub async fn run(&self) -> Result<String> {
        let site = self.config.site().clone();
        tracing::info!("Building portfolio for {}", site.owner);

        let source = GithubSource::with_client(self.client.clone(), self.config.api_base(), &site.owner);
        let renderer = CardRenderer::new(site.owner.clone(), site.theme.clone())?;
        let mut loader = ProjectLoader::new(source, renderer, site.self_repository.clone(), site.priority.clone());
        let load_task = tokio::spawn(async move {
            loader.load().await;
            loader.into_state()
        });

        let rounder = FaviconRounder::new(Arc::clone(&self.storage), self.client.clone());
        let icon_href = site.favicon.clone();
        let favicon_task = tokio::spawn(async move { rounder.round(&icon_href).await });

        let grid = match load_task.await {
            Ok(state) => GridContent::from(state),
            Err(e) => {
                tracing::error!("Error loading projects: task aborted: {}", e);
                GridContent::Failed
            }
        };

        let mut page = PageDocument::new(&site.title, &site.owner, &site.favicon);
        page.set_grid(grid);

        match favicon_task.await {
            Ok(Some(data_url)) => page.set_icon_href(data_url),
            Ok(None) => {}
            Err(e) => tracing::warn!("Could not round favicon: task aborted: {}", e),
        }

        let html = page.render(&templates::load()?)?;
        tracing::debug!("Writing {} ({} bytes) to storage", PAGE_FILE, html.len());
        self.storage.write_file(PAGE_FILE, html.as_bytes()).await?;

        Ok(format!("{}/{}", self.config.output_path(), PAGE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioSettings;
    use crate::utils::error::PortfolioError;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn page(&self) -> String {
            let files = self.files.lock().await;
            String::from_utf8(files.get(PAGE_FILE).cloned().unwrap()).unwrap()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PortfolioError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn settings(api_base: String) -> PortfolioSettings {
        PortfolioSettings {
            api_base,
            output_path: "test_output".to_string(),
            ..PortfolioSettings::default()
        }
    }

    #[tokio::test]
    async fn test_run_writes_cards() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users/LumiKitten/repos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"name": "demo-site", "updated_at": "2024-01-01T00:00:00Z", "has_pages": true, "archived": false}
                ]));
        });

        let storage = MockStorage::default();
        let engine = SiteEngine::new(storage.clone(), settings(server.base_url())).unwrap();
        let output_path = engine.run().await.unwrap();

        api_mock.assert();
        assert_eq!(output_path, "test_output/index.html");

        let page = storage.page().await;
        assert!(page.contains("Demo Site"));
        // no favicon in storage: the declared reference stays
        assert!(page.contains(r#"<link rel="icon" href="favicon.png">"#));
    }

    #[tokio::test]
    async fn test_run_survives_api_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/LumiKitten/repos");
            then.status(500);
        });

        let storage = MockStorage::default();
        let engine = SiteEngine::new(storage.clone(), settings(server.base_url())).unwrap();
        engine.run().await.unwrap();

        let page = storage.page().await;
        assert!(page.contains("Could not load projects. Please try again later."));
        assert!(!page.contains("500"));
    }
}
