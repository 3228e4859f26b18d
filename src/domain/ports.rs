use crate::config::site::SiteConfig;
use crate::domain::model::RepositoryRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn output_path(&self) -> &str;
    fn site(&self) -> &SiteConfig;
}

/// Where the repository listing comes from.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_repositories(&self) -> Result<Vec<RepositoryRecord>>;
}
