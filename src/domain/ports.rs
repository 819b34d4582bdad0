use crate::domain::model::{DrawResult, PriorAssignments, Roster};
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
    fn roster_path(&self) -> &str;
    fn prior_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    /// How many shuffles the transform stage may consume before giving up.
    /// 1 means a single fail-fast draw.
    fn attempts(&self) -> u32;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<(Roster, PriorAssignments)>;
    async fn transform(&self, roster: Roster, prior: PriorAssignments) -> Result<DrawResult>;
    async fn load(&self, result: DrawResult) -> Result<String>;
}
