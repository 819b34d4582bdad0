use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExchangeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExchangeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting Secret Santa draw");

        let (roster, prior) = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} participants and {} prior pairings",
            roster.len(),
            prior.len()
        );

        let result = self.pipeline.transform(roster, prior).await?;
        tracing::info!(
            "Drew {} assignments in {} attempt(s)",
            result.assignments.len(),
            result.attempts
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Assignments saved to {output_path}");

        Ok(output_path)
    }
}
