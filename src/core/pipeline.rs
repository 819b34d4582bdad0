use crate::core::matcher;
use crate::core::{ConfigProvider, DrawResult, Pipeline, PriorAssignments, Roster, Storage};
use crate::domain::model::{AssignmentRow, Participant, PriorRow, RosterRow};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation;

pub struct ExchangePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExchangePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExchangePipeline<S, C> {
    async fn extract(&self) -> Result<(Roster, PriorAssignments)> {
        let roster_path = self.config.roster_path();
        tracing::debug!("Reading roster from {roster_path}");
        let bytes = self
            .storage
            .read_file(roster_path)
            .await
            .map_err(|e| SantaError::source(roster_path, e))?;
        let roster = parse_roster(roster_path, &bytes)?;

        let prior = match self.config.prior_path() {
            Some(path) => {
                tracing::debug!("Reading prior assignments from {path}");
                let bytes = self
                    .storage
                    .read_file(path)
                    .await
                    .map_err(|e| SantaError::source(path, e))?;
                parse_prior(path, &bytes)?
            }
            None => PriorAssignments::default(),
        };

        Ok((roster, prior))
    }

    async fn transform(&self, roster: Roster, prior: PriorAssignments) -> Result<DrawResult> {
        let max_attempts = self.config.attempts().max(1);
        let mut rng = rand::thread_rng();

        for attempt in 1..=max_attempts {
            match matcher::draw(&roster, &prior, &mut rng) {
                Ok(assignments) => {
                    if attempt > 1 {
                        tracing::debug!("Draw succeeded on attempt {attempt}");
                    }
                    return Ok(DrawResult {
                        assignments,
                        attempts: attempt,
                    });
                }
                Err(SantaError::MatchingExhausted) if attempt < max_attempts => {
                    tracing::warn!("Draw attempt {attempt} stranded a giver, reshuffling");
                }
                Err(err) => return Err(err),
            }
        }

        Err(SantaError::MatchingExhausted)
    }

    async fn load(&self, result: DrawResult) -> Result<String> {
        let output_path = self.config.output_path();

        let mut writer = csv::Writer::from_writer(Vec::new());
        for assignment in &result.assignments {
            writer
                .serialize(AssignmentRow::from(assignment))
                .map_err(|e| SantaError::output(output_path, e))?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| SantaError::output(output_path, e))?;

        tracing::debug!("Writing {} bytes to {output_path}", data.len());
        self.storage
            .write_file(output_path, &data)
            .await
            .map_err(|e| SantaError::output(output_path, e))?;

        Ok(output_path.to_string())
    }
}

fn parse_roster(path: &str, data: &[u8]) -> Result<Roster> {
    let mut reader = csv::Reader::from_reader(data);
    require_columns(path, &mut reader, &["Employee_Name", "Employee_EmailID"])?;

    let mut participants = Vec::new();
    for row in reader.deserialize() {
        let row: RosterRow = row.map_err(|e| SantaError::source(path, e))?;
        if !validation::looks_like_email(&row.email) {
            tracing::warn!(
                "Roster identifier '{}' does not look like an email",
                row.email
            );
        }
        participants.push(Participant::new(row.name, row.email));
    }

    let roster = Roster::new(participants);
    if let Some(duplicate) = roster.duplicate_email() {
        return Err(SantaError::source(
            path,
            format!("duplicate participant identifier: {duplicate}"),
        ));
    }
    Ok(roster)
}

fn parse_prior(path: &str, data: &[u8]) -> Result<PriorAssignments> {
    let mut reader = csv::Reader::from_reader(data);
    require_columns(
        path,
        &mut reader,
        &["Employee_EmailID", "Secret_Child_EmailID"],
    )?;

    let mut prior = PriorAssignments::default();
    for row in reader.deserialize() {
        let row: PriorRow = row.map_err(|e| SantaError::source(path, e))?;
        prior.insert(row.giver_email, row.receiver_email);
    }
    Ok(prior)
}

fn require_columns(path: &str, reader: &mut csv::Reader<&[u8]>, required: &[&str]) -> Result<()> {
    let headers = reader.headers().map_err(|e| SantaError::source(path, e))?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(SantaError::source(
                path,
                format!("missing column {column}"),
            ));
        }
    }
    Ok(())
}
