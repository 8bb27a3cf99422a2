use crate::error::{Result, ThorError};
use crate::model::{Config, Report, RequestResult, WorkerSummary};
use chrono::Utc;
use std::time::Instant;
use tokio::sync::mpsc;

pub async fn run_worker(
    rank: u32,
    config: Config,
    tx: mpsc::Sender<Report>,
) -> Result<WorkerSummary> {
    let client = reqwest::Client::new();
    let mut total = 0.0;

    for index in 0..config.requests {
        let started_at = Utc::now();
        let begin = Instant::now();

        let network = |source| ThorError::Network {
            worker: rank,
            index,
            source,
        };
        let response = client.get(&config.url).send().await.map_err(network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network)?;

        let result = RequestResult {
            worker: rank,
            index,
            started_at,
            elapsed: begin.elapsed().as_secs_f64(),
            status: status.as_u16(),
        };
        total += result.elapsed;

        if !status.is_success() {
            tracing::warn!(worker = rank, index, status = result.status, "non-success response");
        }
        tracing::debug!(
            worker = rank,
            index,
            status = result.status,
            elapsed = result.elapsed,
            started_at = %result.started_at,
            "request finished"
        );

        if config.verbose {
            tx.send(Report::Body {
                worker: rank,
                index,
                text: String::from_utf8_lossy(&body).into_owned(),
            })
            .await?;
        }
        tx.send(Report::Request(result)).await?;
    }

    let summary = WorkerSummary::from_total(rank, total, config.requests);
    tx.send(Report::Worker(summary)).await?;
    Ok(summary)
}
