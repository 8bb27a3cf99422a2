use crate::error::Result;
use crate::model::{Config, Report, RunSummary};
use crate::report::print_reports;
use crate::worker::run_worker;
use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

pub async fn run(config: &Config, tx: mpsc::Sender<Report>) -> Result<RunSummary> {
    let mut set = JoinSet::new();
    for rank in 0..config.workers {
        set.spawn(run_worker(rank, config.clone(), tx.clone()));
    }
    drop(tx);

    let mut summaries = Vec::with_capacity(config.workers as usize);
    // Returning early drops the set and aborts the remaining workers.
    while let Some(res) = set.join_next().await {
        let summary = res??;
        tracing::debug!(worker = summary.worker, average = summary.average, "worker done");
        summaries.push(summary);
    }
    summaries.sort_by_key(|s| s.worker);

    let summary = RunSummary::from_workers(&summaries);
    tracing::info!(
        url = %config.url,
        workers = summary.workers,
        requests = config.requests,
        average = summary.average,
        "run complete"
    );
    Ok(summary)
}

/// Runs the load test, writing every report line and then the total to `out`.
pub async fn execute<W>(config: &Config, out: W) -> Result<(RunSummary, W)>
where
    W: Write + Send + 'static,
{
    let (tx, rx) = mpsc::channel(100);
    let printer = tokio::spawn(print_reports(rx, out));

    let outcome = run(config, tx).await;
    // All senders are gone once `run` returns, so the printer drains and exits.
    let printed = printer.await;

    let summary = outcome?;
    let mut out = printed??;
    writeln!(out, "{summary}")?;
    out.flush()?;
    Ok((summary, out))
}
