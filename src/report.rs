use crate::model::Report;
use std::io::Write;
use tokio::sync::mpsc;

pub async fn print_reports<W: Write>(
    mut rx: mpsc::Receiver<Report>,
    mut out: W,
) -> std::io::Result<W> {
    while let Some(report) = rx.recv().await {
        writeln!(out, "{report}")?;
    }
    out.flush()?;
    Ok(out)
}
