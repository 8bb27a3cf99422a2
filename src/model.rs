use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub workers: u32,
    pub requests: u32,
    pub verbose: bool,
}

/// Timing of a single GET probe.
#[derive(Clone, Debug)]
pub struct RequestResult {
    pub worker: u32,
    pub index: u32,
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// Wall-clock seconds from send to the last body byte.
    pub elapsed: f64,
    pub status: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkerSummary {
    pub worker: u32,
    pub average: f64,
}

impl WorkerSummary {
    pub fn from_total(worker: u32, total: f64, requests: u32) -> Self {
        WorkerSummary {
            worker,
            average: total / requests as f64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub workers: u32,
    pub average: f64,
}

impl RunSummary {
    // Not weighted by request count: every worker runs the same number.
    pub fn from_workers(summaries: &[WorkerSummary]) -> Self {
        let total: f64 = summaries.iter().map(|s| s.average).sum();
        let workers = summaries.len() as u32;
        RunSummary {
            workers,
            average: if workers == 0 {
                0.0
            } else {
                total / workers as f64
            },
        }
    }
}

#[derive(Debug)]
pub enum Report {
    Body { worker: u32, index: u32, text: String },
    Request(RequestResult),
    Worker(WorkerSummary),
}

impl fmt::Display for RequestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process: {}, Request: {}, Elapsed Time: {:.2}",
            self.worker, self.index, self.elapsed
        )
    }
}

impl fmt::Display for WorkerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process: {}, AVERAGE   , Elapsed Time: {:.2}",
            self.worker, self.average
        )
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOTAL AVERAGE ELAPSED TIME: {:.2}", self.average)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Body { text, .. } => f.write_str(text),
            Report::Request(result) => result.fmt(f),
            Report::Worker(summary) => summary.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(worker: u32, index: u32, elapsed: f64) -> RequestResult {
        RequestResult {
            worker,
            index,
            started_at: chrono::Utc::now(),
            elapsed,
            status: 200,
        }
    }

    #[test]
    fn worker_average_is_sum_over_request_count() {
        let total: f64 = [0.5, 1.0, 1.5].iter().sum();
        let summary = WorkerSummary::from_total(3, total, 3);
        assert_eq!(summary.worker, 3);
        assert!((summary.average - 1.0).abs() < 1e-12);
    }

    #[test]
    fn worker_average_handles_the_largest_request_count() {
        let summary = WorkerSummary::from_total(0, u32::MAX as f64 * 0.25, u32::MAX);
        assert!((summary.average - 0.25).abs() < 1e-12);
    }

    #[test]
    fn run_average_is_mean_of_worker_averages() {
        let summaries = [
            WorkerSummary { worker: 0, average: 0.25 },
            WorkerSummary { worker: 1, average: 0.75 },
            WorkerSummary { worker: 2, average: 2.0 },
        ];
        let run = RunSummary::from_workers(&summaries);
        assert_eq!(run.workers, 3);
        assert!((run.average - 1.0).abs() < 1e-12);
    }

    #[test]
    fn run_average_of_nothing_is_zero() {
        assert_eq!(RunSummary::from_workers(&[]).average, 0.0);
    }

    #[test]
    fn lines_use_two_decimals() {
        assert_eq!(
            result(1, 4, 0.123456).to_string(),
            "Process: 1, Request: 4, Elapsed Time: 0.12"
        );
        assert_eq!(
            WorkerSummary { worker: 0, average: 2.0 }.to_string(),
            "Process: 0, AVERAGE   , Elapsed Time: 2.00"
        );
        assert_eq!(
            RunSummary { workers: 2, average: 0.006 }.to_string(),
            "TOTAL AVERAGE ELAPSED TIME: 0.01"
        );
    }

    #[test]
    fn body_report_prints_raw_text() {
        let report = Report::Body {
            worker: 0,
            index: 0,
            text: "<html></html>".to_string(),
        };
        assert_eq!(report.to_string(), "<html></html>");
    }
}
