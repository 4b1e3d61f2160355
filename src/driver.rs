//! File I/O, job lists, and human-readable reports.
//!
//! A job names an input board file, an output board file, and a depth. The
//! batch driver runs every engine variant over a list of jobs and keeps going
//! when a single job fails.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::board::Board;
use crate::constants::DEFAULT_DEPTH;
use crate::engine::{Engine, EngineConfig, Outcome, all_variants};
use crate::error::{EngineError, EngineResult};
use crate::movegen::Rules;

/// One input/output/depth triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub depth: u32,
}

impl Job {
    /// Build a job from `[input, output, depth]`; extra arguments are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> EngineResult<Job> {
        let [input, output, depth, ..] = args else {
            return Err(EngineError::InvalidArgumentCount { found: args.len() });
        };
        Ok(Job {
            input: PathBuf::from(input.as_ref()),
            output: PathBuf::from(output.as_ref()),
            depth: parse_depth(depth.as_ref())?,
        })
    }

    /// The four board files the original exercise ran, at the default depth.
    pub fn defaults() -> Vec<Job> {
        (1..=4)
            .map(|i| Job {
                input: PathBuf::from(format!("inputBoard{i}.txt")),
                output: PathBuf::from(format!("outputBoard{i}.txt")),
                depth: DEFAULT_DEPTH,
            })
            .collect()
    }
}

/// Parse a search depth; anything but a positive integer is rejected.
pub fn parse_depth(s: &str) -> EngineResult<u32> {
    match s.trim().parse::<u32>() {
        Ok(d) if d >= 1 => Ok(d),
        _ => Err(EngineError::InvalidDepth(s.to_string())),
    }
}

/// Parse a job manifest: one job per line, blank lines and `#` comments skipped.
pub fn parse_manifest(text: &str) -> EngineResult<Vec<Job>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            Job::from_args(&words[..])
        })
        .collect()
}

pub fn load_manifest(path: &Path) -> Result<Vec<Job>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    let jobs = parse_manifest(&text).with_context(|| format!("in manifest {}", path.display()))?;
    Ok(jobs)
}

/// Read a board from the first line of a file.
pub fn read_board(path: &Path) -> Result<Board> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading board {}", path.display()))?;
    let line = text.lines().next().unwrap_or("").trim();
    let board = line
        .parse::<Board>()
        .map_err(EngineError::from)
        .with_context(|| format!("in board file {}", path.display()))?;
    Ok(board)
}

/// Write a board as its 23-character uppercase string, without newline.
pub fn write_board(path: &Path, board: &Board) -> Result<()> {
    fs::write(path, board.to_string())
        .with_context(|| format!("writing board {}", path.display()))
}

/// Diagnostics for one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub config: EngineConfig,
    pub input: Board,
    pub outcome: Outcome,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input Board: {}", self.input)?;
        match &self.outcome {
            Outcome::Move(r) => {
                writeln!(f, "Board Position: {}", r.board)?;
                writeln!(f, "Positions evaluated by static estimation: {}", r.evaluated)?;
                write!(f, "{} Estimate: {}", self.config.algorithm.label(), r.score)
            }
            Outcome::AlreadyWon => write!(f, "You Won!"),
            Outcome::AlreadyLost => write!(f, "You Lost!"),
        }
    }
}

/// Run one engine on one job, writing the output board when a move is found.
pub fn run_job(config: EngineConfig, job: &Job) -> Result<Report> {
    let engine = Engine::new(EngineConfig {
        depth: job.depth,
        ..config
    })?;
    let input = read_board(&job.input)?;
    let outcome = engine.run(&input);
    if let Outcome::Move(r) = &outcome {
        write_board(&job.output, &r.board)?;
    }
    Ok(Report {
        config: *engine.config(),
        input,
        outcome,
    })
}

/// Run every engine variant over `jobs`, in variant-major order.
///
/// Failures are logged and returned alongside successes; a failed job does
/// not stop the batch.
pub fn run_batch(jobs: &[Job], rules: Rules) -> Vec<(String, Result<Report>)> {
    let mut results = Vec::new();
    for config in all_variants(DEFAULT_DEPTH, rules) {
        for job in jobs {
            let label = format!("{} {}", config.name(), job.input.display());
            let result = run_job(config, job);
            if let Err(err) = &result {
                warn!(job = %label, "job failed: {err:#}");
            }
            results.push((label, result));
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use crate::movegen::Phase;
    use crate::search::{Algorithm, SearchResult};

    #[test]
    fn test_job_from_args() {
        let job = Job::from_args(&["in.txt", "out.txt", "4"]).unwrap();
        assert_eq!(job.input, PathBuf::from("in.txt"));
        assert_eq!(job.output, PathBuf::from("out.txt"));
        assert_eq!(job.depth, 4);
    }

    #[test]
    fn test_job_too_few_args() {
        assert_eq!(
            Job::from_args(&["in.txt", "out.txt"]).unwrap_err(),
            EngineError::InvalidArgumentCount { found: 2 }
        );
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("3"), Ok(3));
        assert_eq!(parse_depth(" 2 "), Ok(2));
        for bad in ["0", "-1", "three", ""] {
            assert_eq!(parse_depth(bad), Err(EngineError::InvalidDepth(bad.to_string())));
        }
    }

    #[test]
    fn test_parse_manifest() {
        let text = "# boards\n\na.txt a.out 2\nb.txt b.out 3 extra\n";
        let jobs = parse_manifest(text).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].depth, 3);

        let err = parse_manifest("a.txt a.out\n").unwrap_err();
        assert_eq!(err, EngineError::InvalidArgumentCount { found: 2 });
    }

    #[test]
    fn test_defaults() {
        let jobs = Job::defaults();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[3].input, PathBuf::from("inputBoard4.txt"));
        assert!(jobs.iter().all(|j| j.depth == DEFAULT_DEPTH));
    }

    #[test]
    fn test_report_format() {
        let input: Board = "wxxxxxxxxxxxxxxxxxxxxxb".parse().unwrap();
        let output: Board = "wwxxxxxxxxxxxxxxxxxxxxb".parse().unwrap();
        let config = EngineConfig::new(Algorithm::AlphaBeta, Phase::Placement, Side::White, 1);
        let report = Report {
            config,
            input,
            outcome: Outcome::Move(SearchResult {
                board: output,
                score: 1,
                evaluated: 21,
            }),
        };
        assert_eq!(
            report.to_string(),
            "Input Board: WXXXXXXXXXXXXXXXXXXXXXB\n\
             Board Position: WWXXXXXXXXXXXXXXXXXXXXB\n\
             Positions evaluated by static estimation: 21\n\
             ALPHA-BETA Estimate: 1"
        );

        let won = Report {
            outcome: Outcome::AlreadyWon,
            ..report
        };
        assert!(won.to_string().ends_with("You Won!"));
    }
}
