//! Command-line front end.
//!
//! Reads transport problems as JSON and prints distances as JSON.
mod query;

pub use query::*;

use crate::Energy;
use crate::Mass;
use crate::emd::Arc;
use crate::emd::CostMatrix;
use crate::emd::Problem;
use crate::emd::Signature;
use crate::emd::Simplex;
use crate::transport::Coupling;
use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::path::Path;

/// Input for the pairwise command.
#[derive(Debug, serde::Deserialize)]
pub struct Batch {
    pub signatures: Vec<Signature>,
    pub cost: CostMatrix,
}

/// Output of the distance command with `--flow`.
#[derive(Debug, serde::Serialize)]
pub struct Report {
    pub distance: Energy,
    pub total: Mass,
    pub pivots: usize,
    pub flow: Vec<Arc>,
}

pub struct CLI;

impl CLI {
    pub fn run() -> anyhow::Result<()> {
        let query = Query::parse();
        crate::log(match query.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
        println!("{}", Self::handle(query.command)?);
        Ok(())
    }

    pub fn handle(command: Command) -> anyhow::Result<String> {
        match command {
            Command::Distance {
                input,
                flow,
                limit,
                tolerance,
            } => {
                let problem = serde_json::from_str::<Problem>(&Self::read(&input)?)
                    .context("parse problem")?;
                let (ref p, ref q, ref m) = problem.validate()?;
                let simplex = Simplex::from((p, q, m)).with_tolerance(tolerance);
                let simplex = match limit {
                    Some(limit) => simplex.with_limit(limit),
                    None => simplex,
                }
                .minimize()?;
                log::info!(
                    "{}x{} solved in {} pivots",
                    p.len(),
                    q.len(),
                    simplex.pivots()
                );
                match flow {
                    false => Ok(serde_json::to_string(&simplex.distance())?),
                    true => Ok(serde_json::to_string_pretty(&Report {
                        distance: simplex.distance(),
                        total: simplex.total(),
                        pivots: simplex.pivots(),
                        flow: simplex.plan().arcs().collect(),
                    })?),
                }
            }
            Command::Pairwise { input } => {
                let batch = serde_json::from_str::<Batch>(&Self::read(&input)?)
                    .context("parse signatures")?;
                let distances = crate::emd::pairwise(&batch.signatures, &batch.cost)?;
                log::info!("{} signatures, {} pairs", batch.signatures.len(), distances.len());
                Ok(serde_json::to_string(&distances)?)
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<String> {
        let mut buffer = String::new();
        match path.to_str() {
            Some("-") => std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
                .context("read stdin"),
            _ => std::fs::read_to_string(path).with_context(|| format!("read {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("earthmover-{}.json", rand::random::<u64>()));
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(contents.as_bytes()))
            .unwrap();
        path
    }

    #[test]
    fn is_distance_printed() {
        let input = file(r#"{"weight1": [1, 0], "weight2": [0, 1], "cost": [0, 1, 1, 0]}"#);
        let command = Command::Distance {
            input,
            flow: false,
            limit: None,
            tolerance: crate::EMD_TOLERANCE,
        };
        assert_eq!(CLI::handle(command).unwrap(), "1.0");
    }

    #[test]
    fn is_report_flow_listed() {
        let input = file(r#"{"weight1": [2], "weight2": [1], "cost": [3]}"#);
        let command = Command::Distance {
            input,
            flow: true,
            limit: None,
            tolerance: crate::EMD_TOLERANCE,
        };
        let report = serde_json::from_str::<serde_json::Value>(&CLI::handle(command).unwrap()).unwrap();
        assert_eq!(report["distance"], 3.0);
        assert_eq!(report["total"], 1.0);
        assert_eq!(report["flow"][0]["mass"], 1.0);
    }

    #[test]
    fn is_invalid_problem_error() {
        let input = file(r#"{"weight1": [-1], "weight2": [1], "cost": [3]}"#);
        let command = Command::Distance {
            input,
            flow: false,
            limit: None,
            tolerance: crate::EMD_TOLERANCE,
        };
        let err = CLI::handle(command).unwrap_err();
        assert!(err.downcast_ref::<crate::Error>().is_some());
    }

    #[test]
    fn is_nan_tolerance_error() {
        let input = file(r#"{"weight1": [1, 1], "weight2": [1, 1], "cost": [0, 1, 1, 10]}"#);
        let command = Command::Distance {
            input,
            flow: false,
            limit: None,
            tolerance: f64::NAN,
        };
        let err = CLI::handle(command).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::InvalidInput(_))
        ));
    }

    #[test]
    fn is_pairwise_printed() {
        let input = file(r#"{"signatures": [[1, 0], [0, 1]], "cost": [[0, 2], [2, 0]]}"#);
        let command = Command::Pairwise { input };
        assert_eq!(CLI::handle(command).unwrap(), "[2.0]");
    }

    #[test]
    fn is_query_parsed() {
        let query = Query::try_parse_from(["emd", "-vv", "dist", "p.json", "--flow", "--limit", "9"]).unwrap();
        assert_eq!(query.verbose, 2);
        assert!(matches!(
            query.command,
            Command::Distance {
                flow: true,
                limit: Some(9),
                ..
            }
        ));
    }
}
