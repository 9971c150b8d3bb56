//! End-to-end packing: read instances, solve them, render the output.

use crate::error::PackError;
use crate::io::{format_results, InstanceReader};
use crate::model::Instance;
use crate::solver::{BatchRunner, CandidateSet, DpResult, DpRunner, SolverConfig};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Packs every line of the file at `path` with the default configuration.
///
/// Returns one output line per input line: the chosen indices in
/// selection order, or `-` when nothing fits. The first invalid line
/// fails the whole call.
pub fn pack(path: impl AsRef<Path>) -> Result<String, PackError> {
    pack_with(path, &SolverConfig::default())
}

/// Packs every line of the file at `path`.
///
/// An invalid `config` is reported as [`PackError::Config`] before any
/// line is solved.
pub fn pack_with(path: impl AsRef<Path>, config: &SolverConfig) -> Result<String, PackError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PackError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "packing input file");
    pack_reader(BufReader::new(file), config)
}

/// Packs every line read from `reader`.
///
/// Lines are handled in order and the earliest failing line aborts the
/// run with no partial output. The configuration is validated first.
///
/// # Examples
///
/// ```
/// use u_packer::{pack_reader, SolverConfig};
///
/// let input = "81 : (1,53.38,€45) (4,72.30,€76)\n8 : (1,15.3,€34)";
/// let output = pack_reader(input.as_bytes(), &SolverConfig::default()).unwrap();
/// assert_eq!(output, "4\n-");
/// ```
pub fn pack_reader<R: BufRead>(reader: R, config: &SolverConfig) -> Result<String, PackError> {
    config.validate().map_err(PackError::Config)?;
    debug!(
        strategy = %config.strategy,
        parallel = config.parallel,
        "packing input"
    );

    let instances = InstanceReader::new(reader).with_limits(config.limits);
    let selections = if config.parallel {
        pack_batch(instances, config)?
    } else {
        pack_sequential(instances, config)?
    };

    info!(packages = selections.len(), "packing finished");
    Ok(format_results(&selections))
}

/// Reads and solves one line at a time.
fn pack_sequential<R: BufRead>(
    instances: InstanceReader<R>,
    config: &SolverConfig,
) -> Result<Vec<CandidateSet>, PackError> {
    let mut selections = Vec::new();
    for (line, instance) in (1..).zip(instances) {
        let result = DpRunner::run(&instance?, config)
            .map_err(|source| PackError::Constraint { line, source })?;
        log_solved(line, &result);
        selections.push(result.best);
    }
    Ok(selections)
}

/// Reads up to the first bad line, then solves what was read as one batch.
///
/// Every solved line precedes the bad one, so a solver error is reported
/// ahead of the read error.
fn pack_batch<R: BufRead>(
    instances: InstanceReader<R>,
    config: &SolverConfig,
) -> Result<Vec<CandidateSet>, PackError> {
    let mut parsed: Vec<Instance> = Vec::new();
    let mut read_error = None;
    for instance in instances {
        match instance {
            Ok(instance) => parsed.push(instance),
            Err(err) => {
                read_error = Some(err);
                break;
            }
        }
    }
    debug!(instances = parsed.len(), "parsed input");

    let mut selections = Vec::with_capacity(parsed.len());
    for (line, result) in (1..).zip(BatchRunner::run(&parsed, config)) {
        let result = result.map_err(|source| PackError::Constraint { line, source })?;
        log_solved(line, &result);
        selections.push(result.best);
    }

    match read_error {
        Some(err) => Err(err),
        None => Ok(selections),
    }
}

fn log_solved(line: usize, result: &DpResult) {
    debug!(
        line,
        items = result.best.len(),
        cost = %result.best.total_cost(),
        weight = %result.best.total_weight(),
        cells = result.cells,
        "solved package"
    );
}
