use anyhow::{Result, anyhow};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use crate::app_config::Config;
use crate::errors::{AppError, InputError, OutputError};
use crate::file_utils::{FileManager, FileType};
use crate::model::ExportInput;
use crate::xliff::{self, ExportOutcome};

// @module: Application controller for documentation export

/// Extension of produced translation files
pub const XLIFF_EXTENSION: &str = "xlf";

/// Counts of a folder run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for XLIFF export
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read and parse a documentation export
    pub fn load_input<P: AsRef<Path>>(&self, path: P) -> Result<ExportInput, InputError> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path).map_err(|e| InputError::Unreadable {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        })?;

        serde_json::from_str(&content).map_err(|e| InputError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Export in-memory pages and groups with the configured file settings
    pub fn export(&self, input: &ExportInput) -> ExportOutcome {
        xliff::export_with_report(&input.pages, &input.groups, &self.config.xliff)
    }

    /// Path the translation file for `input_file` is written to
    pub fn output_path_for<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input_file: P1, output_dir: P2) -> PathBuf {
        FileManager::generate_output_path(
            input_file,
            output_dir,
            &self.config.xliff.target_language,
            XLIFF_EXTENSION,
        )
    }

    /// Export one documentation file into `output_dir`.
    ///
    /// Returns the written path, or `None` when the output exists and
    /// `force_overwrite` is not set.
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<Option<PathBuf>, AppError> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(InputError::Missing(input_file).into());
        }

        let output_path = self.output_path_for(&input_file, &output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("{}", OutputError::AlreadyExists(output_path));
            return Ok(None);
        }

        let input = self.load_input(&input_file)?;
        debug!(
            "Loaded {} pages and {} groups from {:?}",
            input.pages.len(),
            input.groups.len(),
            input_file
        );

        let outcome = self.export(&input);
        if outcome.report.disambiguated_ids > 0 {
            info!("{} repeated unit ids were suffixed", outcome.report.disambiguated_ids);
        }

        FileManager::write_to_file(&output_path, &outcome.document).map_err(|e| OutputError::WriteFailed {
            path: output_path.clone(),
            message: format!("{:#}", e),
        })?;

        info!(
            "Success: {:?} ({} units in {:.2?})",
            output_path,
            outcome.report.total_units(),
            start_time.elapsed()
        );

        Ok(Some(output_path))
    }

    /// Export every documentation file found below `input_dir`, next to its input
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let inputs: Vec<PathBuf> = FileManager::find_files(&input_dir, "json")?
            .into_iter()
            .filter(|p| FileManager::detect_file_type(p) == FileType::DocumentationExport)
            .collect();

        if inputs.is_empty() {
            return Err(anyhow!("No documentation exports found in directory: {:?}", input_dir));
        }

        let mut summary = FolderSummary::default();
        for input_file in inputs {
            let output_dir = input_file.parent().unwrap_or(Path::new(".")).to_path_buf();
            match self.run(input_file.clone(), output_dir, force_overwrite) {
                Ok(Some(_)) => summary.written += 1,
                Ok(None) => summary.skipped += 1,
                // Other JSON files (configs, package manifests) live next to dumps
                Err(AppError::Input(InputError::Malformed { .. })) => {
                    warn!("Skipping {:?}, not a documentation export", input_file);
                    summary.skipped += 1;
                }
                Err(e) => {
                    error!("Error processing {:?}: {}", input_file, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Finished: {} written, {} skipped, {} failed",
            summary.written, summary.skipped, summary.failed
        );

        Ok(summary)
    }
}
