//! Command-line interface for reconstructing (or shredding) image files

use crate::algorithm::assembler::GreedyAssembler;
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_SHRED_WIDTH, DEFAULT_STRIPE_COLUMNS, OUTPUT_SUFFIX, SCRAMBLED_SUFFIX,
    SUPPORTED_EXTENSIONS, ShredConfig,
};
use crate::io::error::{Result, UnshredError};
use crate::io::image::{OutputFormat, load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::spatial::scramble::scramble;
use crate::spatial::splitter::split_into_shreds;
use clap::Parser;
use log::{Level, debug, log};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "unshred")]
#[command(
    author,
    version,
    about = "Reassemble images cut into vertical shreds by matching their edges"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Width of each shred in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_SHRED_WIDTH)]
    pub shred_width: u32,

    /// Columns averaged at each shred edge
    #[arg(short = 'k', long, default_value_t = DEFAULT_STRIPE_COLUMNS)]
    pub stripe_columns: u32,

    /// Output format (defaults to the input's format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output path (single file targets only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Shred the target instead of reconstructing it
    #[arg(short, long)]
    pub scramble: bool,

    /// Seed used when shredding
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated shred geometry from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero width or column count, or when
    /// the column count exceeds the width
    pub fn shred_config(&self) -> Result<ShredConfig> {
        ShredConfig::new(self.shred_width, self.stripe_columns)
    }

    const fn output_suffix(&self) -> &'static str {
        if self.scramble {
            SCRAMBLED_SUFFIX
        } else {
            OUTPUT_SUFFIX
        }
    }
}

/// Orchestrates reconstruction of one file or a directory of files
pub struct FileProcessor {
    cli: Cli,
    config: ShredConfig,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor, validating the shred geometry up front
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the shred geometry is invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let config = cli.shred_config()?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            config,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            self.log(
                Level::Info,
                format_args!("Nothing to process in {}", self.cli.target.display()),
            );
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            if let Some(done) = pm.batch_position() {
                self.log(
                    Level::Info,
                    format_args!("Processed {done} of {} images", files.len()),
                );
            }
            pm.finish();
        }

        Ok(())
    }

    /// Inputs selected from the target, in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the target is a file with an unsupported extension
    /// - the target is neither a file nor a directory
    /// - `--output` is given for a directory target
    /// - the directory cannot be read
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_supported_image(target) {
                return Err(UnshredError::UnsupportedTarget {
                    path: target.clone(),
                    reason: "target file must be a PNG, JPEG or BMP image",
                });
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(UnshredError::UnsupportedTarget {
                    path: target.clone(),
                    reason: "--output requires a single file target",
                });
            }

            let read_error = |e| UnshredError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };

            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if is_supported_image(&path)
                    && !is_generated_output(&path, self.cli.output_suffix())
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(UnshredError::UnsupportedTarget {
                path: target.clone(),
                reason: "target must be an image file or a directory",
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            self.log(
                Level::Info,
                format_args!("Skipping: {} (output exists)", input_path.display()),
            );
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = self.output_path(input_path);
        let format = self.output_format(input_path);
        let image = load_image(input_path)?;

        let result = if self.cli.scramble {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(index, input_path, 1);
            }

            let scrambled = scramble(&image, &self.config, self.cli.seed)?;
            self.log(
                Level::Info,
                format_args!(
                    "Shredded {} into order {:?}",
                    input_path.display(),
                    scrambled.order
                ),
            );
            if let Some(ref pm) = self.progress_manager {
                pm.complete_file(index, "shuffled");
            }
            scrambled.image
        } else {
            let shreds = split_into_shreds(&image, &self.config)?;
            let mut assembler = GreedyAssembler::new(shreds)?;

            if let Some(ref pm) = self.progress_manager {
                pm.start_file(index, input_path, assembler.total_steps());
            }

            while assembler.step()?.is_some() {
                if let Some(ref pm) = self.progress_manager {
                    pm.record_placement(index, assembler.sequence_len().saturating_sub(1));
                }
            }

            let reconstruction = assembler.run()?;
            self.log(
                Level::Info,
                format_args!(
                    "Reconstructed {} from {} shreds, total seam score {:.1}",
                    input_path.display(),
                    reconstruction.shreds().len(),
                    reconstruction.total_score()
                ),
            );
            debug!("seam scores: {:?}", reconstruction.seam_scores());
            if let Some(ref pm) = self.progress_manager {
                pm.complete_file(
                    index,
                    &format!("seams {:.0}", reconstruction.total_score()),
                );
            }
            reconstruction.composite()?
        };

        save_image(&result, format, &output_path)?;
        self.log(
            Level::Info,
            format_args!("Wrote {}", output_path.display()),
        );

        Ok(())
    }

    // Log lines written while bars are drawn would be overdrawn by them
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.progress_manager.as_ref().map_or_else(
            || log!(level, "{args}"),
            |pm| pm.suspend(|| log!(level, "{args}")),
        );
    }

    fn output_format(&self, input_path: &Path) -> OutputFormat {
        self.cli
            .format
            .or_else(|| self.cli.output.as_deref().and_then(OutputFormat::from_path))
            .or_else(|| OutputFormat::from_path(input_path))
            .unwrap_or(OutputFormat::Png)
    }

    /// Where the result for `input_path` is written
    ///
    /// `--output` wins; otherwise `<stem><suffix>.<ext>` next to the input,
    /// with the extension taken from `--format` when given.
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        let stem = input_path.file_stem().unwrap_or_default();
        let extension = self.cli.format.map_or_else(
            || {
                input_path
                    .extension()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string()
            },
            |format| format.extension().to_string(),
        );
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            self.cli.output_suffix(),
            extension
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

// Results of earlier runs in the same mode sit next to their inputs.
// The other mode's results are valid inputs: scrambled files get reconstructed.
fn is_generated_output(path: &Path, suffix: &str) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(suffix))
}
