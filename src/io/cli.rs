//! Command-line interface for filling masked hole regions in grayscale images

use crate::algorithm::filler::HoleFiller;
use crate::algorithm::scanmean::mean_fill;
use crate::io::configuration::{DEFAULT_CONNECTIVITY, OUTPUT_PREFIX};
use crate::io::error::{FillError, Result, invalid_parameter};
use crate::io::image::export_intensity_png;
use crate::io::preprocess::load_masked_image;
use crate::io::progress::FillProgress;
use crate::math::weighting::InverseDistanceWeight;
use crate::spatial::pixel::Connectivity;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "holefill")]
#[command(
    author,
    version,
    about = "Fill masked hole regions in grayscale images"
)]
/// Command-line arguments for the hole filling tool
pub struct Cli {
    /// Fill strategy to run
    #[command(subcommand)]
    pub command: Command,
}

/// Fill strategy selected on the command line
#[derive(Subcommand)]
pub enum Command {
    /// Distance-weighted fill over the global hole boundary
    Weighted(WeightedArgs),
    /// Scan-order mean of adjacent filled pixels
    Mean(MeanArgs),
}

/// Arguments for the distance-weighted filler
#[derive(Args)]
pub struct WeightedArgs {
    /// Location of the image file
    pub image_path: PathBuf,

    /// Location of the mask file applied to the image
    pub mask_path: PathBuf,

    /// Exponent z of the default weighting mechanism
    pub exponent: i32,

    /// Bias e of the default weighting mechanism; must be positive
    pub bias: f64,

    /// Pixel connectivity; supported values: 4, 8
    pub connectivity: u8,

    /// Write the output image to this directory
    #[arg(short, long)]
    pub output_directory: Option<PathBuf>,

    /// Paint boundary pixels black in the output image
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the scan-order mean fill
#[derive(Args)]
pub struct MeanArgs {
    /// Location of the image file
    pub image_path: PathBuf,

    /// Location of the mask file applied to the image
    pub mask_path: PathBuf,

    /// Pixel connectivity; supported values: 4, 8
    #[arg(short, long, default_value_t = DEFAULT_CONNECTIVITY)]
    pub connectivity: u8,

    /// Write the output image to this directory
    #[arg(short, long)]
    pub output_directory: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates preprocessing, filling, and export for one image/mask pair
pub struct FillProcessor {
    cli: Cli,
}

impl FillProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected fill strategy end to end
    ///
    /// Parameters are validated before any file is opened; a failed run
    /// produces no output file. Returns the path of the written image.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, preprocessing, filling, or
    /// export fails.
    pub fn process(&self) -> Result<PathBuf> {
        match &self.cli.command {
            Command::Weighted(args) => Self::process_weighted(args),
            Command::Mean(args) => Self::process_mean(args),
        }
    }

    fn process_weighted(args: &WeightedArgs) -> Result<PathBuf> {
        let connectivity = parse_connectivity(args.connectivity)?;
        let weighting = InverseDistanceWeight::new(args.exponent, args.bias)
            .map_err(|err| invalid_parameter("bias", &args.bias, &err))?;

        let image = load_masked_image(&args.image_path, &args.mask_path)?;
        let mut filler = HoleFiller::new(image, weighting, connectivity, args.debug);

        let progress = FillProgress::new(args.quiet);
        progress.start("synthesizing hole values");
        let filled = filler.fill()?;
        progress.finish(filled);

        let output_path = Self::resolve_output_directory(args.output_directory.as_deref())?
            .join(output_filename("", connectivity));
        export_intensity_png(&filler.into_image(), &output_path)?;

        Self::report(&output_path, args.quiet);
        Ok(output_path)
    }

    fn process_mean(args: &MeanArgs) -> Result<PathBuf> {
        let connectivity = parse_connectivity(args.connectivity)?;

        let mut image = load_masked_image(&args.image_path, &args.mask_path)?;

        let progress = FillProgress::new(args.quiet);
        progress.start("averaging neighbour values");
        let filled = mean_fill(&mut image, connectivity)?;
        progress.finish(filled);

        let output_path = Self::resolve_output_directory(args.output_directory.as_deref())?
            .join(output_filename("_mean", connectivity));
        export_intensity_png(&image, &output_path)?;

        Self::report(&output_path, args.quiet);
        Ok(output_path)
    }

    fn resolve_output_directory(requested: Option<&Path>) -> Result<PathBuf> {
        match requested {
            Some(directory) => Ok(directory.to_path_buf()),
            None => tempfile::tempdir()
                .map(tempfile::TempDir::into_path)
                .map_err(|source| FillError::FileSystem {
                    path: std::env::temp_dir(),
                    operation: "create temporary directory",
                    source,
                }),
        }
    }

    // Allow print for user feedback on the output location
    #[allow(clippy::print_stdout)]
    fn report(output_path: &Path, quiet: bool) {
        if !quiet {
            println!("Filled output image written to: {}", output_path.display());
        }
    }
}

fn parse_connectivity(flag: u8) -> Result<Connectivity> {
    Connectivity::from_flag(flag)
        .ok_or_else(|| invalid_parameter("connectivity", &flag, &"supported values are 4 and 8"))
}

fn output_filename(strategy: &str, connectivity: Connectivity) -> String {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());

    format!(
        "{OUTPUT_PREFIX}{strategy}_c{}_{stamp}.png",
        connectivity.as_flag()
    )
}
