//! Command-line interface for generating one or many class map layouts

use crate::io::class_map::write_class_map;
use crate::io::configuration::{
    AUTO_SIZE, DEFAULT_HEIGHT, DEFAULT_NUM_CLASSES, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::raster::load_layout_image;
use crate::layout::{LayoutController, SeedSampling};
use clap::{ArgAction, Parser, ValueEnum};
use image::GrayImage;
use std::fmt;
use std::path::{Path, PathBuf};

/// Layout generator selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutChoice {
    /// Horizontal stripes
    Horizontal,
    /// Vertical stripes
    Vertical,
    /// Diagonal grid of square tiles
    Grid,
    /// Region-grown random blobs
    Random,
    /// Intensity-binned source image (requires --image)
    Image,
}

/// Seed sampling strategy for random layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeedSamplingArg {
    /// Uniform over unfilled cells
    Uniform,
    /// Random start followed by a forward scan
    ForwardScan,
}

impl From<SeedSamplingArg> for SeedSampling {
    fn from(arg: SeedSamplingArg) -> Self {
        match arg {
            SeedSamplingArg::Uniform => Self::Uniform,
            SeedSamplingArg::ForwardScan => Self::ForwardScan,
        }
    }
}

/// Grid dimensions parsed from `WIDTHxHEIGHT`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

/// Parse `WIDTHxHEIGHT` (for example `640x480`)
///
/// # Errors
///
/// Returns a message if the text is not two positive integers joined by `x`
pub fn parse_dimensions(text: &str) -> std::result::Result<Dimensions, String> {
    let (width, height) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .ok()
            .filter(|&value| value > 0)
            .ok_or_else(|| format!("'{part}' is not a positive integer"))
    };
    Ok(Dimensions {
        width: parse(width)?,
        height: parse(height)?,
    })
}

#[derive(Parser)]
#[command(name = "hsi-layout")]
#[command(
    author,
    version,
    about = "Generate class map layouts for synthetic hyperspectral cubes"
)]
/// Command-line arguments for the layout generation tool
pub struct Cli {
    /// Layout generator to run
    #[arg(short, long, value_enum, default_value_t = LayoutChoice::Random)]
    pub layout: LayoutChoice,

    /// Grid width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of spectral classes
    #[arg(short, long, default_value_t = DEFAULT_NUM_CLASSES)]
    pub classes: usize,

    /// Stripe width, tile width or target blob size (0 derives a default)
    #[arg(short = 'z', long, default_value_t = AUTO_SIZE)]
    pub size: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of layouts to generate, seeded consecutively from --seed
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// How random layouts pick the first cell of each blob
    #[arg(long, value_enum, default_value_t = SeedSamplingArg::Uniform)]
    pub seed_sampling: SeedSamplingArg,

    /// Source image for the image layout
    #[arg(short, long, value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Resize the grid after generation, replaying the recorded layout
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_dimensions)]
    pub resize: Option<Dimensions>,

    /// Write each class map as text rows to this path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress summaries and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if summaries and progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Per-layout report printed after generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Seed used for the layout
    pub seed: u64,
    /// Final grid width
    pub width: usize,
    /// Final grid height
    pub height: usize,
    /// Generator that produced the layout
    pub layout: LayoutChoice,
    /// Blobs grown by a random layout
    pub blob_count: Option<usize>,
    /// Pixels per class
    pub histogram: Vec<usize>,
}

impl fmt::Display for LayoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {}: {:?} layout {}x{}",
            self.seed, self.layout, self.width, self.height
        )?;
        if let Some(blob_count) = self.blob_count {
            write!(f, ", {blob_count} blobs")?;
        }
        write!(f, ", pixels per class {:?}", self.histogram)
    }
}

/// Runs the requested generations and writes their outputs
pub struct LayoutProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LayoutProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested layout
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid, the source image cannot be
    /// loaded, or an output file cannot be written
    pub fn process(&mut self) -> Result<()> {
        let raster = self.load_raster()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            let (controller, summary) = self.generate(seed, raster.as_ref())?;

            if let Some(output) = &self.cli.output {
                let path = Self::get_output_path(output, index, self.cli.count);
                write_class_map(controller.grid(), &path)?;
                tracing::info!(path = %path.display(), "wrote class map");
            }

            self.report(&summary);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Run one generation (and the optional resize) with the given seed
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions or class count are invalid, or if an
    /// image layout is requested without a raster
    pub fn generate(
        &self,
        seed: u64,
        raster: Option<&GrayImage>,
    ) -> Result<(LayoutController, LayoutSummary)> {
        let mut controller = LayoutController::new(self.cli.width, self.cli.height, seed)?
            .with_seed_sampling(self.cli.seed_sampling.into());
        let classes = self.cli.classes;
        let size = self.cli.size;

        match self.cli.layout {
            LayoutChoice::Horizontal => controller.generate_horizontal_stripes(classes, size)?,
            LayoutChoice::Vertical => controller.generate_vertical_stripes(classes, size)?,
            LayoutChoice::Grid => controller.generate_grid(classes, size)?,
            LayoutChoice::Random => {
                controller.generate_random(classes, size)?;
            }
            LayoutChoice::Image => {
                let raster = raster.ok_or_else(|| {
                    invalid_parameter("image", &"<none>", &"the image layout requires --image")
                })?;
                controller.generate_from_image(classes, raster)?;
            }
        }

        if let Some(dimensions) = self.cli.resize {
            controller.resize(dimensions.width, dimensions.height)?;
        }

        let summary = LayoutSummary {
            seed,
            width: controller.width(),
            height: controller.height(),
            layout: self.cli.layout,
            blob_count: controller.blob_count(),
            histogram: controller.grid().class_histogram(classes),
        };
        Ok((controller, summary))
    }

    fn load_raster(&self) -> Result<Option<GrayImage>> {
        if self.cli.layout != LayoutChoice::Image {
            return Ok(None);
        }
        let path = self.cli.image.as_ref().ok_or_else(|| {
            invalid_parameter("image", &"<none>", &"the image layout requires --image")
        })?;
        load_layout_image(path, self.cli.width, self.cli.height).map(Some)
    }

    // Allow print for the per-layout summary, which is the tool's primary output
    #[allow(clippy::print_stdout)]
    fn report(&self, summary: &LayoutSummary) {
        let Some(ref pm) = self.progress_manager else {
            return;
        };
        if pm.is_visible() {
            pm.complete_layout(&format!("seed {}", summary.seed));
        } else {
            println!("{summary}");
        }
    }

    /// Output path for layout `index` of `count`
    ///
    /// A single layout is written to `output` unchanged; batches get
    /// `<stem>_layout_<index>.<ext>` beside it.
    pub fn get_output_path(output: &Path, index: usize, count: usize) -> PathBuf {
        if count <= 1 {
            return output.to_path_buf();
        }

        let stem = output.file_stem().unwrap_or_default();
        let output_name = output.extension().map_or_else(
            || format!("{}{OUTPUT_SUFFIX}_{index}", stem.to_string_lossy()),
            |extension| {
                format!(
                    "{}{OUTPUT_SUFFIX}_{index}.{}",
                    stem.to_string_lossy(),
                    extension.to_string_lossy()
                )
            },
        );

        if let Some(parent) = output.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
