use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kernlab_cli::{configure_threads, init_logging};
use kernlab_core::harness::TestOutcome;

mod commands;

use commands::{cmd_filter, cmd_harness, cmd_histogram, cmd_mandelbrot, cmd_white_balance};

#[derive(Parser)]
#[command(name = "kernlab")]
#[command(version, about = "Data-parallel image and compute kernels", long_about = None)]
struct Cli {
    /// Config file (overrides $KERNLAB_CONFIG and the default search paths)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print progress and config details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of parallel threads
    #[arg(short = 'j', long, value_name = "N", global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Auto white balance a PNG image
    WhiteBalance {
        /// Input PNG file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print per-channel histogram extents and the white point estimate
    Histogram {
        /// Input PNG file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a per-pixel filter over a PNG image
    Filter {
        /// Input PNG file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Filter: contrast, exposure, vibrance, mirror or alpha
        #[arg(value_name = "FILTER")]
        filter: String,

        /// Filter parameter (defaults from config)
        #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
        value: Option<f32>,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Render the Mandelbrot set to a PNG image
    Mandelbrot {
        /// Image width in pixels
        #[arg(short = 'W', long, value_name = "PIXELS")]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(short = 'H', long, value_name = "PIXELS")]
        height: Option<u32>,

        /// Iteration budget per pixel
        #[arg(long, value_name = "N")]
        iterations: Option<u32>,

        /// Iterate in double precision
        #[arg(long)]
        double: bool,

        /// Output PNG file
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,
    },

    /// Run the self-checking multi-input kernel harness
    Harness {
        /// Number of elements per allocation, at most 65536 (defaults from config)
        #[arg(long, value_name = "N")]
        dim: Option<usize>,

        /// Corrupt one sum2 output element before verification
        #[arg(long, value_name = "INDEX")]
        corrupt: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    kernlab_core::config::set_verbose(cli.verbose);
    kernlab_core::config::init_config(cli.config.as_deref());

    if let Err(e) = configure_threads(cli.threads) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::WhiteBalance { input, out, json } => cmd_white_balance(input, out, json),

        Commands::Histogram { input, json } => cmd_histogram(input, json),

        Commands::Filter {
            input,
            filter,
            value,
            out,
        } => cmd_filter(input, filter, value, out),

        Commands::Mandelbrot {
            width,
            height,
            iterations,
            double,
            out,
        } => cmd_mandelbrot(width, height, iterations, double, out),

        Commands::Harness { dim, corrupt } => match cmd_harness(dim, corrupt) {
            Ok(TestOutcome::Passed) => Ok(()),
            Ok(TestOutcome::Failed) => std::process::exit(1),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
