use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use fixtab_analysis::analyze;
use fixtab_core::{interpolation_stats, BuildConfig, TableBuilder, TableFn};
use fixtab_emit::{render_c_header, render_report, write_table, CTableStyle, TableBlob};
use fixtab_emit::binary::{FUNC_RSQRT, FUNC_SIN};
use fixtab_funcs::{RsqrtFn, SinFn};
use fixtab_math::QFormat;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-exponent-class worst-case error report for the two-step rsqrt
    /// scheme
    Analyze {
        /// Fractional bits (F)
        #[arg(long, default_value_t = 12)]
        frac_bits: u32,

        /// Total working width in bits (L)
        #[arg(long, default_value_t = 32)]
        total_bits: u32,
    },

    /// Emit reciprocal-square-root tables over t in [1, 4]
    Rsqrt(TableArgs),

    /// Emit sine tables over the first quadrant
    Sin(TableArgs),
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Fractional bits (F) entries are quantized to
    #[arg(long, default_value_t = 12)]
    frac_bits: u32,

    /// Table index widths to emit, ascending
    #[arg(long, value_delimiter = ',', default_value = "5,6,7,8")]
    bits: Vec<u32>,

    /// Entries per line in the C blocks
    #[arg(long, default_value_t = 8)]
    per_row: usize,

    /// Write the artifact here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit the binary container instead of C blocks (requires --output)
    #[arg(long)]
    binary: bool,

    /// Report per-width interpolation quality on stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            frac_bits,
            total_bits,
        } => run_analyze(frac_bits, total_bits),
        Command::Rsqrt(args) => run_tables(&RsqrtFn, FUNC_RSQRT, false, &args),
        Command::Sin(args) => run_tables(&SinFn, FUNC_SIN, true, &args),
    }
}

fn run_analyze(frac_bits: u32, total_bits: u32) -> Result<()> {
    let format = QFormat::new(frac_bits, total_bits).context("invalid format parameters")?;
    let report = analyze(format).context("error-bound analysis failed")?;

    print!("{}", render_report(&report));
    if let Some(class) = report.recommended_class() {
        eprintln!("✓ recommended threshold class: {}", class);
    }
    Ok(())
}

fn run_tables(func: &dyn TableFn, func_id: u8, static_storage: bool, args: &TableArgs) -> Result<()> {
    // The working width only matters to the analyzer; tables depend on F
    // alone.
    let format = QFormat::new(args.frac_bits, 32).context("invalid format parameters")?;
    let config =
        BuildConfig::new(format, args.bits.clone()).context("invalid table configuration")?;
    let builder = TableBuilder::new(config);
    let tables = builder.build_all(func).context("table build failed")?;

    if args.stats {
        for table in &tables {
            let stats = interpolation_stats(func, table, &format, 64);
            eprintln!(
                "{} bits: TOTAL ERROR: {:.6}\tTOTAL BIAS: {:.6}\tMAX ERROR: {:.6}",
                stats.bits, stats.total_error, stats.total_bias, stats.max_error
            );
        }
    }

    if args.binary {
        let Some(path) = args.output.as_ref() else {
            bail!("--binary requires --output");
        };
        let mut file = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        for table in &tables {
            let blob = TableBlob {
                func_id,
                frac_bits: args.frac_bits as u8,
                table: table.clone(),
            };
            write_table(&mut file, &blob)
                .with_context(|| format!("write {}-bit table", table.bits))?;
        }
        eprintln!("✓ wrote {} table(s) to {}", tables.len(), path.display());
        return Ok(());
    }

    let mut style = CTableStyle::for_fn(func.name()).with_per_row(args.per_row);
    if static_storage {
        style = style.with_static();
    }
    let artifact: String = tables
        .iter()
        .map(|table| render_c_header(table, &style))
        .collect();

    match args.output.as_ref() {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            file.write_all(artifact.as_bytes())
                .context("write artifact")?;
            eprintln!("✓ wrote {} table(s) to {}", tables.len(), path.display());
        }
        None => print!("{}", artifact),
    }
    Ok(())
}
