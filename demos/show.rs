//! Verifies a small width, then lists every solution triple of another in binary.

use clap::Parser;

use xorsum::count::count_total;
use xorsum::predicate::triples;
use xorsum::verify::{verify_with, VerifyConfig};
use xorsum::width::{Width, Word};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Word size (in bits) for exhaustive verification.
    #[arg(long, value_name = "INT", default_value = "4")]
    verify_bits: u32,

    /// Word size (in bits) for listing all solutions.
    #[arg(long, value_name = "INT", default_value = "3")]
    bits: u32,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn bin(x: Word, width: Width) -> String {
    format!("{:0w$b}", x, w = width.bits() as usize)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let width = Width::new(args.verify_bits)?;
    let config = VerifyConfig::default();
    let report = verify_with(width, &config)?;
    for mismatch in &report.count_mismatches {
        println!("{}", mismatch);
    }
    if let Some(mismatch) = &report.set_mismatch {
        println!("Failed to generate correct solutions for ({:02x}, {:02x})", mismatch.a, mismatch.c);
        println!("{:?}", mismatch.brute.iter().map(|&x| bin(x, width)).collect::<Vec<_>>());
        println!("{:?}", mismatch.generated.iter().map(|&x| bin(x, width)).collect::<Vec<_>>());
    }
    println!(
        "Verified {} pairs for {} words: {}",
        report.pairs_checked,
        width,
        if report.is_ok() { "OK" } else { "FAILED" }
    );

    let width = Width::new(args.bits)?;
    println!(
        "All solutions for word size of {} bits (format is a, c, b, overflow)",
        width.bits()
    );
    for t in triples(width) {
        println!("{}  {}  {} {}", bin(t.a, width), bin(t.c, width), bin(t.b, width), t.overflow);
    }
    println!("{} total solutions", count_total(width));

    println!("Done in {:.3} s", time_total.elapsed().as_secs_f64());

    if !report.is_ok() {
        color_eyre::eyre::bail!("verification of {} words failed", report.width);
    }
    Ok(())
}
