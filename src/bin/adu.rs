//! Actual Disk Usage CLI (adu) - Main binary entry point

use adu::cli::args::{CliArgs, parse_args};
use adu::cli::output::{DisplayOptions, format_json, format_text};
use adu::usage_summary;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug adu /var/log/syslog
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    // Parse arguments
    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    process::exit(run(&cli_args));
}

fn run(args: &CliArgs) -> i32 {
    let summary = usage_summary(&args.paths);

    if args.json {
        let json = format_json(&summary, args.total);
        println!("{json}");
    } else {
        let opts = DisplayOptions {
            apparent: args.apparent,
            bytes: args.bytes,
            total: args.total,
        };
        let text = format_text(&summary, opts);
        if !text.is_empty() {
            print!("{text}");
        }

        if !args.quiet {
            for err in &summary.errors {
                eprintln!("adu: {}", err.message);
            }
        }
    }

    // Return appropriate exit code
    if summary.errors.is_empty() {
        0 // Success
    } else if summary.entries.is_empty() {
        4 // Every path failed
    } else {
        3 // Partial failure
    }
}

fn print_help() {
    println!("Actual Disk Usage CLI (adu) - Report on-disk allocation of files");
    println!();
    println!("USAGE:");
    println!("    adu <PATH>... [OPTIONS]");
    println!();
    println!("Reports bytes actually allocated on storage (block count * 512),");
    println!("which differs from the logical length for sparse files. Symbolic");
    println!("links are not followed; a link reports its own allocation.");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help               Show this help message");
    println!("    -v, --version            Show version information");
    println!("    --apparent               Also show the apparent (logical) size");
    println!("    --bytes                  Print raw byte counts instead of units");
    println!("    --total                  Append a summed row across all paths");
    println!("    --json                   Emit machine-readable output");
    println!("    --quiet                  Suppress per-path error messages");
    println!();
    println!("EXIT CODES:");
    println!("    0  all paths queried successfully");
    println!("    2  usage error");
    println!("    3  some paths failed");
    println!("    4  every path failed");
    println!();
    println!("EXAMPLES:");
    println!("    adu large.img");
    println!("    adu --apparent --total *.log");
    println!("    adu --json /var/lib/docker/overlay2/img.raw");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("adu {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
