//! Build script for paramtree-cli.
//!
//! Generates the man page at build time using clap_mangen. The page is
//! placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described here directly.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    let target_args = [
        Arg::new("datacenter")
            .value_name("DATACENTER")
            .required(true)
            .help("Datacenter directory name"),
        Arg::new("foundation")
            .value_name("FOUNDATION")
            .required(true)
            .help("Foundation name (file stem inside the datacenter directory)"),
        Arg::new("environment")
            .short('e')
            .long("environment")
            .value_name("ENV")
            .value_parser(["lab", "nonprod", "prod"])
            .help("Environment variant [default: prod]"),
    ];

    Command::new("paramtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve hierarchical deployment parameters")
        .long_about(
            "Discover, audit and merge layered global, datacenter and foundation \
             parameter files into one parameter set per deployment target",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("repo-path")
                .value_name("REPO_PATH")
                .required(true)
                .help("Root of the parameter repository"),
        )
        .subcommands(vec![
            Command::new("find-duplicates")
                .about("Report parameters defined with the same value in several files")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .value_parser(["human", "json"])
                        .help("Report format"),
                ),
            Command::new("generate-foundation")
                .about("Merge the hierarchy into one parameter set for a foundation")
                .args(target_args.clone())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write the merged parameters to this file instead of stdout"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .value_parser(["yaml", "json"])
                        .help("Output format"),
                ),
            Command::new("list-files").about("List every classified parameter document"),
            Command::new("show-sources")
                .about("Show which files contribute to a foundation, in precedence order")
                .args(target_args),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("paramtree.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
