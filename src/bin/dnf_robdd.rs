/*!
Command-line front end for [`dnf_robdd`], the crate implementing Reduced
Ordered Binary Decision Diagrams over DNF expressions of single-letter
variables.

# Usage
```plain
USAGE:
    dnf_robdd [OPTIONS] <EXPRESSION> <ORDER>

ARGS:
    <EXPRESSION>    DNF text, e.g. "ab+!a!b"
    <ORDER>         Variable order, e.g. "ab"

OPTIONS:
        --best-order       Search rotations of <ORDER> for a smaller BDD
        --eval <BITS>       Evaluate the BDD against a bit string and print the result
    -q                     Sets log verbosity to only errors
    -v                     Sets log verbosity (multiple times means more verbose)
    -h, --help             Print help information
    -V, --version          Print version information
```
*/
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(unused_import_braces, unused_qualifications, unused_extern_crates)]

use clap::Parser;
use dnf_robdd::{create_bdd, create_bdd_best_order, evaluate};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct App {
    /// DNF text, e.g. "ab+!a!b"
    expression: String,
    /// Variable order, e.g. "ab"
    order: String,
    /// Search rotations of <ORDER> for a smaller BDD
    #[clap(long = "best-order")]
    best_order: bool,
    /// Evaluate the BDD against a bit string and print the result
    #[clap(long)]
    eval: Option<String>,
    /// Sets log verbosity (multiple times means more verbose)
    #[clap(short, action = clap::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Sets log verbosity to only errors
    #[clap(short, group = "verbosity")]
    quiet: bool,
}

impl App {
    fn filter_level(&self) -> log::LevelFilter {
        match self.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            3.. => log::LevelFilter::Trace,
            0 if self.quiet => log::LevelFilter::Error,
            0 => log::LevelFilter::Warn,
        }
    }

    fn run(&self) {
        env_logger::builder().filter_level(self.filter_level()).init();
        log::info!("Version: {}", clap::crate_version!());

        let bdd = if self.best_order {
            create_bdd_best_order(&self.expression, &self.order)
        } else {
            create_bdd(&self.expression, &self.order)
        };
        log::info!("built BDD with {} nodes", bdd.node_count());
        println!("order: {}", bdd.order().iter().map(|v| v.value()).collect::<String>());
        println!("nodes: {}", bdd.node_count());

        if let Some(bits) = &self.eval {
            match evaluate(&bdd, bits) {
                Ok(result) => println!("evaluate({bits}) = {result}"),
                Err(err) => {
                    log::error!("evaluation failed: {err}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn main() {
    let app = App::parse();
    app.run();
}
