// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches};
use failure::Fail;
use mandelbrot::{write_raster, Error, Parameters, Region};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const WIDTH: &str = "WIDTH";
const HEIGHT: &str = "HEIGHT";
const XMIN: &str = "XMIN";
const YMIN: &str = "YMIN";
const XMAX: &str = "XMAX";
const YMAX: &str = "YMAX";
const DEPTH: &str = "DEPTH";
const OUTPUT: &str = "output";
const THREADS: &str = "threads";

const EXAMPLES: &str = "EXAMPLES:
    mandelbrot 800 800 -2 -2 2 2 200                  (the defaults)
    mandelbrot 800 800 0.35 0.355 0.353 0.358 200
    mandelbrot 800 800 -0.736 -0.184 -0.735 -0.183 500
    mandelbrot 800 800 -0.736 -0.184 -0.735 -0.183 300
    mandelbrot 800 800 -1.48478 0.00006 -1.48440 0.00044 100
    mandelbrot 800 800 -1.5 -0.1 -1.3 0.1 10000";

fn positional(
    name: &'static str,
    index: u64,
    default: &'static str,
    help: &'static str,
    validator: fn(String) -> Result<(), String>,
) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .index(index)
        .required(false)
        .default_value(default)
        .validator(validator)
        .help(help)
}

fn size_validator(s: String) -> Result<(), String> {
    validate_range(
        &s,
        0,
        u32::max_value(),
        "Could not parse image dimension",
        "Image dimension out of range",
    )
}

// NaN fails both comparisons, so only finite bounds get through.
fn bound_validator(s: String) -> Result<(), String> {
    validate_range(
        &s,
        std::f64::MIN,
        std::f64::MAX,
        "Could not parse region bound",
        "Region bound must be a finite number",
    )
}

fn depth_validator(s: String) -> Result<(), String> {
    validate_range(
        &s,
        0,
        u32::max_value(),
        "Could not parse iteration depth",
        "Iteration depth out of range",
    )
}

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Computes the Mandelbrot set over a region and saves it as a Sun raster image")
        .setting(AppSettings::AllowNegativeNumbers)
        .after_help(EXAMPLES)
        .arg(positional(WIDTH, 1, "800", "Width of the image", size_validator))
        .arg(positional(HEIGHT, 2, "800", "Height of the image", size_validator))
        .arg(positional(XMIN, 3, "-2", "Left edge of the region", bound_validator))
        .arg(positional(YMIN, 4, "-2", "Bottom edge of the region", bound_validator))
        .arg(positional(XMAX, 5, "2", "Right edge of the region", bound_validator))
        .arg(positional(YMAX, 6, "2", "Top edge of the region", bound_validator))
        .arg(positional(DEPTH, 7, "200", "Maximum number of iterations per point", depth_validator))
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(mandelbrot::params::DEFAULT_OUTPUT)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver [default: number of CPUs]"),
        )
        .get_matches()
}

// Every value has already passed its validator.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).map(T::from_str) {
        Some(Ok(value)) => value,
        _ => clap::Error::value_validation_auto(format!("Invalid value for {}", name)).exit(),
    }
}

fn parameters(matches: &ArgMatches) -> Parameters {
    Parameters {
        width: value(matches, WIDTH),
        height: value(matches, HEIGHT),
        region: Region::new(
            value(matches, XMIN),
            value(matches, YMIN),
            value(matches, XMAX),
            value(matches, YMAX),
        ),
        depth: value(matches, DEPTH),
        output: PathBuf::from(matches.value_of(OUTPUT).unwrap_or(mandelbrot::params::DEFAULT_OUTPUT)),
        threads: match matches.value_of(THREADS) {
            Some(_) => value(matches, THREADS),
            None => num_cpus::get(),
        },
    }
}

fn run(params: &Parameters) -> Result<(), Error> {
    let renderer = params.renderer()?;
    let grid = renderer.grid();
    let (xinc, yinc) = grid.increments();
    let Region(leftlower, rightupper) = grid.region;
    info!(
        "Domain: {{[{}, {}] x [{}, {}]}}",
        leftlower.re, leftlower.im, rightupper.re, rightupper.im
    );
    info!("Increment: {} {}", xinc, yinc);
    info!("Depth: {}", params.depth);
    info!("Image size: {} x {}", grid.width, grid.height);

    let start = Instant::now();
    let pixels = renderer.render(params.threads)?;
    info!(
        "Total compute time ({} threads): {:.3} s",
        params.threads,
        start.elapsed().as_secs_f64()
    );

    write_raster(&params.output, grid.width, grid.height, &pixels)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = args();
    let params = parameters(&matches);

    if let Err(e) = run(&params) {
        eprintln!("error: {}", e);
        let mut cause = e.cause();
        while let Some(inner) = cause {
            eprintln!("  caused by: {}", inner);
            cause = inner.cause();
        }
        std::process::exit(1);
    }
}
