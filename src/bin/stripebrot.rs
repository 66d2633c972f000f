use clap::{value_t, App, Arg, ArgMatches};
use failure::Error;
use log::{info, warn};
use num::Complex;
use std::str::FromStr;

use stripebrot::{timed, write_image, Comparison, RenderConfig, Renderer, Tint};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

fn validate_complex(s: &str, err: &str) -> Result<(), String> {
    match parse_complex(s) {
        Some(c) if c.re.is_finite() && c.im.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
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

const CENTER: &str = "center";
const SIZE: &str = "size";
const RESOLUTION: &str = "resolution";
const ITERATIONS: &str = "iterations";
const WORKERS: &str = "workers";
const SEQUENTIAL_OUT: &str = "sequential-out";
const PARALLEL_OUT: &str = "parallel-out";
const VERBOSE: &str = "verbose";

fn args<'a>() -> ArgMatches<'a> {
    App::new("stripebrot")
        .version("0.1.0")
        .about("Times a sequential against a stripe-parallel Mandelbrot render")
        .arg(
            Arg::with_name(CENTER)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.5,0")
                .validator(|s| validate_complex(&s, "Could not parse viewport center"))
                .help("Center of the viewport, as RE,IM"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("2")
                .validator(|s| validate_positive(&s, "Viewport size must be a positive number"))
                .help("Side length of the viewport on the complex plane"),
        )
        .arg(
            Arg::with_name(RESOLUTION)
                .long(RESOLUTION)
                .short("n")
                .takes_value(true)
                .default_value("1024")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        16_384,
                        "Could not parse resolution",
                        "Resolution must be between 1 and 16384",
                    )
                })
                .help("Pixels along each side of the square image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("255")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        255,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 255",
                    )
                })
                .help("Iteration bound of the escape test"),
        )
        .arg(
            Arg::with_name(WORKERS)
                .long(WORKERS)
                .short("w")
                .takes_value(true)
                .default_value("8")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        16_384,
                        "Could not parse worker count",
                        "Worker count must be between 1 and 16384",
                    )
                })
                .help("Number of threads in the parallel pass; must divide the resolution"),
        )
        .arg(
            Arg::with_name(SEQUENTIAL_OUT)
                .long(SEQUENTIAL_OUT)
                .takes_value(true)
                .help("Write the sequential image to this file"),
        )
        .arg(
            Arg::with_name(PARALLEL_OUT)
                .long(PARALLEL_OUT)
                .takes_value(true)
                .help("Write the parallel image to this file"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .help("Log every worker"),
        )
        .get_matches()
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn config(matches: &ArgMatches) -> Result<RenderConfig, Error> {
    let center = matches
        .value_of(CENTER)
        .and_then(parse_complex)
        .ok_or_else(|| failure::err_msg("Error parsing viewport center"))?;
    Ok(RenderConfig {
        center,
        size: value_t!(matches, SIZE, f64)?,
        side: value_t!(matches, RESOLUTION, usize)?,
        max_iterations: value_t!(matches, ITERATIONS, u32)?,
        workers: value_t!(matches, WORKERS, usize)?,
    })
}

fn run(matches: &ArgMatches) -> Result<bool, Error> {
    let config = config(matches)?;
    let renderer = Renderer::from_config(&config)?;

    let cores = num_cpus::get();
    if config.workers > cores {
        warn!("{} workers requested on {} cores", config.workers, cores);
    }
    info!("rendering {:?}", config);

    let sequential = timed(|| renderer.render_sequential());
    println!("Sequential time: {:.6}", sequential.elapsed.as_secs_f64());
    if let Some(path) = matches.value_of(SEQUENTIAL_OUT) {
        write_image(path, &sequential.value.to_rgb(Tint::sequential()))?;
    }

    let parallel = timed(|| renderer.render_parallel(config.workers));
    let elapsed = parallel.elapsed;
    let parallel_image = parallel.value?;
    println!("Parallel time: {:.6}", elapsed.as_secs_f64());
    if let Some(path) = matches.value_of(PARALLEL_OUT) {
        write_image(path, &parallel_image.to_rgb(Tint::parallel()))?;
    }

    let comparison = Comparison {
        sequential: sequential.elapsed,
        parallel: elapsed,
    };
    println!("Speedup = {:.3}", comparison.speedup());

    let mismatched = sequential.value.mismatches(&parallel_image);
    if mismatched > 0 {
        println!("Mismatched pixels: {}", mismatched);
    }
    Ok(mismatched == 0)
}

fn main() {
    let matches = args();
    init_logging(matches.is_present(VERBOSE));

    match run(&matches) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(false) => std::process::exit(1),
        Ok(true) => (),
    }
}
