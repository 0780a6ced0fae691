extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::output::write_image;
use mandelbrot::{Preset, RenderError, Renderer};
use std::str::FromStr;

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

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u32>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Image width and height must both be positive".to_string()),
        None => Err("Could not parse output image size".to_string()),
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

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const PRESET: &str = "preset";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Grayscale Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; .ppm and .pnm write a binary pixmap, otherwise by extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x1000")
                .validator(|s| validate_size(&s))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .possible_values(&["wide", "narrow"])
                .default_value("wide")
                .help("Viewport and iteration preset: wide is 10x5 at 1000, narrow is 4x2 at 100"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Iteration budget per point, overriding the preset"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), RenderError> {
    // The validators have already vetted every value read here.
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u32>(s, 'x'))
        .unwrap_or((1000, 1000));
    let mut config = matches
        .value_of(PRESET)
        .and_then(|s| Preset::from_str(s).ok())
        .unwrap_or(Preset::Wide)
        .config();
    if let Some(iterations) = matches
        .value_of(ITERATIONS)
        .and_then(|s| usize::from_str(s).ok())
    {
        config = config.with_max_iter(iterations);
    }
    let threads = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or(1);
    let output = matches.value_of(OUTPUT).unwrap_or("mandelbrot.png");

    info!("Rendering {}x{} to {}", width, height, output);
    let renderer = Renderer::new(width, height, config)?;
    let image = if threads > 1 {
        renderer.render_threaded(threads)?
    } else {
        renderer.render()
    };
    write_image(output, &image)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
