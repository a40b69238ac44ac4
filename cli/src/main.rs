extern crate canvas_geojson;
extern crate clap;

mod commands;
mod convert;

use canvas_geojson::geom::FlatteningOptions;
use canvas_geojson::path::RectMode;
use clap::{App, Arg, ArgMatches};
use commands::ConvertCmd;
use convert::ConvertError;

use std::fs::File;
use std::io::{stdout, Write};
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("canvas-geojson")
        .version("0.1")
        .about("Converts SVG path data into GeoJSON geometry")
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("SCALE")
            .long("scale")
            .help("Sets the drawing scale (1 by default)")
            .value_name("SCALE")
            .takes_value(true)
        )
        .arg(Arg::with_name("RECURSION")
            .long("recursion")
            .help("Sets the maximum curve subdivision depth (8 by default)")
            .value_name("LEVEL")
            .takes_value(true)
        )
        .arg(Arg::with_name("PATH_EPSILON")
            .long("path-epsilon")
            .help("Sets the flattening distance tolerance (1 by default)")
            .value_name("EPSILON")
            .takes_value(true)
        )
        .arg(Arg::with_name("ANGLE_TOLERANCE")
            .long("angle-tolerance")
            .help("Enables angle refinement with this tolerance in radians")
            .value_name("ANGLE")
            .takes_value(true)
        )
        .arg(Arg::with_name("CUSP_LIMIT")
            .long("cusp-limit")
            .help("Sets the cusp limit used with angle refinement (0 by default)")
            .value_name("LIMIT")
            .takes_value(true)
        )
        .arg(Arg::with_name("CLOSED_RECTS")
            .long("closed-rects")
            .help("Records rectangles as closed polygons")
        )
        .arg(Arg::with_name("PRETTY")
            .long("pretty")
            .help("Pretty-prints the output")
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), ConvertError> {
    let input_file = match matches.value_of("INPUT") {
        Some(name) => Some(File::open(name)?),
        None => None,
    };
    let input_buffer = convert::read_input(matches.value_of("PATH"), input_file)?;

    let mut output: Box<dyn Write> = Box::new(stdout());

    if let Some(output_file) = matches.value_of("OUTPUT") {
        output = Box::new(File::create(output_file)?);
    }

    let mut options = FlatteningOptions::DEFAULT;
    if let Some(limit) = get_arg::<u32>(matches, "RECURSION", "recursion")? {
        options = options.with_recursion_limit(limit);
    }
    if let Some(epsilon) = get_arg(matches, "PATH_EPSILON", "path-epsilon")? {
        options = options.with_path_epsilon(epsilon);
    }
    if let Some(angle) = get_arg(matches, "ANGLE_TOLERANCE", "angle-tolerance")? {
        options = options.with_angle_tolerance(angle);
    }
    if let Some(limit) = get_arg(matches, "CUSP_LIMIT", "cusp-limit")? {
        options = options.with_cusp_limit(limit);
    }

    let rect_mode = if matches.is_present("CLOSED_RECTS") {
        RectMode::Closed
    } else {
        RectMode::Open
    };

    let cmd = ConvertCmd {
        input: input_buffer,
        output,
        scale: get_arg(matches, "SCALE", "scale")?.unwrap_or(1.0),
        options,
        rect_mode,
        pretty: matches.is_present("PRETTY"),
    };

    convert::convert(cmd)
}

fn get_arg<T: std::str::FromStr>(
    matches: &ArgMatches,
    arg: &str,
    name: &'static str,
) -> Result<Option<T>, ConvertError> {
    match matches.value_of(arg) {
        Some(value) => value.parse().map(Some).map_err(|_| ConvertError::Argument {
            name,
            value: value.to_string(),
        }),
        None => Ok(None),
    }
}
