// vim: set ai et ts=4 sts=4 sw=4:
use std::fs;
use std::io;
use std::process;

use clap::{App, Arg};
use yaml_rust::{Yaml, YamlLoader};

use cityscape::blueprint::Blueprint;
use cityscape::render::render_city;
use cityscape::util::{is_a_tty, ralign};

const SAMPLE_CITY: &str = "
size: 8
buildings:
    atrium:
        - [0, 0, 0, 3, 2]
        - [1, 0, 0, 2, 1]
    beacon:
        - [0, 5, 5, 7, 7]
        - [1, 5, 5, 7, 7]
        - [2, 5, 6, 6, 7]
        - [3, 5, 6, 6, 7]
    causeway:
        - [0, 4, 0, 8, 1]
";

fn main() {
    let args = App::new("cityscape")
        .about("erect labeled buildings on a grid and render the skyline")
        .arg(Arg::with_name("FILE")
             .help("YAML city description; the built-in sample if omitted"))
        .arg(Arg::with_name("no-color")
             .long("no-color")
             .help("disable colored output"))
        .arg(Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .help("increase log verbosity"))
        .get_matches();

    let level = match args.occurrences_of("verbose") {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{:5}] {}", record.level(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .expect("failed to initialize logging");

    let source = match args.value_of("FILE") {
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("cannot read {}: {}", path, error);
                process::exit(1);
            }
        },
        None => String::from(SAMPLE_CITY),
    };

    let docs: Vec<Yaml> = match YamlLoader::load_from_str(&source) {
        Ok(docs) => docs,
        Err(error) => {
            eprintln!("cannot load city description: {}", error);
            process::exit(1);
        }
    };
    let doc = match docs.first() {
        Some(doc) => doc,
        None => {
            eprintln!("city description is empty");
            process::exit(1);
        }
    };

    let blueprint = match Blueprint::from_yaml(doc) {
        Ok(blueprint) => blueprint,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    };
    let city = match blueprint.build() {
        Ok(city) => city,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    };

    let emit_color = !args.is_present("no-color") && is_a_tty(io::stdout());
    print!("{}", render_city(&city, emit_color));

    // bounds summary, one line per building in document order
    let mut labels: Vec<&String> = Vec::new();
    for placement in &blueprint.placements {
        if !labels.contains(&&placement.label) {
            labels.push(&placement.label);
        }
    }
    let width = labels.iter().map(|label| label.len()).max().unwrap_or(0);
    println!();
    for label in labels {
        if let Some(bounds) = city.bounds(label) {
            println!("{}  {} floor(s), footprint {}",
                     ralign(label, width), bounds.height, bounds.footprint);
        }
    }
}
