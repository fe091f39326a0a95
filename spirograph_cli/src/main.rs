//! Command line front end: parse curve settings, generate the trace, draw it to an SVG
//! file while streaming coordinate samples over OSC, then clear after a delay.

mod render_svg;
mod transport_osc;

use std::error::Error;
use std::time::Duration;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;
use rand::Rng;

use spirograph::curve::{generate, CurveSpec, DEFAULT_ANGLE_STEP};
use spirograph::draw::{clear_after, draw_curve, DrawOptions};
use spirograph::random::RandomSource;
use spirograph::render::PenColor;

use render_svg::SvgRenderer;
use transport_osc::OscTransport;

fn main() {
    env_logger::init();

    let matches = command().get_matches();
    if let Err(error) = run(&matches) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn command() -> Command {
    Command::new("spirograph")
        .about("Draw spirograph curves and stream the coordinates over OSC.")
        .after_help(
            "Samples are sent as unacknowledged OSC/UDP messages: /xcoord and /ycoord \
             carry one float each (cadence derived from the curve's petal count), and a \
             final /finished message carries the string \"done\". Point the target at a \
             local listener such as Sonic Pi.",
        )
        .arg(
            Arg::new("outer-radius")
                .long("outer-radius")
                .short('R')
                .value_name("RADIUS")
                .help("Radius of the fixed outer circle (integer valued)")
                .value_parser(clap::value_parser!(f64))
                .default_value("220"),
        )
        .arg(
            Arg::new("inner-radius")
                .long("inner-radius")
                .short('r')
                .value_name("RADIUS")
                .help("Radius of the rolling inner circle (integer valued)")
                .value_parser(clap::value_parser!(f64))
                .default_value("65"),
        )
        .arg(
            Arg::new("pen-offset")
                .long("pen-offset")
                .short('d')
                .value_name("OFFSET")
                .help("Distance of the pen from the inner circle center")
                .value_parser(clap::value_parser!(f64))
                .default_value("90"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("NAME")
                .help("Named pen color used for the stroke")
                .default_value("red"),
        )
        .arg(
            Arg::new("random-colors")
                .long("random-colors")
                .action(ArgAction::SetTrue)
                .help("Assign a new random pen color every four periods"),
        )
        .arg(
            Arg::new("clear-delay")
                .long("clear-delay")
                .value_name("SECONDS")
                .help("Seconds to wait before clearing the drawing; values above 120 reset to 10")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            Arg::new("osc-target")
                .long("osc-target")
                .value_name("ADDR")
                .help("UDP address receiving /xcoord, /ycoord, and /finished messages")
                .default_value("127.0.0.1:4559"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("SVG file to write the drawing into")
                .default_value("spirograph.svg"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let spec = CurveSpec::new(
        *matches.get_one::<f64>("outer-radius").expect("has default"),
        *matches.get_one::<f64>("inner-radius").expect("has default"),
        *matches.get_one::<f64>("pen-offset").expect("has default"),
        DEFAULT_ANGLE_STEP,
    );
    let pen_color = matches.get_one::<String>("color").expect("has default");
    let clear_delay = *matches.get_one::<u64>("clear-delay").expect("has default");
    let osc_target = matches.get_one::<String>("osc-target").expect("has default");
    let output = matches.get_one::<String>("output").expect("has default");

    let (trace, counts) = generate(spec)?;

    let mut renderer = SvgRenderer::new();
    let mut transport = OscTransport::connect(osc_target)?;
    let mut random = ThreadRandom::default();
    let options = DrawOptions {
        pen_color: PenColor::named(pen_color.clone()),
        random_colors: matches.get_flag("random-colors"),
        finish_delay: Duration::from_secs(2),
    };

    draw_curve(
        &spec,
        &trace,
        &counts,
        &options,
        &mut renderer,
        &mut transport,
        &mut random,
    )?;

    renderer.save(output)?;
    info!("wrote {}", output);

    clear_after(&mut renderer, clear_delay);
    Ok(())
}

/// Thread local RNG behind the library's [RandomSource] seam.
struct ThreadRandom(rand::rngs::ThreadRng);

impl Default for ThreadRandom {
    fn default() -> Self {
        ThreadRandom(rand::rng())
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit_interval(&mut self) -> f64 {
        self.0.random()
    }
}
