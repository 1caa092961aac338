use std::env;
use track_coverage::{Surface, SurfaceOptions, read_track_file};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <track.json> [distance-meters] [frame-rate]", args[0]);
        std::process::exit(1);
    }

    let mut options = SurfaceOptions::default();
    if let Some(distance) = args.get(2) {
        options.distance_m = distance.parse()?;
    }
    if let Some(frame_rate) = args.get(3) {
        options.frame_rate = frame_rate.parse()?;
    }

    let mut warnings = Vec::new();
    let track = read_track_file(&args[1], &mut warnings)?;
    for warning in &warnings {
        log::warn!("{warning:?}");
    }

    eprintln!(
        "Track: {} points over {:.1} s",
        track.len(),
        track.duration() / 1000.0
    );

    match Surface::new(&track).with_options(options).compute()? {
        Some(coverage) => println!("{}", coverage.into_feature_collection()),
        None => eprintln!("Track too short for the frame rate, no coverage"),
    }

    Ok(())
}
