//! Output a per-frame extremum track of a synthetic tone as JSON.
//!
//! Usage: frame_extrema_json <min|max> <frame_size> <hop_size> [frequency]
//!
//! Set RUST_LOG=debug to see the analysis log.

use extrema_core::{ExtremumFinder, ExtremumTrack, FrameCutter, Sound};
use serde::Serialize;
use std::env;

const SAMPLE_RATE: f64 = 44100.0;
const DURATION: f64 = 1.0;

#[derive(Serialize)]
struct Summary {
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Serialize)]
struct Output<'a> {
    sample_rate: f64,
    frequency: f64,
    summary: Summary,
    track: &'a ExtremumTrack,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 && args.len() != 5 {
        eprintln!("Usage: {} <min|max> <frame_size> <hop_size> [frequency]", args[0]);
        std::process::exit(1);
    }

    let finder = ExtremumFinder::from_name(&args[1]).expect("Invalid mode");
    let frame_size: usize = args[2].parse().expect("Invalid frame_size");
    let hop_size: usize = args[3].parse().expect("Invalid hop_size");
    let frequency: f64 = args.get(4).map_or(440.0, |f| f.parse().expect("Invalid frequency"));

    // Tone with a slow amplitude envelope so the track varies over time
    let tone = Sound::create_tone(frequency, DURATION, SAMPLE_RATE, 1.0, 0.0);
    let samples: Vec<f64> = tone
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &s)| s * (0.2 + 0.8 * i as f64 / tone.num_samples() as f64))
        .collect();
    let sound = Sound::from_samples_owned(samples, SAMPLE_RATE);

    let cutter = FrameCutter::new(frame_size, hop_size).start_from_zero(true);
    let track = ExtremumTrack::from_sound(&sound, &cutter, &finder).expect("Analysis failed");

    let output = Output {
        sample_rate: SAMPLE_RATE,
        frequency,
        summary: Summary {
            min: track.min().map(|e| e.value),
            max: track.max().map(|e| e.value),
        },
        track: &track,
    };

    println!("{}", serde_json::to_string(&output).unwrap());
}
