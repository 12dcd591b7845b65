use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Write a synthetic listening history for the analyzer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Where to write the CSV
    #[arg(default_value = "data/full_clean_spotify_data.csv")]
    output: PathBuf,

    /// Number of plays to generate
    #[arg(long, default_value_t = 2_000)]
    plays: usize,

    /// RNG seed; the same seed writes the same file
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Evenings and commutes are busier than the small hours.
fn pick_hour(rng: &mut StdRng) -> u32 {
    const WEIGHTED_HOURS: [u32; 14] = [7, 8, 8, 12, 13, 17, 18, 18, 19, 20, 21, 21, 22, 23];
    if rng.gen_bool(0.7) {
        WEIGHTED_HOURS[rng.gen_range(0..WEIGHTED_HOURS.len())]
    } else {
        rng.gen_range(0..24)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let output_path = args.output;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut rng = StdRng::seed_from_u64(args.seed);

    let catalogue: Vec<(&str, Vec<&str>)> = vec![
        ("Nocturne Avenue", vec!["Glass Rooftops", "Late Tram", "Neon Rain", "Soft Static"]),
        ("The Paper Kites", vec!["Bloom", "Electric Indigo", "Featherstone"]),
        ("Kaito Mori", vec!["Ame", "Kumo no Ue", "Hikari"]),
        ("Sable & Rye", vec!["Dust Bowl Waltz", "Copper Wire", "Harvest Moon"]),
        ("Lumen Drift", vec!["Orbit", "Afterglow", "Parallax", "Zenith", "Halcyon"]),
        ("Marisol Vega", vec!["Corazón", "Marea Alta"]),
    ];
    // Some artists get far more attention than others.
    let weights = [8, 5, 4, 2, 6, 1];

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid start date")?;

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record([
        "played_at",
        "artist_name",
        "track_name",
        "ms_played",
        "play_hour",
        "play_dayofweek",
    ])?;

    for _ in 0..args.plays {
        let (artist, tracks) = catalogue
            .iter()
            .zip(weights)
            .collect::<Vec<_>>()
            .choose_weighted(&mut rng, |(_, w)| *w)
            .map(|(entry, _)| *entry)
            .context("empty catalogue")?;
        let track = tracks.choose(&mut rng).context("artist without tracks")?;

        let date = start + Duration::days(rng.gen_range(0..180));
        let hour = pick_hour(&mut rng);
        let played_at = date
            .and_hms_opt(hour, rng.gen_range(0..60), rng.gen_range(0..60))
            .context("invalid play time")?;
        // Skips are short, full listens run three to five minutes.
        let ms_played: u32 = if rng.gen_bool(0.2) {
            rng.gen_range(2_000..30_000)
        } else {
            rng.gen_range(180_000..300_000)
        };

        writer.write_record([
            played_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            artist.to_string(),
            track.to_string(),
            ms_played.to_string(),
            hour.to_string(),
            weekday_name(date.weekday()).to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {} plays to {}", args.plays, output_path.display());
    Ok(())
}
