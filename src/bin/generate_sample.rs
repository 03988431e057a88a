//! Writes a synthetic `cleaned_metadata.csv` so the explorer can be tried
//! without the real CORD-19 download.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

const JOURNALS: [&str; 8] = [
    "The Lancet",
    "Nature",
    "BMJ",
    "PLoS One",
    "Journal of Virology",
    "Virology Journal",
    "Emerging Infectious Diseases",
    "Viruses",
];

const SOURCES: [&str; 4] = ["PMC", "Medline", "WHO", "Elsevier"];

const TOPICS: [&str; 8] = [
    "SARS-CoV-2 transmission",
    "coronavirus spike protein",
    "COVID-19 clinical outcomes",
    "MERS-CoV surveillance",
    "viral load dynamics",
    "vaccine immunogenicity",
    "ACE2 receptor binding",
    "hospital infection control",
];

const ANGLES: [&str; 5] = [
    "a retrospective cohort study",
    "a systematic review",
    "structural insights",
    "lessons from the field",
    "a modelling approach",
];

/// Seeded splitmix64 stream: the same seed always writes the same file.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    /// True with probability `percent`/100.
    fn chance(&mut self, percent: usize) -> bool {
        self.below(100) < percent
    }
}

/// Publication dates skew towards 2020, like the real corpus.
fn publish_time(rng: &mut SampleRng) -> String {
    if rng.chance(3) {
        return "not-a-date".to_string();
    }
    if rng.chance(2) {
        return String::new();
    }
    let year = if rng.chance(60) {
        2020
    } else {
        2003 + rng.below(19) as i32
    };
    if rng.chance(10) {
        return year.to_string();
    }
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    let date = start
        .checked_add_days(Days::new(rng.below(365) as u64))
        .unwrap_or(start);
    date.format("%Y-%m-%d").to_string()
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);
    let n_rows = 500;

    let output_path = "cleaned_metadata.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["cord_uid", "title", "journal", "publish_time", "source_x"])?;

    for i in 0..n_rows {
        let title = format!("{}: {}", rng.pick(&TOPICS), rng.pick(&ANGLES));
        let journal = if rng.chance(8) {
            ""
        } else {
            rng.pick(&JOURNALS)
        };
        let time = publish_time(&mut rng);
        let source = rng.pick(&SOURCES);
        let uid = format!("s{i:06}");
        writer.write_record([uid.as_str(), title.as_str(), journal, time.as_str(), source])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {n_rows} papers to {output_path}");
    Ok(())
}
