//! Writes deterministic synthetic city extracts for trying the explorer
//! without the real data files: `chicago.csv` with the full schema and
//! `washington.csv` without the demographic columns.

use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Serialize)]
struct FullRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: i64,
    #[serde(rename = "Start Station")]
    start_station: &'static str,
    #[serde(rename = "End Station")]
    end_station: &'static str,
    #[serde(rename = "User Type")]
    user_type: &'static str,
    #[serde(rename = "Gender")]
    gender: &'static str,
    #[serde(rename = "Birth Year")]
    birth_year: String,
}

#[derive(Serialize)]
struct BareRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: i64,
    #[serde(rename = "Start Station")]
    start_station: &'static str,
    #[serde(rename = "End Station")]
    end_station: &'static str,
    #[serde(rename = "User Type")]
    user_type: &'static str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

const CHICAGO_STATIONS: &[&str] = &[
    "Canal St & Adams St",
    "Clinton St & Madison St",
    "Streeter Dr & Grand Ave",
    "Michigan Ave & Oak St",
    "Wells St & Concord Ln",
    "Theater on the Lake",
];

const WASHINGTON_STATIONS: &[&str] = &[
    "Columbus Circle / Union Station",
    "Lincoln Memorial",
    "Massachusetts Ave & Dupont Circle NW",
    "Jefferson Dr & 14th St SW",
    "15th & P St NW",
];

/// Random start time between 2017-01-01 and 2017-06-30, any hour.
fn random_start(rng: &mut SimpleRng) -> NaiveDateTime {
    let day = NaiveDate::from_ymd_opt(2017, 1, 1).expect("valid date")
        + Duration::days(rng.below(181) as i64);
    day.and_hms_opt(rng.below(24) as u32, rng.below(60) as u32, rng.below(60) as u32)
        .expect("valid time")
}

fn user_type(rng: &mut SimpleRng) -> &'static str {
    if rng.below(10) < 7 {
        "Subscriber"
    } else {
        "Customer"
    }
}

fn write_chicago(path: &Path, rng: &mut SimpleRng) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create chicago.csv");
    for _ in 0..600 {
        let start = random_start(rng);
        let duration = 300 + rng.below(3000) as i64;
        let gender = match rng.below(20) {
            0 => "",
            n if n % 2 == 0 => "Male",
            _ => "Female",
        };
        let birth_year = if rng.below(15) == 0 {
            String::new()
        } else {
            format!("{}.0", 1950 + rng.below(50))
        };
        writer
            .serialize(FullRow {
                start_time: start.format("%Y-%m-%d %H:%M:%S").to_string(),
                end_time: (start + Duration::seconds(duration))
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                trip_duration: duration,
                start_station: rng.pick::<&str>(CHICAGO_STATIONS),
                end_station: rng.pick::<&str>(CHICAGO_STATIONS),
                user_type: user_type(rng),
                gender,
                birth_year,
            })
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush chicago.csv");
}

fn write_washington(path: &Path, rng: &mut SimpleRng) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create washington.csv");
    for _ in 0..400 {
        let start = random_start(rng);
        let duration = 300 + rng.below(3000) as i64;
        writer
            .serialize(BareRow {
                start_time: start.format("%Y-%m-%d %H:%M:%S").to_string(),
                end_time: (start + Duration::seconds(duration))
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                trip_duration: duration,
                start_station: rng.pick::<&str>(WASHINGTON_STATIONS),
                end_station: rng.pick::<&str>(WASHINGTON_STATIONS),
                user_type: user_type(rng),
            })
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush washington.csv");
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let out_dir = Path::new("data");
    std::fs::create_dir_all(out_dir).expect("Failed to create data directory");

    write_chicago(&out_dir.join("chicago.csv"), &mut rng);
    write_washington(&out_dir.join("washington.csv"), &mut rng);

    println!("Wrote 600 chicago trips and 400 washington trips to {}", out_dir.display());
}
