use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Booster generations in rough chronological order, with the success
/// probability of launches flown on them.
const BOOSTER_ERAS: &[(&str, f64)] = &[
    ("v1.0", 0.4),
    ("v1.1", 0.55),
    ("FT", 0.8),
    ("B4", 0.85),
    ("B5", 0.95),
];

/// Launch sites with a typical payload mass (mean, std dev) in kg.
const SITES: &[(&str, f64, f64)] = &[
    ("CCAFS LC-40", 3500.0, 1800.0),
    ("CCAFS SLC-40", 4500.0, 2200.0),
    ("KSC LC-39A", 5500.0, 2500.0),
    ("VAFB SLC-4E", 2800.0, 1500.0),
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let n_launches = 120usize;

    let mut flight_numbers: Vec<i64> = Vec::with_capacity(n_launches);
    let mut launch_sites: Vec<String> = Vec::with_capacity(n_launches);
    let mut payload_masses: Vec<f64> = Vec::with_capacity(n_launches);
    let mut classes: Vec<i64> = Vec::with_capacity(n_launches);
    let mut boosters: Vec<String> = Vec::with_capacity(n_launches);

    for flight in 0..n_launches {
        // Later flights fly on later booster generations.
        let era_idx = (flight * BOOSTER_ERAS.len()) / n_launches;
        let (booster, success_rate) = BOOSTER_ERAS[era_idx];

        let site_idx = (rng.next_u64() as usize) % SITES.len();
        let (site, mean, std_dev) = SITES[site_idx];

        let payload = rng.gauss(mean, std_dev).clamp(0.0, 10_000.0);
        let class = i64::from(rng.next_f64() < success_rate);

        flight_numbers.push(flight as i64 + 1);
        launch_sites.push(site.to_string());
        payload_masses.push((payload * 10.0).round() / 10.0);
        classes.push(class);
        boosters.push(booster.to_string());
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(flight_numbers)),
            Arc::new(StringArray::from(
                launch_sites.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(payload_masses)),
            Arc::new(Int64Array::from(classes)),
            Arc::new(StringArray::from(
                boosters.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let output_path = "launch_records.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {n_launches} launch records to {output_path}");
}
