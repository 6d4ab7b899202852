//! Generates a deterministic range-test CSV for trying out the mapper:
//! a receiver walking away from a fixed sender, SNR falling off with
//! distance, plus a few malformed rows the filter should drop.

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

fn main() {
    let mut rng = SimpleRng::new(42);

    // Sender position (roughly Portland, OR) and walk parameters.
    let sender_lat = 45.52;
    let sender_lon = -122.68;
    let step_deg = 0.0015;
    let rows = 200;

    let output_path = "sample_rangetest.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "rx time",
            "rx lat",
            "rx long",
            "rx snr",
            "sender name",
            "rx elevation",
            "payload",
        ])
        .expect("Failed to write header");

    let mut lat = sender_lat;
    let mut lon = sender_lon;
    for seq in 0..rows {
        lat += rng.gauss(step_deg, step_deg / 2.0);
        lon += rng.gauss(step_deg, step_deg / 2.0);

        // SNR falls off with distance from the sender, noisy.
        let dist_deg = ((lat - sender_lat).powi(2) + (lon - sender_lon).powi(2)).sqrt();
        let snr = 12.0 - dist_deg * 120.0 + rng.gauss(0.0, 2.0);
        let elevation = 30.0 + rng.gauss(0.0, 5.0);

        // Every 25th row is chatter without a seq marker; every 40th is
        // missing its position. Both must be dropped by the filter.
        let (payload, lat_cell, lon_cell) = if seq % 25 == 24 {
            ("broadcast".to_string(), format!("{lat:.6}"), format!("{lon:.6}"))
        } else if seq % 40 == 39 {
            (format!("seq {seq}"), String::new(), String::new())
        } else {
            (format!("seq {seq}"), format!("{lat:.6}"), format!("{lon:.6}"))
        };

        writer
            .write_record([
                format!("{}", 1700000000 + seq * 15),
                lat_cell,
                lon_cell,
                format!("{snr:.2}"),
                "node1".to_string(),
                format!("{elevation:.1}"),
                payload,
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush");
    println!("Wrote {rows} rows to {output_path}");
}
