use anyhow::{bail, Context, Result};
use serde_json::json;

const DATASET_PATH: &str = "passing-grade.csv";
const MODEL_PATH: &str = "passing_grade_model.json";

/// Seeded splitmix64 stream shaped into roughly normal noise.
struct Noise(u64);

impl Noise {
    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Sum of twelve uniforms: mean 6, variance 1.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = (0..12).map(|_| self.uniform()).sum::<f64>() - 6.0;
        mean + std_dev * z
    }
}

/// Least squares fit of `min ≈ a·rataan + b·sbaku + c` via the normal equations.
fn fit_linear(samples: &[(f64, f64, f64)]) -> Result<([f64; 2], f64)> {
    // Rows of XᵀX | Xᵀy with X = [rataan, sbaku, 1].
    let mut m = [[0.0f64; 4]; 3];
    for &(r, s, y) in samples {
        let x = [r, s, 1.0];
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] += x[i] * x[j];
            }
            m[i][3] += x[i] * y;
        }
    }

    // Gauss-Jordan elimination with partial pivoting.
    for col in 0..3 {
        let pivot = (col..3)
            .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
            .unwrap_or(col);
        if m[pivot][col].abs() < 1e-12 {
            bail!("samples are degenerate, cannot fit a linear model");
        }
        m.swap(col, pivot);
        let div = m[col][col];
        for v in &mut m[col] {
            *v /= div;
        }
        for row in 0..3 {
            if row != col {
                let factor = m[row][col];
                let pivot_row = m[col];
                for (v, p) in m[row].iter_mut().zip(pivot_row.iter()) {
                    *v -= factor * p;
                }
            }
        }
    }

    Ok(([m[0][3], m[1][3]], m[2][3]))
}

fn main() -> Result<()> {
    let mut noise = Noise(42);

    let universities = [
        "Universitas Indonesia",
        "Institut Teknologi Bandung",
        "Universitas Gadjah Mada",
        "Universitas Airlangga",
        "Institut Pertanian Bogor",
    ];
    let programs = [
        ("Kedokteran", 720.0),
        ("Teknik Informatika", 680.0),
        ("Hukum", 620.0),
        ("Akuntansi", 600.0),
        ("Pendidikan Matematika", 540.0),
        ("Sastra Indonesia", 500.0),
    ];

    let mut writer = csv::Writer::from_path(DATASET_PATH)
        .with_context(|| format!("creating {DATASET_PATH}"))?;
    writer.write_record(["PTN", "PRODI", "RATAAN", "S.BAKU", "MIN"])?;

    let mut complete = Vec::new();
    let mut row_id = 0usize;

    for (u, university) in universities.iter().enumerate() {
        let prestige = 30.0 - u as f64 * 8.0;
        for &(program, base) in &programs {
            let rataan = (base + prestige + noise.gauss(0.0, 25.0)).clamp(0.0, 1000.0);
            let sbaku = noise.gauss(12.0, 3.0).clamp(1.0, 100.0);
            let min = (rataan - 1.6 * sbaku + noise.gauss(0.0, 8.0)).max(0.0);

            // Every seventh row has a gap, so the dashboard has something to drop.
            let (rataan_cell, sbaku_cell) = match row_id % 7 {
                3 => (String::new(), format!("{sbaku:.2}")),
                6 => (format!("{rataan:.2}"), String::new()),
                _ => {
                    complete.push((rataan, sbaku, min));
                    (format!("{rataan:.2}"), format!("{sbaku:.2}"))
                }
            };

            writer.write_record([
                university.to_string(),
                program.to_string(),
                rataan_cell,
                sbaku_cell,
                format!("{min:.2}"),
            ])?;
            row_id += 1;
        }
    }
    writer.flush()?;

    let (coefficients, intercept) = fit_linear(&complete)?;
    let model = json!({
        "kind": "linear",
        "coefficients": coefficients,
        "intercept": intercept,
        "feature_names": ["RATAAN", "S.BAKU"],
        "target": "MIN",
    });
    std::fs::write(MODEL_PATH, serde_json::to_string_pretty(&model)?)
        .with_context(|| format!("writing {MODEL_PATH}"))?;

    println!(
        "Wrote {row_id} rows ({} complete) to {DATASET_PATH} and a linear model to {MODEL_PATH}",
        complete.len()
    );
    Ok(())
}
