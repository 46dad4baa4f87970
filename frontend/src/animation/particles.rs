use std::f64::consts::PI;

/// A dot drifting up and down behind the stats grid.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingParticle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl FloatingParticle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Scatters `count` particles using `random`, which must yield values in `[0, 1)`.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<FloatingParticle> {
    (0..count)
        .map(|_| {
            let left_pct = random() * 100.0;
            let top_pct = random() * 100.0;
            let duration_s = 3.0 + random() * 2.0;
            let delay_s = random() * 2.0;
            FloatingParticle {
                left_pct,
                top_pct,
                duration_s,
                delay_s,
            }
        })
        .collect()
}

/// End offsets of the completion burst, evenly spread around the ring.
pub fn burst_offsets(count: usize, radius: f64) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let step = 2.0 * PI / count as f64;
    (0..count)
        .map(|i| {
            let angle = step * i as f64;
            (angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}
