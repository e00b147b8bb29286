use serde::{Deserialize, Serialize};

use crate::stats::EffectStats;

/// 60 Hz frame budget in milliseconds.
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

/// Frame-time samples retained for the report, ten minutes at 60 Hz.
/// Older samples are overwritten once the window is full.
pub const METRIC_WINDOW: usize = 36_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl Default for MetricSummary {
    fn default() -> Self {
        Self {
            count: 0,
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            p50: 0.0,
            p90: 0.0,
            p95: 0.0,
            p99: 0.0,
        }
    }
}

/// Fixed-size sample window with percentile summaries. Pushing past the
/// capacity overwrites the oldest sample.
#[derive(Debug, Clone)]
pub struct MetricAggregator {
    data: Vec<f64>,
    head: usize,
    len: usize,
}

impl MetricAggregator {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.data.len();
        if self.len < self.data.len() {
            self.len += 1;
        }
    }

    // Retained samples; every consumer here is order-insensitive.
    fn window(&self) -> &[f64] {
        &self.data[..self.len]
    }

    pub fn pct_leq(&self, threshold: f64) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let hits = self.window().iter().filter(|v| **v <= threshold).count();
        (hits as f64 / self.len as f64) * 100.0
    }

    pub fn summary(&self) -> MetricSummary {
        if self.len == 0 {
            return MetricSummary::default();
        }

        let mut sorted = self.window().to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let sum: f64 = sorted.iter().sum();

        MetricSummary {
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean: sum / sorted.len() as f64,
            p50: percentile_nearest_rank(&sorted, 0.50),
            p90: percentile_nearest_rank(&sorted, 0.90),
            p95: percentile_nearest_rank(&sorted, 0.95),
            p99: percentile_nearest_rank(&sorted, 0.99),
        }
    }
}

fn percentile_nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = ((p * sorted.len() as f64).ceil() as usize).saturating_sub(1);
    sorted[rank.min(sorted.len() - 1)]
}

/// Everything one session writes to its JSON report. Frame timings cover
/// the retained metric window; the counters cover the whole session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub seed: u64,
    pub frames: u64,
    pub elapsed_seconds: f64,
    pub frame_ms: MetricSummary,
    pub frame_budget_hit_pct: f64,
    pub explosions: u32,
    pub auto_explosions: u32,
    pub fizzles: u32,
    pub particles_spawned: u64,
    pub peak_live_particles: usize,
}

pub fn build_report(
    seed: u64,
    frames: u64,
    elapsed_seconds: f64,
    frame_ms: &MetricAggregator,
    stats: &EffectStats,
) -> SessionReport {
    SessionReport {
        seed,
        frames,
        elapsed_seconds,
        frame_ms: frame_ms.summary(),
        frame_budget_hit_pct: frame_ms.pct_leq(FRAME_BUDGET_MS),
        explosions: stats.explosions,
        auto_explosions: stats.auto_explosions,
        fizzles: stats.fizzles,
        particles_spawned: stats.particles_spawned,
        peak_live_particles: stats.peak_live,
    }
}

pub fn write_report(report: &SessionReport, path: &str) -> Result<(), String> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_summary_is_reasonable() {
        let mut agg = MetricAggregator::new(128);
        for i in 1..=100 {
            agg.push(i as f64);
        }
        let s = agg.summary();
        assert_eq!(s.count, 100);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 100.0);
        assert!((s.mean - 50.5).abs() < 1e-6);
        assert_eq!(s.p50, 50.0);
        assert_eq!(s.p90, 90.0);
        assert_eq!(s.p95, 95.0);
        assert_eq!(s.p99, 99.0);
    }

    #[test]
    fn pct_leq_handles_empty_and_populated() {
        let mut agg = MetricAggregator::new(8);
        assert_eq!(agg.pct_leq(10.0), 0.0);
        agg.push(5.0);
        agg.push(15.0);
        agg.push(10.0);
        assert!((agg.pct_leq(10.0) - 66.666666).abs() < 0.01);
    }

    #[test]
    fn window_overwrites_the_oldest_samples_once_full() {
        let mut agg = MetricAggregator::new(4);
        agg.push(500.0);
        for i in 1..=8 {
            agg.push(i as f64);
        }

        // Only 5, 6, 7, 8 survive; the 500.0 spike is long gone.
        let s = agg.summary();
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 5.0);
        assert_eq!(s.max, 8.0);
        assert!((s.mean - 6.5).abs() < 1e-6);
        assert_eq!(agg.pct_leq(6.0), 50.0);
    }

    #[test]
    fn report_carries_session_counters_through() {
        let mut stats = EffectStats::new(8);
        stats.note_explosion(134, false);
        stats.note_explosion(200, true);
        stats.note_fizzle();
        stats.record_frame(134);

        let mut frame_ms = MetricAggregator::new(64);
        frame_ms.push(12.0);
        frame_ms.push(20.0);

        let report = build_report(42, 2, 0.032, &frame_ms, &stats);
        assert_eq!(report.seed, 42);
        assert_eq!(report.explosions, 2);
        assert_eq!(report.auto_explosions, 1);
        assert_eq!(report.fizzles, 1);
        assert_eq!(report.particles_spawned, 334);
        assert_eq!(report.peak_live_particles, 134);
        assert_eq!(report.frame_ms.count, 2);
        assert!((report.frame_budget_hit_pct - 50.0).abs() < 1e-6);
    }

    #[test]
    fn report_writes_valid_json() {
        let stats = EffectStats::new(8);
        let frame_ms = MetricAggregator::new(8);
        let report = build_report(7, 0, 0.0, &frame_ms, &stats);

        let path = std::env::temp_dir().join("holdfire_report_test.json");
        let path_str = path.to_str().unwrap();
        write_report(&report, path_str).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["seed"], 7);
        assert_eq!(value["explosions"], 0);

        std::fs::remove_file(&path).ok();
    }
}
