/// Rolling statistics for session tracking and the diagnostics panel.

/// Ring buffer that stores the last N samples of a metric.
pub struct RingBuffer {
    data: Vec<f32>,
    head: usize,
    len: usize,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            head: 0,
            len: 0,
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Return samples in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.len < self.capacity {
            0
        } else {
            self.head
        };
        (0..self.len).map(move |i| self.data[(start + i) % self.capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn last(&self) -> Option<f32> {
        if self.len == 0 {
            None
        } else {
            let idx = (self.head + self.capacity - 1) % self.capacity;
            Some(self.data[idx])
        }
    }
}

/// All tracked effect statistics.
pub struct EffectStats {
    pub live_particles: RingBuffer,

    pub peak_live: usize,
    pub particles_spawned: u64,
    pub explosions: u32,
    pub auto_explosions: u32,
    pub fizzles: u32,

    pub sample_interval: u32,
    frame_counter: u32,
}

impl EffectStats {
    pub fn new(capacity: usize) -> Self {
        Self {
            live_particles: RingBuffer::new(capacity),
            peak_live: 0,
            particles_spawned: 0,
            explosions: 0,
            auto_explosions: 0,
            fizzles: 0,
            sample_interval: 6, // sample every N frames
            frame_counter: 0,
        }
    }

    /// Record one frame's live-particle count. The peak updates every
    /// frame; the history only on sampled frames.
    pub fn record_frame(&mut self, live: usize) {
        self.peak_live = self.peak_live.max(live);
        self.frame_counter += 1;
        if self.frame_counter % self.sample_interval != 0 {
            return;
        }
        self.live_particles.push(live as f32);
    }

    pub fn note_explosion(&mut self, spawned: usize, auto: bool) {
        self.explosions += 1;
        if auto {
            self.auto_explosions += 1;
        }
        self.particles_spawned += spawned as u64;
    }

    pub fn note_fizzle(&mut self) {
        self.fizzles += 1;
    }
}
