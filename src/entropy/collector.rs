//! Motion sample collection.
//!
//! Accepted samples land in a point log and push the level toward 100. Pointer
//! samples add one point each; touch samples add several jittered synthetic
//! points, since touch events arrive far less often than pointer moves. Each
//! modality has its own divisor so the fill rates can be tuned apart.

use rand::Rng;

use super::gate::FULL;

pub const POINTER_POINTS_PER_PERCENT: f64 = 1.0;
pub const TOUCH_POINTS_PER_PERCENT: f64 = 1.5;
pub const TOUCH_POINTS_PER_EVENT: usize = 5;
pub const POINTER_DEBOUNCE_MS: u64 = 50;
pub const TOUCH_DEBOUNCE_MS: u64 = 100;

const TOUCH_JITTER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Pointer,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds on a monotonic clock. Samples must arrive in order.
    pub timestamp_ms: u64,
    pub modality: Modality,
}

impl PointerSample {
    pub fn pointer(x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self {
            x,
            y,
            timestamp_ms,
            modality: Modality::Pointer,
        }
    }

    pub fn touch(x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self {
            x,
            y,
            timestamp_ms,
            modality: Modality::Touch,
        }
    }

    /// Coarse time phase recorded with each point.
    pub fn phase(&self) -> u8 {
        (self.timestamp_ms % 256) as u8
    }
}

/// Inclusive rectangle in the same coordinate space as samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Region {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Accrual tuning for one input modality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalityRate {
    /// Divisor K: level = points / K.
    pub points_per_percent: f64,
    pub points_per_event: usize,
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccrualRates {
    pub pointer: ModalityRate,
    pub touch: ModalityRate,
}

impl AccrualRates {
    pub fn for_modality(&self, modality: Modality) -> &ModalityRate {
        match modality {
            Modality::Pointer => &self.pointer,
            Modality::Touch => &self.touch,
        }
    }
}

impl Default for AccrualRates {
    fn default() -> Self {
        Self {
            pointer: ModalityRate {
                points_per_percent: POINTER_POINTS_PER_PERCENT,
                points_per_event: 1,
                debounce_ms: POINTER_DEBOUNCE_MS,
            },
            touch: ModalityRate {
                points_per_percent: TOUCH_POINTS_PER_PERCENT,
                points_per_event: TOUCH_POINTS_PER_EVENT,
                debounce_ms: TOUCH_DEBOUNCE_MS,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub phase: u8,
}

/// Why a sample was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The gate is locked; nothing accrues until reset.
    Locked,
    /// Pointer motion over the password display.
    InsideDisplayRegion,
    /// Arrived before the modality's debounce interval elapsed.
    Debounced,
    /// No character classes enabled, so there is nothing to generate.
    NoClassesSelected,
}

#[derive(Debug, Clone)]
pub struct SampleCollector {
    rates: AccrualRates,
    points: Vec<Point>,
    pointer_points: usize,
    touch_points: usize,
    level: f64,
    last_accepted_ms: Option<u64>,
    display_region: Option<Region>,
}

impl SampleCollector {
    pub fn new(rates: AccrualRates) -> Self {
        Self {
            rates,
            points: Vec::new(),
            pointer_points: 0,
            touch_points: 0,
            level: 0.0,
            last_accepted_ms: None,
            display_region: None,
        }
    }

    /// Record `sample` if it passes the region and debounce checks and return
    /// the new level.
    pub fn accept(&mut self, sample: &PointerSample) -> Result<f64, Rejection> {
        if sample.modality == Modality::Pointer
            && self
                .display_region
                .is_some_and(|region| region.contains(sample.x, sample.y))
        {
            return Err(Rejection::InsideDisplayRegion);
        }

        let rate = *self.rates.for_modality(sample.modality);
        if let Some(last) = self.last_accepted_ms
            && sample.timestamp_ms.saturating_sub(last) < rate.debounce_ms
        {
            return Err(Rejection::Debounced);
        }

        match sample.modality {
            Modality::Pointer => {
                self.pointer_points += self.record_pointer(sample, rate.points_per_event);
            }
            Modality::Touch => {
                self.touch_points += self.record_touch(sample, rate.points_per_event);
            }
        }
        self.last_accepted_ms = Some(sample.timestamp_ms);

        self.level = self.level_from_counts();
        Ok(self.level)
    }

    /// `points / K` per modality, summed and capped. Each count only grows,
    /// so the level never drops within a cycle.
    fn level_from_counts(&self) -> f64 {
        let pointer = self.pointer_points as f64 / self.rates.pointer.points_per_percent;
        let touch = self.touch_points as f64 / self.rates.touch.points_per_percent;
        (pointer + touch).min(FULL)
    }

    fn record_pointer(&mut self, sample: &PointerSample, count: usize) -> usize {
        let phase = sample.phase();
        for _ in 0..count {
            self.points.push(Point {
                x: sample.x,
                y: sample.y,
                phase,
            });
        }
        count
    }

    fn record_touch(&mut self, sample: &PointerSample, count: usize) -> usize {
        let mut rng = rand::thread_rng();
        let phase = sample.phase();
        for i in 0..count {
            self.points.push(Point {
                x: sample.x + rng.gen_range(-TOUCH_JITTER..TOUCH_JITTER),
                y: sample.y + rng.gen_range(-TOUCH_JITTER..TOUCH_JITTER),
                phase: phase.wrapping_add(i as u8),
            });
        }
        count
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rates(&self) -> &AccrualRates {
        &self.rates
    }

    pub fn set_display_region(&mut self, region: Option<Region>) {
        self.display_region = region;
    }

    /// Drop the point log and start the level over from 0.
    pub fn reset(&mut self) {
        self.points.clear();
        self.pointer_points = 0;
        self.touch_points = 0;
        self.level = 0.0;
        self.last_accepted_ms = None;
    }
}
