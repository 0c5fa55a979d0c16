use crate::constants::{MAX_SPEED, RANDOM_TWEEN_MAX_PX, RANDOM_TWEEN_MIN_PX, SPEED_QUANTUM};
use rand::prelude::*;

/// Source of uniform draws in [0, 1). Injected so tests can pin speeds.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter over any `rand` generator.
pub struct RngSource<R: RngCore>(pub R);

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v
    }
}

/// Round a draw to hundredths, capped so the factor stays below 1.
pub fn quantize_speed(unit: f64) -> f64 {
    if !unit.is_finite() {
        return 0.0;
    }
    ((unit * SPEED_QUANTUM).round() / SPEED_QUANTUM).clamp(0.0, MAX_SPEED)
}

pub fn next_speed<R: RandomSource + ?Sized>(source: &mut R) -> f64 {
    quantize_speed(source.next_unit())
}

/// Whole-pixel distance in [RANDOM_TWEEN_MIN_PX, RANDOM_TWEEN_MAX_PX).
pub fn random_tween_distance<R: RandomSource + ?Sized>(source: &mut R) -> f64 {
    let span = RANDOM_TWEEN_MAX_PX - RANDOM_TWEEN_MIN_PX;
    let offset = (source.next_unit().clamp(0.0, 1.0) * span).floor().min(span - 1.0);
    RANDOM_TWEEN_MIN_PX + offset
}
