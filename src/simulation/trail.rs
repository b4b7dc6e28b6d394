//! Fixed-capacity positional history for a body
//!
//! A `Trail` owns `L` slots that are all filled with the body's starting
//! position, so a consumer never sees a short trail. New samples overwrite the
//! oldest slot through a wrapping cursor. Sampling is gated: a position is
//! only admitted once the body has moved far enough from the last admitted
//! sample, or has turned sharply, which keeps trails sparse on straight runs
//! and dense through turns.

use super::vector::NVec3;

/// Tunable trail settings, shared by every body in a swarm
#[derive(Debug, Clone, PartialEq)]
pub struct TrailParams {
    pub length: usize,         // number of slots L
    pub spacing_factor: f64,   // admit spacing = radius * spacing_factor
    pub angle_threshold: f64,  // radians between consecutive motion vectors
    pub width_factor: f64,     // base segment width = radius * width_factor
    pub taper_floor: f64,      // strength of the oldest segment
    pub min_acceleration: Option<f64>, // hide trails of bodies in equilibrium
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            length: 10,
            spacing_factor: 0.5,
            angle_threshold: 1.0,
            width_factor: 0.5,
            taper_floor: 0.2,
            min_acceleration: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trail {
    samples: Vec<NVec3>,
    write_index: usize,
    last_admitted: NVec3,
    last_motion: NVec3,
    admitted: u64,
    width: f64,
    spacing: f64,
    angle_threshold: f64,
    taper_floor: f64,
}

impl Trail {
    /// Build a trail for a body of `radius` currently at `initial`
    pub fn new(initial: NVec3, radius: f64, params: &TrailParams) -> Self {
        let length = params.length.max(1);
        Self {
            samples: vec![initial; length],
            write_index: 0,
            last_admitted: initial,
            last_motion: NVec3::zeros(),
            admitted: 0,
            width: radius * params.width_factor,
            spacing: radius * params.spacing_factor,
            angle_threshold: params.angle_threshold,
            taper_floor: params.taper_floor,
        }
    }

    /// Offer the body's current position. Returns whether it was written.
    pub fn admit_sample(&mut self, current: &NVec3) -> bool {
        let motion = current - self.last_admitted;
        let far_enough = motion.magnitude() > self.spacing;
        if !far_enough && !self.turned(&motion) {
            return false;
        }

        self.samples[self.write_index] = *current;
        self.write_index = (self.write_index + 1) % self.samples.len();
        self.last_admitted = *current;
        self.last_motion = motion;
        self.admitted += 1;
        true
    }

    // angle gate; undefined (never passes) while either vector has no length
    fn turned(&self, motion: &NVec3) -> bool {
        if motion.norm_squared() == 0.0 || self.last_motion.norm_squared() == 0.0 {
            return false;
        }
        motion.angle(&self.last_motion) > self.angle_threshold
    }

    /// Segments from `head` (the body's current position) back to the oldest
    /// sample, newest first
    pub fn render_sequence(&self, head: NVec3) -> TrailSegments<'_> {
        TrailSegments {
            trail: self,
            previous: head,
            step: 0,
        }
    }

    pub fn samples(&self) -> &[NVec3] {
        &self.samples
    }

    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Number of samples admitted since construction
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    pub fn newest(&self) -> NVec3 {
        self.samples[self.slot(0)]
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    // slot holding the sample `age` admissions old (0 = newest)
    fn slot(&self, age: usize) -> usize {
        let len = self.samples.len();
        (self.write_index + len - 1 - age % len) % len
    }

    /// Linear taper from 1.0 at the newest segment to `taper_floor` at the oldest
    fn strength(&self, step: usize) -> f64 {
        let len = self.samples.len();
        if len == 1 {
            return 1.0;
        }
        1.0 - (1.0 - self.taper_floor) * step as f64 / (len - 1) as f64
    }
}

/// One line segment of a trail with its taper applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub start: NVec3,
    pub end: NVec3,
    pub width: f64,
    pub opacity: f64,
}

/// Lazy newest-to-oldest walk over a trail, `capacity()` items long
#[derive(Debug, Clone)]
pub struct TrailSegments<'a> {
    trail: &'a Trail,
    previous: NVec3,
    step: usize,
}

impl Iterator for TrailSegments<'_> {
    type Item = TrailSegment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.trail.capacity() {
            return None;
        }
        let end = self.trail.samples[self.trail.slot(self.step)];
        let strength = self.trail.strength(self.step);
        let segment = TrailSegment {
            start: self.previous,
            end,
            width: self.trail.width * strength,
            opacity: strength,
        };
        self.previous = end;
        self.step += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.trail.capacity() - self.step;
        (left, Some(left))
    }
}

impl ExactSizeIterator for TrailSegments<'_> {}
