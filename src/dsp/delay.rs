use rand::Rng;

/*
Fixed-Length Delay Line
=======================

A circular buffer whose length never changes after construction. The read
position walks forward one slot per sample and wraps at the end:

    len = 5, pos = 3

    [ a  b  c  d  e ]
               ^
             read d, then average d with e, then move to e

For Karplus-Strong the length sets the pitch: one trip around the buffer
takes `len` samples, and the averaging pulls half a sample from the next
slot, so the loop repeats every len - 0.5 samples.

The averaging step

    buffer[pos] = 0.5 * (buffer[pos] + buffer[pos + 1])

is a two-tap moving average inside the loop. Its coefficients sum to one,
so it never increases the largest magnitude in the buffer; each lap through
the line removes a little more high-frequency energy, which is what makes
the "string" decay from bright to dull.
*/

#[derive(Debug, Clone, PartialEq)]
pub struct DelayLine {
    buffer: Box<[f32]>,
    pos: usize,
}

impl DelayLine {
    /// Zero-filled line of `len` samples.
    pub fn new(len: usize) -> Self {
        Self::from_samples(vec![0.0; len])
    }

    /// Line holding `samples`, read position at the first sample.
    ///
    /// An empty line is allowed and reads as silence.
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self {
            buffer: samples.into_boxed_slice(),
            pos: 0,
        }
    }

    /// Line of `len` independent uniform values in `[-1, 1)` (a pluck).
    pub fn excite<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let samples = (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
        Self::from_samples(samples)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    /// Sample at the read position.
    #[inline]
    pub fn read(&self) -> f32 {
        self.buffer.get(self.pos).copied().unwrap_or(0.0)
    }

    /// Emit the current sample, replace it with the average of itself and
    /// its successor, and advance.
    #[inline]
    pub fn next_averaged(&mut self) -> f32 {
        let len = self.buffer.len();
        if len == 0 {
            return 0.0;
        }
        let next = if self.pos + 1 == len { 0 } else { self.pos + 1 };

        let current = self.buffer[self.pos];
        self.buffer[self.pos] = 0.5 * (current + self.buffer[next]);
        self.pos = next;

        current
    }

    pub fn peak(&self) -> f32 {
        self.buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.pos = 0;
    }
}
