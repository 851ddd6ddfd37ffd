use crate::consts::KERNEL_SIGMA_DIVISOR;

/// Normalized 1-D Gaussian convolution kernel.
///
/// `2 * radius + 1` weights, symmetric about the center tap, summing to 1.0
/// over the full window. Shared read-only by both blur passes; regenerated
/// whenever the blur radius changes.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    radius: usize,
    weights: Vec<f32>,
}

impl GaussianKernel {
    /// Build the kernel for a blur radius, with sigma = radius / 3.
    pub fn new(radius: usize) -> Self {
        if radius == 0 {
            // sigma would be 0; the single-tap identity kernel avoids the
            // division by zero below.
            return Self {
                radius: 0,
                weights: vec![1.0],
            };
        }

        let sigma = radius as f32 / KERNEL_SIGMA_DIVISOR;
        let factor = 1.0 / (2.0 * sigma * sigma);

        let mut weights = vec![0.0f32; 2 * radius + 1];
        let mut sum = 0.0f32;
        for (i, w) in weights.iter_mut().enumerate() {
            let offset = i as f32 - radius as f32;
            *w = (-offset * offset * factor).exp();
            sum += *w;
        }
        for w in &mut weights {
            *w /= sum;
        }

        Self { radius, weights }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}
