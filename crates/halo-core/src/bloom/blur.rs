use ndarray::Array3;
use rayon::prelude::*;
use tracing::warn;

use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::frame::ReducedBuffer;

use super::kernel::GaussianKernel;

/// Convolve every row with the kernel (horizontal pass).
///
/// Taps falling outside the buffer are skipped and the result is divided by
/// the sum of the in-bounds weights only, so border pixels are not darkened
/// by the missing taps.
pub fn horizontal_blur(input: &ReducedBuffer, kernel: &GaussianKernel) -> ReducedBuffer {
    let (h, w, _) = input.data.dim();

    let rows: Vec<(Vec<f32>, usize)> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|y| blur_row_horizontal(&input.data, y, kernel))
            .collect()
    } else {
        (0..h)
            .map(|y| blur_row_horizontal(&input.data, y, kernel))
            .collect()
    };

    collect_rows(rows, w, h)
}

/// Convolve every column with the kernel (vertical pass), operating on the
/// horizontal pass's output. Border handling matches the horizontal pass.
pub fn vertical_blur(input: &ReducedBuffer, kernel: &GaussianKernel) -> ReducedBuffer {
    let (h, w, _) = input.data.dim();

    let rows: Vec<(Vec<f32>, usize)> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|y| blur_row_vertical(&input.data, y, kernel))
            .collect()
    } else {
        (0..h)
            .map(|y| blur_row_vertical(&input.data, y, kernel))
            .collect()
    };

    collect_rows(rows, w, h)
}

/// One output row of the horizontal pass. Returns the row data and the
/// number of pixels whose in-bounds weight sum was not positive.
fn blur_row_horizontal(
    data: &Array3<f32>,
    y: usize,
    kernel: &GaussianKernel,
) -> (Vec<f32>, usize) {
    let w = data.dim().1;
    let radius = kernel.radius() as isize;
    let weights = kernel.weights();

    let mut row = vec![0.0f32; w * COLOR_CHANNEL_COUNT];
    let mut zero_weight = 0usize;

    for x in 0..w {
        let mut acc = [0.0f32; COLOR_CHANNEL_COUNT];
        let mut kernel_sum = 0.0f32;

        for (ki, &kw) in weights.iter().enumerate() {
            let src = x as isize + ki as isize - radius;
            if src < 0 || src >= w as isize {
                continue;
            }
            kernel_sum += kw;
            let src = src as usize;
            for (c, a) in acc.iter_mut().enumerate() {
                *a += kw * data[[y, src, c]];
            }
        }

        zero_weight += write_normalized(
            &mut row[x * COLOR_CHANNEL_COUNT..(x + 1) * COLOR_CHANNEL_COUNT],
            &acc,
            kernel_sum,
        );
    }

    (row, zero_weight)
}

/// One output row of the vertical pass.
fn blur_row_vertical(data: &Array3<f32>, y: usize, kernel: &GaussianKernel) -> (Vec<f32>, usize) {
    let (h, w, _) = data.dim();
    let radius = kernel.radius() as isize;
    let weights = kernel.weights();

    let mut row = vec![0.0f32; w * COLOR_CHANNEL_COUNT];
    let mut zero_weight = 0usize;

    for x in 0..w {
        let mut acc = [0.0f32; COLOR_CHANNEL_COUNT];
        let mut kernel_sum = 0.0f32;

        for (ki, &kw) in weights.iter().enumerate() {
            let src = y as isize + ki as isize - radius;
            if src < 0 || src >= h as isize {
                continue;
            }
            kernel_sum += kw;
            let src = src as usize;
            for (c, a) in acc.iter_mut().enumerate() {
                *a += kw * data[[src, x, c]];
            }
        }

        zero_weight += write_normalized(
            &mut row[x * COLOR_CHANNEL_COUNT..(x + 1) * COLOR_CHANNEL_COUNT],
            &acc,
            kernel_sum,
        );
    }

    (row, zero_weight)
}

/// Divide the accumulated color by the in-bounds weight sum. The center tap
/// is always in range, so a non-positive sum is unreachable for any valid
/// kernel; the guard keeps it a zero pixel instead of NaN.
fn write_normalized(out: &mut [f32], acc: &[f32; COLOR_CHANNEL_COUNT], kernel_sum: f32) -> usize {
    if kernel_sum > 0.0 {
        for (o, a) in out.iter_mut().zip(acc.iter()) {
            *o = a / kernel_sum;
        }
        0
    } else {
        out.fill(0.0);
        1
    }
}

fn collect_rows(rows: Vec<(Vec<f32>, usize)>, w: usize, h: usize) -> ReducedBuffer {
    let mut result = ReducedBuffer::zeros(w, h);
    let mut zero_weight = 0usize;

    for (y, (row, zeros)) in rows.into_iter().enumerate() {
        zero_weight += zeros;
        for x in 0..w {
            for c in 0..COLOR_CHANNEL_COUNT {
                result.data[[y, x, c]] = row[x * COLOR_CHANNEL_COUNT + c];
            }
        }
    }

    if zero_weight > 0 {
        warn!(
            "Blur: {} output pixels had no in-bounds kernel taps",
            zero_weight
        );
    }

    result
}
