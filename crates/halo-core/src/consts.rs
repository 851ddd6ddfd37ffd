/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a linear frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Display gamma applied when encoding output pixels. Supplied by the host
/// renderer; the filter never mutates it at runtime.
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Rec. 709 luma coefficient for the red channel.
pub const LUMA_R: f32 = 0.2126;

/// Rec. 709 luma coefficient for the green channel.
pub const LUMA_G: f32 = 0.7152;

/// Rec. 709 luma coefficient for the blue channel.
pub const LUMA_B: f32 = 0.0722;

/// Divisor mapping a blur radius to the Gaussian sigma (sigma = radius / 3),
/// so the kernel window covers roughly three standard deviations per side.
pub const KERNEL_SIGMA_DIVISOR: f32 = 3.0;

/// Default downsampling ratio between the source frame and the bloom buffer.
pub const DEFAULT_DOWNSAMPLE_RATIO: usize = 4;

/// Default blur radius, in reduced-buffer pixels.
pub const DEFAULT_BLUR_RADIUS: usize = 4;

/// Default brightness threshold (linear units) for bloom source selection.
pub const DEFAULT_THRESHOLD: f64 = 1.0;
