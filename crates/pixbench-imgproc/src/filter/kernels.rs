/// Normalized 5x5 gaussian kernel with sigma close to 1.0, row-major.
///
/// The weights are rounded to five decimals and sum to `1.00002`, so a constant image stays
/// constant after rounding to `u8`.
#[rustfmt::skip]
pub const GAUSSIAN_5X5: [[f64; 5]; 5] = [
    [0.00297, 0.01331, 0.02194, 0.01331, 0.00297],
    [0.01331, 0.05963, 0.09832, 0.05963, 0.01331],
    [0.02194, 0.09832, 0.16210, 0.09832, 0.02194],
    [0.01331, 0.05963, 0.09832, 0.05963, 0.01331],
    [0.00297, 0.01331, 0.02194, 0.01331, 0.00297],
];

/// 3x3 sobel kernel for the horizontal derivative.
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// 3x3 sobel kernel for the vertical derivative.
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];
