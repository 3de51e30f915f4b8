use hypermaze_grid::{Coord4, Size4};

/// Fixed color per abstract axis, used by the hint frame and the map
/// borders: axis 0 red, 1 green, 2 blue, 3 white.
pub const AXIS_LEGEND: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
];

/// Deterministic cell color from the full 4D coordinate: RGB encode the
/// position along abstract axes 0..2, alpha fades with depth along axis 3.
#[inline]
pub fn cell_color(size: Size4, c: Coord4) -> [f32; 4] {
    [
        (1 + c[0]) as f32 / (size[0] + 2) as f32,
        (1 + c[1]) as f32 / (size[1] + 2) as f32,
        (1 + c[2]) as f32 / (size[2] + 2) as f32,
        1.0 - c[3] as f32 / (size[3] + 2) as f32,
    ]
}

/// Same RGB encoding with the depth fade dropped (map strips).
#[inline]
pub fn cell_color_opaque(size: Size4, c: Coord4) -> [f32; 4] {
    let mut rgba = cell_color(size, c);
    rgba[3] = 1.0;
    rgba
}
