/// Converts 8-bit channels to normalised floats
pub fn rgb8(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Scales each channel by its own factor
pub fn shade(color: [f32; 3], factors: [f32; 3]) -> [f32; 3] {
    [
        color[0] * factors[0],
        color[1] * factors[1],
        color[2] * factors[2],
    ]
}
