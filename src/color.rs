use crate::prelude::*;
use std::io::{self, Write};

pub type Color = Vec3;

pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let intensity = Interval::new(0.000, 0.999);
    let rbyte = (256.0 * intensity.clamp(pixel_color.x)) as u8;
    let gbyte = (256.0 * intensity.clamp(pixel_color.y)) as u8;
    let bbyte = (256.0 * intensity.clamp(pixel_color.z)) as u8;

    writeln!(out, "{} {} {}", rbyte, gbyte, bbyte)
}
