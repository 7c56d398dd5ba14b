use crate::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const GAUSSIAN_TAPS: [f64; 5] = [0.1201, 0.2339, 0.2931, 0.2339, 0.1201];

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::zero(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    pub fn gaussian_blur(&self) -> Image {
        self.filter_pass(false).filter_pass(true)
    }

    fn filter_pass(&self, vertical: bool) -> Image {
        let mut out = Image::new(self.width, self.height);
        let extent = i64::from(if vertical { self.height } else { self.width });

        for y in 0..self.height {
            for x in 0..self.width {
                let along = i64::from(if vertical { y } else { x });
                let mut col = Color::zero();
                for (k, weight) in GAUSSIAN_TAPS.iter().enumerate() {
                    let kk = along + k as i64 - 2;
                    if kk < 0 || kk >= extent {
                        continue;
                    }
                    let kk = kk as u32;
                    let sample = if vertical { self.get(x, kk) } else { self.get(kk, y) };
                    col += *weight * sample;
                }
                out.set(x, y, col);
            }
        }
        out
    }

    pub fn downsample(&self, factor: u32) -> Image {
        debug_assert!(factor > 0);
        let mut out = Image::new(self.width / factor, self.height / factor);
        let scale = 1.0 / (factor * factor) as f64;

        for y in 0..out.height {
            for x in 0..out.width {
                let mut col = Color::zero();
                for dy in 0..factor {
                    for dx in 0..factor {
                        col += self.get(x * factor + dx, y * factor + dy);
                    }
                }
                out.set(x, y, col * scale);
            }
        }
        out
    }

    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;
        for pixel in &self.pixels {
            write_color(out, *pixel)?;
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut out)?;
        out.flush()
    }
}
