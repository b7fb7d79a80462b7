use std::io::{self, Write};

use crate::Color;

/// Linear radiance, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Image {
        assert_eq!(pixels.len(), width * height, "pixel buffer does not match dimensions");
        Image { width, height, pixels }
    }

    /// Writes an ASCII PPM (P3) with gamma 2 applied.
    pub fn write_ppm<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "P3")?;
        writeln!(w, "{} {}", self.width, self.height)?;
        writeln!(w, "255")?;

        for color in &self.pixels {
            writeln!(w, "{}", format_color(*color))?;
        }

        w.flush()
    }
}

fn format_color(color: Color) -> String {
    // gamma correction
    let c = color.max(Color::ZERO);
    let c = Color::new(c.x.sqrt(), c.y.sqrt(), c.z.sqrt()).min(Color::splat(0.999));

    let r = (c.x * 256.0) as u8;
    let g = (c.y * 256.0) as u8;
    let b = (c.z * 256.0) as u8;
    return format!("{} {} {}", r, g, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_gamma_and_clamp() {
        assert_eq!(format_color(Color::ZERO), "0 0 0");
        assert_eq!(format_color(Color::ONE), "255 255 255");
        assert_eq!(format_color(Color::new(0.25, 4.0, -1.0)), "128 255 0");
    }

    #[test]
    fn writes_ppm_header_and_pixels() {
        let image = Image::new(2, 1, vec![Color::ONE, Color::ZERO]);
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "P3\n2 1\n255\n255 255 255\n0 0 0\n");
    }

    #[test]
    #[should_panic]
    fn rejects_mismatched_buffer() {
        Image::new(2, 2, vec![Color::ONE]);
    }
}
