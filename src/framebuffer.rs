// RGB565 RAM framebuffer for composing a face off-panel.
// Implements `DrawTarget<Rgb565>`; every write grows a dirty rectangle and
// `flush_dirty` pushes only that rectangle. The rectangle bounds what was
// written, not what changed: clearing before a redraw dirties everything.

use core::convert::Infallible;
use core::fmt;

use embedded_graphics::{
    pixelcolor::{raw::RawU16, Rgb565},
    prelude::*,
    primitives::Rectangle,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FramebufferError {
    /// Backing slice length does not match `width * height`.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferError::SizeMismatch { expected, actual } => {
                write!(f, "framebuffer needs {} pixels, got {}", expected, actual)
            }
        }
    }
}

// Inclusive pixel bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Dirty {
    minx: u16,
    miny: u16,
    maxx: u16,
    maxy: u16,
}

impl Dirty {
    fn point(x: u16, y: u16) -> Self {
        Self { minx: x, miny: y, maxx: x, maxy: y }
    }

    fn include(&mut self, x: u16, y: u16) {
        if x < self.minx { self.minx = x; }
        if y < self.miny { self.miny = y; }
        if x > self.maxx { self.maxx = x; }
        if y > self.maxy { self.maxy = y; }
    }

    fn merge(&mut self, other: Dirty) {
        self.include(other.minx, other.miny);
        self.include(other.maxx, other.maxy);
    }

    fn rect(&self) -> Rectangle {
        Rectangle::with_corners(
            Point::new(self.minx as i32, self.miny as i32),
            Point::new(self.maxx as i32, self.maxy as i32),
        )
    }
}

pub struct Framebuffer<'fb> {
    w: u16,
    h: u16,
    fb: &'fb mut [u16], // RGB565 storage, row major
    dirty: Option<Dirty>,
}

impl<'fb> Framebuffer<'fb> {
    pub fn new(width: u16, height: u16, fb: &'fb mut [u16]) -> Result<Self, FramebufferError> {
        let expected = (width as usize) * (height as usize);
        if fb.len() != expected {
            return Err(FramebufferError::SizeMismatch { expected, actual: fb.len() });
        }
        Ok(Self { w: width, h: height, fb, dirty: None })
    }

    /// Colour at `p`, or `None` outside the buffer.
    pub fn pixel(&self, p: Point) -> Option<Rgb565> {
        let (x, y) = self.index_of(p)?;
        Some(Rgb565::from(RawU16::new(self.fb[y * self.w as usize + x])))
    }

    /// Region written since the last call, if any.
    pub fn take_dirty(&mut self) -> Option<Rectangle> {
        self.dirty.take().map(|d| d.rect())
    }

    /// Pushes the dirty region into `target` and resets it.
    pub fn flush_dirty<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(area) = self.take_dirty() else {
            return Ok(());
        };
        let fbw = self.w as usize;
        let fb = &*self.fb;
        let (x0, y0) = (area.top_left.x as usize, area.top_left.y as usize);
        let (w, h) = (area.size.width as usize, area.size.height as usize);
        let colors = (y0..y0 + h).flat_map(move |y| {
            fb[y * fbw + x0..y * fbw + x0 + w]
                .iter()
                .map(|&raw| Rgb565::from(RawU16::new(raw)))
        });
        target.fill_contiguous(&area, colors)
    }

    fn index_of(&self, p: Point) -> Option<(usize, usize)> {
        if p.x < 0 || p.y < 0 { return None; }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.w as usize || y >= self.h as usize { return None; }
        Some((x, y))
    }

    fn mark(&mut self, d: Dirty) {
        match self.dirty.as_mut() {
            Some(cur) => cur.merge(d),
            None => self.dirty = Some(d),
        }
    }
}

// -------------------- embedded-graphics integration --------------------
impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        let mut touched: Option<Dirty> = None;
        let fbw = self.w as usize;

        for Pixel(p, c) in pixels {
            let Some((x, y)) = self.index_of(p) else { continue };
            self.fb[y * fbw + x] = c.into_storage();
            match touched.as_mut() {
                Some(t) => t.include(x as u16, y as u16),
                None => touched = Some(Dirty::point(x as u16, y as u16)),
            }
        }

        if let Some(t) = touched {
            self.mark(t);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        let inter = area.intersection(&self.bounding_box());
        let Some(br) = inter.bottom_right() else {
            return Ok(());
        };

        let fbw = self.w as usize;
        let (x0, y0) = (inter.top_left.x as usize, inter.top_left.y as usize);
        let (x1, y1) = (br.x as usize, br.y as usize);
        let color16 = color.into_storage();
        for y in y0..=y1 {
            self.fb[y * fbw + x0..=y * fbw + x1].fill(color16);
        }

        self.mark(Dirty { minx: x0 as u16, miny: y0 as u16, maxx: x1 as u16, maxy: y1 as u16 });
        Ok(())
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}
