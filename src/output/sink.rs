//! Per-device pixel buffer that turns frames into queued commands.

use crate::color::{normalize_brightness, Color};
use crate::geometry::{LedLayout, LedPoint};
use crate::queue::{CommandSender, PixelCommand};

/// Frame buffer for one LED device.
///
/// Colors are brightness-normalized on the way in, so the buffer always
/// holds exactly what will be sent to the LEDs.
pub struct OutputSink {
    /// Start index of each strut inside `pixels`
    offsets: Vec<usize>,
    counts: Vec<usize>,
    pixels: Vec<Color>,
    queue: CommandSender,
    frames: u64,
}

impl OutputSink {
    /// Build a sink sized to `layout`, all LEDs off
    pub fn new<L: LedLayout + ?Sized>(layout: &L, queue: CommandSender) -> Self {
        let counts: Vec<usize> = (0..layout.strut_count())
            .map(|strut| layout.led_count(strut))
            .collect();
        let mut offsets = Vec::with_capacity(counts.len());
        let mut total = 0;
        for &count in &counts {
            offsets.push(total);
            total += count;
        }

        Self {
            offsets,
            counts,
            pixels: vec![Color::OFF; total],
            queue,
            frames: 0,
        }
    }

    fn index(&self, strut: usize, led: usize) -> usize {
        assert!(
            strut < self.counts.len(),
            "strut index {} out of range ({} struts)",
            strut,
            self.counts.len()
        );
        assert!(
            led < self.counts[strut],
            "LED index {} out of range on strut {} ({} LEDs)",
            led,
            strut,
            self.counts[strut]
        );
        self.offsets[strut] + led
    }

    /// Store `color`, brightness-corrected, for one LED
    pub fn set_pixel(&mut self, strut: usize, led: usize, color: Color) {
        let index = self.index(strut, led);
        self.pixels[index] = normalize_brightness(color);
    }

    /// Color currently buffered for an LED
    pub fn pixel(&self, strut: usize, led: usize) -> Color {
        self.pixels[self.index(strut, led)]
    }

    /// Queue the whole frame, strut-major, followed by one flush sentinel
    pub fn flush(&mut self) {
        for (strut, (&offset, &count)) in self.offsets.iter().zip(&self.counts).enumerate() {
            for led in 0..count {
                self.queue.enqueue(PixelCommand::SetPixel {
                    strut,
                    led,
                    color: self.pixels[offset + led],
                });
            }
        }
        self.queue.enqueue(PixelCommand::Flush);
        self.frames += 1;
        log::trace!("Frame {} queued ({} LEDs)", self.frames, self.pixels.len());
    }

    pub fn strut_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total_leds(&self) -> usize {
        self.pixels.len()
    }

    /// Frames flushed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Every buffered LED with its color, in flush order
    pub fn iter(&self) -> impl Iterator<Item = (LedPoint, Color)> + '_ {
        self.offsets
            .iter()
            .zip(&self.counts)
            .enumerate()
            .flat_map(move |(strut, (&offset, &count))| {
                (0..count).map(move |led| (LedPoint::new(strut, led), self.pixels[offset + led]))
            })
    }
}
