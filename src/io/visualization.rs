//! Paced playback of a run as an animated GIF

use crate::algorithm::events::{Placement, PlacementSink};
use crate::catalog::TileCatalog;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GenerationError, Result};
use crate::io::image::{canvas_size, draw_tile};
use image::{Frame, RgbaImage};
use std::io::BufWriter;
use std::path::Path;

/// Captures placements for visualization
///
/// Records every placement of a run so the generation can be replayed one
/// collapse per frame, the way a timer-paced host would show it.
pub struct VisualizationCapture {
    pub(crate) placements: Vec<Placement>,
    dims: (usize, usize),
    padding: u32,
}

impl VisualizationCapture {
    /// Capture for a `width x height` grid
    pub fn new(width: usize, height: usize, padding: u32) -> Self {
        Self {
            placements: Vec::with_capacity(width * height),
            dims: (width, height),
            padding,
        }
    }

    /// Returns all recorded placement events
    pub fn get_placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the total number of placement events
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Forget recorded placements, e.g. after a solver reset
    pub fn clear(&mut self) {
        self.placements.clear();
    }

    /// Frame delay and skip factor used when playing back at `frame_delay_ms`
    ///
    /// Delays below what viewers support are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS` and only every n-th placement gets its own
    /// frame, preserving the apparent speed.
    pub const fn playback_timing(frame_delay_ms: u32) -> (u32, usize) {
        let frame_delay_ms = if frame_delay_ms == 0 { 1 } else { frame_delay_ms };
        if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            (
                VIEWER_MIN_FRAME_DELAY_MS,
                VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize,
            )
        } else {
            (frame_delay_ms, 1)
        }
    }

    /// Export the captured placements as a GIF, one frame per placement
    ///
    /// Frames are encoded as they are drawn, so only the working canvas is
    /// held in memory. See [`Self::playback_timing`] for frame skipping.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - The canvas is too large
    /// - A placement refers to a tile outside `catalog`
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        catalog: &TileCatalog,
        output_path: &Path,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.placements.is_empty() {
            return Err(GenerationError::InvalidParameter {
                parameter: "visualization",
                value: output_path.display().to_string(),
                reason: "no placements captured".to_string(),
            });
        }

        let (width, height) = self.dims;
        let (px_width, px_height) = canvas_size(width, height, self.padding)?;
        let (delay_ms, skip_factor) = Self::playback_timing(frame_delay_ms);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(BufWriter::new(file));
        let mut encode = |canvas: &RgbaImage, delay_ms: u32| {
            encoder
                .encode_frame(Self::frame(canvas, delay_ms))
                .map_err(|e| GenerationError::ImageExport {
                    path: output_path.to_path_buf(),
                    source: e,
                })
        };

        let mut canvas = RgbaImage::new(px_width, px_height);
        encode(&canvas, delay_ms)?;

        for (index, placement) in self.placements.iter().enumerate() {
            draw_tile(
                &mut canvas,
                catalog,
                placement.tile,
                placement.coord,
                height,
                self.padding,
            )?;

            if (index + 1) % skip_factor == 0 {
                encode(&canvas, delay_ms)?;
            }
        }

        if self.placements.len() % skip_factor != 0 {
            encode(&canvas, delay_ms)?;
        }

        // Final frame displays longer for better visibility
        encode(&canvas, delay_ms.saturating_mul(25))?;

        Ok(())
    }

    fn frame(canvas: &RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(
            canvas.clone(),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}

impl PlacementSink for VisualizationCapture {
    fn place(&mut self, placement: &Placement) {
        self.placements.push(*placement);
    }
}
