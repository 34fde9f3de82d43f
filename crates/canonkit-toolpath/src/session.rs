//! One translation pass over a motion program
//!
//! A [`TranslationSession`] owns the translator (and through it the offset
//! tracker and toolpath buffer) for one program. It is created fresh when a
//! program is loaded and fed the driver's calls in order; afterwards it answers
//! extents, selection and drawing queries.

use crate::canon::arc::ArcResolution;
use crate::canon::translator::CanonTranslator;
use crate::canon::{CanonCall, CanonRecord};
use crate::toolpath::buffer::ToolpathBuffer;
use crate::toolpath::cache::ToolpathCache;
use crate::toolpath::draw::DrawList;
use crate::toolpath::extents::ToolpathExtents;
use crate::toolpath::framing::CameraFrame;
use crate::toolpath::palette::Palette;
use crate::toolpath::selection::{Highlight, Selection};
use crate::toolpath::stats::ToolpathStats;
use crate::toolpath::LineNumber;
use canonkit_core::constants::DWELL_GLYPH_HALF_SIZE;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings that shape a translation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    pub resolution: ArcResolution,
    pub palette: Palette,
    /// Half the width of a dwell glyph in world units
    pub glyph_half_size: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            resolution: ArcResolution::default(),
            palette: Palette::default(),
            glyph_half_size: DWELL_GLYPH_HALF_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationSession {
    options: SessionOptions,
    translator: CanonTranslator,
    cache: ToolpathCache,
    calls: usize,
}

impl TranslationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            translator: CanonTranslator::new(options.resolution, options.palette),
            cache: ToolpathCache::new(),
            calls: 0,
        }
    }

    /// Apply one driver call on its program line
    pub fn apply(&mut self, record: &CanonRecord) {
        self.translator.next_line(record.line);
        self.translator.apply(&record.call);
        self.calls += 1;
    }

    /// Apply a call on the current line
    pub fn apply_call(&mut self, call: &CanonCall) {
        self.translator.apply(call);
        self.calls += 1;
    }

    /// Apply a whole call stream in order
    pub fn replay<'a>(&mut self, records: impl IntoIterator<Item = &'a CanonRecord>) {
        let before = self.translator.buffer().len();
        let calls_before = self.calls;
        for record in records {
            self.apply(record);
        }
        debug!(
            "Replayed {} calls, {} new events ({} total)",
            self.calls - calls_before,
            self.translator.buffer().len() - before,
            self.translator.buffer().len()
        );
    }

    /// Start over for a new program, keeping the options
    pub fn reset(&mut self) {
        debug!("Resetting session after {} calls", self.calls);
        self.translator = CanonTranslator::new(self.options.resolution, self.options.palette);
        self.cache.invalidate();
        self.calls = 0;
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn translator(&self) -> &CanonTranslator {
        &self.translator
    }

    /// Direct access for drivers that call translator operations themselves
    pub fn translator_mut(&mut self) -> &mut CanonTranslator {
        &mut self.translator
    }

    pub fn buffer(&self) -> &ToolpathBuffer {
        self.translator.buffer()
    }

    pub fn into_buffer(self) -> ToolpathBuffer {
        self.translator.into_buffer()
    }

    /// Number of calls applied since the session started
    pub fn call_count(&self) -> usize {
        self.calls
    }

    pub fn extents(&self) -> ToolpathExtents {
        self.buffer().compute_extents()
    }

    pub fn select(&self, line: LineNumber) -> Selection {
        self.buffer().select_by_line(line)
    }

    pub fn highlight(&self, line: LineNumber) -> Highlight {
        self.select(line)
            .highlight(&self.options.palette, self.options.glyph_half_size)
    }

    pub fn stats(&self) -> ToolpathStats {
        ToolpathStats::collect(self.buffer(), self.translator.dwell_time())
    }

    /// Draw list for the current contents, rebuilt only after changes
    pub fn draw_list(&mut self) -> &DrawList {
        self.cache.refresh(
            self.translator.buffer(),
            &self.options.palette,
            self.options.glyph_half_size,
        )
    }

    pub fn cache(&self) -> &ToolpathCache {
        &self.cache
    }

    /// Camera framing for the whole drawn toolpath
    pub fn frame_all(&self, fov: f32) -> CameraFrame {
        CameraFrame::from_extents(&self.extents().drawn, fov)
    }

    /// Camera framing for one program line
    pub fn frame_line(&self, line: LineNumber, fov: f32) -> CameraFrame {
        CameraFrame::from_selection(&self.select(line), fov)
    }
}
