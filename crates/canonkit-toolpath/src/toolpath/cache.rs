//! Draw list cache keyed on buffer revision, palette and glyph size

use super::buffer::ToolpathBuffer;
use super::draw::{DrawList, SelectionBatch};
use super::palette::Palette;
use tracing::debug;

/// Draw list and picking batches for one buffer revision.
///
/// Rebuilt only when the buffer has changed since the last build, or when the
/// palette or glyph size differs.
#[derive(Debug, Default, Clone)]
pub struct ToolpathCache {
    revision: Option<u64>,
    palette: Palette,
    glyph_half_size: f64,
    draw_list: Option<DrawList>,
    picking: Vec<SelectionBatch>,
}

impl ToolpathCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_update(&self, revision: u64, palette: &Palette, glyph_half_size: f64) -> bool {
        self.revision != Some(revision)
            || self.palette != *palette
            || self.glyph_half_size != glyph_half_size
            || self.draw_list.is_none()
    }

    /// Bring the cache up to date with `buffer`, rebuilding only if needed
    pub fn refresh(
        &mut self,
        buffer: &ToolpathBuffer,
        palette: &Palette,
        glyph_half_size: f64,
    ) -> &DrawList {
        if self.needs_update(buffer.revision(), palette, glyph_half_size) {
            debug!(
                "Rebuilding draw list for revision {} ({} events)",
                buffer.revision(),
                buffer.len()
            );
            self.revision = Some(buffer.revision());
            self.palette = *palette;
            self.glyph_half_size = glyph_half_size;
            self.picking = DrawList::picking(buffer);
            self.draw_list = Some(DrawList::build(buffer, palette, glyph_half_size));
        }
        self.draw_list.get_or_insert_with(|| DrawList::build(buffer, palette, glyph_half_size))
    }

    /// Forget the cached data, e.g. when a new program replaces the buffer
    pub fn invalidate(&mut self) {
        self.revision = None;
        self.draw_list = None;
        self.picking.clear();
    }

    pub fn draw_list(&self) -> Option<&DrawList> {
        self.draw_list.as_ref()
    }

    pub fn picking(&self) -> &[SelectionBatch] {
        &self.picking
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolpath::Feed;
    use canonkit_core::{Color, Point3, ToolOffset};

    fn buffer_with_feed() -> ToolpathBuffer {
        let mut buffer = ToolpathBuffer::new();
        buffer.push_feed(Feed {
            line: 1,
            from: Point3::ZERO,
            to: Point3::new(1.0, 0.0, 0.0),
            feed_rate: 1.0,
            tool_offset: ToolOffset::NONE,
        });
        buffer
    }

    #[test]
    fn test_rebuilds_only_on_change() {
        let mut buffer = buffer_with_feed();
        let palette = Palette::default();
        let mut cache = ToolpathCache::new();

        assert!(cache.needs_update(buffer.revision(), &palette, 0.1));
        cache.refresh(&buffer, &palette, 0.1);
        assert!(!cache.needs_update(buffer.revision(), &palette, 0.1));
        assert_eq!(cache.picking().len(), 1);

        buffer.push_feed(Feed {
            line: 2,
            from: Point3::new(1.0, 0.0, 0.0),
            to: Point3::new(2.0, 0.0, 0.0),
            feed_rate: 1.0,
            tool_offset: ToolOffset::NONE,
        });
        assert!(cache.needs_update(buffer.revision(), &palette, 0.1));
        let list = cache.refresh(&buffer, &palette, 0.1);
        assert_eq!(list.strip_count(), 1);
        assert_eq!(cache.picking().len(), 2);
    }

    #[test]
    fn test_palette_change_forces_rebuild() {
        let buffer = buffer_with_feed();
        let mut cache = ToolpathCache::new();
        cache.refresh(&buffer, &Palette::default(), 0.1);

        let palette = Palette {
            straight_feed: Color::rgb(1, 2, 3),
            ..Palette::default()
        };
        assert!(cache.needs_update(buffer.revision(), &palette, 0.1));
        cache.refresh(&buffer, &palette, 0.1);
        let feeds = &cache.draw_list().unwrap().strokes[1];
        assert_eq!(feeds.color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_invalidate() {
        let buffer = buffer_with_feed();
        let mut cache = ToolpathCache::new();
        cache.refresh(&buffer, &Palette::default(), 0.1);
        cache.invalidate();

        assert!(cache.draw_list().is_none());
        assert!(cache.needs_update(buffer.revision(), &Palette::default(), 0.1));
    }
}
