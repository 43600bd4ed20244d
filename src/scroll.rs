//! Scrollbar drag handling: thumb geometry and row offsets.

use crate::model::DisplayRow;

/// Rows visible without scrolling.
pub const PAGE_CAPACITY: usize = 23;

/// Content pixels moved per pixel of pointer travel while dragging.
pub const SCROLL_GAIN: i32 = 8;

/// Reference window geometry; the scrollbar track spans the window height at
/// its right edge.
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const SCROLLBAR_WIDTH: i32 = 20;

/// State captured at pointer-down and held for the duration of a drag.
struct Drag {
    /// Pointer offset inside the thumb.
    pick_offset: i32,
    /// Pointer y at pointer-down.
    origin_y: i32,
    /// Every row's y at pointer-down.
    baselines: Vec<i32>,
}

/// Maps pointer drags on the scrollbar thumb to row offsets.
///
/// Two states: idle and dragging. A drag begins on pointer-down inside the
/// thumb, ends on pointer-up, and content never snaps back. While dragging,
/// each row's y is its baseline minus the pointer travel times
/// [`SCROLL_GAIN`]; while the thumb is pinned at either end of the track the
/// content freezes but the drag stays active.
pub struct ScrollController {
    bar_x: i32,
    bar_width: i32,
    track_top: i32,
    track_height: i32,
    thumb_y: i32,
    thumb_height: i32,
    drag: Option<Drag>,
}

impl ScrollController {
    pub fn new(bar_x: i32, bar_width: i32, track_top: i32, track_height: i32) -> Self {
        Self {
            bar_x,
            bar_width,
            track_top,
            track_height,
            thumb_y: track_top,
            thumb_height: track_height,
            drag: None,
        }
    }

    /// Controller for the reference window layout: a right-edge bar spanning
    /// the full height.
    pub fn for_window() -> Self {
        Self::new(
            WINDOW_WIDTH - SCROLLBAR_WIDTH,
            SCROLLBAR_WIDTH,
            0,
            WINDOW_HEIGHT,
        )
    }

    /// Refit the thumb for a listing of `item_count` rows and park it at the
    /// track top. Any active drag is dropped; called on every model rebuild.
    pub fn reset(&mut self, item_count: usize) {
        self.thumb_height = if item_count < PAGE_CAPACITY {
            self.track_height
        } else {
            self.track_height * PAGE_CAPACITY as i32 / item_count as i32
        };
        self.thumb_y = self.track_top;
        self.drag = None;
    }

    fn max_thumb_y(&self) -> i32 {
        self.track_top + self.track_height - self.thumb_height
    }

    /// Thumb rectangle as `(x, y, w, h)` for the renderer.
    pub fn thumb_rect(&self) -> (i32, i32, i32, i32) {
        (self.bar_x, self.thumb_y, self.bar_width, self.thumb_height)
    }

    pub fn thumb_height(&self) -> i32 {
        self.thumb_height
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a window coordinate lies inside the thumb rectangle.
    pub fn hit_thumb(&self, x: i32, y: i32) -> bool {
        x >= self.bar_x
            && x < self.bar_x + self.bar_width
            && y >= self.thumb_y
            && y < self.thumb_y + self.thumb_height
    }

    /// Begin a drag at pointer `(x, y)`; no-op unless the pointer is inside
    /// the thumb. Row positions are snapshotted as the drag baselines.
    ///
    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, x: i32, y: i32, rows: &[DisplayRow]) -> bool {
        if !self.hit_thumb(x, y) {
            return false;
        }
        self.drag = Some(Drag {
            pick_offset: y - self.thumb_y,
            origin_y: y,
            baselines: rows.iter().map(|r| r.y).collect(),
        });
        true
    }

    /// Feed pointer motion into an active drag.
    ///
    /// The thumb follows the pointer minus the pick offset, clamped to the
    /// track. On an update where the clamp engages, row offsets stay exactly
    /// where the previous update left them.
    pub fn pointer_move(&mut self, y: i32, rows: &mut [DisplayRow]) {
        let Some(drag) = &self.drag else { return };

        let unclamped = y - drag.pick_offset;
        let clamped = unclamped.clamp(self.track_top, self.max_thumb_y());
        self.thumb_y = clamped;
        if clamped != unclamped {
            return;
        }

        let delta = (y - drag.origin_y) * SCROLL_GAIN;
        for (row, baseline) in rows.iter_mut().zip(&drag.baselines) {
            row.y = baseline - delta;
        }
    }

    /// End the drag. Content stays where the last motion left it.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::FileKind;
    use std::path::PathBuf;

    fn row(y: i32) -> DisplayRow {
        DisplayRow {
            name: "row".to_string(),
            depth: 0,
            size_text: "-".to_string(),
            permission_text: "---------".to_string(),
            kind: FileKind::Other,
            y,
            path: PathBuf::from("/tmp/row"),
        }
    }

    fn rows(count: usize) -> Vec<DisplayRow> {
        (0..count).map(|i| row(30 + 22 * i as i32)).collect()
    }

    /// Controller with a 600px track starting at y=0, thumb fitted to `n`.
    fn controller(n: usize) -> ScrollController {
        let mut c = ScrollController::new(780, 20, 0, 600);
        c.reset(n);
        c
    }

    #[test]
    fn short_listing_gets_a_full_track_thumb() {
        let c = controller(PAGE_CAPACITY - 1);
        assert_eq!(c.thumb_height(), 600);
    }

    #[test]
    fn thumb_height_is_proportional_to_page_over_items() {
        let c = controller(46);
        assert_eq!(c.thumb_height(), 600 * 23 / 46);
        let c = controller(230);
        assert_eq!(c.thumb_height(), 60);
    }

    #[test]
    fn pointer_down_outside_the_thumb_does_not_drag() {
        let mut c = controller(100);
        let items = rows(100);
        assert!(!c.pointer_down(100, 10, &items));
        assert!(!c.is_dragging());
        // Right x, but below the thumb.
        assert!(!c.pointer_down(790, 500, &items));
    }

    #[test]
    fn drag_moves_rows_by_pointer_travel_times_gain() {
        let mut c = controller(100);
        let mut items = rows(100);
        assert!(c.pointer_down(790, 10, &items));

        c.pointer_move(25, &mut items);
        for (i, r) in items.iter().enumerate() {
            assert_eq!(r.y, 30 + 22 * i as i32 - 15 * SCROLL_GAIN);
        }
    }

    #[test]
    fn thumb_follows_pointer_minus_pick_offset() {
        let mut c = controller(100);
        let mut items = rows(100);
        c.pointer_down(790, 10, &items);
        c.pointer_move(50, &mut items);
        let (_, thumb_y, _, _) = c.thumb_rect();
        assert_eq!(thumb_y, 40);
    }

    #[test]
    fn content_freezes_while_the_thumb_is_pinned() {
        let mut c = controller(100);
        let mut items = rows(100);
        c.pointer_down(790, 10, &items);

        // Drag upward past the track top: thumb clamps at 0.
        c.pointer_move(-50, &mut items);
        let frozen: Vec<i32> = items.iter().map(|r| r.y).collect();
        let (_, thumb_y, _, _) = c.thumb_rect();
        assert_eq!(thumb_y, 0);

        // Pointer keeps moving past the bound: zero row-offset delta.
        c.pointer_move(-200, &mut items);
        let still: Vec<i32> = items.iter().map(|r| r.y).collect();
        assert_eq!(frozen, still);
        assert!(c.is_dragging());
    }

    #[test]
    fn content_resumes_from_baselines_after_a_pin() {
        let mut c = controller(100);
        let mut items = rows(100);
        c.pointer_down(790, 10, &items);

        c.pointer_move(-50, &mut items);
        // Back inside the track: offsets come from the original baselines,
        // not from the frozen positions.
        c.pointer_move(12, &mut items);
        assert_eq!(items[0].y, 30 - 2 * SCROLL_GAIN);
    }

    #[test]
    fn no_snap_back_on_pointer_up() {
        let mut c = controller(100);
        let mut items = rows(100);
        c.pointer_down(790, 10, &items);
        c.pointer_move(40, &mut items);
        let scrolled: Vec<i32> = items.iter().map(|r| r.y).collect();

        c.pointer_up();
        assert!(!c.is_dragging());
        let after: Vec<i32> = items.iter().map(|r| r.y).collect();
        assert_eq!(scrolled, after);

        // Motion without a drag is inert.
        c.pointer_move(300, &mut items);
        let idle: Vec<i32> = items.iter().map(|r| r.y).collect();
        assert_eq!(scrolled, idle);
    }

    #[test]
    fn full_track_thumb_never_scrolls_content() {
        let mut c = controller(5);
        let mut items = rows(5);
        c.pointer_down(790, 10, &items);
        let before: Vec<i32> = items.iter().map(|r| r.y).collect();
        c.pointer_move(100, &mut items);
        let after: Vec<i32> = items.iter().map(|r| r.y).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn reset_parks_the_thumb_and_drops_the_drag() {
        let mut c = controller(100);
        let mut items = rows(100);
        c.pointer_down(790, 10, &items);
        c.pointer_move(200, &mut items);
        c.reset(40);
        assert!(!c.is_dragging());
        let (_, thumb_y, _, _) = c.thumb_rect();
        assert_eq!(thumb_y, 0);
        assert_eq!(c.thumb_height(), 600 * 23 / 40);
    }
}
