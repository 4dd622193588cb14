//! Cursor-based vertical flow across pages.
//!
//! A `Flow` owns the document under construction and one cursor per region.
//! Every drawing step reads the cursor, pushes ops, and advances it by the
//! height consumed. Regions paginate independently: the sidebar of a
//! two-column page can spill onto page 2 while the main column is still on
//! page 1, and whichever region reaches a page first creates it.

use crate::document::{Document, DrawOp, PageSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Main,
    Sidebar,
}

/// Vertical limits of a region. `top` is where the cursor resets after a
/// page break; content must not start a line below `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub top: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub y: f32,
}

/// Ops painted beneath content when a page is created.
#[derive(Debug, Clone, Default)]
pub struct Decoration {
    /// Page 1 only (e.g. a header band).
    pub first_page: Vec<DrawOp>,
    /// Every page (e.g. a full-height sidebar band).
    pub every_page: Vec<DrawOp>,
    /// Pages after the first.
    pub continuation: Vec<DrawOp>,
}

pub struct Flow {
    doc: Document,
    main: (Frame, Cursor),
    sidebar: (Frame, Cursor),
    decoration: Decoration,
}

impl Flow {
    pub fn new(page_size: PageSize, main: Frame, sidebar: Frame, decoration: Decoration) -> Self {
        let mut doc = Document::new(page_size);
        for op in decoration.first_page.iter().chain(&decoration.every_page) {
            doc.push(0, op.clone());
        }
        Self {
            doc,
            main: (main, Cursor { page: 0, y: main.top }),
            sidebar: (sidebar, Cursor { page: 0, y: sidebar.top }),
            decoration,
        }
    }

    fn slot(&self, region: Region) -> &(Frame, Cursor) {
        match region {
            Region::Main => &self.main,
            Region::Sidebar => &self.sidebar,
        }
    }

    fn slot_mut(&mut self, region: Region) -> &mut (Frame, Cursor) {
        match region {
            Region::Main => &mut self.main,
            Region::Sidebar => &mut self.sidebar,
        }
    }

    pub fn cursor(&self, region: Region) -> Cursor {
        self.slot(region).1
    }

    pub fn y(&self, region: Region) -> f32 {
        self.slot(region).1.y
    }

    pub fn set_y(&mut self, region: Region, y: f32) {
        self.slot_mut(region).1.y = y;
    }

    pub fn advance(&mut self, region: Region, dy: f32) {
        self.slot_mut(region).1.y += dy;
    }

    /// Millimetres left above the bottom limit of `region`.
    pub fn remaining(&self, region: Region) -> f32 {
        let (frame, cursor) = self.slot(region);
        frame.bottom - cursor.y
    }

    /// Starts a new page for `region` if `needed` more millimetres would cross
    /// its bottom limit. Returns true when a break happened.
    pub fn ensure_space(&mut self, region: Region, needed: f32) -> bool {
        let (frame, cursor) = *self.slot(region);
        if cursor.y + needed > frame.bottom {
            self.next_page(region);
            true
        } else {
            false
        }
    }

    /// Moves `region` to the top of its next page, creating and decorating
    /// the page if no other region got there first.
    pub fn next_page(&mut self, region: Region) {
        let next = self.slot(region).1.page + 1;
        while self.doc.page_count() <= next {
            let index = self.doc.add_page();
            for op in self
                .decoration
                .every_page
                .iter()
                .chain(&self.decoration.continuation)
            {
                self.doc.push(index, op.clone());
            }
        }
        let slot = self.slot_mut(region);
        slot.1 = Cursor {
            page: next,
            y: slot.0.top,
        };
    }

    /// Pushes onto the page `region` is currently on.
    pub fn push(&mut self, region: Region, op: DrawOp) {
        let page = self.slot(region).1.page;
        self.doc.push(page, op);
    }

    pub fn page_count(&self) -> usize {
        self.doc.page_count()
    }

    pub fn finish(self) -> Document {
        self.doc
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Rgb;

    const FRAME: Frame = Frame {
        top: 20.0,
        bottom: 270.0,
    };

    fn band(x: f32) -> DrawOp {
        DrawOp::Rect {
            x,
            y: 0.0,
            w: 10.0,
            h: 297.0,
            radius: 0.0,
            fill: Some(Rgb(30, 41, 59)),
            stroke: None,
        }
    }

    #[test]
    fn test_ensure_space_breaks_only_on_overflow() {
        let mut flow = Flow::new(PageSize::A4, FRAME, FRAME, Decoration::default());
        flow.set_y(Region::Main, 250.0);
        assert!(!flow.ensure_space(Region::Main, 20.0));
        assert_eq!(flow.page_count(), 1);
        assert!(flow.ensure_space(Region::Main, 20.1));
        assert_eq!(flow.cursor(Region::Main), Cursor { page: 1, y: 20.0 });
        assert_eq!(flow.page_count(), 2);
    }

    #[test]
    fn test_remaining_resets_after_break() {
        let mut flow = Flow::new(PageSize::A4, FRAME, FRAME, Decoration::default());
        assert_eq!(flow.remaining(Region::Main), 250.0);
        flow.advance(Region::Main, 240.0);
        assert_eq!(flow.remaining(Region::Main), 10.0);
        assert_eq!(flow.remaining(Region::Sidebar), 250.0);
        flow.ensure_space(Region::Main, 12.0);
        assert_eq!(flow.remaining(Region::Main), 250.0);
    }

    #[test]
    fn test_decoration_is_painted_on_new_pages() {
        let decoration = Decoration {
            first_page: vec![band(100.0)],
            every_page: vec![band(0.0)],
            continuation: vec![band(200.0)],
        };
        let mut flow = Flow::new(PageSize::A4, FRAME, FRAME, decoration);
        flow.next_page(Region::Main);
        let doc = flow.finish();
        assert_eq!(doc.pages()[0].ops(), &[band(100.0), band(0.0)]);
        assert_eq!(doc.pages()[1].ops(), &[band(0.0), band(200.0)]);
    }

    #[test]
    fn test_regions_paginate_independently() {
        let mut flow = Flow::new(PageSize::A4, FRAME, FRAME, Decoration::default());
        flow.set_y(Region::Sidebar, 265.0);
        flow.ensure_space(Region::Sidebar, 10.0);
        assert_eq!(flow.cursor(Region::Sidebar).page, 1);
        assert_eq!(flow.cursor(Region::Main).page, 0);

        // Main reaching page 2 later reuses the page the sidebar created.
        flow.next_page(Region::Main);
        assert_eq!(flow.page_count(), 2);
        flow.push(Region::Main, band(0.0));
        flow.push(Region::Sidebar, band(5.0));
        let doc = flow.finish();
        assert_eq!(doc.pages()[1].ops().len(), 2);
    }
}
