//! SheetView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use arrayvec::{ArrayString, ArrayVec};

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FRAME_COUNT, MAX_THROWS_PER_FRAME, PINS_PER_FRAME};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the sheet shows besides the snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct SheetModel<'a> {
    pub snapshot: &'a GameSnapshot,
    /// Current contents of the pin-entry field.
    pub entry: &'a str,
    /// Last rejection, shown until the next accepted throw.
    pub message: Option<&'a str>,
}

/// Marks for one frame box: `X` strike, `/` spare, `-` gutter, digits otherwise.
///
/// The final frame re-racks after a strike or spare, so its later throws can
/// be strikes or spares of their own.
pub fn frame_marks(frame_no: u8, throws: &[u8]) -> ArrayVec<char, MAX_THROWS_PER_FRAME> {
    let mut marks = ArrayVec::new();
    let mut rack_start: Option<u8> = None;

    for &pins in throws.iter().take(MAX_THROWS_PER_FRAME) {
        let mark = match rack_start {
            Some(first) if first + pins == PINS_PER_FRAME => '/',
            _ => pin_mark(pins),
        };
        let _ = marks.try_push(mark);

        let rack_done = match rack_start {
            None => pins == PINS_PER_FRAME,
            Some(_) => true,
        };
        rack_start = match rack_start {
            None if !rack_done => Some(pins),
            _ => None,
        };

        if frame_no < FRAME_COUNT && (rack_done || marks.len() == 2) {
            break;
        }
    }
    marks
}

fn pin_mark(pins: u8) -> char {
    match pins {
        0 => '-',
        p if p >= PINS_PER_FRAME => 'X',
        p => char::from(b'0' + p),
    }
}

const BOX_W: u16 = 7;
const BOX_H: u16 = 3;
const SHEET_W: u16 = BOX_W * FRAME_COUNT as u16;

/// A lightweight terminal renderer for the bowling sheet.
pub struct SheetView {
    /// Blank columns left of everything.
    margin: u16,
}

impl Default for SheetView {
    fn default() -> Self {
        Self { margin: 2 }
    }
}

impl SheetView {
    /// Render into an existing framebuffer, resizing it to the viewport first.
    pub fn render_into(&self, model: &SheetModel<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let snap = model.snapshot;
        let x = self.margin;
        let title = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
        let text = CellStyle::plain();
        let label = CellStyle::fg(Rgb::new(120, 200, 240)).bold();

        let mut y = 0;
        let end = fb.put_str(x, y, "BOWLING", title);
        let mut frame_no = ArrayString::<16>::new();
        push_fmt(&mut frame_no, format_args!("frame {}", snap.frame_index()));
        fb.put_str(end + 3, y, &frame_no, text);

        y += 1;
        let mut throws = ArrayString::<32>::new();
        push_fmt(&mut throws, format_args!("throws {:?}", snap.throws()));
        fb.put_str(x, y, &throws, text);

        y += 1;
        if snap.completed() {
            let end = fb.put_str(x, y, snap.state.label(), label);
            fb.put_str(end + 2, y, "(r to restart)", text.dimmed());
        } else {
            fb.put_str(x, y, snap.state.label(), label);
        }

        y += 2;
        if viewport.width >= x + SHEET_W {
            self.draw_sheet(fb, snap, x, y);
            y += BOX_H + 1;
        } else {
            y = self.draw_list(fb, snap, x, y);
        }

        y += 1;
        let end = fb.put_str(x, y, "pins > ", text);
        let end = fb.put_str(end, y, model.entry, title);
        if !snap.completed() {
            fb.put_char(end, y, '_', text.dimmed());
        }

        y += 1;
        if let Some(msg) = model.message {
            let error = CellStyle::fg(Rgb::new(230, 90, 90)).bold();
            let end = fb.put_str(x, y, "! ", error);
            fb.put_str(end, y, msg, error);
        }

        y += 2;
        fb.put_str(
            x,
            y,
            "0-9 type  enter throw  bksp erase  esc clear  r restart  q quit",
            text.dimmed(),
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, model: &SheetModel<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(model, viewport, &mut fb);
        fb
    }

    fn draw_sheet(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let border = CellStyle::fg(Rgb::new(150, 150, 160));
        let active = CellStyle::fg(Rgb::new(240, 220, 80)).bold();
        let marks_style = CellStyle::plain().bold();
        let number = CellStyle::plain().dimmed();

        for n in 1..=FRAME_COUNT {
            let bx = x + (n as u16 - 1) * BOX_W;
            let is_active = !snap.completed() && n == snap.frame_index();

            let mut num = ArrayString::<4>::new();
            push_fmt(&mut num, format_args!("{}", n));
            let num_x = bx + (BOX_W - num.len() as u16) / 2;
            fb.put_str(num_x, y, &num, if is_active { active } else { number });

            fb.draw_box(bx, y + 1, BOX_W, BOX_H, if is_active { active } else { border });

            let marks = frame_marks(n, snap.history.frame(n));
            let inner_w = BOX_W - 2;
            let text_w = (marks.len() as u16 * 2).saturating_sub(1);
            let mut mx = bx + 1 + inner_w.saturating_sub(text_w) / 2;
            for m in marks {
                fb.put_char(mx, y + 2, m, marks_style);
                mx += 2;
            }
        }
    }

    /// Narrow terminals: one line per played frame. Returns the next free row.
    fn draw_list(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) -> u16 {
        let header = CellStyle::plain().bold();
        let text = CellStyle::plain();
        fb.put_str(x, y, "frames", header);

        let mut row = y + 1;
        for (n, throws) in snap.history.played() {
            let mut line = ArrayString::<32>::new();
            push_fmt(&mut line, format_args!("{:>2}. {:?}", n, throws));
            fb.put_str(x, row, &line, text);
            row += 1;
        }
        row
    }
}

fn push_fmt<const N: usize>(out: &mut ArrayString<N>, args: std::fmt::Arguments<'_>) {
    use std::fmt::Write;
    // Output is bounded by the frame model; overflow only truncates.
    let _ = out.write_fmt(args);
}
