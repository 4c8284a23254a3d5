//! Terminal rendering module.
//!
//! A small rendering layer for the bowling sheet. Views render into a plain
//! framebuffer which the renderer then flushes to the terminal, so everything
//! except [`renderer::TerminalRenderer`] can be tested without a terminal.

pub mod fb;
pub mod renderer;
pub mod sheet_view;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sheet_view::{frame_marks, SheetModel, SheetView, Viewport};
