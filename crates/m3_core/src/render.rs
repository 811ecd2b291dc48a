//! Paint recording.
//!
//! [`PaintRecorder`] is a [`PaintBackend`] that stores what widgets draw
//! instead of rasterizing it. Hosts replay the commands on a GPU backend;
//! tests assert on them directly.

use crate::backend::PaintBackend;
use crate::color::Color;
use crate::error::UiResult;
use crate::geometry::Rect;
use crate::text::FontHandle;

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Text run.
    Text {
        /// Font used.
        font: FontHandle,
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Baseline Y position.
        y: f32,
        /// Text color.
        color: Color,
    },
}

/// Collects paint commands for one frame.
#[derive(Debug, Default)]
pub struct PaintRecorder {
    /// All commands from the frame.
    commands: Vec<PaintCommand>,
}

impl PaintRecorder {
    /// Creates a new recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Ends the frame, handing over the recorded commands.
    pub fn end_frame(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded rectangles, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color, f32)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Rect {
                bounds,
                color,
                corner_radius,
            } => Some((*bounds, *color, *corner_radius)),
            PaintCommand::Text { .. } => None,
        })
    }

    /// Recorded text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Text {
                text, x, y, color, ..
            } => Some((text.as_str(), *x, *y, *color)),
            PaintCommand::Rect { .. } => None,
        })
    }

    /// Expands recorded rectangles into two triangles each.
    ///
    /// Corner radii are ignored; rounded corners are a fragment-shader job.
    #[must_use]
    pub fn rect_vertices(&self) -> Vec<PaintVertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for (bounds, color, _) in self.rects() {
            let color = [color.r, color.g, color.b, color.a];
            let (l, t, r, b) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
            vertices.extend_from_slice(&[
                PaintVertex::new(l, t, color),
                PaintVertex::new(r, t, color),
                PaintVertex::new(l, b, color),
                PaintVertex::new(r, t, color),
                PaintVertex::new(r, b, color),
                PaintVertex::new(l, b, color),
            ]);
        }
        vertices
    }
}

impl PaintBackend for PaintRecorder {
    fn draw_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) -> UiResult<()> {
        self.commands.push(PaintCommand::Rect {
            bounds: rect,
            color,
            corner_radius,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: FontHandle,
        text: &str,
        x: f32,
        y: f32,
        color: Color,
    ) -> UiResult<()> {
        self.commands.push(PaintCommand::Text {
            font,
            text: text.to_owned(),
            x,
            y,
            color,
        });
        Ok(())
    }
}

/// Vertex for solid-fill rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PaintVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl PaintVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Views a vertex slice as raw bytes for upload.
    #[must_use]
    pub fn as_bytes(vertices: &[Self]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_frame() {
        let mut recorder = PaintRecorder::new();

        recorder.begin_frame();
        recorder
            .draw_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE, 0.0)
            .unwrap();
        recorder
            .draw_text(FontHandle::new(1, 1), "Home", 4.0, 20.0, Color::BLACK)
            .unwrap();

        assert_eq!(recorder.rects().count(), 1);
        assert_eq!(recorder.texts().next().map(|t| t.0), Some("Home"));

        let commands = recorder.end_frame();
        assert_eq!(commands.len(), 2);
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_rect_vertices() {
        let mut recorder = PaintRecorder::new();
        recorder
            .draw_rect(Rect::new(10.0, 20.0, 30.0, 40.0), Color::BLACK, 4.0)
            .unwrap();

        let vertices = recorder.rect_vertices();
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[4].position, [40.0, 60.0]);
        assert_eq!(PaintVertex::as_bytes(&vertices).len(), 6 * 24);
    }
}
