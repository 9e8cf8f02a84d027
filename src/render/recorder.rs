//! Headless renderer that records every call.
//!
//! Used by tests and the CLI to inspect exactly what a drawable emits.

use serde::Serialize;
use std::convert::Infallible;

use super::backend::{DepthFunc, Primitive, Renderer};
use crate::core::{Color, Coord3d};

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum DrawCommand {
    PointSize(f32),
    LineWidth(f32),
    EnableDepthTest(DepthFunc),
    Color(Color),
    Begin(Primitive),
    Vertex(Coord3d),
    End,
    Translate(Coord3d),
    Rotate { angle_deg: f64, axis: Coord3d },
    Scale(Coord3d),
}

/// A begin/end pair with the state active when it was opened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch {
    pub primitive: Primitive,
    pub color: Color,
    /// Point size for `Points`, line width for `LineStrip`
    pub size: f32,
    pub vertices: Vec<Coord3d>,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Vertex(_)))
            .count()
    }

    /// Replay the command log into completed batches
    pub fn batches(&self) -> Vec<Batch> {
        let mut color = Color::default();
        let mut point_size = 1.0;
        let mut line_width = 1.0;
        let mut open: Option<Batch> = None;
        let mut batches = Vec::new();

        for cmd in &self.commands {
            match cmd {
                DrawCommand::Color(c) => color = *c,
                DrawCommand::PointSize(s) => point_size = *s,
                DrawCommand::LineWidth(w) => line_width = *w,
                DrawCommand::Begin(primitive) => {
                    let size = match primitive {
                        Primitive::Points => point_size,
                        Primitive::LineStrip => line_width,
                    };
                    open = Some(Batch {
                        primitive: *primitive,
                        color,
                        size,
                        vertices: Vec::new(),
                    });
                }
                DrawCommand::Vertex(v) => {
                    if let Some(batch) = open.as_mut() {
                        batch.vertices.push(*v);
                    }
                }
                DrawCommand::End => batches.extend(open.take()),
                _ => {}
            }
        }
        batches
    }

    fn record(&mut self, cmd: DrawCommand) -> Result<(), Infallible> {
        self.commands.push(cmd);
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn point_size(&mut self, size: f32) -> Result<(), Self::Error> {
        self.record(DrawCommand::PointSize(size))
    }

    fn line_width(&mut self, width: f32) -> Result<(), Self::Error> {
        self.record(DrawCommand::LineWidth(width))
    }

    fn enable_depth_test(&mut self, func: DepthFunc) -> Result<(), Self::Error> {
        self.record(DrawCommand::EnableDepthTest(func))
    }

    fn color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.record(DrawCommand::Color(color))
    }

    fn begin(&mut self, primitive: Primitive) -> Result<(), Self::Error> {
        self.record(DrawCommand::Begin(primitive))
    }

    fn vertex(&mut self, c: Coord3d) -> Result<(), Self::Error> {
        self.record(DrawCommand::Vertex(c))
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        self.record(DrawCommand::End)
    }

    fn translate(&mut self, offset: Coord3d) -> Result<(), Self::Error> {
        self.record(DrawCommand::Translate(offset))
    }

    fn rotate(&mut self, angle_deg: f64, axis: Coord3d) -> Result<(), Self::Error> {
        self.record(DrawCommand::Rotate { angle_deg, axis })
    }

    fn scale(&mut self, factors: Coord3d) -> Result<(), Self::Error> {
        self.record(DrawCommand::Scale(factors))
    }
}
