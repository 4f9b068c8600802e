use backdrop_core::Stroke;
use bevy::prelude::*;

/// A 2D drawing surface in surface coordinates (top-left origin, y down)
pub trait Canvas {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);
    /// Filled circle with an optional outline
    fn fill_circle(
        &mut self,
        center: [f32; 2],
        radius: f32,
        fill: [f32; 4],
        outline: Option<Stroke>,
    );
    /// Straight segment
    fn line(&mut self, from: [f32; 2], to: [f32; 2], stroke: Stroke);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: [f32; 2],
        radius: f32,
        fill: [f32; 4],
        outline: Option<Stroke>,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        stroke: Stroke,
    },
}

/// Draw calls of the latest frame. The render layer presents it;
/// tests inspect it directly.
#[derive(Resource, Debug, Default, Clone)]
pub struct DrawList {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn fill_circle(
        &mut self,
        center: [f32; 2],
        radius: f32,
        fill: [f32; 4],
        outline: Option<Stroke>,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }
}
