//! Draw list generation for the playfield

use glam::Vec2;

use crate::sim::{Bounds, Canvas, Color, ShapeKind};

/// Font family used for all text
pub const FONT_FAMILY: &str = "Forte, cursive";

/// A single drawing operation, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole playfield
    Clear { color: Color, size: Vec2 },
    Oval {
        center: Vec2,
        radii: Vec2,
        fill: Color,
        outline: Option<Color>,
    },
    Rect {
        bounds: Bounds,
        fill: Color,
        outline: Option<Color>,
    },
    /// Text centered on `pos`
    Text {
        pos: Vec2,
        text: String,
        size: u32,
        color: Color,
    },
}

/// Build the commands for one frame: background, then shapes bottom to top
pub fn draw_list(canvas: &Canvas) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(canvas.len() + 1);
    commands.push(DrawCommand::Clear {
        color: canvas.background(),
        size: Vec2::new(canvas.width(), canvas.height()),
    });

    for (_, shape) in canvas.shapes() {
        let command = match &shape.kind {
            ShapeKind::Oval => DrawCommand::Oval {
                center: shape.bounds.center(),
                radii: shape.bounds.size() / 2.0,
                fill: shape.fill,
                outline: shape.outline,
            },
            ShapeKind::Rect => DrawCommand::Rect {
                bounds: shape.bounds,
                fill: shape.fill,
                outline: shape.outline,
            },
            ShapeKind::Text { text, size } => DrawCommand::Text {
                pos: shape.bounds.center(),
                text: text.clone(),
                size: *size,
                color: shape.fill,
            },
        };
        commands.push(command);
    }

    commands
}

/// CSS font string for a text size
pub fn font(size: u32) -> String {
    format!("{}px {}", size, FONT_FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Game, level_color};

    #[test]
    fn test_background_first_then_stacking_order() {
        let mut canvas = Canvas::new(100.0, 50.0, Color(0xD6D1F5));
        canvas.create_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        canvas.create_oval(Bounds::new(10.0, 10.0, 30.0, 20.0), Color::WHITE);
        canvas.create_text(Vec2::new(50.0, 25.0), "hi", 15);

        let commands = draw_list(&canvas);
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                color: Color(0xD6D1F5),
                size: Vec2::new(100.0, 50.0)
            }
        );
        assert!(matches!(commands[1], DrawCommand::Rect { .. }));
        assert_eq!(
            commands[2],
            DrawCommand::Oval {
                center: Vec2::new(20.0, 15.0),
                radii: Vec2::new(10.0, 5.0),
                fill: Color::WHITE,
                outline: Some(Color::BLACK),
            }
        );
        assert!(matches!(&commands[3], DrawCommand::Text { text, size: 15, .. } if text == "hi"));
    }

    #[test]
    fn test_new_game_frame() {
        let game = Game::new(Settings::default()).unwrap();
        let commands = draw_list(&game.canvas);

        assert!(matches!(
            commands[0],
            DrawCommand::Clear { color, .. } if color == level_color(1)
        ));
        let texts: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec!["Lives: 3  Score: 0", "Level 1 - Press Space to start"]
        );

        let rects = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 1 + game.brick_count(), "paddle plus bricks");
    }

    #[test]
    fn test_font() {
        assert_eq!(font(40), "40px Forte, cursive");
    }
}
