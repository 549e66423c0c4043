//! HTML 2D canvas painter (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::draw::{DrawCommand, font};

/// Paint a frame's commands onto a 2D context
pub fn paint(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) -> Result<(), JsValue> {
    ctx.set_line_width(1.0);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for command in commands {
        match command {
            DrawCommand::Clear { color, size } => {
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            DrawCommand::Rect {
                bounds,
                fill,
                outline,
            } => {
                let (x0, y0, x1, y1) = bounds.as_tuple();
                let (x, y, w, h) = (x0 as f64, y0 as f64, (x1 - x0) as f64, (y1 - y0) as f64);
                ctx.set_fill_style_str(&fill.css());
                ctx.fill_rect(x, y, w, h);
                if let Some(outline) = outline {
                    ctx.set_stroke_style_str(&outline.css());
                    ctx.stroke_rect(x, y, w, h);
                }
            }
            DrawCommand::Oval {
                center,
                radii,
                fill,
                outline,
            } => {
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    0.0,
                    0.0,
                    TAU,
                )?;
                ctx.set_fill_style_str(&fill.css());
                ctx.fill();
                if let Some(outline) = outline {
                    ctx.set_stroke_style_str(&outline.css());
                    ctx.stroke();
                }
            }
            DrawCommand::Text {
                pos,
                text,
                size,
                color,
            } => {
                ctx.set_font(&font(*size));
                ctx.set_fill_style_str(&color.css());
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
    }

    Ok(())
}
