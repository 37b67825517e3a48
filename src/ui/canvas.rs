use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, Vec2, epaint::TextShape};

use crate::chart::scene::{Anchor, Baseline, Label, Mark, Scene};
use crate::color::Rgb;

// ---------------------------------------------------------------------------
// Scene painter
// ---------------------------------------------------------------------------

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Paint a scene into a region of its own fixed size.
pub fn paint_scene(ui: &mut Ui, scene: &Scene) {
    let size = Vec2::new(scene.width as f32, scene.height as f32);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    painter.rect_filled(response.rect, 0.0, Color32::WHITE);

    let origin = response.rect.min + Vec2::new(scene.origin.0 as f32, scene.origin.1 as f32);
    let at = |x: f64, y: f64| origin + Vec2::new(x as f32, y as f32);

    for mark in &scene.marks {
        match mark {
            Mark::Circle { cx, cy, r, fill } => {
                painter.circle_filled(at(*cx, *cy), *r as f32, color32(*fill));
            }
            Mark::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let rect = egui::Rect::from_min_size(at(*x, *y), Vec2::new(*width as f32, *height as f32));
                painter.rect_filled(rect, 0.0, color32(*fill));
                if let Some(stroke) = stroke {
                    let corners = vec![rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
                    painter.add(egui::Shape::closed_line(corners, Stroke::new(1.0, color32(*stroke))));
                }
            }
            Mark::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => {
                painter.line_segment([at(*x1, *y1), at(*x2, *y2)], Stroke::new(1.0, color32(*stroke)));
            }
            Mark::Text(label) => paint_label(&painter, origin, label),
        }
    }

    if let Some(pointer) = response.hover_pos() {
        paint_readout(&painter, response.rect.min, origin, scene, pointer);
    }
}

/// Data values under the pointer, in the canvas's top-left corner.
fn paint_readout(painter: &egui::Painter, corner: Pos2, origin: Pos2, scene: &Scene, pointer: Pos2) {
    let at = pointer - origin;
    let (px, py) = (at.x as f64, at.y as f64);
    let (w, h) = scene.inner;
    if !(0.0..=w).contains(&px) || !(0.0..=h).contains(&py) {
        return;
    }
    if let Some(text) = scene.readout.describe(px, py) {
        painter.text(
            corner + Vec2::new(4.0, 4.0),
            Align2::LEFT_TOP,
            text,
            FontId::monospace(11.0),
            Color32::DARK_GRAY,
        );
    }
}

/// Place the galley so that its anchor point lands on the label position,
/// then turn it about its top-left corner by the label's rotation.
fn paint_label(painter: &egui::Painter, origin: Pos2, label: &Label) {
    let color = color32(label.fill);
    let galley = painter.layout_no_wrap(label.text.clone(), FontId::proportional(label.size as f32), color);
    let size = galley.size();

    let ax = match label.anchor {
        Anchor::Start => 0.0,
        Anchor::Middle => 0.5,
        Anchor::End => 1.0,
    };
    let ay = match label.baseline {
        Baseline::Hanging => 0.0,
        Baseline::Middle => 0.5,
        Baseline::Alphabetic => 0.8,
    };
    let offset = Vec2::new(-size.x * ax, -size.y * ay);
    let angle = label.rotation.to_radians() as f32;
    let (sin, cos) = angle.sin_cos();
    let turned = Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos);

    let (x, y) = label.position();
    let pos = origin + Vec2::new(x as f32, y as f32) + turned;
    painter.add(TextShape::new(pos, galley, color).with_angle(angle));
}
