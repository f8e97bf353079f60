//! Zeichnet eine `RenderScene` mit dem egui-Painter.

use super::scenery;
use crate::shared::{CarSprite, RenderScene, TrackShape, TrainOptions};
use egui::epaint::CubicBezierShape;
use egui::{Color32, Pos2, Rect, Shape, Stroke};
use glam::Vec2;
use running_train_engine::Tie;

const OUTLINE: Stroke = Stroke {
    width: 1.0,
    color: Color32::BLACK,
};

/// Farbe aus RGBA-Float-Array.
pub fn color(rgba: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Canvas-Koordinaten → Bildschirm (Canvas-Ursprung = linke obere Ecke von `rect`).
fn to_screen(rect: Rect, p: Vec2) -> Pos2 {
    rect.min + egui::vec2(p.x, p.y)
}

/// Rechteck um `center`, um `angle` gedreht, mit lokalen Halbachsen (hx entlang, hy quer).
fn rotated_rect(rect: Rect, center: Vec2, angle: f32, hx: f32, hy: f32) -> Vec<Pos2> {
    let rot = Vec2::from_angle(angle);
    [
        Vec2::new(-hx, -hy),
        Vec2::new(hx, -hy),
        Vec2::new(hx, hy),
        Vec2::new(-hx, hy),
    ]
    .iter()
    .map(|&corner| to_screen(rect, center + rot.rotate(corner)))
    .collect()
}

/// Lokalen Punkt eines Sprites in Bildschirmkoordinaten.
fn local(rect: Rect, center: Vec2, angle: f32, offset: Vec2) -> Pos2 {
    to_screen(rect, center + Vec2::from_angle(angle).rotate(offset))
}

/// Zeichnet die komplette Szene in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: Rect, scene: &RenderScene, options: &TrainOptions) {
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    if scene.scenery {
        paint_scenery(painter, rect);
    }

    match &scene.track {
        Some(TrackShape::Simple { segments }) => paint_simple_track(painter, rect, segments, options),
        Some(TrackShape::Rails { left, right, ties }) => {
            paint_ties(painter, rect, ties, options);
            let stroke = Stroke::new(1.0, color(options.track_color));
            for rail in [left, right] {
                let mut points: Vec<Pos2> = rail.iter().map(|&p| to_screen(rect, p)).collect();
                if let Some(&first) = points.first() {
                    points.push(first);
                }
                painter.add(Shape::line(points, stroke));
            }
        }
        None => {}
    }

    for (i, &p) in scene.control_points.iter().enumerate() {
        let radius = if scene.dragged_point == Some(i) {
            options.point_radius * 1.5
        } else {
            options.point_radius
        };
        painter.circle_filled(to_screen(rect, p), radius, color(options.point_color));
    }

    for car in &scene.cars {
        paint_car(painter, rect, car, scene.smoke, options);
    }
}

fn paint_simple_track(
    painter: &egui::Painter,
    rect: Rect,
    segments: &[[Vec2; 4]],
    options: &TrainOptions,
) {
    let stroke = Stroke::new(1.0, color(options.track_color));
    for seg in segments {
        let points = seg.map(|p| to_screen(rect, p));
        painter.add(CubicBezierShape::from_points_stroke(
            points,
            false,
            Color32::TRANSPARENT,
            stroke,
        ));
    }
}

fn paint_ties(painter: &egui::Painter, rect: Rect, ties: &[Tie], options: &TrainOptions) {
    let fill = color(options.tie_color);
    for tie in ties {
        // Schwelle liegt quer zur Fahrtrichtung
        let corners = rotated_rect(
            rect,
            tie.position,
            tie.heading + std::f32::consts::FRAC_PI_2,
            options.tie_half_length,
            options.tie_half_width,
        );
        painter.add(Shape::convex_polygon(corners, fill, Stroke::NONE));
    }
}

fn paint_car(
    painter: &egui::Painter,
    rect: Rect,
    car: &CarSprite,
    smoke: bool,
    options: &TrainOptions,
) {
    let h = options.car_half_length;
    let w = options.car_half_width;
    let (c, a) = (car.position, car.heading);

    let body = rotated_rect(rect, c, a, h, w);
    painter.add(Shape::convex_polygon(body, color(options.car_color), OUTLINE));

    if smoke {
        painter.circle_filled(
            local(rect, c, a, Vec2::new(-h, 0.0)),
            options.smoke_radius,
            color(options.smoke_color),
        );
    }

    // Räder vorn und hinten
    for x in [1.25 * h, -1.25 * h] {
        let center = local(rect, c, a, Vec2::new(x, 0.0));
        painter.circle(center, 0.25 * h, color(options.car_color), OUTLINE);
    }

    if car.is_locomotive {
        let cab = vec![
            local(rect, c, a, Vec2::new(0.5 * h, 0.0)),
            local(rect, c, a, Vec2::new(-0.25 * h, 0.5 * w)),
            local(rect, c, a, Vec2::new(-0.25 * h, -0.5 * w)),
        ];
        painter.add(Shape::convex_polygon(cab, color(options.cab_color), OUTLINE));
    }
}

fn paint_scenery(painter: &egui::Painter, rect: Rect) {
    let house = scenery::house();
    painter.add(Shape::convex_polygon(
        house.roof.iter().map(|&p| to_screen(rect, p)).collect(),
        Color32::GRAY,
        Stroke::NONE,
    ));
    let brown = Color32::from_rgb(165, 42, 42);
    let screen_rect = |r: [Vec2; 2]| Rect::from_min_max(to_screen(rect, r[0]), to_screen(rect, r[1]));
    painter.rect_filled(screen_rect(house.wall), 0.0, brown);
    for opening in house.openings {
        painter.rect_filled(screen_rect(opening), 0.0, Color32::WHITE);
    }

    let branch = Stroke::new(2.0, Color32::DARK_GREEN);
    for [a, b] in scenery::forest() {
        painter.line_segment([to_screen(rect, a), to_screen(rect, b)], branch);
    }
}
