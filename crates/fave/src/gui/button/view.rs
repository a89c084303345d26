use super::glyphs::GlyphCache;
use cairo::Context;
use fave_core::button::ButtonFrame;
use fave_core::geometry::Point;
use fave_core::glyph::Shape;
use fave_core::layers::{Dot, RingFrame, SparkFrame};
use fave_core::{Color, Glyph};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

const STAR_POINTS: usize = 5;
const STAR_INNER_RATIO: f64 = 0.4;

pub fn draw(cr: &Context, frame: &ButtonFrame, glyphs: &GlyphCache) -> Result<(), cairo::Error> {
    draw_icon(cr, frame, glyphs)?;
    if let Some(ring) = &frame.ring {
        draw_ring(cr, ring)?;
    }
    for spark in &frame.sparks {
        draw_spark(cr, spark)?;
    }
    Ok(())
}

fn set_color(cr: &Context, color: Color) {
    let (r, g, b, a) = Srgba::<f64>::from(color).into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn draw_icon(cr: &Context, frame: &ButtonFrame, glyphs: &GlyphCache) -> Result<(), cairo::Error> {
    let icon = &frame.icon;
    let size = frame.icon_size * icon.scale;
    if size <= 0.0 {
        return Ok(());
    }

    // icon space: unit box centered on the button
    cr.save()?;
    cr.translate(frame.center.x, frame.center.y);
    cr.scale(size, size);
    set_color(cr, icon.tint);

    match icon.glyph {
        Glyph::Shape(shape) => fill_shape(cr, *shape)?,
        glyph => match glyphs.get(glyph) {
            Some(pixbuf) => mask_pixbuf(cr, pixbuf, icon.tint)?,
            None => fill_shape(cr, Shape::Heart)?,
        },
    }
    cr.restore()
}

fn fill_shape(cr: &Context, shape: Shape) -> Result<(), cairo::Error> {
    cr.new_path();
    match shape {
        Shape::Heart => trace_heart(cr),
        Shape::Star => trace_star(cr),
    }
    cr.fill()
}

fn trace_heart(cr: &Context) {
    cr.move_to(0.0, 0.4);
    cr.curve_to(-0.1, 0.3, -0.5, 0.05, -0.5, -0.15);
    cr.curve_to(-0.5, -0.35, -0.35, -0.45, -0.22, -0.45);
    cr.curve_to(-0.1, -0.45, -0.02, -0.38, 0.0, -0.3);
    cr.curve_to(0.02, -0.38, 0.1, -0.45, 0.22, -0.45);
    cr.curve_to(0.35, -0.45, 0.5, -0.35, 0.5, -0.15);
    cr.curve_to(0.5, 0.05, 0.1, 0.3, 0.0, 0.4);
    cr.close_path();
}

fn trace_star(cr: &Context) {
    let step = 180.0 / STAR_POINTS as f64;
    for i in 0..STAR_POINTS * 2 {
        let radius = if i % 2 == 0 { 0.5 } else { 0.5 * STAR_INNER_RATIO };
        let p = Point::default().polar(radius, -90.0 + step * i as f64);
        if i == 0 {
            cr.move_to(p.x, p.y);
        } else {
            cr.line_to(p.x, p.y);
        }
    }
    cr.close_path();
}

/// Use the image's alpha as a stencil for the tint.
fn mask_pixbuf(cr: &Context, pixbuf: &Pixbuf, tint: Color) -> Result<(), cairo::Error> {
    let (w, h) = (pixbuf.width() as f64, pixbuf.height() as f64);
    let fit = 1.0 / w.max(h);
    cr.scale(fit, fit);
    cr.translate(-w / 2.0, -h / 2.0);

    cr.push_group();
    cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
    cr.paint()?;
    let stencil = cr.pop_group()?;

    set_color(cr, tint);
    cr.mask(&stencil)
}

fn draw_ring(cr: &Context, ring: &RingFrame) -> Result<(), cairo::Error> {
    if ring.radius <= 0.0 || ring.line_width <= 0.0 {
        return Ok(());
    }
    set_color(cr, ring.color);
    cr.set_line_width(ring.line_width);
    cr.new_path();
    cr.arc(ring.center.x, ring.center.y, ring.radius, 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_spark(cr: &Context, spark: &SparkFrame) -> Result<(), cairo::Error> {
    if spark.opacity <= 0.0 {
        return Ok(());
    }
    cr.push_group();
    fill_dot(cr, &spark.first)?;
    fill_dot(cr, &spark.second)?;
    cr.pop_group_to_source()?;
    cr.paint_with_alpha(spark.opacity)
}

fn fill_dot(cr: &Context, dot: &Dot) -> Result<(), cairo::Error> {
    if dot.radius <= 0.0 {
        return Ok(());
    }
    set_color(cr, dot.color);
    cr.new_path();
    cr.arc(dot.center.x, dot.center.y, dot.radius, 0.0, 2.0 * PI);
    cr.fill()
}
