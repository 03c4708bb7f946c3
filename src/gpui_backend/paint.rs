use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, Pixels, TextRun, Window, font, point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, RectStyle, RenderCommand, RenderList, TextStyle};
use crate::trace::TraceManager;

/// Paint every tracepoint of a manager into the window.
///
/// Call from the plot element's paint phase, after
/// [`TraceManager::refresh_all_bounds`] has run for the current layout.
pub fn paint_traces(manager: &TraceManager, window: &mut Window, cx: &mut App) {
    let mut list = RenderList::new();
    manager.attach_to(&mut list);
    paint_render_list(&list, window, cx);
}

/// Paint a list of render commands into the window.
pub fn paint_render_list(list: &RenderList, window: &mut Window, cx: &mut App) {
    for command in list.commands() {
        match command {
            RenderCommand::Circle {
                center,
                diameter,
                color,
            } => paint_circle(window, *center, *diameter, *color),
            RenderCommand::Rect { rect, style } => paint_rect(window, *rect, *style),
            RenderCommand::Text {
                position,
                text,
                style,
            } => paint_text(window, cx, *position, text, style),
        }
    }
}

fn paint_circle(window: &mut Window, center: ScreenPoint, diameter: f32, color: Color) {
    let radius = diameter.max(2.0) * 0.5;
    let bounds = Bounds::from_corners(
        point(px(center.x - radius), px(center.y - radius)),
        point(px(center.x + radius), px(center.y + radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_rect(window: &mut Window, rect: ScreenRect, style: RectStyle) {
    window.paint_quad(quad(
        to_bounds(rect),
        Corners::all(px(2.0)),
        to_rgba(style.fill),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let origin = point(px(position.x), px(position.y));
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}
