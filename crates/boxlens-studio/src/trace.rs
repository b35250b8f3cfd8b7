//! Plain-text dump of a draw list, one line per command.

use std::fmt::Write;

use boxlens_engine::coords::Rect;
use boxlens_engine::paint::Color;
use boxlens_engine::scene::{DrawCmd, DrawList};

pub fn format_trace(list: &DrawList) -> String {
    let mut out = String::new();
    for cmd in list {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", line(cmd));
    }
    out
}

fn line(cmd: &DrawCmd) -> String {
    let body = match cmd {
        DrawCmd::Clear(r) => rect(*r),
        DrawCmd::FillRect(c) => format!("{} {}", rect(c.rect), hex(c.color)),
        DrawCmd::StrokeRect(c) => format!("{} {} w={}", rect(c.rect), hex(c.stroke.color), c.stroke.width),
        DrawCmd::StrokePath(c) => {
            let segs: Vec<String> = c
                .segments
                .iter()
                .map(|s| format!("({},{})-({},{})", s.from.x, s.from.y, s.to.x, s.to.y))
                .collect();
            format!("{} w={} [{}]", hex(c.stroke.color), c.stroke.width, segs.join(" "))
        }
        DrawCmd::Text(t) => format!(
            "{:?} at ({}, {}) {} {}",
            t.text,
            t.origin.x,
            t.origin.y,
            t.font.css(),
            hex(t.color)
        ),
    };
    format!("{:<11} {body}", cmd.kind())
}

fn rect(r: Rect) -> String {
    format!("[{} {} {} {}]", r.origin.x, r.origin.y, r.size.x, r.size.y)
}

fn hex(c: Color) -> String {
    let [r, g, b, a] = c.to_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}
