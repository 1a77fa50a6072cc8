use crate::error::Result;
use crate::pipeline::Layout;
use serde_json::{Value, json};
use std::io::Write;

/// Serialize a keyed layout as `{ size, available, items: [...], lines: [...], stats }`.
/// Item frames use `{x, y, w, h}` objects so the output stays readable by generic tooling.
pub fn to_json<K: ToString>(layout: &Layout<K>) -> Value {
    let items: Vec<Value> = layout
        .items
        .iter()
        .map(|p| {
            json!({
                "key": p.key.to_string(),
                "frame": {"x": p.frame.x, "y": p.frame.y, "w": p.frame.w, "h": p.frame.h},
                "line": p.line,
            })
        })
        .collect();
    let lines: Vec<Value> = layout
        .lines
        .iter()
        .map(|l| {
            json!({
                "first": l.first,
                "count": l.count,
                "offset": l.offset,
                "thickness": l.thickness,
                "extent": l.extent,
            })
        })
        .collect();
    json!({
        "size": {"w": layout.size.w, "h": layout.size.h},
        "available": {"w": layout.available.w, "h": layout.available.h},
        "items": items,
        "lines": lines,
        "stats": layout.stats(),
    })
}

/// Writes [`to_json`] pretty-printed to `writer`.
pub fn write_json<K: ToString, W: Write>(layout: &Layout<K>, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &to_json(layout))?;
    writer.write_all(b"\n")?;
    Ok(())
}
