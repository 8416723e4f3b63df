// src/report.rs
// Human-readable console listing of both groups.

use std::io::{self, Write};

use crate::item::{Item, ScheduledItem};

pub const RELEASED_HEADING: &str = "👟 Released items";
pub const TO_BE_RELEASED_HEADING: &str = "👟 To-be-released items";

fn item_line(item: &Item) -> String {
    let text = if item.raw_release_text.is_empty() { "-" } else { item.raw_release_text.as_str() };
    format!("{} | {} | {}", item.name, item.href, text)
}

pub fn print_groups<W: Write + ?Sized>(
    out: &mut W,
    released: &[Item],
    to_be_released: &[ScheduledItem],
) -> io::Result<()> {
    writeln!(out, "{RELEASED_HEADING} ({})", released.len())?;
    for item in released {
        writeln!(out, "  {}", item_line(item))?;
    }

    writeln!(out, "{TO_BE_RELEASED_HEADING} ({})", to_be_released.len())?;
    for s in to_be_released {
        let date = s.release_date.as_deref().unwrap_or("unresolved");
        writeln!(out, "  {} | releaseDate: {date}", item_line(&s.item))?;
    }
    Ok(())
}
