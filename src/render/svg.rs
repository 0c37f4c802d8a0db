use super::{background, cell_colors, foreground, Layout, CELL, STEP};
use crate::heat::CalendarGrid;
use crate::model::RenderConfig;
use crate::palette::Palette;
use crate::util::{month_ticks, WEEKDAY_LABELS};

const FONT: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_svg(grid: &CalendarGrid, palette: &Palette, config: &RenderConfig) -> String {
    let has_title = !config.title.trim().is_empty();
    let layout = Layout::new(has_title);
    let fg = foreground(config.theme);

    let mut lines = vec![format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT}">"#,
        w = layout.width,
        h = layout.height,
    )];

    if !config.transparent {
        lines.push(format!(
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            background(config.theme)
        ));
    }

    if has_title {
        lines.push(format!(
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="14" font-weight="600" fill="{fg}">{}</text>"#,
            layout.width / 2,
            layout.grid_top - 12,
            escape(&config.title),
        ));
    }

    lines.extend(WEEKDAY_LABELS.iter().enumerate().map(|(row, label)| {
        let (_, y) = layout.cell_origin(row, 0);
        format!(
            r#"  <text x="{}" y="{}" text-anchor="end" font-size="9" fill="{fg}">{label}</text>"#,
            layout.grid_left - 6,
            y + CELL - 3,
        )
    }));

    for (row, cells) in cell_colors(grid, palette).iter().enumerate() {
        for (week, color) in cells.iter().enumerate() {
            let (x, y) = layout.cell_origin(row, week);
            let tooltip = grid
                .day_at(row, week)
                .map(|day| format!("<title>{}: {} commits</title>", day, grid.get(row, week)))
                .unwrap_or_default();
            lines.push(format!(
                r#"  <rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" rx="2" fill="{color}">{tooltip}</rect>"#,
            ));
        }
    }

    let label_y = layout.grid_top + 7 * STEP + 12;
    lines.extend(month_ticks(config.start).into_iter().map(|(week, month)| {
        let (x, _) = layout.cell_origin(0, week);
        format!(
            r#"  <text x="{x}" y="{label_y}" font-size="9" fill="{fg}">{}</text>"#,
            escape(&month),
        )
    }));

    lines.push("</svg>\n".to_string());
    lines.join("\n")
}
