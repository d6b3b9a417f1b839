//! Terminal UI: theme, icon set, preview deck browser, headless rendering.

pub mod icon;
pub mod preview;
pub mod theme;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::ContentBlock;
use crate::registry::{self, ResolveError};
use crate::ui::theme::ThemePalette;

/// Flatten a buffer into plain text, one string per row, trailing spaces
/// trimmed. Shared by the `render` subcommand and the rendering tests.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            let row: String = (0..area.width)
                .map(|x| buf[(area.x + x, area.y + y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve, mount and render one block into a detached buffer.
pub fn render_block_text(
    block: &ContentBlock,
    theme: &ThemePalette,
    width: u16,
    height: u16,
) -> Result<String, ResolveError> {
    let kind = registry::resolve(&block.template_name)?;
    let mut template = registry::build(kind, &block.payload);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    template.render(area, &mut buf, theme, None);
    Ok(buffer_text(&buf))
}
