//! Static glyph lookup for the garden's plant iconography.
//!
//! Each icon carries the vector markup a pixel front-end would inline
//! (with trivial `{size}`/`{color}` substitution) and the single-cell
//! symbol the terminal front-end uses. An unknown name is a recoverable
//! lookup miss: logged, empty output, never a crash.

struct IconDef {
    name: &'static str,
    symbol: &'static str,
    markup: &'static str,
}

const ICONS: &[IconDef] = &[
    IconDef {
        name: "bloom",
        symbol: "@",
        markup: r##"<svg viewBox="0 0 24 24" width="{size}" height="{size}"><circle cx="12" cy="12" r="9" fill="{color}"/><circle cx="12" cy="12" r="4" fill="#fadc78"/></svg>"##,
    },
    IconDef {
        name: "wilt",
        symbol: "o",
        markup: r##"<svg viewBox="0 0 24 24" width="{size}" height="{size}"><ellipse cx="12" cy="12" rx="9" ry="4" transform="rotate(28 12 12)" fill="{color}"/></svg>"##,
    },
    IconDef {
        name: "stem",
        symbol: "|",
        markup: r##"<svg viewBox="0 0 24 24" width="{size}" height="{size}"><path d="M12 22 Q 13 12 14 4" stroke="{color}" fill="none" stroke-width="2"/></svg>"##,
    },
    IconDef {
        name: "seedling",
        symbol: ",",
        markup: r##"<svg viewBox="0 0 24 24" width="{size}" height="{size}"><path d="M12 22 Q 12 16 8 14 M12 22 Q 12 16 16 14" stroke="{color}" fill="none" stroke-width="2"/></svg>"##,
    },
];

fn lookup(name: &str) -> Option<&'static IconDef> {
    let icon = ICONS.iter().find(|icon| icon.name == name);
    if icon.is_none() {
        tracing::warn!(name, "unknown glyph requested");
    }
    icon
}

/// Vector markup for `name` with size and color substituted, or empty
/// markup on a lookup miss.
pub fn glyph_markup(name: &str, size: u32, color: &str) -> String {
    match lookup(name) {
        Some(icon) => icon
            .markup
            .replace("{size}", &size.to_string())
            .replace("{color}", color),
        None => String::new(),
    }
}

/// Single-cell terminal stand-in for `name`, or an empty string on a miss.
pub fn glyph_symbol(name: &str) -> &'static str {
    lookup(name).map(|icon| icon.symbol).unwrap_or_default()
}
