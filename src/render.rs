// vim: set ai et ts=4 sw=4 sts=4:
use ansi_term::{Colour, Style};

use crate::city::City;
use crate::rect::Rect;
use crate::region::Label;
use crate::util::maybe_color;

// terminal palette indices cycled through per building
const PALETTE: [u8; 8] = [1, 2, 3, 4, 5, 6, 9, 13];

/// Render the whole city: a top-down roof plan followed by every occupied
/// floor, bottom up. Colors are keyed per label; pass `emit_color = false`
/// for plain text (piped output, tests).
pub fn render_city<L: Label + 'static>(city: &City<L>, emit_color: bool) -> String {
    let g = city.grid_size();
    let whole = Rect::new(0, 0, g, g);
    let mut labels: Vec<L> = city.owners(whole).into_iter().collect();
    labels.sort_by_key(|label| label.to_string());

    let mut result = String::from("Roof plan:\n");
    result.push_str(&render_roof(city, &labels, emit_color));
    for floor in 0..g {
        if city.floor_owners(floor, whole).is_empty() {
            continue;
        }
        result.push_str(&format!("Floor {}:\n", floor));
        result.push_str(&render_plane(city, Some(floor), &labels, emit_color));
    }
    result
}

fn label_style<L: Label>(labels: &[L], label: &L) -> Style {
    let position = labels.iter().position(|known| known == label).unwrap_or(0);
    Style::new().fg(Colour::Fixed(PALETTE[position % PALETTE.len()]))
}

// one plane of cells inside a box border; `floor` of None means the roof
// view, showing each cell's topmost occupant
fn render_plane<L: Label + 'static>(city: &City<L>,
                                    floor: Option<usize>,
                                    labels: &[L],
                                    emit_color: bool) -> String {
    let g = city.grid_size();
    let mut result = String::new();
    result.push_str(&format!("\u{2554}{}\u{2557}\n", "\u{2550}".repeat(g * 2)));
    for y in (0..g).rev() {
        result.push_str("\u{2551}");
        for x in 0..g {
            let cell = Rect::new(x, y, x + 1, y + 1);
            let occupant = match floor {
                Some(level) => city.floor_owners(level, cell).into_iter().next(),
                None        => (0..g).rev()
                                     .flat_map(|level| city.floor_owners(level, cell))
                                     .next(),
            };
            match occupant {
                Some(label) => {
                    let text = label.to_string();
                    let initial = text.chars().next().unwrap_or('?');
                    let painted = label_style(labels, &label).paint(format!("{} ", initial));
                    result.push_str(&maybe_color(&painted, emit_color));
                }
                None => result.push_str(". "),
            }
        }
        result.push_str("\u{2551}\n");
    }
    result.push_str(&format!("\u{255A}{}\u{255D}\n", "\u{2550}".repeat(g * 2)));
    result
}

fn render_roof<L: Label + 'static>(city: &City<L>, labels: &[L], emit_color: bool) -> String {
    render_plane(city, None, labels, emit_color)
}
