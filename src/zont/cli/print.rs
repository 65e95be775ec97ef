use colored::Colorize;
use zont::convert::Conversion;
use zont::present;

/// Source cyan, target green, day-shift note dimmed. Matches the plain
/// layout of [`present::format_conversion`].
pub(super) fn render(conv: &Conversion) -> String {
    let source = format!(
        "{} {}",
        present::clock12(&conv.source_local),
        conv.from.label()
    );
    let target = format!(
        "{} {}",
        present::clock12(&conv.target_local),
        conv.to.label()
    );

    match present::day_note(conv.day_offset) {
        Some(note) => format!("{} → {} {}", source.cyan(), target.green(), note.dimmed()),
        None => format!("{} → {}", source.cyan(), target.green()),
    }
}

pub(super) fn print_conversion(conv: &Conversion) {
    println!("{}", render(conv));
}
