use colored::Colorize;

/// Render the message as an underlined title and a green, boxed block with
/// one column of padding and one line of margin around it.
pub fn render_preview(message: &str) -> String {
    let lines: Vec<&str> = message.split('\n').collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = width + 2;
    let margin = " ";

    let mut out = Vec::with_capacity(lines.len() + 7);
    out.push("Commit preview:".underline().to_string());
    out.push(String::new());
    out.push(format!("{margin}┌{}┐", "─".repeat(inner)));
    out.push(format!("{margin}│{}│", " ".repeat(inner)));
    for line in &lines {
        let pad = " ".repeat(width - line.chars().count());
        out.push(format!("{margin}│ {}{pad} │", line.green()));
    }
    out.push(format!("{margin}│{}│", " ".repeat(inner)));
    out.push(format!("{margin}└{}┘", "─".repeat(inner)));
    out.push(String::new());

    out.join("\n")
}
