use crate::ui::theme::{theme, Tone};
use crate::ui::Icons;
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::DNA, text.style(theme().style(Tone::Heading)));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().style(Tone::Ready)));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().style(Tone::Problem)));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().style(Tone::Caution)));
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().style(Tone::Heading)));
}
