use std::io::{
    self,
    Write,
};

use crate::core::{
    CardField,
    CardRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Html,
}

impl OutputFormat {
    fn word_separator(&self) -> &'static str {
        match self {
            OutputFormat::Plain => " \u{2014} ",
            OutputFormat::Html => " \u{2013} ",
        }
    }

    fn card_separator(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "\t",
            OutputFormat::Html => "<br><br>",
        }
    }
}

/// Printable lines of one card. Empty fields produce no line.
pub fn card_lines(card: &CardRecord, format: OutputFormat) -> Vec<String> {
    let mut lines = Vec::new();

    let word = card.get(CardField::WordSource);
    if !word.is_empty() {
        let translation = card.get(CardField::WordDestination);
        if translation.is_empty() {
            lines.push(word.to_string());
        } else {
            lines.push(format!("{word}{}{translation}", format.word_separator()));
        }
    }

    let ipa = card.get(CardField::WordSourceIPA);
    if !ipa.is_empty() {
        lines.push(format!("[{ipa}]"));
    }

    for field in [
        CardField::SentenceSource,
        CardField::SentenceDestination,
        CardField::SentenceDestination2,
        CardField::WordSourceMorphologyAI,
    ] {
        let value = card.get(field);
        if !value.is_empty() {
            lines.push(value.to_string());
        }
    }

    if !card.deck_name().is_empty() {
        lines.push(format!("deck:{}", card.deck_name()));
    }

    lines
}

pub fn render<W: Write>(out: &mut W, cards: &[CardRecord], format: OutputFormat) -> io::Result<()> {
    for (i, card) in cards.iter().enumerate() {
        let lines = card_lines(card, format);
        match format {
            OutputFormat::Plain => {
                for line in &lines {
                    writeln!(out, "{line}")?;
                }
            }
            OutputFormat::Html => writeln!(out, "{}", lines.join("<br>\n"))?,
        }

        if i + 1 < cards.len() {
            writeln!(out, "{}", format.card_separator())?;
        }
    }
    out.flush()
}

pub fn render_to_string(cards: &[CardRecord], format: OutputFormat) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(&mut buffer, cards, format);
    String::from_utf8_lossy(&buffer).into_owned()
}
