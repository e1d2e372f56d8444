//! Plain-text page surface.

use reader_core::{ChipView, PageElement, PageSurface, StoryCardView};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    lines: Vec<String>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl PageSurface for TerminalSurface {
    fn set_text(&mut self, element: PageElement, text: &str) {
        self.lines.push(format!("{}: {text}", element.dom_id()));
    }

    fn set_link(&mut self, element: PageElement, href: &str, download: bool) {
        let suffix = if download { " (download)" } else { "" };
        self.lines
            .push(format!("{}: {href}{suffix}", element.dom_id()));
    }

    fn set_frame_source(&mut self, element: PageElement, src: &str) {
        self.lines.push(format!("{}: src={src}", element.dom_id()));
    }

    fn set_chip(&mut self, element: PageElement, chip: &ChipView) {
        let marker = if chip.active { "[x]" } else { "[ ]" };
        let suffix = if chip.disabled { " (disabled)" } else { "" };
        self.lines.push(format!(
            "{}: {marker} {}{suffix}",
            element.dom_id(),
            chip.language.code().to_ascii_uppercase()
        ));
    }

    fn set_cards(&mut self, element: PageElement, cards: &[StoryCardView]) {
        self.lines.push(format!("{}:", element.dom_id()));
        for card in cards {
            let marker = if card.selected { '>' } else { ' ' };
            let mut line = format!("  {marker} {} [{}]", card.title, card.tag);
            if !card.pills.is_empty() {
                line.push_str(" - ");
                line.push_str(&card.pills.join(", "));
            }
            self.lines.push(line);
        }
    }
}
