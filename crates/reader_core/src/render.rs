//! Rendering adapter between a [`ViewModel`] and the page.
//!
//! The page is reached only through [`PageSurface`], so the adapter runs the
//! same way against a browser binding, a terminal, or a test recorder.

use shared::domain::Language;

use crate::view_model::{ChipView, StoryCardView, ViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Reader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    StoryGrid,
    SelectedTitle,
    SelectedSubtitle,
    HeroDownload,
    ReaderTitle,
    OpenInNewTab,
    ReaderDownload,
    PdfFrame,
    LanguageChip(Section, Language),
}

impl PageElement {
    /// Element id in the page markup.
    pub fn dom_id(self) -> &'static str {
        match self {
            PageElement::StoryGrid => "storyGrid",
            PageElement::SelectedTitle => "selectedTitle",
            PageElement::SelectedSubtitle => "selectedSub",
            PageElement::HeroDownload => "downloadPdfBtn",
            PageElement::ReaderTitle => "readerTitleText",
            PageElement::OpenInNewTab => "openInNewTabLink",
            PageElement::ReaderDownload => "downloadInReaderLink",
            PageElement::PdfFrame => "pdfFrame",
            PageElement::LanguageChip(Section::Hero, Language::En) => "heroLangEn",
            PageElement::LanguageChip(Section::Hero, Language::Ar) => "heroLangAr",
            PageElement::LanguageChip(Section::Reader, Language::En) => "readerLangEn",
            PageElement::LanguageChip(Section::Reader, Language::Ar) => "readerLangAr",
        }
    }
}

/// Presentation writes a host must support.
pub trait PageSurface {
    fn set_text(&mut self, element: PageElement, text: &str);
    fn set_link(&mut self, element: PageElement, href: &str, download: bool);
    fn set_frame_source(&mut self, element: PageElement, src: &str);
    fn set_chip(&mut self, element: PageElement, chip: &ChipView);
    fn set_cards(&mut self, element: PageElement, cards: &[StoryCardView]);
}

/// Writes every element from `view`. Nothing is read back from the surface,
/// so a stale earlier snapshot can never leak into the page.
pub fn apply_view_model<P: PageSurface + ?Sized>(view: &ViewModel, surface: &mut P) {
    surface.set_cards(PageElement::StoryGrid, &view.cards);

    surface.set_text(PageElement::SelectedTitle, &view.title);
    surface.set_text(PageElement::SelectedSubtitle, &view.subtitle);
    surface.set_link(PageElement::HeroDownload, &view.resource, true);

    surface.set_text(PageElement::ReaderTitle, &view.title);
    surface.set_link(PageElement::OpenInNewTab, &view.resource, false);
    surface.set_link(PageElement::ReaderDownload, &view.resource, true);
    surface.set_frame_source(PageElement::PdfFrame, &view.resource);

    for (section, toggle) in [(Section::Hero, &view.hero), (Section::Reader, &view.reader)] {
        for language in Language::ALL {
            surface.set_chip(
                PageElement::LanguageChip(section, language),
                toggle.chip(language),
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
