//! Static site content
//!
//! Pages are fixed at build time, like the HTML they stand in for. Geometry
//! (section heights and offsets) is derived from the content so the scroll
//! anchors and the viewport watcher agree with the renderer about where
//! everything lives.

use crate::state::Page;

/// An image block that stays a placeholder until it scrolls into view.
///
/// The placeholder occupies the same rows as the art so loading never shifts
/// the layout below it.
#[derive(Debug, Clone)]
pub struct LazyImage {
    pub alt: &'static str,
    pub art: &'static [&'static str],
    pub loaded: bool,
}

impl LazyImage {
    pub fn new(alt: &'static str, art: &'static [&'static str]) -> Self {
        Self {
            alt,
            art,
            loaded: false,
        }
    }

    pub fn height(&self) -> u16 {
        self.art.len() as u16
    }

    /// One-shot: loading an already-loaded image is a no-op
    pub fn load(&mut self) {
        self.loaded = true;
    }
}

/// One titled block of page content
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static [&'static str],
    pub image: Option<LazyImage>,
    /// Set once the section has scrolled into view; starts hidden (dimmed)
    pub revealed: bool,
}

impl Section {
    pub fn new(heading: &'static str, body: &'static [&'static str]) -> Self {
        Self {
            heading,
            body,
            image: None,
            revealed: false,
        }
    }

    pub fn with_image(mut self, image: LazyImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Rendered height in lines: heading, blank, body, image rows, trailing blank
    pub fn height(&self) -> u16 {
        let image_rows = self.image.as_ref().map(LazyImage::height).unwrap_or(0);
        2 + self.body.len() as u16 + image_rows + 1
    }
}

/// A page's ordered sections
#[derive(Debug, Clone)]
pub struct PageContent {
    pub sections: Vec<Section>,
}

impl PageContent {
    /// Line offset of a section from the top of the page
    pub fn section_offset(&self, index: usize) -> u16 {
        self.sections
            .iter()
            .take(index)
            .map(Section::height)
            .sum()
    }

    /// Line offset of a section's image within the page, if it has one
    pub fn image_offset(&self, index: usize) -> Option<u16> {
        let section = self.sections.get(index)?;
        section.image.as_ref()?;
        // Image rows start after heading, blank line, and body
        Some(self.section_offset(index) + 2 + section.body.len() as u16)
    }

    pub fn total_height(&self) -> u16 {
        self.sections.iter().map(Section::height).sum()
    }

    /// First section anchor strictly below the given offset
    pub fn next_anchor(&self, offset: u16) -> Option<u16> {
        (0..self.sections.len())
            .map(|i| self.section_offset(i))
            .find(|&o| o > offset)
    }

    /// Last section anchor strictly above the given offset
    pub fn prev_anchor(&self, offset: u16) -> Option<u16> {
        (0..self.sections.len())
            .map(|i| self.section_offset(i))
            .take_while(|&o| o < offset)
            .last()
    }
}

/// All pages of the site
#[derive(Debug, Clone)]
pub struct Site {
    pub home: PageContent,
    pub about: PageContent,
    pub contact: PageContent,
}

impl Site {
    pub fn page(&self, page: Page) -> &PageContent {
        match page {
            Page::Home => &self.home,
            Page::About => &self.about,
            Page::Contact => &self.contact,
        }
    }

    pub fn page_mut(&mut self, page: Page) -> &mut PageContent {
        match page {
            Page::Home => &mut self.home,
            Page::About => &mut self.about,
            Page::Contact => &mut self.contact,
        }
    }
}

const WORKBENCH_ART: &[&str] = &[
    r"  ____________________  ",
    r" /  ==  ==  ==  ==    \ ",
    r"|  [####]  [########]  |",
    r"|  [####]  [##]  [##]  |",
    r" \____________________/ ",
    r"     ||          ||     ",
];

const MOUNTAIN_ART: &[&str] = &[
    r"          /\            ",
    r"         /  \    /\     ",
    r"        /    \  /  \    ",
    r"   /\  /      \/    \   ",
    r"__/  \/______________\__",
];

/// The portfolio content the terminal renders
pub fn portfolio() -> Site {
    Site {
        home: PageContent {
            sections: vec![
                Section::new(
                    "Hi, I'm Marlo Quint",
                    &[
                        "Systems programmer and occasional woodworker.",
                        "I build small, sturdy tools and write about the process.",
                    ],
                ),
                Section::new(
                    "What I do",
                    &[
                        "* Command-line tools that respect your terminal",
                        "* Embedded firmware for things with too few pins",
                        "* Long-form notes on debugging stories",
                    ],
                ),
                Section::new(
                    "Selected work",
                    &[
                        "plank - a zero-config static site generator",
                        "hinge - a serial-port multiplexer for bench work",
                    ],
                )
                .with_image(LazyImage::new("the workbench", WORKBENCH_ART)),
            ],
        },
        about: PageContent {
            sections: vec![
                Section::new(
                    "Background",
                    &[
                        "A decade of making computers do slightly unusual things,",
                        "split between firmware shops and one ill-advised startup.",
                    ],
                ),
                Section::new(
                    "Skills",
                    &[
                        "Rust, C, and the parts of shell scripting best left unspoken.",
                        "Schematic reading, oscilloscope archaeology, patient debugging.",
                    ],
                ),
                Section::new(
                    "Beyond work",
                    &["Mostly hills. Sometimes the hills have radios on them."],
                )
                .with_image(LazyImage::new("hills with radios", MOUNTAIN_ART)),
            ],
        },
        contact: PageContent {
            sections: vec![Section::new(
                "Get in touch",
                &[
                    "Questions, project ideas, or radio coordinates welcome.",
                    "Fill in the form below and I'll get back to you.",
                ],
            )],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod section {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_height_counts_heading_body_and_spacing() {
            let section = Section::new("Heading", &["one", "two"]);
            // heading + blank + 2 body + trailing blank
            assert_eq!(section.height(), 5);
        }

        #[test]
        fn test_height_includes_image_rows() {
            let section = Section::new("Heading", &["one"])
                .with_image(LazyImage::new("art", &["a", "b", "c"]));
            assert_eq!(section.height(), 4 + 3);
        }

        #[test]
        fn test_sections_start_unrevealed() {
            assert!(!Section::new("Heading", &[]).revealed);
        }
    }

    mod lazy_image {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_unloaded() {
            let image = LazyImage::new("art", &["row"]);
            assert!(!image.loaded);
        }

        #[test]
        fn test_load_is_idempotent() {
            let mut image = LazyImage::new("art", &["row"]);
            image.load();
            image.load();
            assert!(image.loaded);
        }
    }

    mod page_content {
        use super::*;
        use pretty_assertions::assert_eq;

        fn page() -> PageContent {
            PageContent {
                sections: vec![
                    Section::new("First", &["a"]),            // height 4, offset 0
                    Section::new("Second", &["b", "c"]),      // height 5, offset 4
                    Section::new("Third", &[])                // offset 9
                        .with_image(LazyImage::new("x", &["i", "j"])),
                ],
            }
        }

        #[test]
        fn test_section_offsets_accumulate_heights() {
            let page = page();
            assert_eq!(page.section_offset(0), 0);
            assert_eq!(page.section_offset(1), 4);
            assert_eq!(page.section_offset(2), 9);
        }

        #[test]
        fn test_image_offset_lands_after_body() {
            let page = page();
            assert_eq!(page.image_offset(0), None);
            // Third section: offset 9 + heading + blank + 0 body lines
            assert_eq!(page.image_offset(2), Some(11));
        }

        #[test]
        fn test_total_height() {
            let page = page();
            assert_eq!(page.total_height(), 4 + 5 + 5);
        }

        #[test]
        fn test_next_anchor_skips_current() {
            let page = page();
            assert_eq!(page.next_anchor(0), Some(4));
            assert_eq!(page.next_anchor(4), Some(9));
            assert_eq!(page.next_anchor(9), None);
        }

        #[test]
        fn test_prev_anchor() {
            let page = page();
            assert_eq!(page.prev_anchor(9), Some(4));
            assert_eq!(page.prev_anchor(1), Some(0));
            assert_eq!(page.prev_anchor(0), None);
        }
    }

    mod portfolio {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_page_has_sections() {
            let site = portfolio();
            assert!(!site.home.sections.is_empty());
            assert!(!site.about.sections.is_empty());
            assert!(!site.contact.sections.is_empty());
        }

        #[test]
        fn test_image_art_rows_are_uniform_width() {
            let site = portfolio();
            for page in [&site.home, &site.about, &site.contact] {
                for section in &page.sections {
                    if let Some(image) = &section.image {
                        let width = image.art[0].chars().count();
                        assert!(image.art.iter().all(|r| r.chars().count() == width));
                    }
                }
            }
        }
    }
}
