//! # Tutorial Content
//!
//! Four fixed pages shown in the Tutorials panel, and a cursor that moves
//! between them without ever leaving `1..=4`.

use serde::Serialize;

/// One page of the getting-started tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TutorialPage {
    /// Position label, e.g. "1/4"
    pub index_label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static PAGES: [TutorialPage; 4] = [
    TutorialPage {
        index_label: "1/4",
        title: "Welcome to\nBICCA Studio",
        body: "BICCA Studio has a lot of features to offer. In the next few minutes, \
you'll learn how to use BICCA Studio efficiently, from setting up and managing projects, \
to navigating the user interface. This tutorial will guide you through essential features, \
including customization options, shortcuts, and export capabilities, ensuring a seamless \
workflow. Whether you're a beginner or an advanced user, this guide will help you unlock \
the full potential of BICCA Studio and enhance your productivity.",
    },
    TutorialPage {
        index_label: "2/4",
        title: "Welcome to\nBICCA Studio",
        body: "The Project General Information page is the foundation of your project setup, \
allowing you to input essential details for accurate documentation and streamlined \
management. Here, you will provide key information starting with the Company Name, which \
represents the organization behind the project. Next is the Project Title, a concise name \
that defines the scope of work. The Project Description further elaborates on the \
objectives and purpose of the project. Additionally, you will need to enter the Name of \
the Valuer responsible for the valuation, along with the Job Number for easy reference. \
The Client field identifies the primary stakeholder of the project, while the Country \
specifies the project's geographical location. Finally, the Base Year establishes a \
reference period for analysis and reports.",
    },
    TutorialPage {
        index_label: "3/4",
        title: "Understanding\nInput Parameters",
        body: "Input Parameters are crucial for accurate analysis and results. This section \
allows you to define various technical specifications, economic factors, and operational \
variables that will influence your project outcomes. You can specify factors such as time \
periods, growth rates, discount rates, and other numerical inputs that the software will \
use for calculations. Each parameter can be customized according to your specific \
requirements, ensuring that the analysis reflects real-world conditions accurately. The \
intuitive interface makes it easy to adjust these parameters as needed, and you can save \
different parameter sets for future use or comparisons.",
    },
    TutorialPage {
        index_label: "4/4",
        title: "Working with\nOutputs",
        body: "The Outputs section displays the results of your analysis based on the \
information and parameters you've entered. Here you can view comprehensive reports, \
charts, and visualizations that present your data in meaningful ways. You can customize \
the output format according to your preferences or your client's requirements. BICCA \
Studio allows you to export these outputs in various formats including PDF, Excel, or as \
image files for easy sharing and presentation. Additionally, you can compare different \
scenarios by adjusting your inputs and generating new outputs, providing valuable insights \
for decision-making processes.",
    },
];

/// 1-based cursor over [`PAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialCursor {
    current_page: usize,
}

impl Default for TutorialCursor {
    fn default() -> Self {
        TutorialCursor { current_page: 1 }
    }
}

impl TutorialCursor {
    pub fn new() -> Self {
        TutorialCursor::default()
    }

    pub fn total_pages(&self) -> usize {
        PAGES.len()
    }

    /// Current 1-based page number
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Advance one page. Returns false (and does nothing) on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false (and does nothing) on the first page.
    pub fn back(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn render(&self) -> &'static TutorialPage {
        &PAGES[self.current_page - 1]
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_page() {
        let cursor = TutorialCursor::new();
        assert_eq!(cursor.current_page(), 1);
        assert_eq!(cursor.render().index_label, "1/4");
        assert!(cursor.is_first());
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut cursor = TutorialCursor::new();
        for _ in 0..4 {
            cursor.next();
        }
        assert_eq!(cursor.current_page(), 4);
        assert!(!cursor.next());
        assert_eq!(cursor.current_page(), 4);
        assert_eq!(cursor.render().title, "Working with\nOutputs");
        assert!(cursor.is_last());
    }

    #[test]
    fn test_back_at_first_page_is_noop() {
        let mut cursor = TutorialCursor::new();
        assert!(!cursor.back());
        assert_eq!(cursor.current_page(), 1);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cursor = TutorialCursor::new();
        // Deterministic walk mixing both directions
        let moves = [true, true, false, true, true, true, true, false, false, false, false, false, true];
        for forward in moves {
            if forward {
                cursor.next();
            } else {
                cursor.back();
            }
            assert!((1..=4).contains(&cursor.current_page()));
            assert_eq!(cursor.render().index_label, PAGES[cursor.current_page() - 1].index_label);
        }
    }

    #[test]
    fn test_page_labels_match_positions() {
        for (i, page) in PAGES.iter().enumerate() {
            assert_eq!(page.index_label, format!("{}/4", i + 1));
        }
    }
}
