//! Static tool catalog and category registry
//!
//! The catalog is the fixed, insertion-ordered collection of tool definitions
//! the application offers. It is defined once as const data and never mutated
//! at runtime; navigation and the HTTP listing endpoint only ever read it.

use serde::{Deserialize, Serialize};

/// Tool category, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Image,
    Document,
    Calculator,
    Text,
    Developer,
    Color,
    Utility,
}

impl Category {
    /// All categories, in sidebar display order
    pub const ALL: [Category; 7] = [
        Category::Image,
        Category::Document,
        Category::Calculator,
        Category::Text,
        Category::Developer,
        Category::Color,
        Category::Utility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Image => "Image",
            Category::Document => "Document",
            Category::Calculator => "Calculator",
            Category::Text => "Text",
            Category::Developer => "Developer",
            Category::Color => "Color",
            Category::Utility => "Utility",
        }
    }

    /// Parse a category name, case-insensitively
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    /// Display metadata for this category
    pub fn info(&self) -> &'static CategoryInfo {
        &CATEGORIES[*self as usize]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub title: &'static str,
    /// Icon token consumed by the frontend icon set
    pub icon: &'static str,
    /// Accent color class for the frontend
    pub color: &'static str,
}

/// Category display metadata, indexed by `Category as usize`
pub static CATEGORIES: [CategoryInfo; 7] = [
    CategoryInfo {
        id: Category::Image,
        title: "Image Tools",
        icon: "image",
        color: "text-purple-500",
    },
    CategoryInfo {
        id: Category::Document,
        title: "Document Tools",
        icon: "file-text",
        color: "text-blue-500",
    },
    CategoryInfo {
        id: Category::Calculator,
        title: "Calculators",
        icon: "calculator",
        color: "text-orange-500",
    },
    CategoryInfo {
        id: Category::Text,
        title: "Text Tools",
        icon: "type",
        color: "text-emerald-500",
    },
    CategoryInfo {
        id: Category::Developer,
        title: "Developer Tools",
        icon: "code",
        color: "text-rose-500",
    },
    CategoryInfo {
        id: Category::Color,
        title: "Color Tools",
        icon: "palette",
        color: "text-pink-500",
    },
    CategoryInfo {
        id: Category::Utility,
        title: "Utilities",
        icon: "wrench",
        color: "text-cyan-500",
    },
];

/// Where a tool's transformation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Pure computation implemented natively in [`crate::tools`]
    Native,
    /// Runs client-side against canvas/file APIs; the server only lists it
    Browser,
}

/// A single tool definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub kind: ToolKind,
}

/// The full catalog, in dashboard display order
pub static TOOLS: [Tool; 23] = [
    // Image tools
    Tool {
        id: "img-conv",
        name: "Image Converter",
        description: "Convert images between PNG, JPG, and WebP formats.",
        category: Category::Image,
        kind: ToolKind::Browser,
    },
    Tool {
        id: "img-comp",
        name: "Image Compressor",
        description: "Reduce image file size while maintaining visual quality.",
        category: Category::Image,
        kind: ToolKind::Browser,
    },
    Tool {
        id: "img-resize",
        name: "Image Resizer",
        description: "Change the dimensions of your images easily.",
        category: Category::Image,
        kind: ToolKind::Browser,
    },
    Tool {
        id: "img-crop",
        name: "Image Cropper",
        description: "Crop images to specific aspect ratios or custom sizes.",
        category: Category::Image,
        kind: ToolKind::Browser,
    },
    Tool {
        id: "img-ocr",
        name: "Image to Text (OCR)",
        description: "Extract text from images using optical character recognition.",
        category: Category::Image,
        kind: ToolKind::Browser,
    },
    // Document tools
    Tool {
        id: "doc-pdf-word",
        name: "PDF to Word",
        description: "Convert PDF documents to editable Word files.",
        category: Category::Document,
        kind: ToolKind::Browser,
    },
    Tool {
        id: "doc-pdf-merge",
        name: "PDF Merger",
        description: "Combine multiple PDF files into a single document.",
        category: Category::Document,
        kind: ToolKind::Browser,
    },
    // Calculator tools
    Tool {
        id: "calc-bmi",
        name: "BMI Calculator",
        description: "Calculate Body Mass Index based on height and weight.",
        category: Category::Calculator,
        kind: ToolKind::Native,
    },
    Tool {
        id: "calc-age",
        name: "Age Calculator",
        description: "Find out exactly how old you are in years, months, and days.",
        category: Category::Calculator,
        kind: ToolKind::Native,
    },
    Tool {
        id: "calc-loan",
        name: "Loan EMI Calculator",
        description: "Calculate monthly installments for your loans.",
        category: Category::Calculator,
        kind: ToolKind::Native,
    },
    // Text tools
    Tool {
        id: "txt-case",
        name: "Case Converter",
        description: "Change text to UPPERCASE, lowercase, Title Case, etc.",
        category: Category::Text,
        kind: ToolKind::Native,
    },
    Tool {
        id: "txt-count",
        name: "Word Counter",
        description: "Detailed statistics for words, characters, and reading time.",
        category: Category::Text,
        kind: ToolKind::Native,
    },
    Tool {
        id: "txt-dup",
        name: "Remove Duplicates",
        description: "Clean up your lists by removing duplicate lines.",
        category: Category::Text,
        kind: ToolKind::Native,
    },
    Tool {
        id: "txt-sort",
        name: "Text Sorter",
        description: "Sort lines of text alphabetically or in reverse.",
        category: Category::Text,
        kind: ToolKind::Native,
    },
    // Developer tools
    Tool {
        id: "dev-json",
        name: "JSON Formatter",
        description: "Prettify, minify, and validate JSON data.",
        category: Category::Developer,
        kind: ToolKind::Native,
    },
    Tool {
        id: "dev-b64",
        name: "Base64 Tool",
        description: "Encode and decode text to/from Base64 format.",
        category: Category::Developer,
        kind: ToolKind::Native,
    },
    Tool {
        id: "dev-url",
        name: "URL Encoder",
        description: "Encode and decode URLs safely for web transmission.",
        category: Category::Developer,
        kind: ToolKind::Native,
    },
    // Color tools
    Tool {
        id: "col-picker",
        name: "Color Picker",
        description: "Interactive color selection with HEX, RGB, and HSL outputs.",
        category: Category::Color,
        kind: ToolKind::Native,
    },
    Tool {
        id: "col-grad",
        name: "Gradient Generator",
        description: "Create beautiful CSS gradients for your projects.",
        category: Category::Color,
        kind: ToolKind::Native,
    },
    // Utility tools
    Tool {
        id: "util-qr",
        name: "QR Code Generator",
        description: "Generate high-quality QR codes for URLs or text.",
        category: Category::Utility,
        kind: ToolKind::Browser,
    },
    Tool {
        id: "util-pass",
        name: "Password Generator",
        description: "Create secure, random passwords with custom rules.",
        category: Category::Utility,
        kind: ToolKind::Native,
    },
    Tool {
        id: "util-uuid",
        name: "UUID Generator",
        description: "Generate universally unique identifiers (v4).",
        category: Category::Utility,
        kind: ToolKind::Native,
    },
    Tool {
        id: "util-unit",
        name: "Unit Converter",
        description: "Convert between length, weight, and temperature units.",
        category: Category::Utility,
        kind: ToolKind::Native,
    },
];

/// The full catalog in insertion order
pub fn catalog() -> &'static [Tool] {
    &TOOLS
}

/// Look up a tool by id
pub fn find_tool(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.id == id)
}

/// Static informational page, a closed set mapped 1:1 to fixed documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticPage {
    Privacy,
    Terms,
    Disclaimer,
    Cookies,
    About,
    Contact,
    Dmca,
}

impl StaticPage {
    pub const ALL: [StaticPage; 7] = [
        StaticPage::Privacy,
        StaticPage::Terms,
        StaticPage::Disclaimer,
        StaticPage::Cookies,
        StaticPage::About,
        StaticPage::Contact,
        StaticPage::Dmca,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StaticPage::Privacy => "privacy",
            StaticPage::Terms => "terms",
            StaticPage::Disclaimer => "disclaimer",
            StaticPage::Cookies => "cookies",
            StaticPage::About => "about",
            StaticPage::Contact => "contact",
            StaticPage::Dmca => "dmca",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StaticPage::Privacy => "Privacy Policy",
            StaticPage::Terms => "Terms & Conditions",
            StaticPage::Disclaimer => "Disclaimer",
            StaticPage::Cookies => "Cookie Policy",
            StaticPage::About => "About Us",
            StaticPage::Contact => "Contact Us",
            StaticPage::Dmca => "DMCA Policy",
        }
    }

    pub fn parse(id: &str) -> Option<StaticPage> {
        StaticPage::ALL.iter().copied().find(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = TOOLS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TOOLS.len());
    }

    #[test]
    fn test_catalog_has_23_tools() {
        assert_eq!(TOOLS.len(), 23);
    }

    #[test]
    fn test_every_category_has_info() {
        for cat in Category::ALL {
            assert_eq!(cat.info().id, cat);
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("image"), Some(Category::Image));
        assert_eq!(Category::parse("IMAGE"), Some(Category::Image));
        assert_eq!(Category::parse("Developer"), Some(Category::Developer));
        assert_eq!(Category::parse("nope"), None);
    }

    #[test]
    fn test_find_tool() {
        let tool = find_tool("doc-pdf-merge").unwrap();
        assert_eq!(tool.name, "PDF Merger");
        assert_eq!(tool.category, Category::Document);
        assert!(find_tool("missing").is_none());
    }

    #[test]
    fn test_static_page_roundtrip() {
        for page in StaticPage::ALL {
            assert_eq!(StaticPage::parse(page.id()), Some(page));
        }
        assert!(StaticPage::parse("help").is_none());
    }

    #[test]
    fn test_category_serializes_as_name() {
        let json = serde_json::to_string(&Category::Image).unwrap();
        assert_eq!(json, r#""Image""#);
    }
}
