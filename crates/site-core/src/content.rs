//! Static portfolio content. Loaded once at build time; the rendering
//! layer reads it and never mutates it.

/// Bento-grid footprint of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    Normal,
    Wide,
    Tall,
}

/// Accent color pair for a card's badge and hover border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub gradient: Gradient,
    pub span: Span,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "travelio-ai",
        title: "Travelio AI",
        description: "AI-powered travel planning platform with personalized itineraries and real-time recommendations.",
        tech_stack: &["Next.js", "OpenAI", "Supabase", "Tailwind"],
        gradient: Gradient {
            from: "#8b5cf6",
            to: "#d946ef",
        },
        span: Span::Wide,
    },
    Project {
        id: "documind-rag",
        title: "DocuMind RAG",
        description: "Intelligent document analysis using Retrieval-Augmented Generation for enterprise knowledge bases.",
        tech_stack: &["Python", "LangChain", "Pinecone", "FastAPI"],
        gradient: Gradient {
            from: "#22d3ee",
            to: "#6366f1",
        },
        span: Span::Normal,
    },
    Project {
        id: "yolo11-detection",
        title: "YOLO11 Detection",
        description: "Real-time object detection system for manufacturing quality control with 99.2% accuracy.",
        tech_stack: &["Python", "YOLO11", "OpenCV", "TensorRT"],
        gradient: Gradient {
            from: "#34d399",
            to: "#14b8a6",
        },
        span: Span::Tall,
    },
    Project {
        id: "retail-pos",
        title: "Retail POS Systems",
        description: "Modern point-of-sale solutions with inventory management and analytics dashboard.",
        tech_stack: &["Electron", "React", "PostgreSQL", "Node.js"],
        gradient: Gradient {
            from: "#fb923c",
            to: "#facc15",
        },
        span: Span::Normal,
    },
];
