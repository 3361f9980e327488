//! Static informational pages.

use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct AgentDescription {
    name: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct FeaturesPage {
    agents: &'static [AgentDescription],
}

#[derive(Debug, Serialize)]
struct AboutPage {
    name: &'static str,
    tagline: &'static str,
    version: &'static str,
    paragraphs: &'static [&'static str],
}

const AGENTS: &[AgentDescription] = &[
    AgentDescription {
        name: "Visual Forensics",
        description: "Inspects frames for facial manipulation, warping and lighting mismatches.",
    },
    AgentDescription {
        name: "Audio Analysis",
        description: "Listens for synthetic voice patterns, cloning artifacts and unnatural frequency shifts.",
    },
    AgentDescription {
        name: "Metadata",
        description: "Examines file headers, EXIF data and compression signatures for traces of editing.",
    },
    AgentDescription {
        name: "Consistency",
        description: "Checks synchronization across modalities and the logical flow of content over time.",
    },
    AgentDescription {
        name: "Explainability",
        description: "Condenses the other agents' findings into a verdict and a plain-language summary.",
    },
];

const ABOUT: AboutPage = AboutPage {
    name: "MAYAVIHIN",
    tagline: "Free from illusion",
    version: env!("CARGO_PKG_VERSION"),
    paragraphs: &[
        "MAYAVIHIN (Sanskrit for \"free from illusion\") is a forensic tool for telling \
         authentic media apart from deepfakes.",
        "Each file is judged by five specialized agents. Their findings on visual detail, \
         audio fingerprints, metadata and physical consistency are combined into one verdict \
         with a confidence score and an explanation you can read.",
        "The judgment itself is made by Google's Gemini multimodal models. History and the \
         activity log stay on this machine.",
    ],
};

pub fn features(flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_features());
            Ok(())
        }
        format => output(&FeaturesPage { agents: AGENTS }, format),
    }
}

pub fn about(flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_about());
            Ok(())
        }
        format => output(&ABOUT, format),
    }
}

fn render_features() -> String {
    let mut lines = vec![String::from("AI Analysis Agents"), String::new()];
    for agent in AGENTS {
        lines.push(format!("  {}", agent.name));
        lines.push(format!("    {}", agent.description));
    }
    lines.join("\n")
}

fn render_about() -> String {
    let mut lines = vec![
        format!("About {} v{}", ABOUT.name, ABOUT.version),
        ABOUT.tagline.to_string(),
    ];
    for paragraph in ABOUT.paragraphs {
        lines.push(String::new());
        lines.push((*paragraph).to_string());
    }
    lines.join("\n")
}
