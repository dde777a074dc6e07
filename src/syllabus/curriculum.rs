//! The course content rendered into the syllabus.
//!
//! Everything here is plain text except [`MetaRow`], whose cells are paragraph
//! markup so labels can be set in bold. The built-in six-week course is
//! [`Syllabus::default`]; an edited copy can be loaded from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllabus {
    pub title: String,
    pub subtitle: String,
    pub next_batch: String,
    pub contact: String,
    pub audience: Vec<String>,
    pub meta: Vec<MetaRow>,
    pub weeks: Vec<Week>,
    pub projects: ProjectsSummary,
    pub differentiators: Vec<Differentiator>,
}

/// One row of the two-column course facts table. Both cells are markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRow {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub title: String,
    pub subtitle: String,
    pub live: Vec<String>,
    /// shown in the project label, e.g. "Choose one:"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_intro: Option<String>,
    pub project: Vec<String>,
    pub portfolio: String,
}

impl Week {
    pub fn project_label(&self) -> String {
        match &self.project_intro {
            Some(intro) => format!("Project ({intro})"),
            None => "Project:".to_string(),
        }
    }

    pub fn portfolio_line(&self) -> String {
        format!("Portfolio outcome: {}", self.portfolio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsSummary {
    pub intro: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Differentiator {
    pub title: String,
    pub description: String,
}

impl Syllabus {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Syllabus> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse curriculum {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).with_context(|| "Failed to serialise curriculum as TOML")
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn week(
    title: &str,
    subtitle: &str,
    live: &[&str],
    project_intro: Option<&str>,
    project: &[&str],
    portfolio: &str,
) -> Week {
    Week {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        live: strings(live),
        project_intro: project_intro.map(ToString::to_string),
        project: strings(project),
        portfolio: portfolio.to_string(),
    }
}

impl Default for Syllabus {
    fn default() -> Self {
        let meta = [
            (
                "<b>Duration:</b> 6 weeks",
                "<b>Format:</b> Live sessions (not recorded)",
            ),
            (
                "<b>Effort:</b> 24 live hours + 24 project hours (~8 hrs/week)",
                "<b>Prerequisites:</b> Basic Python knowledge",
            ),
            (
                "<b>Ideal for:</b> Final-year students &amp; working professionals adding AI skills",
                "<b>Next Batch:</b> April 2026",
            ),
        ]
        .into_iter()
        .map(|(left, right)| MetaRow {
            left: left.to_string(),
            right: right.to_string(),
        })
        .collect();

        let weeks = vec![
            week(
                "WEEK 1: How LLMs Actually Work (4 hrs)",
                "The conceptual spine",
                &[
                    "Transformers, attention, tokenization (intuitive, not math-heavy)",
                    "Inference parameters: temperature, top-p, system prompts, context windows",
                    "Live demo showing how parameters change outputs",
                ],
                None,
                &[
                    "Structured prompt experiments - same task, varying parameters",
                    "Document what changed and why",
                ],
                "Understanding of how LLMs work at a product-decision level.",
            ),
            week(
                "WEEK 2: Working with APIs & Embeddings (4 hrs)",
                "The engineering foundation",
                &[
                    "OpenAI/Anthropic API fundamentals (auth, rate limits, cost management, structured outputs)",
                    "Embeddings and vector similarity search",
                    "Build a semantic search engine live",
                ],
                None,
                &["Build a personal knowledge base from 20-30 documents with simple query interface"],
                "Foundation for Week 4's RAG system.",
            ),
            week(
                "WEEK 3: Prompt Engineering as a Discipline (4 hrs)",
                "What separates good AI engineers from great ones",
                &[
                    "Chain-of-thought, few-shot learning, structured outputs (JSON/XML)",
                    "Prompt injection risks and defenses",
                    "Introduction to evaluation - how do you know if prompts work?",
                ],
                None,
                &[
                    "Design and evaluate a prompt pipeline",
                    "Write 3 variants, build a 10-example eval set, score them systematically",
                ],
                "Evaluation discipline that companies actually want.",
            ),
            week(
                "WEEK 4: Building a RAG Pipeline (4 hrs)",
                "Most in-demand pattern in production",
                &[
                    "Full RAG architecture - ingestion, chunking strategy, embedding, retrieval, reranking, generation",
                    "Chunking tradeoffs, why naive RAG fails, handling hallucination",
                    "Build working RAG chatbot live",
                ],
                None,
                &["Extend Week 2's knowledge base into a full RAG chatbot with UI (Streamlit/Gradio)"],
                "Portfolio piece #1 - deployed RAG system you can demo.",
            ),
            week(
                "WEEK 5: Building Agents from First Principles (4 hrs)",
                "Understanding agents before using frameworks",
                &[
                    "Agent anatomy - ReAct loop, tool calling with native APIs, memory types",
                    "Multi-step reasoning, failure modes, prompt engineering for agents",
                ],
                None,
                &["Build a research agent with 3+ tools that searches, synthesizes, and saves output"],
                "Working agent from scratch with clear understanding of the loop.",
            ),
            week(
                "WEEK 6: Agent Frameworks & Production Patterns (4 hrs)",
                "When and how to use frameworks",
                &[
                    "LangGraph - state machines, rebuild Week 5 agent in framework",
                    "Multi-agent patterns (delegation, collaboration, supervision)",
                    "Ecosystem tour (LangChain/CrewAI/MCP)",
                    "Production considerations: cost control, latency, observability, safety",
                ],
                Some("Choose one:"),
                &[
                    "Option A: Migrate to LangGraph with state management",
                    "Option B: Build multi-agent system (researcher + writer)",
                    "Option C: Real integration (GitHub/Notion/Slack agent)",
                ],
                "Portfolio piece #2 - production-grade agent with framework.",
            ),
        ];

        let projects = ProjectsSummary {
            intro: "You graduate with two deployed, demo-ready projects - not notebooks."
                .to_string(),
            projects: vec![
                Project {
                    title: "1. RAG Chatbot with Custom Knowledge Base".to_string(),
                    description: "Ingest documents, chunk, embed, retrieve, generate answers. Deployed with a web interface (Streamlit/Gradio).".to_string(),
                },
                Project {
                    title: "2. AI Agent with Tool Orchestration".to_string(),
                    description: "Agent that can search the web, call APIs, and take actions on its own. Deployed and demo-ready for interviews.".to_string(),
                },
            ],
        };

        let differentiators = [
            (
                "First principles, not just frameworks",
                "You understand WHY things work, not just how to call them.",
            ),
            (
                "Explain and defend your work",
                "You graduate able to explain your architecture and defend your design decisions in interviews.",
            ),
            (
                "Live sessions, not recordings",
                "Direct instructor access with real-time Q&A and feedback.",
            ),
            (
                "Deployed projects",
                "Live projects you can demo in interviews, not notebooks on your laptop.",
            ),
            (
                "Cumulative learning",
                "Each week builds on the last - Week 2's knowledge base becomes Week 4's RAG system.",
            ),
        ]
        .into_iter()
        .map(|(title, description)| Differentiator {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect();

        Syllabus {
            title: "AI Engineering & Agentic Foundations".to_string(),
            subtitle: "Build production-ready AI agents in 6 weeks".to_string(),
            next_batch: "Next Batch: April 2026".to_string(),
            contact: "gradtensor.com  |  wa.me/919108030542".to_string(),
            audience: strings(&[
                "Final-year students who need an AI edge in campus interviews",
                "Working professionals adding agentic AI skills quickly",
                "Anyone who needs to build and demo AI systems fast",
            ]),
            meta,
            weeks,
            projects,
            differentiators,
        }
    }
}
