//! The hand-authored capstone project catalog
//!
//! Four projects, each a fixed set of phases and steps. Project content is
//! always viewable; prerequisites only drive the status label.

use crate::roadmap::model::ModuleStatus;
use crate::roadmap::project::{
    Project, ProjectDifficulty, ProjectId, ProjectPhase, ProjectStep,
};

fn project(
    id: ProjectId,
    title: &str,
    tagline: &str,
    difficulty: ProjectDifficulty,
    tech_stack: &[&str],
    prerequisites: &[&str],
    phases: Vec<ProjectPhase>,
) -> Project {
    Project {
        id,
        title: title.into(),
        tagline: tagline.into(),
        difficulty,
        tech_stack: tech_stack.iter().map(|s| s.to_string()).collect(),
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        phases,
        completion_percentage: 0,
        status: ModuleStatus::Locked,
    }
}

fn phase(name: &str, duration: &str, steps: Vec<ProjectStep>) -> ProjectPhase {
    ProjectPhase { name: name.into(), duration: duration.into(), steps }
}

/// Build the default project list.
pub fn default_projects() -> Vec<Project> {
    vec![rag_assistant(), agent_orchestrator(), finetune_pipeline(), voice_assistant()]
}

fn rag_assistant() -> Project {
    project(
        ProjectId::RagAssistant,
        "RAG Knowledge Assistant",
        "Answer questions over your own document corpus with cited sources",
        ProjectDifficulty::Advanced,
        &["Python", "Qdrant", "FastAPI", "Anthropic API"],
        &["module-5", "module-6"],
        vec![
            phase("Phase 1: Ingestion", "1 week", vec![
                ProjectStep::new("rag-ingest-loaders", "Phase 1: Ingestion", "module-6",
                    "Document loaders",
                    "Parse PDF, Markdown, and HTML sources into a normalized document model.")
                    .hours(8)
                    .validate(&[
                        "All three formats produce identical downstream records",
                        "Malformed files are skipped with a logged reason",
                    ]),
                ProjectStep::new("rag-ingest-chunking", "Phase 1: Ingestion", "module-6",
                    "Chunking pipeline",
                    "Split documents into overlapping chunks sized for your embedding model.")
                    .hours(6)
                    .validate(&["Chunk boundaries never split mid-sentence", "Overlap is configurable"]),
                ProjectStep::new("rag-ingest-embed", "Phase 1: Ingestion", "module-6",
                    "Embedding and indexing",
                    "Embed chunks and upsert them into a vector store with source metadata.")
                    .hours(6)
                    .validate(&["Re-running ingest is idempotent"]),
            ]),
            phase("Phase 2: Retrieval", "1 week", vec![
                ProjectStep::new("rag-retrieve-search", "Phase 2: Retrieval", "module-6",
                    "Hybrid search",
                    "Combine vector similarity with keyword filtering and tune top-k.")
                    .hours(8)
                    .validate(&["Known-answer queries return the right chunk in the top 3"]),
                ProjectStep::new("rag-retrieve-rerank", "Phase 2: Retrieval", "module-6",
                    "Reranking",
                    "Rerank candidates with a cross-encoder and measure the lift.")
                    .hours(6)
                    .validate(&["Recall@3 improves over raw vector search on your eval set"]),
            ]),
            phase("Phase 3: Answering", "1-2 weeks", vec![
                ProjectStep::new("rag-answer-grounding", "Phase 3: Answering", "module-5",
                    "Grounded generation",
                    "Prompt the model with retrieved context and require inline citations.")
                    .hours(8)
                    .validate(&["Every claim in the answer cites a retrieved chunk"]),
                ProjectStep::new("rag-answer-evals", "Phase 3: Answering", "module-5",
                    "Answer quality evals",
                    "Build a graded eval set and track faithfulness and relevance per release.")
                    .hours(10)
                    .validate(&["Eval harness runs in CI and reports a score"]),
            ]),
        ],
    )
}

fn agent_orchestrator() -> Project {
    project(
        ProjectId::AgentOrchestrator,
        "Multi-Agent Task Orchestrator",
        "Decompose a goal into subtasks and coordinate specialist agents to finish it",
        ProjectDifficulty::Expert,
        &["Python", "Anthropic API", "Redis", "Docker"],
        &["module-5", "module-7"],
        vec![
            phase("Phase 1: Agent Core", "1 week", vec![
                ProjectStep::new("agent-core-loop", "Phase 1: Agent Core", "module-7",
                    "Single-agent loop",
                    "Implement the model-tool-scratchpad loop with bounded iterations.")
                    .hours(10)
                    .validate(&["Loop terminates within the iteration budget on every eval task"]),
                ProjectStep::new("agent-core-tools", "Phase 1: Agent Core", "module-7",
                    "Tool registry",
                    "Define a typed tool registry: schema, validation, and safe execution.")
                    .hours(8)
                    .validate(&["Invalid tool arguments are rejected before execution"]),
            ]),
            phase("Phase 2: Orchestration", "1-2 weeks", vec![
                ProjectStep::new("agent-orch-planner", "Phase 2: Orchestration", "module-7",
                    "Planner agent",
                    "Decompose a user goal into an ordered subtask graph.")
                    .hours(10)
                    .validate(&["Plans are valid DAGs with no orphaned subtasks"]),
                ProjectStep::new("agent-orch-workers", "Phase 2: Orchestration", "module-7",
                    "Worker dispatch",
                    "Route subtasks to specialist agents and collect structured results.")
                    .hours(10)
                    .validate(&["A failed subtask is retried once, then surfaced in the report"]),
                ProjectStep::new("agent-orch-memory", "Phase 2: Orchestration", "module-6",
                    "Shared memory",
                    "Give agents a shared scratchpad with retrieval over prior results.")
                    .hours(8)
                    .validate(&["Workers can cite earlier subtask outputs by reference"]),
            ]),
            phase("Phase 3: Hardening", "1 week", vec![
                ProjectStep::new("agent-hard-guardrails", "Phase 3: Hardening", "module-5",
                    "Guardrails and budgets",
                    "Enforce token, cost, and wall-clock budgets per run.")
                    .hours(6)
                    .validate(&["A runaway task is cancelled at the budget boundary"]),
                ProjectStep::new("agent-hard-trace", "Phase 3: Hardening", "module-8",
                    "Run tracing",
                    "Record every model call and tool invocation for replay and debugging.")
                    .hours(6)
                    .validate(&["A full run can be replayed from its trace"]),
            ]),
        ],
    )
}

fn finetune_pipeline() -> Project {
    project(
        ProjectId::FinetunePipeline,
        "Domain Fine-Tuning Pipeline",
        "Curate a dataset, fine-tune an open model, and prove it beats the base",
        ProjectDifficulty::Expert,
        &["Python", "PyTorch", "Hugging Face", "Weights & Biases"],
        &["module-3", "module-4"],
        vec![
            phase("Phase 1: Data", "1-2 weeks", vec![
                ProjectStep::new("ft-data-curate", "Phase 1: Data", "module-2",
                    "Dataset curation",
                    "Collect, clean, and deduplicate domain examples into train/eval splits.")
                    .hours(12)
                    .validate(&["No eval example appears in the training split"]),
                ProjectStep::new("ft-data-format", "Phase 1: Data", "module-4",
                    "Instruction formatting",
                    "Convert examples to the model's chat template with loss masking.")
                    .hours(6)
                    .validate(&["Spot-checked samples decode to well-formed conversations"]),
            ]),
            phase("Phase 2: Training", "1-2 weeks", vec![
                ProjectStep::new("ft-train-lora", "Phase 2: Training", "module-3",
                    "LoRA fine-tune",
                    "Run parameter-efficient fine-tuning with checkpointing and early stopping.")
                    .hours(12)
                    .snippet("peft.LoraConfig(r=16, lora_alpha=32, target_modules=\"all-linear\")")
                    .validate(&["Training loss curve is logged and converges"]),
                ProjectStep::new("ft-train-sweeps", "Phase 2: Training", "module-3",
                    "Hyperparameter sweeps",
                    "Sweep learning rate and rank; keep the best run by eval loss.")
                    .hours(8)
                    .validate(&["Sweep results are reproducible from logged configs"]),
            ]),
            phase("Phase 3: Evaluation", "1 week", vec![
                ProjectStep::new("ft-eval-benchmarks", "Phase 3: Evaluation", "module-5",
                    "Head-to-head evals",
                    "Compare tuned vs base model on a held-out domain benchmark.")
                    .hours(8)
                    .validate(&["Tuned model wins on the domain metric without regressing general tasks"]),
                ProjectStep::new("ft-eval-serve", "Phase 3: Evaluation", "module-8",
                    "Publish and serve",
                    "Merge adapters, quantize, and serve the model behind an API.")
                    .hours(8)
                    .validate(&["Served model matches offline eval outputs"]),
            ]),
        ],
    )
}

fn voice_assistant() -> Project {
    project(
        ProjectId::VoiceAssistant,
        "Realtime Voice Assistant",
        "Speech in, speech out, under a second of perceived latency",
        ProjectDifficulty::Expert,
        &["Python", "Whisper", "WebRTC", "Anthropic API"],
        &["module-5", "module-9"],
        vec![
            phase("Phase 1: Speech I/O", "1 week", vec![
                ProjectStep::new("voice-io-asr", "Phase 1: Speech I/O", "module-9",
                    "Streaming transcription",
                    "Transcribe microphone input incrementally with word timestamps.")
                    .hours(10)
                    .validate(&["Word error rate is measured against a reference set"]),
                ProjectStep::new("voice-io-tts", "Phase 1: Speech I/O", "module-9",
                    "Low-latency synthesis",
                    "Stream synthesized audio as soon as the first tokens arrive.")
                    .hours(8)
                    .validate(&["First audible audio within 500 ms of response start"]),
            ]),
            phase("Phase 2: Conversation", "1-2 weeks", vec![
                ProjectStep::new("voice-conv-turns", "Phase 2: Conversation", "module-5",
                    "Turn management",
                    "Detect end of speech, handle interruptions, and keep context.")
                    .hours(10)
                    .validate(&["Barge-in cancels synthesis within one audio frame"]),
                ProjectStep::new("voice-conv-tools", "Phase 2: Conversation", "module-7",
                    "Voice tool use",
                    "Let the assistant call tools mid-conversation and speak the results.")
                    .hours(8)
                    .validate(&["A tool round-trip keeps the conversation coherent"]),
            ]),
            phase("Phase 3: Quality", "1 week", vec![
                ProjectStep::new("voice-quality-latency", "Phase 3: Quality", "module-8",
                    "Latency budget",
                    "Instrument each pipeline stage and drive end-to-end latency under target.")
                    .hours(8)
                    .validate(&["p95 end-to-end latency is under one second"]),
                ProjectStep::new("voice-quality-mos", "Phase 3: Quality", "module-9",
                    "Quality metrics",
                    "Track WER, latency, and MOS across releases.")
                    .hours(6)
                    .validate(&["Metrics recorded per release in the progress tracker"]),
            ]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn four_projects_with_unique_step_ids() {
        let projects = default_projects();
        assert_eq!(projects.len(), 4);

        let mut seen = HashSet::new();
        for project in &projects {
            for step in project.steps() {
                assert!(seen.insert(step.id.clone()), "duplicate step id {}", step.id);
                assert!(!step.is_locked);
                assert!(!step.validation_criteria.is_empty(), "{} has no criteria", step.id);
            }
        }
    }

    #[test]
    fn steps_carry_their_phase_name() {
        for project in default_projects() {
            for phase in &project.phases {
                for step in &phase.steps {
                    assert_eq!(step.phase_name, phase.name);
                }
            }
        }
    }

    #[test]
    fn prerequisites_reference_catalog_modules() {
        let module_ids: HashSet<String> =
            crate::catalog::default_modules().iter().map(|m| m.id.clone()).collect();
        for project in default_projects() {
            assert!(!project.prerequisites.is_empty());
            for prereq in &project.prerequisites {
                assert!(module_ids.contains(prereq), "{} references {}", project.id, prereq);
            }
        }
    }

    #[test]
    fn projects_start_locked_and_untouched() {
        for project in default_projects() {
            assert_eq!(project.completion_percentage, 0);
            assert_eq!(project.status, ModuleStatus::Locked);
            assert!(project.total_steps() >= 6);
        }
    }
}
