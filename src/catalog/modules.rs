//! The hand-authored module catalog
//!
//! Ten modules forming a fixed prerequisite DAG, from programming foundations
//! through speech AI. Pure data: the progress store deep-copies this on first
//! run and owns every mutable flag afterwards.

use crate::roadmap::model::{
    ChecklistItem, Difficulty, Module, ModuleStatus, Resource, ResourceType,
};

fn module(
    id: &str,
    title: &str,
    short_title: &str,
    description: &str,
    prerequisites: &[&str],
    estimated_days: u32,
    color: &str,
) -> Module {
    let locked = !prerequisites.is_empty();
    Module {
        id: id.into(),
        title: title.into(),
        short_title: short_title.into(),
        description: description.into(),
        status: if locked { ModuleStatus::Locked } else { ModuleStatus::Available },
        is_locked: locked,
        is_completed: false,
        completion_percentage: 0,
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        checklist: Vec::new(),
        resources: Vec::new(),
        estimated_days,
        target_problems: None,
        color: color.into(),
    }
}

/// Build the default module list in curriculum order.
pub fn default_modules() -> Vec<Module> {
    vec![
        foundations(),
        dsa(),
        ml_fundamentals(),
        deep_learning(),
        nlp_transformers(),
        llms(),
        rag(),
        agents(),
        mlops(),
        speech_audio(),
    ]
}

fn foundations() -> Module {
    let mut m = module(
        "module-0",
        "AI Engineering Foundations",
        "Foundations",
        "Python fluency, tooling, and the math you will actually use. Everything \
         downstream assumes this module.",
        &[],
        14,
        "slate",
    );
    m.checklist = vec![
        ChecklistItem::new("m0-env", "module-0", "Set up Python, uv, and a clean editor workflow", "setup")
            .minutes(60)
            .with_resources(&["m0-python-docs"]),
        ChecklistItem::new("m0-python", "module-0", "Work through idiomatic Python: comprehensions, generators, typing", "theory")
            .minutes(240)
            .with_resources(&["m0-python-docs", "m0-fluent-python"]),
        ChecklistItem::new("m0-git", "module-0", "Get comfortable with git branching, rebasing, and review flow", "practice")
            .minutes(120)
            .with_resources(&["m0-missing-semester"]),
        ChecklistItem::new("m0-math", "module-0", "Refresh linear algebra and probability essentials", "theory")
            .minutes(300),
        ChecklistItem::new("m0-capstone", "module-0", "Ship a small CLI tool end to end with tests", "checkpoint")
            .checkpoint()
            .minutes(180),
    ];
    m.resources = vec![
        Resource::new("m0-python-docs", "module-0", ResourceType::Doc, "The Python Tutorial", "https://docs.python.org/3/tutorial/", 180),
        Resource::new("m0-fluent-python", "module-0", ResourceType::Book, "Fluent Python (selected chapters)", "https://www.oreilly.com/library/view/fluent-python-2nd/9781492056348/", 600),
        Resource::new("m0-missing-semester", "module-0", ResourceType::Video, "The Missing Semester: Version Control", "https://missing.csail.mit.edu/2020/version-control/", 80),
    ];
    m
}

fn dsa() -> Module {
    let mut m = module(
        "module-1",
        "Data Structures & Algorithms",
        "DSA",
        "Pattern-based problem solving. The goal is not volume but recognizing \
         which pattern a problem reduces to.",
        &["module-0"],
        45,
        "amber",
    );
    m.target_problems = Some(150);
    m.checklist = vec![
        ChecklistItem::new("m1-arrays", "module-1", "Arrays & hashing: solve the core set", "practice")
            .minutes(480)
            .with_resources(&["m1-two-sum", "m1-group-anagrams"]),
        ChecklistItem::new("m1-two-pointers", "module-1", "Two pointers and sliding window", "practice")
            .minutes(420)
            .with_resources(&["m1-container-water", "m1-min-window"]),
        ChecklistItem::new("m1-trees", "module-1", "Trees: traversal, BSTs, and recursion depth", "practice")
            .minutes(480)
            .with_resources(&["m1-invert-tree", "m1-lca"]),
        ChecklistItem::new("m1-graphs", "module-1", "Graphs: BFS, DFS, topological sort", "practice")
            .minutes(480)
            .with_resources(&["m1-course-schedule"]),
        ChecklistItem::new("m1-dp", "module-1", "Dynamic programming: 1-D and 2-D staples", "practice")
            .minutes(600)
            .with_resources(&["m1-edit-distance"]),
        ChecklistItem::new("m1-mock", "module-1", "Pass a timed mock interview on a fresh problem set", "checkpoint")
            .checkpoint()
            .minutes(90),
    ];
    m.resources = vec![
        Resource::new("m1-neetcode", "module-1", ResourceType::Video, "NeetCode 150 walkthroughs", "https://neetcode.io/", 1200),
        Resource::new("m1-two-sum", "module-1", ResourceType::Leetcode, "Two Sum", "https://leetcode.com/problems/two-sum/", 20)
            .with_difficulty(Difficulty::Easy)
            .with_pattern("Arrays & Hashing"),
        Resource::new("m1-group-anagrams", "module-1", ResourceType::Leetcode, "Group Anagrams", "https://leetcode.com/problems/group-anagrams/", 30)
            .with_difficulty(Difficulty::Medium)
            .with_pattern("Arrays & Hashing"),
        Resource::new("m1-container-water", "module-1", ResourceType::Leetcode, "Container With Most Water", "https://leetcode.com/problems/container-with-most-water/", 30)
            .with_difficulty(Difficulty::Medium)
            .with_pattern("Two Pointers"),
        Resource::new("m1-min-window", "module-1", ResourceType::Leetcode, "Minimum Window Substring", "https://leetcode.com/problems/minimum-window-substring/", 45)
            .with_difficulty(Difficulty::Hard)
            .with_pattern("Sliding Window"),
        Resource::new("m1-invert-tree", "module-1", ResourceType::Leetcode, "Invert Binary Tree", "https://leetcode.com/problems/invert-binary-tree/", 15)
            .with_difficulty(Difficulty::Easy)
            .with_pattern("Trees"),
        Resource::new("m1-lca", "module-1", ResourceType::Leetcode, "Lowest Common Ancestor of a BST", "https://leetcode.com/problems/lowest-common-ancestor-of-a-binary-search-tree/", 25)
            .with_difficulty(Difficulty::Medium)
            .with_pattern("Trees"),
        Resource::new("m1-course-schedule", "module-1", ResourceType::Leetcode, "Course Schedule", "https://leetcode.com/problems/course-schedule/", 35)
            .with_difficulty(Difficulty::Medium)
            .with_pattern("Graphs"),
        Resource::new("m1-edit-distance", "module-1", ResourceType::Leetcode, "Edit Distance", "https://leetcode.com/problems/edit-distance/", 45)
            .with_difficulty(Difficulty::Hard)
            .with_pattern("Dynamic Programming"),
    ];
    m
}

fn ml_fundamentals() -> Module {
    let mut m = module(
        "module-2",
        "Machine Learning Fundamentals",
        "ML Basics",
        "Classical ML end to end: framing, features, models, evaluation. Builds \
         the vocabulary everything deep depends on.",
        &["module-0"],
        30,
        "emerald",
    );
    m.checklist = vec![
        ChecklistItem::new("m2-framing", "module-2", "Problem framing: regression vs classification vs ranking", "theory")
            .minutes(120),
        ChecklistItem::new("m2-sklearn", "module-2", "Train and evaluate models with scikit-learn", "practice")
            .minutes(360)
            .with_resources(&["m2-sklearn-docs"]),
        ChecklistItem::new("m2-eval", "module-2", "Metrics, cross-validation, and leakage pitfalls", "theory")
            .minutes(180)
            .with_resources(&["m2-mlcourse"]),
        ChecklistItem::new("m2-kaggle", "module-2", "Place a submission on a tabular Kaggle competition", "checkpoint")
            .checkpoint()
            .minutes(480),
    ];
    m.resources = vec![
        Resource::new("m2-sklearn-docs", "module-2", ResourceType::Doc, "scikit-learn User Guide", "https://scikit-learn.org/stable/user_guide.html", 300),
        Resource::new("m2-mlcourse", "module-2", ResourceType::Video, "Andrew Ng: Machine Learning Specialization", "https://www.coursera.org/specializations/machine-learning-introduction", 900),
        Resource::new("m2-hands-on", "module-2", ResourceType::Book, "Hands-On Machine Learning, Part I", "https://www.oreilly.com/library/view/hands-on-machine-learning/9781098125967/", 720),
    ];
    m
}

fn deep_learning() -> Module {
    let mut m = module(
        "module-3",
        "Deep Learning with PyTorch",
        "Deep Learning",
        "Tensors, autograd, training loops, and debugging models that refuse to \
         converge.",
        &["module-2"],
        30,
        "orange",
    );
    m.checklist = vec![
        ChecklistItem::new("m3-tensors", "module-3", "Tensors, broadcasting, and autograd mechanics", "theory")
            .minutes(240)
            .with_resources(&["m3-pytorch-docs"]),
        ChecklistItem::new("m3-training", "module-3", "Write a training loop from scratch, no Trainer classes", "practice")
            .minutes(300)
            .with_resources(&["m3-karpathy"]),
        ChecklistItem::new("m3-cnn", "module-3", "Train a CNN to >90% on CIFAR-10", "practice")
            .minutes(360),
        ChecklistItem::new("m3-debug", "module-3", "Diagnose a divergent run: learning rate, init, normalization", "practice")
            .minutes(180),
        ChecklistItem::new("m3-paper", "module-3", "Reimplement one architecture from its paper", "checkpoint")
            .checkpoint()
            .minutes(600),
    ];
    m.resources = vec![
        Resource::new("m3-pytorch-docs", "module-3", ResourceType::Doc, "PyTorch: Learn the Basics", "https://pytorch.org/tutorials/beginner/basics/intro.html", 240),
        Resource::new("m3-karpathy", "module-3", ResourceType::Video, "Karpathy: Neural Networks — Zero to Hero", "https://karpathy.ai/zero-to-hero.html", 840),
        Resource::new("m3-d2l", "module-3", ResourceType::Book, "Dive into Deep Learning", "https://d2l.ai/", 900),
    ];
    m
}

fn nlp_transformers() -> Module {
    let mut m = module(
        "module-4",
        "NLP & Transformers",
        "Transformers",
        "Tokenization, attention, and the transformer stack, built up from an \
         implementation you wrote yourself.",
        &["module-3"],
        21,
        "violet",
    );
    m.checklist = vec![
        ChecklistItem::new("m4-tokenize", "module-4", "Implement BPE tokenization by hand", "practice")
            .minutes(240),
        ChecklistItem::new("m4-attention", "module-4", "Derive and implement scaled dot-product attention", "theory")
            .minutes(180)
            .with_resources(&["m4-illustrated", "m4-attention-paper"]),
        ChecklistItem::new("m4-gpt", "module-4", "Train a small GPT on a toy corpus", "practice")
            .minutes(480)
            .with_resources(&["m4-nanogpt"]),
        ChecklistItem::new("m4-finetune-bert", "module-4", "Fine-tune an encoder model for classification", "checkpoint")
            .checkpoint()
            .minutes(240),
    ];
    m.resources = vec![
        Resource::new("m4-attention-paper", "module-4", ResourceType::Article, "Attention Is All You Need", "https://arxiv.org/abs/1706.03762", 90),
        Resource::new("m4-illustrated", "module-4", ResourceType::Article, "The Illustrated Transformer", "https://jalammar.github.io/illustrated-transformer/", 45),
        Resource::new("m4-nanogpt", "module-4", ResourceType::Code, "nanoGPT", "https://github.com/karpathy/nanoGPT", 300),
    ];
    m
}

fn llms() -> Module {
    let mut m = module(
        "module-5",
        "Large Language Models",
        "LLMs",
        "Working with frontier models: prompting, structured output, evals, and \
         knowing what the API is actually doing.",
        &["module-4"],
        21,
        "fuchsia",
    );
    m.checklist = vec![
        ChecklistItem::new("m5-apis", "module-5", "Drive a frontier model API with streaming and tool calls", "practice")
            .minutes(180)
            .with_resources(&["m5-anthropic-docs"]),
        ChecklistItem::new("m5-prompting", "module-5", "Prompting techniques: few-shot, chain of thought, system design", "theory")
            .minutes(150)
            .with_resources(&["m5-prompt-guide"]),
        ChecklistItem::new("m5-structured", "module-5", "Reliable structured output with schema validation", "practice")
            .minutes(120),
        ChecklistItem::new("m5-evals", "module-5", "Build an eval harness for a model-backed feature", "checkpoint")
            .checkpoint()
            .minutes(360),
    ];
    m.resources = vec![
        Resource::new("m5-anthropic-docs", "module-5", ResourceType::Doc, "Anthropic API documentation", "https://docs.anthropic.com/", 180),
        Resource::new("m5-prompt-guide", "module-5", ResourceType::Article, "Prompt Engineering Guide", "https://www.promptingguide.ai/", 120),
        Resource::new("m5-state-of-gpt", "module-5", ResourceType::Video, "Karpathy: State of GPT", "https://www.youtube.com/watch?v=bZQun8Y4L2A", 45),
    ];
    m
}

fn rag() -> Module {
    let mut m = module(
        "module-6",
        "Retrieval-Augmented Generation",
        "RAG",
        "Embeddings, chunking, vector search, and grounding model answers in \
         your own corpus.",
        &["module-5"],
        14,
        "cyan",
    );
    m.checklist = vec![
        ChecklistItem::new("m6-embeddings", "module-6", "Embeddings and similarity search from first principles", "theory")
            .minutes(150),
        ChecklistItem::new("m6-chunking", "module-6", "Chunking strategies and their retrieval trade-offs", "practice")
            .minutes(180)
            .with_resources(&["m6-rag-survey"]),
        ChecklistItem::new("m6-pipeline", "module-6", "Build ingest → retrieve → rerank → answer over real documents", "checkpoint")
            .checkpoint()
            .minutes(420)
            .with_resources(&["m6-qdrant-docs"]),
    ];
    m.resources = vec![
        Resource::new("m6-rag-survey", "module-6", ResourceType::Article, "Retrieval-Augmented Generation for LLMs: A Survey", "https://arxiv.org/abs/2312.10997", 90),
        Resource::new("m6-qdrant-docs", "module-6", ResourceType::Doc, "Qdrant documentation", "https://qdrant.tech/documentation/", 120),
    ];
    m
}

fn agents() -> Module {
    let mut m = module(
        "module-7",
        "AI Agents & Tool Use",
        "Agents",
        "Agent loops, tool schemas, planning, and the failure modes of letting \
         a model act.",
        &["module-5"],
        14,
        "rose",
    );
    m.checklist = vec![
        ChecklistItem::new("m7-loop", "module-7", "Implement a bare agent loop: model, tools, scratchpad", "practice")
            .minutes(240)
            .with_resources(&["m7-react"]),
        ChecklistItem::new("m7-tools", "module-7", "Design tool schemas a model can use reliably", "practice")
            .minutes(180),
        ChecklistItem::new("m7-multi", "module-7", "Coordinate two agents on a task with handoffs", "checkpoint")
            .checkpoint()
            .minutes(300)
            .with_resources(&["m7-building-agents"]),
    ];
    m.resources = vec![
        Resource::new("m7-react", "module-7", ResourceType::Article, "ReAct: Synergizing Reasoning and Acting", "https://arxiv.org/abs/2210.03629", 60),
        Resource::new("m7-building-agents", "module-7", ResourceType::Article, "Building Effective Agents", "https://www.anthropic.com/research/building-effective-agents", 40),
    ];
    m
}

fn mlops() -> Module {
    let mut m = module(
        "module-8",
        "MLOps & Deployment",
        "MLOps",
        "Serving, monitoring, and iterating on models in production without \
         surprises.",
        &["module-3"],
        21,
        "lime",
    );
    m.checklist = vec![
        ChecklistItem::new("m8-serving", "module-8", "Serve a model behind an HTTP API with batching", "practice")
            .minutes(300),
        ChecklistItem::new("m8-docker", "module-8", "Containerize training and inference reproducibly", "practice")
            .minutes(180)
            .with_resources(&["m8-docker-docs"]),
        ChecklistItem::new("m8-monitoring", "module-8", "Latency, drift, and quality monitoring in production", "theory")
            .minutes(150)
            .with_resources(&["m8-ml-systems"]),
        ChecklistItem::new("m8-deploy", "module-8", "Deploy a model to a cloud target with rollback", "checkpoint")
            .checkpoint()
            .minutes(360),
    ];
    m.resources = vec![
        Resource::new("m8-docker-docs", "module-8", ResourceType::Doc, "Docker: Get Started", "https://docs.docker.com/get-started/", 120),
        Resource::new("m8-ml-systems", "module-8", ResourceType::Book, "Designing Machine Learning Systems", "https://www.oreilly.com/library/view/designing-machine-learning/9781098107956/", 720),
    ];
    m
}

fn speech_audio() -> Module {
    let mut m = module(
        "module-9",
        "Speech & Audio AI",
        "Speech",
        "ASR, TTS, and the latency budgets of realtime voice. Feeds directly \
         into the voice assistant capstone.",
        &["module-4"],
        14,
        "sky",
    );
    m.checklist = vec![
        ChecklistItem::new("m9-audio", "module-9", "Audio fundamentals: sampling, spectrograms, MFCCs", "theory")
            .minutes(150),
        ChecklistItem::new("m9-asr", "module-9", "Run and evaluate Whisper on your own recordings", "practice")
            .minutes(180)
            .with_resources(&["m9-whisper"]),
        ChecklistItem::new("m9-tts", "module-9", "Synthesize speech and measure quality (MOS) honestly", "practice")
            .minutes(150),
        ChecklistItem::new("m9-streaming", "module-9", "Stream transcription with word-level timestamps", "checkpoint")
            .checkpoint()
            .minutes(240),
    ];
    m.resources = vec![
        Resource::new("m9-whisper", "module-9", ResourceType::Code, "OpenAI Whisper", "https://github.com/openai/whisper", 120),
        Resource::new("m9-speech-course", "module-9", ResourceType::Video, "Hugging Face Audio Course", "https://huggingface.co/learn/audio-course", 480),
    ];
    m
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn module_ids_are_unique() {
        let modules = default_modules();
        let ids: HashSet<&str> = modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), modules.len());
    }

    #[test]
    fn item_and_resource_ids_are_unique_and_owned() {
        let modules = default_modules();
        let mut seen = HashSet::new();
        for module in &modules {
            for item in &module.checklist {
                assert!(seen.insert(item.id.clone()), "duplicate item id {}", item.id);
                assert_eq!(item.module_id, module.id);
            }
            for resource in &module.resources {
                assert!(seen.insert(resource.id.clone()), "duplicate resource id {}", resource.id);
                assert_eq!(resource.module_id, module.id);
            }
        }
    }

    #[test]
    fn prerequisites_reference_existing_modules() {
        let modules = default_modules();
        let ids: HashSet<&str> = modules.iter().map(|m| m.id.as_str()).collect();
        for module in &modules {
            for prereq in &module.prerequisites {
                assert!(ids.contains(prereq.as_str()), "{} references unknown {}", module.id, prereq);
            }
        }
    }

    #[test]
    fn prerequisite_graph_is_acyclic() {
        let modules = default_modules();
        let prereqs: HashMap<&str, Vec<&str>> = modules
            .iter()
            .map(|m| (m.id.as_str(), m.prerequisites.iter().map(|p| p.as_str()).collect()))
            .collect();

        // DFS with a visiting set; the catalog is small enough for recursion.
        fn visit<'a>(
            id: &'a str,
            prereqs: &HashMap<&'a str, Vec<&'a str>>,
            visiting: &mut HashSet<&'a str>,
            done: &mut HashSet<&'a str>,
        ) {
            if done.contains(id) {
                return;
            }
            assert!(visiting.insert(id), "cycle through {id}");
            for &dep in prereqs.get(id).into_iter().flatten() {
                visit(dep, prereqs, visiting, done);
            }
            visiting.remove(id);
            done.insert(id);
        }

        let mut done = HashSet::new();
        for module in &modules {
            visit(module.id.as_str(), &prereqs, &mut HashSet::new(), &mut done);
        }
    }

    #[test]
    fn item_resource_links_resolve() {
        let modules = default_modules();
        for module in &modules {
            let resource_ids: HashSet<&str> =
                module.resources.iter().map(|r| r.id.as_str()).collect();
            for item in &module.checklist {
                for rid in &item.resource_ids {
                    assert!(resource_ids.contains(rid.as_str()), "{} links unknown {}", item.id, rid);
                }
            }
        }
    }

    #[test]
    fn dsa_module_carries_leetcode_resources() {
        let modules = default_modules();
        let dsa = modules.iter().find(|m| m.id == "module-1").unwrap();
        assert_eq!(dsa.target_problems, Some(150));
        let leetcode =
            dsa.resources.iter().filter(|r| r.resource_type == ResourceType::Leetcode).count();
        assert!(leetcode >= 5);
    }

    #[test]
    fn only_first_module_starts_unlocked() {
        let modules = default_modules();
        for module in &modules {
            assert_eq!(module.is_locked, !module.prerequisites.is_empty(), "{}", module.id);
            assert_eq!(module.completion_percentage, 0);
            assert!(!module.is_completed);
        }
        assert!(!modules[0].is_locked);
    }
}
