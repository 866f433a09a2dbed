use std::io::{self, Write as _};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trailhead::roadmap::{ModuleStatus, ProjectId, ResourceType};
use trailhead::store::EXPORT_FILE_NAME;
use trailhead::{Config, ProgressStore};

#[derive(Parser)]
#[command(name = "trailhead")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every module with its status and completion
    List,
    /// Show a module's checklist and resources
    Show {
        /// Module ID (e.g., module-1)
        module_id: String,
    },
    /// Toggle a checklist item
    Check {
        /// Module ID
        module_id: String,
        /// Checklist item ID
        item_id: String,
        /// Skip the checkpoint confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Toggle a resource's completed (or favorite) flag
    Resource {
        /// Module ID
        module_id: String,
        /// Resource ID
        resource_id: String,
        /// Toggle the favorite flag instead of completion
        #[arg(long)]
        favorite: bool,
    },
    /// Mark every item in a module complete (or incomplete with --undo)
    Done {
        /// Module ID
        module_id: String,
        /// Clear the module instead of completing it
        #[arg(long)]
        undo: bool,
    },
    /// Unlock a module, bypassing prerequisites
    Unlock {
        /// Module ID
        module_id: String,
    },
    /// List the capstone projects
    Projects,
    /// Show a project's phases and steps
    Project {
        /// Project ID (e.g., rag-assistant)
        project_id: String,
    },
    /// Toggle a project step's completion
    Step {
        /// Step ID (shown by `project`)
        step_id: String,
    },
    /// Toggle a video's watched flag
    Video {
        /// Video resource ID
        video_id: String,
    },
    /// List resources across all modules
    Resources {
        /// Filter by kind (video, article, leetcode, book, doc, code)
        #[arg(long = "type")]
        resource_type: Option<String>,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
    },
    /// Browse DSA patterns and problem statistics
    Problems,
    /// Show overall progress, streaks, and skill distribution
    Stats,
    /// Export progress to a JSON file
    Export {
        /// Output path
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: String,
    },
    /// Import progress from a previously exported JSON file
    Import {
        /// Path to the export file
        path: String,
    },
    /// Reset all progress to catalog defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Turn strict mode on or off
    Strict {
        /// Desired mode
        mode: StrictMode,
    },
    /// Log study time in minutes
    Time {
        /// Minutes to add
        minutes: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrictMode {
    On,
    Off,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trailhead=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let mut store = ProgressStore::open(config.progress_path()?);

    match cli.command {
        Commands::List => list_modules(&store),
        Commands::Show { module_id } => show_module(&store, &module_id)?,
        Commands::Check { module_id, item_id, yes } => {
            check_item(&mut store, &module_id, &item_id, yes)?;
        }
        Commands::Resource { module_id, resource_id, favorite } => {
            if favorite {
                store.toggle_resource_favorite(&module_id, &resource_id)?;
            } else {
                store.toggle_resource_complete(&module_id, &resource_id)?;
            }
            show_module(&store, &module_id)?;
        }
        Commands::Done { module_id, undo } => {
            store.mark_module_completed(&module_id, !undo)?;
            show_module(&store, &module_id)?;
        }
        Commands::Unlock { module_id } => {
            store.unlock_module(&module_id)?;
            list_modules(&store);
        }
        Commands::Projects => list_projects(&store),
        Commands::Project { project_id } => show_project(&store, &project_id)?,
        Commands::Step { step_id } => {
            store.toggle_step_complete(&step_id)?;
            list_projects(&store);
        }
        Commands::Video { video_id } => {
            store.mark_video_watched(&video_id)?;
            let watched = store.state().watched_videos.len();
            println!("{watched} video(s) watched");
        }
        Commands::Resources { resource_type, favorites } => {
            show_resources(&store, resource_type.as_deref(), favorites)?;
        }
        Commands::Problems => show_problems(&store),
        Commands::Stats => show_stats(&store, &config),
        Commands::Export { output } => {
            let json = store.export_progress()?;
            std::fs::write(&output, json)
                .with_context(|| format!("Failed to write export to {output}"))?;
            println!("Exported progress to {output}");
        }
        Commands::Import { path } => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {path}"))?;
            if let Err(err) = store.import_progress(&json) {
                eprintln!("Import failed; existing progress is unchanged.");
                return Err(err.into());
            }
            println!("Imported progress from {path}");
        }
        Commands::Reset { yes } => {
            if yes || confirm("Reset ALL progress to catalog defaults?")? {
                store.reset_progress()?;
                println!("Progress reset.");
            } else {
                println!("Aborted.");
            }
        }
        Commands::Strict { mode } => {
            store.set_strict_mode(matches!(mode, StrictMode::On))?;
            println!("Strict mode {}", if store.state().strict_mode { "on" } else { "off" });
        }
        Commands::Time { minutes } => {
            store.add_time_invested(minutes)?;
            println!("Total time invested: {} min", store.state().total_time_invested);
        }
    }

    Ok(())
}

fn check_item(store: &mut ProgressStore, module_id: &str, item_id: &str, yes: bool) -> Result<()> {
    let item = store
        .state()
        .module(module_id)
        .and_then(|m| m.checklist.iter().find(|i| i.id == item_id))
        .cloned();

    // Checkpoint items get a confirmation prompt before completion. The store
    // itself never gates; this is purely a presentation concern.
    if let Some(item) = &item {
        if item.is_checkpoint && !item.is_completed && !yes {
            let prompt = format!("\"{}\" is a checkpoint. Mark it complete?", item.text);
            if !confirm(&prompt)? {
                println!("Aborted.");
                return Ok(());
            }
        }
    }

    store.toggle_checklist_item(module_id, item_id)?;
    show_module(store, module_id)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn status_tag(status: ModuleStatus) -> &'static str {
    match status {
        ModuleStatus::Locked => "locked",
        ModuleStatus::Available => "available",
        ModuleStatus::InProgress => "in progress",
        ModuleStatus::Completed => "completed",
    }
}

fn bar(percentage: u8) -> String {
    // Imported documents are not cross-field validated and may carry
    // percentages above 100; render those as a full bar.
    let filled = (percentage.min(100) as usize) / 10;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

fn list_modules(store: &ProgressStore) {
    for module in &store.state().modules {
        println!(
            "{:10} {} {:>3}%  {:12} {}",
            module.id,
            bar(module.completion_percentage),
            module.completion_percentage,
            status_tag(module.status),
            module.title,
        );
    }
    if let Some(milestone) = store.state().next_milestone() {
        println!(
            "\nNext up: {} ({} item(s) remaining)",
            milestone.title, milestone.remaining_items
        );
    }
}

fn show_module(store: &ProgressStore, module_id: &str) -> Result<()> {
    let Some(module) = store.state().module(module_id) else {
        bail!("unknown module '{module_id}'");
    };

    println!("{} — {} ({}%)", module.id, module.title, module.completion_percentage);
    println!("{}\n", module.description);

    println!("Checklist:");
    for item in &module.checklist {
        let mark = if item.is_completed { "x" } else { " " };
        let checkpoint = if item.is_checkpoint { " (checkpoint)" } else { "" };
        println!("  [{mark}] {:18} {}{checkpoint}", item.id, item.text);
    }

    if !module.resources.is_empty() {
        println!("\nResources:");
        for resource in &module.resources {
            let mark = if resource.is_completed { "x" } else { " " };
            let favorite = if resource.is_favorite { " *" } else { "" };
            println!("  [{mark}] {:20} {}{favorite}", resource.id, resource.title);
        }
    }
    Ok(())
}

fn list_projects(store: &ProgressStore) {
    for project in &store.state().projects {
        println!(
            "{:20} {} {:>3}%  {:12} {}",
            project.id.as_str(),
            bar(project.completion_percentage),
            project.completion_percentage,
            status_tag(project.status),
            project.title,
        );
    }
}

fn show_project(store: &ProgressStore, project_id: &str) -> Result<()> {
    let Some(id) = ProjectId::parse(project_id) else {
        bail!("unknown project '{project_id}' (try `trailhead projects`)");
    };
    let Some(project) = store.state().project(id) else {
        bail!("project '{project_id}' missing from state");
    };

    println!("{} — {} ({}%)", project.id, project.title, project.completion_percentage);
    println!("{}", project.tagline);
    println!("Stack: {}\n", project.tech_stack.join(", "));

    for phase in &project.phases {
        println!("{} ({})", phase.name, phase.duration);
        for step in &phase.steps {
            let done = store.state().completed_steps.iter().any(|id| *id == step.id);
            let mark = if done { "x" } else { " " };
            println!("  [{mark}] {:24} {}", step.id, step.title);
        }
        println!();
    }
    Ok(())
}

fn parse_resource_type(s: &str) -> Result<ResourceType> {
    match s {
        "video" => Ok(ResourceType::Video),
        "article" => Ok(ResourceType::Article),
        "leetcode" => Ok(ResourceType::Leetcode),
        "book" => Ok(ResourceType::Book),
        "doc" => Ok(ResourceType::Doc),
        "code" => Ok(ResourceType::Code),
        other => bail!("unknown resource type '{other}'"),
    }
}

fn show_resources(store: &ProgressStore, filter: Option<&str>, favorites: bool) -> Result<()> {
    let state = store.state();
    let resources = if favorites {
        state.favorite_resources()
    } else if let Some(kind) = filter {
        state.resources_by_type(parse_resource_type(kind)?)
    } else {
        state.all_resources()
    };

    for resource in resources {
        let mark = if resource.is_completed { "x" } else { " " };
        let favorite = if resource.is_favorite { " *" } else { "" };
        let kind = format!("{:?}", resource.resource_type).to_lowercase();
        println!(
            "[{mark}] {:20} {:8} {:10} {}{favorite}",
            resource.id, kind, resource.module_id, resource.title
        );
    }
    Ok(())
}

fn show_problems(store: &ProgressStore) {
    for pattern in trailhead::catalog::default_patterns() {
        println!("{} — {}", pattern.name, pattern.description);
        for problem in &pattern.problems {
            println!("    {:?}  {}", problem.difficulty, problem.title);
        }
    }

    let stats = store.state().problem_stats();
    println!("\nTracked problems: {}/{} solved", stats.completed, stats.total);
    println!(
        "  Easy {}/{}  Medium {}/{}  Hard {}/{}",
        stats.easy_completed,
        stats.easy_total,
        stats.medium_completed,
        stats.medium_total,
        stats.hard_completed,
        stats.hard_total,
    );
}

fn show_stats(store: &ProgressStore, config: &Config) {
    let state = store.state();
    println!(
        "Overall: {}% ({}/{} items)",
        state.overall_percentage(),
        state.completed_item_count(),
        state.total_item_count(),
    );
    println!("Streak: {} day(s)", state.current_streak);
    println!("Time logged: {} min", state.total_time_invested);

    if let Some(milestone) = state.next_milestone() {
        println!("Next up: {} ({} item(s) remaining)", milestone.title, milestone.remaining_items);
    }

    println!("\nSkills:");
    for (skill, percentage) in state.skill_distribution() {
        println!("  {:16} {} {:>3}%", skill, bar(percentage), percentage);
    }

    let today = Local::now().date_naive();
    println!("\nLast {} days:", config.activity_window_days);
    for (date, count) in state.activity_series(config.activity_window_days, today) {
        println!("  {date}  {}", "#".repeat(count as usize));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::bar;

    #[test]
    fn bar_fills_one_segment_per_ten_percent() {
        assert_eq!(bar(0), "[----------]");
        assert_eq!(bar(43), "[####------]");
        assert_eq!(bar(100), "[##########]");
    }

    #[test]
    fn bar_caps_imported_percentages_above_one_hundred() {
        assert_eq!(bar(250), "[##########]");
    }
}
