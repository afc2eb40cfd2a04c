use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Instant;

use crate::assessment::conversation::{Author, Message};
use crate::assessment::loading::{LoadingStage, StageStatus, STAGES, SUCCESS_MESSAGE};
use crate::assessment::questions::{option_letter, Preview};
use crate::assessment::{AssessmentCreator, UiMode};
use crate::catalog::CategoryList;
use crate::exams::{ExamBoard, ExamStatus, ExamTab};
use crate::reports::{self, ReportFilters};
use crate::settings::Settings;
use crate::support::FAQ_ITEMS;

const HELP: &str = "Commands:
  assistant    create an assessment with the assistant
  categories   list categories
  exams        list exams by tab
  reports      show report metrics and datasets
  faq          show frequently asked questions
  help         show this list
  exit         quit";

pub fn run_cli(settings: &Settings, base_path: &Path) {
    println!("Assessment Pro CLI");
    println!("Base path: {}", base_path.display());
    println!("Mode: {}", settings.mode);
    println!("Type 'help' for commands, 'exit' to quit.\n");

    loop {
        let input = match prompt_line("assessment-pro> ") {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Error reading input: {e}");
                break;
            }
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "exit" | "quit" => {
                println!("Goodbye");
                break;
            }
            "help" => println!("{HELP}\n"),
            "assistant" => {
                if let Err(e) = run_assistant() {
                    log::error!("Assistant session ended: {e}");
                }
            }
            "categories" => print_categories(&CategoryList::sample()),
            "exams" => print_exams(&ExamBoard::sample()),
            "reports" => print_reports(),
            "faq" => print_faq(),
            other => println!("Unknown command '{other}'. Type 'help'."),
        }
    }
}

/// Reads one trimmed line. `None` on end of input.
fn prompt_line(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Drives one assistant session in the terminal, sleeping until each
/// pending deadline instead of polling.
fn run_assistant() -> io::Result<()> {
    let mut creator = AssessmentCreator::new(Instant::now());
    let mut printed = 0usize;
    let mut last_stage = None;

    loop {
        let now = Instant::now();
        creator.poll(now);
        printed = print_new_messages(creator.conversation().messages(), printed);

        match creator.mode() {
            UiMode::Loading => {
                if let Some(stage) = creator.loading() {
                    let index = stage.current_index(now);
                    if last_stage != Some(index) {
                        print_stage(stage, now);
                        if stage.is_generated(now) {
                            println!("  {SUCCESS_MESSAGE}");
                        }
                        last_stage = Some(index);
                    }
                }
            }
            UiMode::Preview | UiMode::Customizing => {
                if let Some(preview) = creator.preview() {
                    print_preview(preview);
                }
                return Ok(());
            }
            UiMode::Chat => {}
        }

        if let Some(deadline) = creator.next_deadline(now) {
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
            continue;
        }

        if creator.accepts_text() {
            let Some(text) = prompt_line("You: ")? else {
                return Ok(());
            };
            if let Err(e) = creator.submit_text(&text, Instant::now()) {
                println!("  ({e})");
            }
            continue;
        }

        let chips = creator.conversation().active_chips().to_vec();
        if chips.is_empty() {
            return Ok(());
        }
        for (i, chip) in chips.iter().enumerate() {
            println!("  [{}] {}", i + 1, chip);
        }
        let Some(choice) = prompt_line("Choose: ")? else {
            return Ok(());
        };
        match resolve_chip(&choice, &chips) {
            Some(chip) => {
                if let Err(e) = creator.select_chip(chip, Instant::now()) {
                    println!("  ({e})");
                }
            }
            None => println!("  Pick one of the numbered options."),
        }
    }
}

/// Accepts either the 1-based number or the chip text (case-insensitive).
fn resolve_chip<'a>(input: &str, chips: &'a [String]) -> Option<&'a str> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        // Counts are numeric chips; an exact label match wins over an index.
        if let Some(chip) = chips.iter().find(|c| c.as_str() == input) {
            return Some(chip.as_str());
        }
        return n.checked_sub(1).and_then(|i| chips.get(i)).map(String::as_str);
    }
    chips
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input))
        .map(String::as_str)
}

/// Prints assistant replies that landed since the last call. The user's own
/// lines are already on screen.
fn print_new_messages(messages: &[Message], already: usize) -> usize {
    let resolved: Vec<&Message> = messages.iter().filter(|m| !m.is_typing).collect();
    for message in resolved.iter().skip(already) {
        if message.author == Author::Ai {
            println!("Assistant: {}", message.text);
        }
    }
    resolved.len()
}

fn print_stage(stage: &LoadingStage, now: Instant) {
    println!("\nGenerating assessment... {:.0}%", stage.progress(now));
    for (i, info) in STAGES.iter().enumerate() {
        let marker = match stage.status(i, now) {
            StageStatus::Complete => "✓",
            StageStatus::Loading => "…",
            StageStatus::Pending => " ",
        };
        println!("  [{marker}] {} {}", info.icon, info.label);
    }
}

fn print_preview(preview: &Preview) {
    let config = preview.config();
    println!("\n{} Assessment", config.topic);
    println!(
        "Difficulty: {} | Questions: {} | Type: {}",
        config.difficulty_label(),
        config.count_label(),
        config.type_label()
    );
    for (i, q) in preview.questions().iter().enumerate() {
        println!("\n{}. {}", i + 1, q.text);
        for (j, option) in q.options.iter().enumerate() {
            let mark = if j == q.correct_index() { " ✓" } else { "" };
            println!("   {}) {}{}", option_letter(j), option, mark);
        }
        if let Some(explanation) = &q.explanation {
            println!("   Explanation: {explanation}");
        }
    }
    println!(
        "\n{} • Estimated time: {} minutes\n",
        preview.summary(),
        preview.estimated_minutes()
    );
}

fn print_categories(list: &CategoryList) {
    println!();
    println!(
        "{:<4} | {:<20} | {:<11} | {:<10} | {}",
        "ID", "Name", "Assessments", "Created", "Color"
    );
    println!("{}", "-".repeat(64));
    for c in list.items() {
        println!(
            "{:<4} | {:<20} | {:<11} | {:<10} | {}",
            c.id,
            truncate_for_table(&c.name, 20),
            c.assessments,
            c.date_created.to_string(),
            c.color
        );
    }
    println!();
}

fn print_exams(board: &ExamBoard) {
    println!("\nExam Tracker: {} exams", board.all().len());
    for tab in ExamTab::ALL {
        println!("\n{} ({})", tab.label(), board.count(tab));
        println!("{}", "-".repeat(80));
        for exam in board.in_tab(tab) {
            let detail = match exam.status {
                ExamStatus::Scheduled => format!("{} participants", exam.participants),
                ExamStatus::InProgress {
                    completed,
                    remaining,
                } => format!("{completed} completed, {remaining} remaining"),
                ExamStatus::Completed {
                    avg_score,
                    pass_rate,
                } => format!("avg {avg_score}%, pass {pass_rate}%"),
            };
            println!(
                "{:<30} | {} {} | {:<11} | {}",
                truncate_for_table(&exam.name, 30),
                exam.date,
                exam.time,
                exam.status.label(),
                detail
            );
        }
    }
    println!();
}

fn print_reports() {
    let filters = ReportFilters::default();
    println!("\nAnalytics & Reports ({} to {})", filters.from, filters.to);
    for metric in reports::HEADLINE_METRICS {
        println!("  {:<20} {:>8}  {}", metric.label, metric.value, metric.note);
    }

    println!("\nPerformance by Category");
    for row in reports::AVG_SCORES {
        println!(
            "  {:<14} {} {:>3}%",
            row.name,
            bar(row.score, 100.0, 30),
            row.score
        );
    }

    println!("\nAssessment Completion Status");
    for slice in reports::COMPLETION_STATUS {
        println!("  {:<14} {:>3}% ({})", slice.name, slice.percent, slice.count);
    }

    println!("\nTop Performers");
    for (i, p) in reports::TOP_PERFORMERS.iter().enumerate() {
        println!(
            "  {}. {:<14} {:<12} {}% over {} assessments",
            i + 1,
            p.name,
            p.department,
            p.avg_score,
            p.assessments
        );
    }
    println!();
}

fn print_faq() {
    println!();
    for (i, item) in FAQ_ITEMS.iter().enumerate() {
        println!("{}. {}", i + 1, item.question);
        println!("   {}\n", item.answer);
    }
}

fn bar(value: f32, max: f32, width: usize) -> String {
    let filled = ((value / max).clamp(0.0, 1.0) * width as f32).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn truncate_for_table(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_len.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chips(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_chip_by_number_and_text() {
        let options = chips(&["Easy", "Medium", "Hard", "Mixed"]);
        assert_eq!(resolve_chip("2", &options), Some("Medium"));
        assert_eq!(resolve_chip("mixed", &options), Some("Mixed"));
        assert_eq!(resolve_chip("0", &options), None);
        assert_eq!(resolve_chip("9", &options), None);
        assert_eq!(resolve_chip("Expert", &options), None);
    }

    #[test]
    fn test_numeric_labels_win_over_index() {
        let counts = chips(&["5", "10", "15", "20", "25"]);
        assert_eq!(resolve_chip("10", &counts), Some("10"));
        assert_eq!(resolve_chip("2", &counts), Some("10"));
    }

    #[test]
    fn test_truncate_for_table() {
        assert_eq!(truncate_for_table("short", 10), "short");
        assert_eq!(truncate_for_table("Project Management", 8), "Project…");
        assert_eq!(truncate_for_table("abc", 3), "abc");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(50.0, 100.0, 10).chars().count(), 10);
        assert_eq!(bar(120.0, 100.0, 4), "████");
        assert_eq!(bar(0.0, 100.0, 4), "░░░░");
    }
}
