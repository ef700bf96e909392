use crate::types::OutputFormat;
use anyhow::Result;
use calltally_engine::{LoadSummary, PipelinePaths, RunSummary};
use calltally_index::{CallLogRecord, UserRecord};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub fn print_run_summary(
    summary: &RunSummary,
    paths: &PipelinePaths,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    let color = std::io::stdout().is_terminal();

    println!("{}", load_line("Users", &summary.users, color));
    println!("{}", load_line("Call logs", &summary.call_logs, color));

    let integrity = &summary.integrity;
    if integrity.orphaned_call_logs > 0 {
        println!(
            "  {} call logs reference unknown users",
            highlight(integrity.orphaned_call_logs, color)
        );
    }
    if integrity.negative_durations > 0 {
        println!(
            "  {} call logs end before they start",
            highlight(integrity.negative_durations, color)
        );
    }

    println!(
        "Wrote {} rows to {}",
        summary.analytics_rows,
        paths.user_analytics.display()
    );
    println!(
        "Wrote {} rows to {}",
        summary.ordered_rows,
        paths.ordered_calls.display()
    );

    Ok(())
}

pub fn print_dump(
    users: &[UserRecord],
    call_logs: &[CallLogRecord],
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        let value = serde_json::json!({
            "users": users,
            "call_logs": call_logs,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("USERS ({})", users.len());
    println!("{}", "-".repeat(60));
    for user in users {
        println!("{:>6}  {} {}", user.user_id, user.first_name, user.last_name);
    }

    println!();
    println!("CALL LOGS ({})", call_logs.len());
    println!("{}", "-".repeat(60));
    println!(
        "{:>6}  {:<16} {:>12} {:>12}  {:<10} {:>6}",
        "callId", "phoneNumber", "startTime", "endTime", "direction", "userId"
    );
    for call in call_logs {
        println!(
            "{:>6}  {:<16} {:>12} {:>12}  {:<10} {:>6}",
            call.call_id,
            call.phone_number,
            call.start_time,
            call.end_time,
            call.direction,
            call.user_id
        );
    }

    Ok(())
}

fn load_line(label: &str, summary: &LoadSummary, color: bool) -> String {
    let mut line = format!(
        "{:<10} {}: {} loaded, {} skipped",
        label,
        summary.source.display(),
        summary.inserted,
        highlight(summary.skipped(), color)
    );

    if summary.skipped() > 0 {
        line.push_str(&format!(
            " (wrong shape {}, empty {}, not integer {})",
            summary.rejected_field_count, summary.rejected_empty, summary.rejected_not_integer
        ));
    }

    line
}

// Non-zero problem counts stand out on a terminal; piped output stays plain.
fn highlight(count: usize, color: bool) -> String {
    if color && count > 0 {
        count.yellow().bold().to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_line_without_skips() {
        let summary = LoadSummary {
            source: PathBuf::from("users.csv"),
            inserted: 3,
            ..LoadSummary::default()
        };

        assert_eq!(
            load_line("Users", &summary, false),
            "Users      users.csv: 3 loaded, 0 skipped"
        );
    }

    #[test]
    fn test_load_line_breaks_down_skips() {
        let summary = LoadSummary {
            source: PathBuf::from("callLogs.csv"),
            inserted: 5,
            rejected_field_count: 1,
            rejected_empty: 0,
            rejected_not_integer: 2,
        };

        assert_eq!(
            load_line("Call logs", &summary, false),
            "Call logs  callLogs.csv: 5 loaded, 3 skipped (wrong shape 1, empty 0, not integer 2)"
        );
    }

    #[test]
    fn test_highlight_is_plain_without_color() {
        assert_eq!(highlight(4, false), "4");
        assert_eq!(highlight(0, true), "0");
    }
}
