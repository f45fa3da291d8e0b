//! Terminal rendering
//!
//! Renders [`DashboardState`] as plain text. Server-supplied strings pass
//! through [`sanitize`] so a topic name or paper summary cannot inject
//! terminal escape sequences.

use std::fmt::{self, Write};

use crate::view::{text, DashboardState, FormStatus, PapersPanel, TopicsPanel, View};

/// Replace control characters (including ESC) with U+FFFD. Newlines and tabs
/// are kept only when `multiline` is set.
pub fn sanitize(input: &str, multiline: bool) -> String {
    input
        .chars()
        .map(|c| match c {
            '\n' | '\t' if multiline => c,
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}

/// Render the active view
pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();
    let written = match state.view() {
        View::Login => render_login(state, &mut out),
        View::Register => render_register(state, &mut out),
        View::Dashboard => render_dashboard(state, &mut out),
        View::AddTopic => render_add_topic(state, &mut out),
    };
    // Formatting into a String only fails if a Display impl does
    debug_assert!(written.is_ok());
    out
}

fn render_login(state: &DashboardState, out: &mut String) -> fmt::Result {
    writeln!(out, "== Login ==")?;
    if let Some(error) = state.login_error() {
        writeln!(out, "! {}", sanitize(error, false))?;
    }
    Ok(())
}

fn render_register(state: &DashboardState, out: &mut String) -> fmt::Result {
    writeln!(out, "== Register ==")?;
    render_status(state.register_status(), out)
}

fn render_add_topic(state: &DashboardState, out: &mut String) -> fmt::Result {
    writeln!(out, "== Add Topic ==")?;
    render_status(state.add_topic_status(), out)
}

fn render_status(status: &FormStatus, out: &mut String) -> fmt::Result {
    if let Some(success) = &status.success {
        writeln!(out, "+ {}", success)?;
    }
    if let Some(error) = &status.error {
        writeln!(out, "! {}", sanitize(error, false))?;
    }
    Ok(())
}

fn render_dashboard(state: &DashboardState, out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "== Dashboard ({}) ==",
        sanitize(state.user_label().unwrap_or("-"), false)
    )?;

    if state.topics_loading() {
        writeln!(out, "Loading...")?;
    }
    match state.topics() {
        TopicsPanel::Blank => {}
        TopicsPanel::NoTopics => writeln!(out, "{}", text::NO_TOPICS)?,
        TopicsPanel::Rows(rows) => {
            for (idx, row) in rows.iter().enumerate() {
                writeln!(out, "{:2}. {}", idx + 1, sanitize(row.topic.as_str(), false))?;
            }
        }
        TopicsPanel::Error(message) => writeln!(out, "! {}", sanitize(message, false))?,
    }

    if let Some(heading) = state.papers_heading() {
        writeln!(out, "\n-- {} --", sanitize(heading, false))?;
    }
    if state.papers_loading() {
        writeln!(out, "Loading papers...")?;
    }
    match state.papers() {
        PapersPanel::Blank => {}
        PapersPanel::NoPapers => writeln!(out, "{}", text::NO_PAPERS)?,
        PapersPanel::Cards(cards) => {
            for card in cards {
                writeln!(out, "\n# {}", sanitize(&card.title, false))?;
                writeln!(out, "By: {}", sanitize(&card.authors, false))?;
                writeln!(out, "Content Summary:\n{}", sanitize(&card.content, true))?;
                writeln!(out, "Novelty Analysis:\n{}", sanitize(&card.novelty, true))?;
            }
        }
        PapersPanel::Error(message) => writeln!(out, "! {}", sanitize(message, false))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paper, Topic};

    fn dashboard(topics: Vec<Topic>) -> DashboardState {
        let mut state = DashboardState::default();
        state.login_form.email = "a@b.com".to_string();
        let login = state.begin_login();
        let refresh = state.apply_login(login.token, Ok(())).unwrap();
        state.apply_topics(refresh.token, Ok(topics));
        state
    }

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        assert_eq!(sanitize("ok\x1b[2Jtext", false), "ok\u{FFFD}[2Jtext");
        assert_eq!(sanitize("a\nb", false), "a\u{FFFD}b");
        assert_eq!(sanitize("a\nb\tc", true), "a\nb\tc");
    }

    #[test]
    fn test_render_topic_rows() {
        let state = dashboard(vec![Topic::new("graphs"), Topic::new("evil\x1b]0;x\x07")]);
        let out = render(&state);
        assert!(out.starts_with("== Dashboard (a@b.com) =="));
        assert!(out.contains(" 1. graphs\n"));
        assert!(out.contains(" 2. evil\u{FFFD}]0;x\u{FFFD}\n"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_render_empty_topics_and_papers() {
        let mut state = dashboard(vec![]);
        assert!(render(&state).contains("No topics found. Add your first topic!"));

        let pending = state.begin_view_papers(Topic::new("graphs"));
        assert!(render(&state).contains("Loading papers..."));
        state.apply_papers(pending.token, Ok(vec![Paper::default()]));

        let out = render(&state);
        assert!(out.contains("-- Related Papers for: graphs --"));
        assert!(out.contains("# No Title"));
        assert!(out.contains("By: Unknown Authors"));
        assert!(!out.contains("Loading papers..."));
    }

    #[test]
    fn test_render_login_error() {
        let mut state = DashboardState::default();
        let login = state.begin_login();
        state.apply_login(
            login.token,
            Err(crate::error::ClientError::Api {
                status: 401,
                detail: Some("Invalid credentials".to_string()),
            }),
        );
        assert_eq!(render(&state), "== Login ==\n! Invalid credentials\n");
    }

    #[test]
    fn test_render_register_and_add_topic_status() {
        let mut state = DashboardState::default();
        state.show_register();
        let pending = state.begin_register();
        state.apply_register(pending.token, Ok(()));
        assert_eq!(
            render(&state),
            "== Register ==\n+ Registration successful! You can now login.\n"
        );

        let mut state = dashboard(vec![]);
        state.show_add_topic();
        let pending = state.begin_add_topic().unwrap();
        state.apply_add_topic(
            pending.token,
            Err(crate::error::ClientError::Api {
                status: 400,
                detail: Some("Topic\x1b exists".to_string()),
            }),
        );
        assert_eq!(render(&state), "== Add Topic ==\n! Topic\u{FFFD} exists\n");
    }
}
