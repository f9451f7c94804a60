//! Lines of a mounted repository list.
//!
//! Rendered inline beneath the expanded user, indented one level.

use crate::model::RepoSummary;
use crate::state::{RepositoryListState, RepositoryListView};
use crate::state::{LOADING_REPOSITORIES_TEXT, NO_REPOSITORIES_TEXT};
use crate::view::constants::REPOSITORY_INDENT;
use crate::view::styles::ResultStyles;
use ratatui::text::{Line, Span};

/// Lines for a repository list, in display order.
///
/// `selected` is the index of the repository under the cursor, if any.
/// Each repository takes two lines: name with stars, then description.
pub fn repository_lines(
    list: &RepositoryListState,
    selected: Option<usize>,
    styles: &ResultStyles,
) -> Vec<Line<'static>> {
    match list.view() {
        RepositoryListView::Loading => vec![status_line(LOADING_REPOSITORIES_TEXT, styles.muted)],
        RepositoryListView::Failure(message) => vec![status_line(message, styles.error)],
        RepositoryListView::Empty => vec![status_line(NO_REPOSITORIES_TEXT, styles.muted)],
        RepositoryListView::Rows(repos) => repos
            .iter()
            .enumerate()
            .flat_map(|(index, repo)| repository_row(repo, selected == Some(index), styles))
            .collect(),
    }
}

/// Number of lines a repository row occupies.
pub const LINES_PER_REPOSITORY: usize = 2;

fn status_line(text: &str, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(REPOSITORY_INDENT),
        Span::styled(text.to_string(), style),
    ])
}

fn repository_row(repo: &RepoSummary, selected: bool, styles: &ResultStyles) -> [Line<'static>; 2] {
    let title = Line::from(vec![
        Span::raw(REPOSITORY_INDENT),
        Span::styled(repo.name.clone(), styles.repo_name),
        Span::raw("  "),
        Span::styled(format!("★ {}", repo.stargazers_count), styles.stars),
    ]);
    let description = Line::from(vec![
        Span::raw(REPOSITORY_INDENT),
        Span::raw("  "),
        Span::styled(
            repo.description_or_placeholder().to_string(),
            styles.description,
        ),
    ]);

    if selected {
        [
            title.patch_style(styles.selected),
            description.patch_style(styles.selected),
        ]
    } else {
        [title, description]
    }
}
