/// Project search and listing order
///
/// Filters the full project collection by a free-text query and orders the
/// result newest first. Projects without a date go last; equal dates keep
/// the order they were handed in (store order).

use crate::catalog::types::Project;
use std::cmp::Ordering;

/// Filter projects by `query` and order them by `project_date` descending
///
/// An absent or empty query keeps every project. Any other query, whitespace
/// included, is matched verbatim as a substring.
pub fn search_projects(projects: Vec<Project>, query: Option<&str>) -> Vec<Project> {
    let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);

    let mut result: Vec<Project> = match needle {
        Some(needle) => projects.into_iter().filter(|p| p.matches(&needle)).collect(),
        None => projects,
    };

    order_by_date_desc(&mut result);
    result
}

/// Restrict projects to those dated within `year`
pub fn filter_by_year(projects: Vec<Project>, year: i32) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| p.year() == Some(year))
        .collect()
}

/// Newest first, undated last, stable for ties
pub fn order_by_date_desc(projects: &mut [Project]) {
    projects.sort_by(compare_dates_desc);
}

fn compare_dates_desc(a: &Project, b: &Project) -> Ordering {
    match (a.project_date, b.project_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
