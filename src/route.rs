//! Route Helpers
//!
//! Pure parsing of the browser location: page routes and the `page`
//! query parameter.

/// Pages served by the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// `/jobs/{id}` - job detail with the apply form
    JobDetail(u32),
    /// `/jobs/new` - posting form with the salary slider
    PostJob,
    /// `/applications` - recruiter's review table
    Applications,
    /// `/admin/recruiters` - admin verification list
    Recruiters,
    /// `/resume` - the job seeker's CV manager
    Cvs,
    /// Anything else - no interactive fragment
    Unknown,
}

/// Resolve a location pathname to a page.
pub fn page_for_path(path: &str) -> Page {
    let path = path.trim_end_matches('/');
    match path {
        "/applications" => Page::Applications,
        "/admin/recruiters" => Page::Recruiters,
        "/resume" => Page::Cvs,
        "/jobs/new" => Page::PostJob,
        _ => match path.strip_prefix("/jobs/").and_then(|id| id.parse().ok()) {
            Some(id) => Page::JobDetail(id),
            None => Page::Unknown,
        },
    }
}

/// `page` query parameter of a search string, default 1.
///
/// Accepts the raw `location.search` value with or without the leading `?`.
pub fn page_param(search: &str) -> u32 {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_path() {
        assert_eq!(page_for_path("/applications"), Page::Applications);
        assert_eq!(page_for_path("/applications/"), Page::Applications);
        assert_eq!(page_for_path("/admin/recruiters"), Page::Recruiters);
        assert_eq!(page_for_path("/resume"), Page::Cvs);
        assert_eq!(page_for_path("/jobs/new"), Page::PostJob);
        assert_eq!(page_for_path("/jobs/42"), Page::JobDetail(42));
        assert_eq!(page_for_path("/"), Page::Unknown);
        assert_eq!(page_for_path("/jobs/abc"), Page::Unknown);
    }

    #[test]
    fn test_page_param() {
        assert_eq!(page_param(""), 1);
        assert_eq!(page_param("?page=3"), 3);
        assert_eq!(page_param("page=7"), 7);
        assert_eq!(page_param("?status=All&page=2"), 2);
        assert_eq!(page_param("?page=abc"), 1);
        assert_eq!(page_param("?pages=9"), 1);
    }
}
