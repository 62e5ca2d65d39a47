//! In-memory state behind the student dashboard: search, track filtering,
//! client-side pagination, per-track stats and the detail overlay.

use crate::models::{StudentRecord, Track};

/// Fixed client-side page size
pub const STUDENTS_PER_PAGE: usize = 10;

/// Track filter applied on top of the free-text search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackFilter {
    All,
    Only(Track),
}

impl TrackFilter {
    /// Cycle order: All -> each fixed track -> All
    pub fn next(&self) -> TrackFilter {
        match self {
            TrackFilter::All => TrackFilter::Only(Track::ALL[0].clone()),
            TrackFilter::Only(track) => {
                let position = Track::ALL.iter().position(|t| t == track);
                match position {
                    Some(i) if i + 1 < Track::ALL.len() => {
                        TrackFilter::Only(Track::ALL[i + 1].clone())
                    }
                    _ => TrackFilter::All,
                }
            }
        }
    }
}

/// Dashboard view state over the fully aggregated roster
pub struct DashboardState {
    students: Vec<StudentRecord>,
    pub search: String,
    pub filter: TrackFilter,
    /// 1-based, over the filtered set
    pub page: usize,
    /// Row cursor within the current page
    pub cursor: usize,
    /// Record bound to the detail overlay, if open
    pub selected: Option<StudentRecord>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            search: String::new(),
            filter: TrackFilter::All,
            page: 1,
            cursor: 0,
            selected: None,
        }
    }

    /// Replace the roster; arrival order is preserved, nothing is re-sorted
    pub fn set_students(&mut self, students: Vec<StudentRecord>) {
        self.students = students;
        self.page = 1;
        self.cursor = 0;
        self.selected = None;
    }

    pub fn total(&self) -> usize {
        self.students.len()
    }

    fn matches_search(student: &StudentRecord, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        [&student.name, &student.email, &student.institution]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_track(&self, student: &StudentRecord) -> bool {
        match &self.filter {
            TrackFilter::All => true,
            TrackFilter::Only(track) => &student.track == track,
        }
    }

    /// The filtered set, in roster order
    pub fn filtered(&self) -> Vec<&StudentRecord> {
        self.students
            .iter()
            .filter(|s| Self::matches_search(s, self.search.trim()) && self.matches_track(s))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(STUDENTS_PER_PAGE)
    }

    /// 0-based index of the first row on the current page
    pub fn start_index(&self) -> usize {
        (self.page - 1) * STUDENTS_PER_PAGE
    }

    /// Rows of the current page, in order
    pub fn current_page_rows(&self) -> Vec<&StudentRecord> {
        self.filtered()
            .into_iter()
            .skip(self.start_index())
            .take(STUDENTS_PER_PAGE)
            .collect()
    }

    /// "Showing X to Y of Z" bounds over the filtered set (1-based, inclusive)
    pub fn showing_range(&self) -> (usize, usize, usize) {
        let filtered = self.filtered().len();
        if filtered == 0 {
            return (0, 0, 0);
        }
        let start = self.start_index() + 1;
        let end = (self.start_index() + STUDENTS_PER_PAGE).min(filtered);
        (start, end, filtered)
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
        self.cursor = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.page = 1;
        self.cursor = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.page = 1;
        self.cursor = 0;
    }

    pub fn set_filter(&mut self, filter: TrackFilter) {
        self.filter = filter;
        self.page = 1;
        self.cursor = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
            self.cursor = 0;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.cursor = 0;
        }
    }

    pub fn move_cursor_down(&mut self) {
        let rows = self.current_page_rows().len();
        if rows > 0 && self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Bind the detail overlay to the row under the cursor
    pub fn open_selected(&mut self) {
        self.selected = self.current_page_rows().get(self.cursor).cloned().cloned();
    }

    pub fn close_selected(&mut self) {
        self.selected = None;
    }

    /// Count over the FULL roster, not the filtered set
    pub fn track_count(&self, track: &Track) -> usize {
        self.students.iter().filter(|s| &s.track == track).count()
    }

    /// Share of the full roster, 0.0 when empty
    pub fn track_percentage(&self, track: &Track) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        self.track_count(track) as f64 / self.students.len() as f64 * 100.0
    }

    /// Filter option label, e.g. "Cyber Security (1)"
    pub fn track_label(&self, track: &Track) -> String {
        format!("{} ({})", track, self.track_count(track))
    }

    /// Label for the unfiltered option, e.g. "All Tracks (6)"
    pub fn all_tracks_label(&self) -> String {
        format!("All Tracks ({})", self.total())
    }

    /// Empty-state text distinguishing "nothing registered" from "filtered out"
    pub fn empty_message(&self) -> &'static str {
        if !self.search.trim().is_empty() || self.filter != TrackFilter::All {
            "No students found matching your filters"
        } else {
            "No students registered yet"
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student(name: &str, email: &str, institution: &str, track: Track) -> StudentRecord {
        StudentRecord {
            id: format!("id-{name}"),
            name: name.to_string(),
            email: email.to_string(),
            phone: "0801".to_string(),
            course: None,
            level: None,
            track,
            institution: institution.to_string(),
            location: None,
            resume_url: None,
            skills: None,
            linkedin: None,
        }
    }

    /// Roster with track counts {SE: 3, CS: 1, ML: 0, PD: 2}
    fn sample_roster() -> Vec<StudentRecord> {
        vec![
            student("Ada Obi", "ada@unilag.edu", "University of Lagos", Track::SoftwareEngineering),
            student("Bola Ade", "bola@oau.edu", "Obafemi Awolowo University", Track::SoftwareEngineering),
            student("Chidi Eze", "chidi@ui.edu", "University of Ibadan", Track::SoftwareEngineering),
            student("Dayo Musa", "dayo@unn.edu", "University of Nigeria", Track::CyberSecurity),
            student("Efe Bello", "efe@unilag.edu", "University of Lagos", Track::ProductDesign),
            student("Funke Ojo", "funke@futa.edu", "Federal University of Technology", Track::ProductDesign),
        ]
    }

    fn loaded() -> DashboardState {
        let mut state = DashboardState::new();
        state.set_students(sample_roster());
        state
    }

    #[test]
    fn test_search_matches_name_email_or_institution_case_insensitively() {
        let mut state = loaded();

        state.set_search("ADA".to_string());
        assert_eq!(state.filtered().len(), 1);

        state.set_search("@oau.edu".to_string());
        assert_eq!(state.filtered().len(), 1);

        state.set_search("university of lagos".to_string());
        assert_eq!(state.filtered().len(), 2);

        state.set_search("zzz".to_string());
        assert_eq!(state.filtered().len(), 0);

        state.set_search(String::new());
        assert_eq!(state.filtered().len(), 6);
    }

    #[test]
    fn test_filter_semantics_hold_for_every_search_and_track_combination() {
        let mut state = loaded();
        let roster = sample_roster();

        let searches = ["", "ada", "UNIVERSITY", "edu", "nope"];
        let mut filters = vec![TrackFilter::All];
        filters.extend(Track::ALL.iter().cloned().map(TrackFilter::Only));

        for search in searches {
            for filter in &filters {
                state.set_search(search.to_string());
                state.set_filter(filter.clone());

                let expected: Vec<&str> = roster
                    .iter()
                    .filter(|s| {
                        let term = search.to_lowercase();
                        let hit = term.is_empty()
                            || s.name.to_lowercase().contains(&term)
                            || s.email.to_lowercase().contains(&term)
                            || s.institution.to_lowercase().contains(&term);
                        let track_ok = match filter {
                            TrackFilter::All => true,
                            TrackFilter::Only(track) => &s.track == track,
                        };
                        hit && track_ok
                    })
                    .map(|s| s.name.as_str())
                    .collect();

                let actual: Vec<&str> = state.filtered().iter().map(|s| s.name.as_str()).collect();
                assert_eq!(actual, expected, "search={search:?} filter={filter:?}");
            }
        }
    }

    #[test]
    fn test_track_counts_and_labels() {
        let state = loaded();
        assert_eq!(state.track_count(&Track::SoftwareEngineering), 3);
        assert_eq!(state.track_count(&Track::CyberSecurity), 1);
        assert_eq!(state.track_count(&Track::MachineLearning), 0);
        assert_eq!(state.track_count(&Track::ProductDesign), 2);
        assert_eq!(state.track_label(&Track::CyberSecurity), "Cyber Security (1)");
        assert_eq!(state.all_tracks_label(), "All Tracks (6)");
        assert_eq!(state.track_percentage(&Track::SoftwareEngineering), 50.0);
    }

    #[test]
    fn test_cyber_security_filter_shows_exactly_one_row() {
        let mut state = loaded();
        state.set_filter(TrackFilter::Only(Track::CyberSecurity));
        let rows = state.current_page_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Dayo Musa");
    }

    #[test]
    fn test_pagination_concatenation_reproduces_filtered_set() {
        let mut state = DashboardState::new();
        let roster: Vec<StudentRecord> = (0..37)
            .map(|i| {
                student(
                    &format!("Student {i:02}"),
                    &format!("s{i}@example.com"),
                    "UNILAG",
                    Track::ALL[i % 4].clone(),
                )
            })
            .collect();
        state.set_students(roster);

        assert_eq!(state.total_pages(), 4); // ceil(37 / 10)

        let mut seen = Vec::new();
        for page in 1..=state.total_pages() {
            state.page = page;
            let rows = state.current_page_rows();
            assert!(rows.len() <= STUDENTS_PER_PAGE);
            seen.extend(rows.iter().map(|s| s.name.clone()));
        }

        let expected: Vec<String> = state.filtered().iter().map(|s| s.name.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_page_resets_when_search_or_filter_changes() {
        let mut state = DashboardState::new();
        state.set_students(
            (0..25)
                .map(|i| {
                    student(
                        &format!("S{i}"),
                        &format!("s{i}@x.com"),
                        "UNILAG",
                        Track::SoftwareEngineering,
                    )
                })
                .collect(),
        );

        state.next_page();
        assert_eq!(state.page, 2);
        state.push_search_char('s');
        assert_eq!(state.page, 1);

        state.next_page();
        state.cycle_filter();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_navigation_clamps_at_bounds() {
        let mut state = loaded();
        state.previous_page();
        assert_eq!(state.page, 1);
        state.next_page(); // 6 students -> one page only
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_showing_range() {
        let mut state = DashboardState::new();
        state.set_students(
            (0..23)
                .map(|i| {
                    student(
                        &format!("S{i}"),
                        &format!("s{i}@x.com"),
                        "UNILAG",
                        Track::ProductDesign,
                    )
                })
                .collect(),
        );

        assert_eq!(state.showing_range(), (1, 10, 23));
        state.next_page();
        assert_eq!(state.showing_range(), (11, 20, 23));
        state.next_page();
        assert_eq!(state.showing_range(), (21, 23, 23));
    }

    #[test]
    fn test_detail_overlay_binding() {
        let mut state = loaded();
        assert!(state.selected.is_none());

        state.move_cursor_down();
        state.open_selected();
        assert_eq!(state.selected.as_ref().unwrap().name, "Bola Ade");

        state.close_selected();
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_empty_messages() {
        let mut empty = DashboardState::new();
        assert_eq!(empty.empty_message(), "No students registered yet");
        empty.set_search("ada".to_string());
        assert_eq!(empty.empty_message(), "No students found matching your filters");
    }
}
