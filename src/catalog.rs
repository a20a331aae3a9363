/// A single portfolio project. All fields are fixed at build time; the catalog
/// is never mutated while the app runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub problem: &'static str,
    pub solution: &'static str,
}

static PROJECTS: [Project; 5] = [
    Project {
        id: "castura",
        title: "Castura",
        description: "Screen recording tool with advanced editing features",
        long_description: "Castura is a comprehensive screen recording solution that allows \
            users to capture, edit, and share their screen recordings with ease. Built with \
            Electron and React, it provides a seamless experience across platforms.",
        image: "https://images.unsplash.com/photo-1595675024853-1e493b8a3607?q=80&w=2187&auto=format&fit=crop",
        tech: &["React", "Electron", "TypeScript", "FFmpeg"],
        github: Some("https://github.com/vivekgsindagi"),
        demo: Some("https://castura.app"),
        problem: "Existing screen recording tools often lack advanced editing capabilities \
            and user-friendly interfaces.",
        solution: "Developed a complete solution with intuitive UI and built-in editing \
            features, allowing users to record, edit, and share without switching applications.",
    },
    Project {
        id: "cropwise",
        title: "CropWise",
        description: "AI-powered crop yield prediction application",
        long_description: "CropWise uses machine learning algorithms to analyze soil data, \
            weather patterns, and historical crop performance to predict yield outcomes and \
            provide actionable insights to farmers.",
        image: "https://images.unsplash.com/photo-1500651230702-0e2d8a49d4ad?q=80&w=2370&auto=format&fit=crop",
        tech: &["Python", "TensorFlow", "React", "Flask"],
        github: Some("https://github.com/vivekgsindagi/cropwise"),
        demo: None,
        problem: "Traditional farming relies heavily on experience and historical data, \
            without leveraging modern predictive technologies.",
        solution: "Created an AI model that processes multiple data points to provide \
            accurate yield predictions and recommendations for improving crop output.",
    },
    Project {
        id: "repomarker",
        title: "RepoMarker",
        description: "Enhanced Markdown editor for GitHub repositories",
        long_description: "RepoMarker is a specialized Markdown editor designed specifically \
            for creating and editing documentation in GitHub repositories, with features like \
            live preview, templates, and GitHub API integration.",
        image: "https://images.unsplash.com/photo-1607706189992-eae578626c86?q=80&w=2370&auto=format&fit=crop",
        tech: &["React", "TypeScript", "GitHub API", "CodeMirror"],
        github: Some("https://github.com/vivekgsindagi/repomarker"),
        demo: Some("https://repomarker.dev"),
        problem: "GitHub's built-in markdown editor lacks advanced features needed for \
            complex documentation.",
        solution: "Built a feature-rich editor that streamlines the documentation process \
            with specialized tools for repository management.",
    },
    Project {
        id: "textdiff",
        title: "TextDiff",
        description: "Text comparison tool with visualization features",
        long_description: "TextDiff is a powerful utility that allows users to compare two \
            text documents and visualize the differences with advanced highlighting and \
            side-by-side comparisons.",
        image: "https://images.unsplash.com/photo-1516259762381-22954d7d3ad2?q=80&w=2366&auto=format&fit=crop",
        tech: &["JavaScript", "D3.js", "DiffMatchPatch", "React"],
        github: Some("https://github.com/vivekgsindagi/textdiff"),
        demo: None,
        problem: "Existing text comparison tools often display differences in ways that are \
            difficult to interpret.",
        solution: "Developed an intuitive visualization system that makes it easy to identify \
            and understand differences between text documents.",
    },
    Project {
        id: "pomodoro",
        title: "MyPomodoro",
        description: "Productivity tracker with Pomodoro technique integration",
        long_description: "MyPomodoro helps users manage their time effectively using the \
            Pomodoro technique, with additional features for task management, productivity \
            analytics, and customizable work/break intervals.",
        image: "https://images.unsplash.com/photo-1449156733864-dd5471bb7427?q=80&w=2370&auto=format&fit=crop",
        tech: &["React Native", "Redux", "Firebase", "Chart.js"],
        github: Some("https://github.com/vivekgsindagi/mypomodoro"),
        demo: Some("https://mypomodoro.app"),
        problem: "Many productivity apps lack personalization and data-driven insights on \
            work patterns.",
        solution: "Created a comprehensive productivity system that adapts to individual \
            work styles and provides actionable insights based on usage patterns.",
    },
];

/// The full catalog, in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Look up a project by its identifier.
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_stable_across_reads() {
        let first: Vec<&str> = projects().iter().map(|p| p.id).collect();
        let second: Vec<&str> = projects().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec!["castura", "cropwise", "repomarker", "textdiff", "pomodoro"]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        // Ids are hand-authored; this is the load-time uniqueness check.
        let mut ids: Vec<&str> = projects().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_find_by_id() {
        let castura = find_project("castura").expect("castura should exist");
        assert_eq!(castura.title, "Castura");
        assert_eq!(castura.demo, Some("https://castura.app"));
        assert!(find_project("nope").is_none());
    }

    #[test]
    fn test_records_are_complete() {
        for p in projects() {
            assert!(!p.id.is_empty());
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(!p.long_description.is_empty());
            assert!(p.image.starts_with("https://"));
            assert!(!p.tech.is_empty());
            assert!(!p.problem.is_empty());
            assert!(!p.solution.is_empty());
        }
    }
}
