use crate::catalog::Project;

/// Suppression of page background scrolling while an overlay is shown.
///
/// The lock is owned by [`ModalController`]; nothing else writes it.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Production lock: toggles `overflow` on `document.body`.
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let _ = body.style().set_property("overflow", value);
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("auto");
    }
}

/// State machine for the project detail overlay.
///
/// Either `Closed` or `Open(project)`. Opening engages the scroll lock,
/// closing releases it; the `engaged` flag keeps the pairing exact no matter
/// how many times either transition is requested. After a close the last
/// selection is kept around (the open flag gates visibility), which lets the
/// overlay fade out without its content vanishing mid-transition.
pub struct ModalController<L: ScrollLock> {
    selected: Option<Project>,
    open: bool,
    engaged: bool,
    lock: L,
}

impl<L: ScrollLock> ModalController<L> {
    pub fn new(lock: L) -> Self {
        Self {
            selected: None,
            open: false,
            engaged: false,
            lock,
        }
    }

    /// Open the overlay for `project`. Replaces any current selection;
    /// the scroll lock is engaged at most once.
    pub fn open_with(&mut self, project: Project) {
        self.selected = Some(project);
        self.open = true;
        if !self.engaged {
            self.engaged = true;
            self.lock.lock();
        }
    }

    /// Close the overlay and restore scrolling. Safe to call any number of
    /// times; only the first call after an open releases the lock.
    pub fn close(&mut self) {
        self.open = false;
        if self.engaged {
            self.engaged = false;
            self.lock.unlock();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Currently selected project. May be stale after a close.
    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }
}

impl<L: ScrollLock> Drop for ModalController<L> {
    // Dismissal by other means (component teardown) still restores scrolling
    fn drop(&mut self) {
        if self.engaged {
            self.lock.unlock();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_project;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records the lock depth; negative or >1 depth means a pairing bug.
    #[derive(Clone, Default)]
    struct CountingLock {
        depth: Rc<Cell<i32>>,
    }

    impl ScrollLock for CountingLock {
        fn lock(&self) {
            self.depth.set(self.depth.get() + 1);
        }

        fn unlock(&self) {
            self.depth.set(self.depth.get() - 1);
        }
    }

    fn project(id: &str) -> Project {
        find_project(id).expect("catalog project").clone()
    }

    #[test]
    fn test_open_then_close() {
        let lock = CountingLock::default();
        let mut modal = ModalController::new(lock.clone());
        assert!(!modal.is_open());
        assert!(modal.selected().is_none());

        modal.open_with(project("castura"));
        assert!(modal.is_open());
        assert_eq!(modal.selected().map(|p| p.id), Some("castura"));
        assert_eq!(lock.depth.get(), 1);

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let lock = CountingLock::default();
        let mut modal = ModalController::new(lock.clone());

        modal.close();
        modal.close();
        assert_eq!(lock.depth.get(), 0);

        modal.open_with(project("textdiff"));
        modal.close();
        modal.close();
        modal.close();
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_reopen_without_close_locks_once() {
        let lock = CountingLock::default();
        let mut modal = ModalController::new(lock.clone());

        modal.open_with(project("castura"));
        modal.open_with(project("cropwise"));
        // Last write wins, lock engaged exactly once
        assert!(modal.is_open());
        assert_eq!(modal.selected().map(|p| p.id), Some("cropwise"));
        assert_eq!(lock.depth.get(), 1);

        modal.close();
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_selection_survives_close() {
        let mut modal = ModalController::new(CountingLock::default());
        modal.open_with(project("pomodoro"));
        modal.close();
        // Stale selection is fine while closed; open gates visibility
        assert!(!modal.is_open());
        assert_eq!(modal.selected().map(|p| p.id), Some("pomodoro"));
    }

    #[test]
    fn test_drop_releases_engaged_lock() {
        let lock = CountingLock::default();
        {
            let mut modal = ModalController::new(lock.clone());
            modal.open_with(project("repomarker"));
            assert_eq!(lock.depth.get(), 1);
        }
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_drop_after_close_does_not_double_unlock() {
        let lock = CountingLock::default();
        {
            let mut modal = ModalController::new(lock.clone());
            modal.open_with(project("repomarker"));
            modal.close();
        }
        assert_eq!(lock.depth.get(), 0);
    }
}
