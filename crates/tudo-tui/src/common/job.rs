//! Single-slot guards for in-flight async operations.
//!
//! Each operation kind has one slot: the reducer allocates a [`JobId`], marks
//! the slot active when emitting the spawn effect, and ignores any completion
//! whose id is not the active one. A new submit while the slot is occupied is
//! a no-op, which is the re-entrancy guard the screens rely on.

/// Identifier for one spawned async operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(pub u64);

/// Monotonic job id generator.
#[derive(Debug, Default)]
pub struct JobSeq {
    next: u64,
}

impl JobSeq {
    pub fn next_id(&mut self) -> JobId {
        let id = JobId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Login,
    Register,
    TodoLoad,
    TodoPush,
}

/// Lifecycle state of one operation slot (mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct JobState {
    active: Option<JobId>,
}

impl JobState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: JobId) {
        self.active = Some(id);
    }

    /// Clears the slot if `id` is the active job. Returns false for stale
    /// completions (slot cleared or re-used since), which callers must drop.
    pub fn finish_if_active(&mut self, id: JobId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Jobs {
    pub login: JobState,
    pub register: JobState,
    pub todo_load: JobState,
    pub todo_push: JobState,
}

impl Jobs {
    pub fn state(&self, kind: JobKind) -> &JobState {
        match kind {
            JobKind::Login => &self.login,
            JobKind::Register => &self.register,
            JobKind::TodoLoad => &self.todo_load,
            JobKind::TodoPush => &self.todo_push,
        }
    }

    pub fn state_mut(&mut self, kind: JobKind) -> &mut JobState {
        match kind {
            JobKind::Login => &mut self.login,
            JobKind::Register => &mut self.register,
            JobKind::TodoLoad => &mut self.todo_load,
            JobKind::TodoPush => &mut self.todo_push,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.login.is_running()
            || self.register.is_running()
            || self.todo_load.is_running()
            || self.todo_push.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_if_active_rejects_stale_ids() {
        let mut seq = JobSeq::default();
        let mut state = JobState::default();

        let first = seq.next_id();
        state.start(first);
        let stale = seq.next_id();

        assert!(!state.finish_if_active(stale));
        assert!(state.is_running());
        assert!(state.finish_if_active(first));
        assert!(!state.is_running());
    }
}
