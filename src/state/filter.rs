use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed(),
            Filter::Completed => task.completed(),
        }
    }

    /// The ordered subsequence of `tasks` this filter keeps.
    pub fn apply(self, tasks: &[Task]) -> impl Iterator<Item = &Task> {
        tasks.iter().filter(move |task| self.matches(task))
    }
}
