use std::cell::RefCell;

use crate::error::{AutoVersionError, Result};
use crate::git::{GitOperation, GitOutput, Vcs};

/// One recorded invocation against [MockVcs]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    StageAll,
    Commit { message: String },
    Tag { name: String, message: String },
    Push { remote: String, refspec: String },
}

impl VcsCall {
    fn operation(&self) -> GitOperation {
        match self {
            VcsCall::StageAll => GitOperation::Stage,
            VcsCall::Commit { .. } => GitOperation::Commit,
            VcsCall::Tag { .. } => GitOperation::Tag,
            VcsCall::Push { .. } => GitOperation::Push,
        }
    }
}

/// Mock version control for testing without running git
///
/// Every call is recorded, including the one that fails.
pub struct MockVcs {
    calls: RefCell<Vec<VcsCall>>,
    fail_on: Option<GitOperation>,
}

impl MockVcs {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        MockVcs {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Create a mock whose first call of `operation` exits non-zero
    pub fn failing_on(operation: GitOperation) -> Self {
        MockVcs {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(operation),
        }
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.borrow().clone()
    }

    /// Whether any call of `operation` was attempted
    pub fn attempted(&self, operation: GitOperation) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|call| call.operation() == operation)
    }

    fn record(&self, call: VcsCall) -> Result<GitOutput> {
        let operation = call.operation();
        self.calls.borrow_mut().push(call);

        if self.fail_on == Some(operation) {
            return Err(AutoVersionError::command(format!(
                "git {} failed with exit code 1: simulated failure",
                operation
            )));
        }

        Ok(GitOutput::default())
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for MockVcs {
    fn stage_all(&self) -> Result<GitOutput> {
        self.record(VcsCall::StageAll)
    }

    fn commit(&self, message: &str) -> Result<GitOutput> {
        self.record(VcsCall::Commit {
            message: message.to_string(),
        })
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<GitOutput> {
        self.record(VcsCall::Tag {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    fn push(&self, remote: &str, refspec: &str) -> Result<GitOutput> {
        self.record(VcsCall::Push {
            remote: remote.to_string(),
            refspec: refspec.to_string(),
        })
    }
}
