//! The orchestrator that ties the directory, the navigator and the window
//! manager together.
//!
//! [`Workspacer`] serves one [`Command`] per invocation: it fetches a fresh
//! snapshot, builds the sequence, computes the answer and, for steps,
//! optionally acts on the target.  Nothing is cached between calls.

use crate::command::{Command, Direction, RangeArgs};
use crate::config::{Config, ConfigError};
use crate::directory;
use crate::navigator::{self, NavigationError};
use crate::traits::WindowManager;
use crate::workspace::Workspace;
use log::{debug, info};
use std::fmt;

/// Possible errors from the switcher.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    /// The current workspace or a step target could not be determined.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),

    /// The managed range or the configuration file was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// `current`, `next` and `prev`.
    One(Workspace),
    /// `all`.
    All(Vec<Workspace>),
}

impl Report {
    /// Render as JSON: an object for one workspace, an array for `all`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Report::One(ws) => serde_json::to_string(ws),
            Report::All(list) => serde_json::to_string(list),
        }
    }
}

impl fmt::Display for Report {
    /// One workspace per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::One(ws) => write!(f, "{}", ws),
            Report::All(list) => {
                for (i, ws) in list.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", ws)?;
                }
                Ok(())
            }
        }
    }
}

/// Serves commands against a [`WindowManager`].
///
/// # Typical usage
///
/// ```ignore
/// let wm = I3Wm::discover(None)?;
/// let workspacer = Workspacer::new(wm);
/// let managed = ManagedRange::new(1, 10).names();
/// let report = workspacer.handle(Command::step(Direction::Next), &managed)?;
/// println!("{}", report);
/// ```
pub struct Workspacer<W: WindowManager> {
    wm: W,
}

impl<W: WindowManager> Workspacer<W> {
    pub fn new(wm: W) -> Self {
        Self { wm }
    }

    /// Fetch a snapshot and build the sequence, placeholders included.
    pub fn sequence(&self, managed: &[String]) -> Result<Vec<Workspace>, SwitcherError> {
        let records = self
            .wm
            .workspaces()
            .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;
        debug!("window manager reported {} workspace(s)", records.len());
        Ok(directory::build(records, managed))
    }

    /// Resolve the managed names for `cmd`, then [`handle`](Self::handle) it.
    ///
    /// An invalid range is reported before the window manager is queried.
    pub fn serve(
        &self,
        config: &Config,
        cmd: Command,
        range: &RangeArgs,
    ) -> Result<Report, SwitcherError> {
        let managed = config.managed_names(range, &cmd)?;
        debug!("{} managed name(s)", managed.len());
        self.handle(cmd, &managed)
    }

    /// Process a single [`Command`].
    ///
    /// For steps, the container is moved before the target is activated, so
    /// with both flags set the container and the user end up on the target
    /// together.  The snapshot is not re-queried afterwards.
    pub fn handle(&self, cmd: Command, managed: &[String]) -> Result<Report, SwitcherError> {
        let sequence = self.sequence(managed)?;
        match cmd {
            Command::All => Ok(Report::All(sequence)),

            Command::Current => {
                let current = navigator::current(&sequence)?;
                Ok(Report::One(current.clone()))
            }

            Command::Step {
                direction,
                activate,
                move_container,
            } => {
                let target = Self::target(&sequence, direction)?;
                info!("{} -> {}", direction, target);
                if move_container {
                    info!("  moving container to {:?}", target.name);
                    self.wm
                        .move_container_to_workspace(&target.name)
                        .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;
                }
                if activate {
                    info!("  switching to {:?}", target.name);
                    self.wm
                        .switch_to_workspace(&target.name)
                        .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;
                }
                Ok(Report::One(target))
            }
        }
    }

    fn target(sequence: &[Workspace], direction: Direction) -> Result<Workspace, NavigationError> {
        let current = navigator::current(sequence)?;
        navigator::step(sequence, current, direction).cloned()
    }
}

//  Tests 

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::ManagedRange;
    use crate::workspace::WorkspaceRecord;
    use std::cell::{Cell, RefCell};

    /// Record-keeping mock window manager.
    #[derive(Debug, Default)]
    struct RecorderWm {
        records: Vec<WorkspaceRecord>,
        /// Number of `workspaces()` calls.
        queries: Cell<usize>,
        /// Every mutating call, in order, e.g. `"switch 3"` / `"move 3"`.
        calls: RefCell<Vec<String>>,
        fail_commands: bool,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("recorder error")]
    struct RecorderErr;

    impl WindowManager for RecorderWm {
        type Error = RecorderErr;

        fn workspaces(&self) -> Result<Vec<WorkspaceRecord>, RecorderErr> {
            self.queries.set(self.queries.get() + 1);
            Ok(self.records.clone())
        }

        fn switch_to_workspace(&self, name: &str) -> Result<(), RecorderErr> {
            if self.fail_commands {
                return Err(RecorderErr);
            }
            self.calls.borrow_mut().push(format!("switch {}", name));
            Ok(())
        }

        fn move_container_to_workspace(&self, name: &str) -> Result<(), RecorderErr> {
            if self.fail_commands {
                return Err(RecorderErr);
            }
            self.calls.borrow_mut().push(format!("move {}", name));
            Ok(())
        }
    }

    /// Window manager whose query always fails.
    struct UnreachableWm;

    impl WindowManager for UnreachableWm {
        type Error = RecorderErr;

        fn workspaces(&self) -> Result<Vec<WorkspaceRecord>, RecorderErr> {
            Err(RecorderErr)
        }

        fn switch_to_workspace(&self, _: &str) -> Result<(), RecorderErr> {
            Ok(())
        }

        fn move_container_to_workspace(&self, _: &str) -> Result<(), RecorderErr> {
            Ok(())
        }
    }

    fn rec(name: &str, visible: bool, focused: bool) -> WorkspaceRecord {
        WorkspaceRecord {
            name: name.into(),
            visible,
            focused,
        }
    }

    fn make_switcher(records: Vec<WorkspaceRecord>) -> Workspacer<RecorderWm> {
        Workspacer::new(RecorderWm {
            records,
            ..Default::default()
        })
    }

    fn one_to_three() -> Vec<String> {
        ManagedRange::new(1, 3).names()
    }

    #[test]
    fn current_reports_focused_workspace() {
        let s = make_switcher(vec![rec("1", true, true), rec("2", false, false)]);
        let report = s.handle(Command::Current, &[]).unwrap();
        assert_eq!(report, Report::One(Workspace::created("1", true, true)));
    }

    #[test]
    fn all_includes_placeholders() {
        let s = make_switcher(vec![rec("2", true, true)]);
        let report = s.handle(Command::All, &one_to_three()).unwrap();
        assert_eq!(
            report,
            Report::All(vec![
                Workspace::placeholder("1"),
                Workspace::created("2", true, true),
                Workspace::placeholder("3"),
            ])
        );
    }

    #[test]
    fn next_without_flags_has_no_side_effects() {
        let s = make_switcher(vec![rec("2", true, true)]);
        let report = s
            .handle(Command::step(Direction::Next), &one_to_three())
            .unwrap();
        assert_eq!(report, Report::One(Workspace::placeholder("3")));
        assert!(s.wm.calls.borrow().is_empty());
    }

    #[test]
    fn prev_wraps_around() {
        let s = make_switcher(vec![rec("1", true, true), rec("2", false, false)]);
        let report = s.handle(Command::step(Direction::Prev), &[]).unwrap();
        assert_eq!(report, Report::One(Workspace::created("2", false, false)));
    }

    #[test]
    fn move_happens_before_switch() {
        let s = make_switcher(vec![rec("2", true, true)]);
        s.handle(
            Command::Step {
                direction: Direction::Prev,
                activate: true,
                move_container: true,
            },
            &one_to_three(),
        )
        .unwrap();
        assert_eq!(*s.wm.calls.borrow(), vec!["move 1", "switch 1"]);
    }

    #[test]
    fn activate_only() {
        let s = make_switcher(vec![rec("a", true, true), rec("b", false, false)]);
        s.handle(
            Command::Step {
                direction: Direction::Next,
                activate: true,
                move_container: false,
            },
            &[],
        )
        .unwrap();
        assert_eq!(*s.wm.calls.borrow(), vec!["switch b"]);
    }

    #[test]
    fn missing_current_is_not_found() {
        let s = make_switcher(Vec::new());
        let err = s
            .handle(Command::Current, &ManagedRange::new(1, 2).names())
            .unwrap_err();
        assert!(matches!(
            err,
            SwitcherError::Navigation(NavigationError::NoCurrent)
        ));
    }

    #[test]
    fn missing_current_skips_side_effects() {
        let s = make_switcher(vec![rec("1", true, false)]);
        let err = s
            .handle(
                Command::Step {
                    direction: Direction::Next,
                    activate: true,
                    move_container: true,
                },
                &[],
            )
            .unwrap_err();
        assert!(matches!(err, SwitcherError::Navigation(_)));
        assert!(s.wm.calls.borrow().is_empty());
    }

    #[test]
    fn query_failure_is_a_window_manager_error() {
        let s = Workspacer::new(UnreachableWm);
        let err = s.handle(Command::All, &[]).unwrap_err();
        assert!(matches!(err, SwitcherError::WindowManager(_)));
    }

    #[test]
    fn command_failure_is_a_window_manager_error() {
        let s = Workspacer::new(RecorderWm {
            records: vec![rec("1", true, true), rec("2", false, false)],
            fail_commands: true,
            ..Default::default()
        });
        let err = s
            .handle(
                Command::Step {
                    direction: Direction::Next,
                    activate: true,
                    move_container: false,
                },
                &[],
            )
            .unwrap_err();
        assert!(matches!(err, SwitcherError::WindowManager(_)));
    }

    #[test]
    fn serve_steps_through_default_range() {
        let s = make_switcher(vec![rec("1", true, true)]);
        let report = s
            .serve(
                &Config::default(),
                Command::step(Direction::Next),
                &RangeArgs::default(),
            )
            .unwrap();
        assert_eq!(report, Report::One(Workspace::placeholder("2")));
        assert_eq!(s.wm.queries.get(), 1);
    }

    #[test]
    fn serve_prev_wraps_to_ten() {
        let s = make_switcher(vec![rec("1", true, true)]);
        let report = s
            .serve(
                &Config::default(),
                Command::step(Direction::Prev),
                &RangeArgs::default(),
            )
            .unwrap();
        assert_eq!(report, Report::One(Workspace::placeholder("10")));
    }

    #[test]
    fn serve_all_has_no_default_range() {
        let s = make_switcher(vec![rec("1", true, true)]);
        let report = s
            .serve(&Config::default(), Command::All, &RangeArgs::default())
            .unwrap();
        assert_eq!(report, Report::All(vec![Workspace::created("1", true, true)]));
    }

    #[test]
    fn half_range_is_rejected_before_querying() {
        let s = make_switcher(vec![rec("1", true, true)]);
        let range = RangeArgs {
            min: Some(1),
            max: None,
        };
        let err = s
            .serve(
                &Config::default(),
                Command::Step {
                    direction: Direction::Next,
                    activate: true,
                    move_container: true,
                },
                &range,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SwitcherError::Config(ConfigError::PartialRange("max"))
        ));
        assert_eq!(s.wm.queries.get(), 0);
        assert!(s.wm.calls.borrow().is_empty());
    }

    #[test]
    fn report_display() {
        let one = Report::One(Workspace::placeholder("3"));
        assert_eq!(one.to_string(), r#"<Workspace "3" create>"#);

        let all = Report::All(vec![
            Workspace::created("1", true, true),
            Workspace::placeholder("2"),
        ]);
        assert_eq!(
            all.to_string(),
            "<Workspace \"1\" visible focused>\n<Workspace \"2\" create>"
        );
        assert_eq!(Report::All(Vec::new()).to_string(), "");
    }

    #[test]
    fn report_json() {
        let all = Report::All(vec![Workspace::placeholder("2")]);
        let v: serde_json::Value = serde_json::from_str(&all.to_json().unwrap()).unwrap();
        assert_eq!(v[0]["name"], "2");
        assert_eq!(v[0]["is_created"], false);

        let one = Report::One(Workspace::created("1", true, true));
        let v: serde_json::Value = serde_json::from_str(&one.to_json().unwrap()).unwrap();
        assert_eq!(v["is_focused"], true);
    }
}
