//! Demo session: applies commands to a scoreboard and renders the result

use scoreboard::{Clock, Scoreboard, ScoreboardError};
use tracing::debug;
use types::record::MatchRecord;

use crate::command::{Command, Side, HELP};

/// Failure while executing a command
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Rejected by the registry; shown to the user, session continues
    #[error(transparent)]
    Scoreboard(#[from] ScoreboardError),

    #[error("failed to render summary: {0}")]
    Render(#[from] serde_json::Error),
}

/// What the host loop should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

/// Scoreboard plus presentation settings
pub struct Session<C: Clock> {
    board: Scoreboard<C>,
    json: bool,
}

impl<C: Clock> Session<C> {
    pub fn new(board: Scoreboard<C>, json: bool) -> Self {
        Self { board, json }
    }

    pub fn board(&self) -> &Scoreboard<C> {
        &self.board
    }

    /// Execute a command
    ///
    /// Successful mutations print the refreshed summary, as the original
    /// screen re-rendered after every button press.
    pub fn execute(&mut self, command: Command) -> Result<Step, SessionError> {
        match command {
            Command::Start { home, away } => {
                let record = self.board.start_match(&home, &away)?;
                debug!(match_id = %record.match_id(), "Started from demo");
            }
            Command::Score { home, away, home_score, away_score } => {
                self.board.update_score(&home, &away, home_score, away_score)?;
            }
            Command::Goal { side, home, away } => {
                let record = self
                    .board
                    .find(&home, &away)
                    .ok_or(ScoreboardError::MatchNotFound)?;
                let (mut home_score, mut away_score) =
                    (record.home_score().as_f64(), record.away_score().as_f64());
                match side {
                    Side::Home => home_score += 1.0,
                    Side::Away => away_score += 1.0,
                }
                self.board.update_score(&home, &away, home_score, away_score)?;
                debug!(%side, home_score, away_score, "Goal recorded");
            }
            Command::Finish { home, away } => {
                self.board.finish_match(&home, &away)?;
            }
            Command::Summary => {}
            Command::Matches => return Ok(Step::Print(render_list(self.board.get_matches().iter()))),
            Command::Help => return Ok(Step::Print(HELP.to_string())),
            Command::Quit => return Ok(Step::Quit),
        }

        self.render_summary().map(Step::Print)
    }

    /// Render the summary as numbered lines or JSON
    pub fn render_summary(&self) -> Result<String, SessionError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(&self.board.summary_snapshot())?);
        }
        Ok(render_list(self.board.get_summary().into_iter()))
    }
}

fn render_list<'a>(records: impl Iterator<Item = &'a MatchRecord>) -> String {
    let lines: Vec<String> = records
        .enumerate()
        .map(|(index, record)| format!("{}. {}", index + 1, record))
        .collect();

    if lines.is_empty() {
        "No matches yet".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse;
    use scoreboard::LogicalClock;

    fn session() -> Session<LogicalClock> {
        Session::new(Scoreboard::with_clock(LogicalClock::new(1)), false)
    }

    fn run(session: &mut Session<LogicalClock>, line: &str) -> Result<Step, SessionError> {
        session.execute(parse(line).unwrap())
    }

    #[test]
    fn test_empty_summary() {
        let mut session = session();
        assert_eq!(run(&mut session, "summary").unwrap(), Step::Print("No matches yet".to_string()));
    }

    #[test]
    fn test_start_and_score_render_summary() {
        let mut session = session();
        run(&mut session, "start Mexico, Canada").unwrap();
        run(&mut session, "start Spain, Brazil").unwrap();

        let step = run(&mut session, "score Spain, Brazil, 10, 2").unwrap();
        assert_eq!(
            step,
            Step::Print("1. Spain 10 - 2 Brazil\n2. Mexico 0 - 0 Canada".to_string())
        );
    }

    #[test]
    fn test_goal_increments_one_side() {
        let mut session = session();
        run(&mut session, "start Mexico, Canada").unwrap();
        run(&mut session, "goal away Mexico, Canada").unwrap();
        run(&mut session, "goal away Mexico, Canada").unwrap();
        run(&mut session, "goal home Mexico, Canada").unwrap();

        let record = &session.board().get_matches()[0];
        assert_eq!(record.to_string(), "Mexico 1 - 2 Canada");
    }

    #[test]
    fn test_goal_unknown_match() {
        let mut session = session();
        let err = run(&mut session, "goal home Mexico, Canada").unwrap_err();
        assert!(matches!(err, SessionError::Scoreboard(ScoreboardError::MatchNotFound)));
    }

    #[test]
    fn test_registry_errors_surface_message() {
        let mut session = session();
        run(&mut session, "start Mexico, Canada").unwrap();

        let err = run(&mut session, "start Mexico , Canada").unwrap_err();
        assert_eq!(err.to_string(), "Match already started");

        let err = run(&mut session, "score Mexico, Canada, -1, 0").unwrap_err();
        assert_eq!(err.to_string(), "Score cannot be negative");
    }

    #[test]
    fn test_matches_in_insertion_order() {
        let mut session = session();
        run(&mut session, "start Mexico, Canada").unwrap();
        run(&mut session, "start Spain, Brazil").unwrap();
        run(&mut session, "score Spain, Brazil, 3, 0").unwrap();

        assert_eq!(
            run(&mut session, "matches").unwrap(),
            Step::Print("1. Mexico 0 - 0 Canada\n2. Spain 3 - 0 Brazil".to_string())
        );
    }

    #[test]
    fn test_finish_and_quit() {
        let mut session = session();
        run(&mut session, "start Mexico, Canada").unwrap();

        assert_eq!(
            run(&mut session, "finish Mexico, Canada").unwrap(),
            Step::Print("No matches yet".to_string())
        );
        assert_eq!(run(&mut session, "quit").unwrap(), Step::Quit);
    }

    #[test]
    fn test_json_summary() {
        let mut session = Session::new(Scoreboard::with_clock(LogicalClock::new(1)), true);
        run(&mut session, "start Mexico, Canada").unwrap();

        let Step::Print(json) = run(&mut session, "score Mexico, Canada, 0, 5").unwrap() else {
            panic!("Expected printed summary");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"][0]["line"], "Mexico 0 - 5 Canada");
        assert_eq!(value["rows"][0]["position"], 1);
    }
}
