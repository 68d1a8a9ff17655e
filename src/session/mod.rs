//! Interactive session: one logged-in account, one event store.

pub mod render;
pub mod shell;

use crate::config::Config;
use crate::core::calculator::weekly::week_start;
use crate::core::logic::Core;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::models::account::UserAccount;
use crate::models::event_kind::EventKind;
use crate::ui::messages::{error, info, success};
use crate::utils::date::{parse_optional_date, today};
use crate::utils::time::parse_optional_time;
use chrono::Datelike;
use shell::{ShellCommand, parse_line};
use std::io::{self, BufRead, Write};

/// Whether the shell keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a> {
    store: EventStore,
    account: &'a UserAccount,
    cfg: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(account: &'a UserAccount, cfg: &'a Config) -> Self {
        Self {
            store: EventStore::new(),
            account,
            cfg,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    fn user(&self) -> &str {
        &self.account.username
    }

    /// Read commands until EOF or `quit`. Command errors are reported and the
    /// session goes on.
    pub fn run<R: BufRead>(&mut self, mut input: R, interactive: bool) -> AppResult<()> {
        let mut buf = Vec::new();

        loop {
            if interactive {
                print!("{}> ", self.user());
                io::stdout().flush().ok();
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                error("Skipping a line that is not valid UTF-8.");
                continue;
            };

            if self.handle_line(line) == Flow::Quit {
                break;
            }
        }

        info(format!(
            "Session closed: {} punch(es) recorded.",
            self.store.len()
        ));
        Ok(())
    }

    /// Parse and execute one line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Flow::Continue;
        }

        match parse_line(trimmed) {
            Ok(cli) => match self.execute(&cli.command) {
                Ok(flow) => flow,
                Err(e) => {
                    error(e);
                    Flow::Continue
                }
            },
            Err(e) => {
                // help output goes to stdout, parse errors to stderr
                e.print().ok();
                Flow::Continue
            }
        }
    }

    pub fn execute(&mut self, cmd: &ShellCommand) -> AppResult<Flow> {
        match cmd {
            ShellCommand::Punch { kind, date, time } => {
                let kind = EventKind::ek_from_str(kind)
                    .ok_or_else(|| AppError::InvalidEventKind(kind.clone()))?;
                let date = parse_optional_date(date.as_ref())?;
                let time = parse_optional_time(time.as_ref())?;

                let ev = Core::append_event(&mut self.store, &self.account.username, kind, date, time)?;
                success(format!(
                    "Punch #{} recorded: {} at {}",
                    ev.id,
                    ev.kind,
                    ev.get_date_time()
                ));
            }

            ShellCommand::Events { date } => {
                let date = parse_optional_date(date.as_ref())?;
                let events = Core::query_events(&self.store, self.user(), date);
                render::print_events(&events, self.cfg);
            }

            ShellCommand::Day { date } => {
                let date = parse_optional_date(date.as_ref())?.unwrap_or_else(today);
                let day = Core::daily_hours(&self.store, self.user(), date);
                render::print_day(self.account, date, &day, self.cfg);
            }

            ShellCommand::Week { from } => {
                let start = parse_optional_date(from.as_ref())?.unwrap_or_else(|| week_start(today()));
                let week = Core::weekly_report(&self.store, self.user(), start);
                render::print_week(&week, self.cfg);
            }

            ShellCommand::Month { month, year } => {
                let now = today();
                let m = Core::monthly_apportionment(
                    &self.store,
                    self.account,
                    month.unwrap_or(now.month()),
                    year.unwrap_or(now.year()),
                )?;
                render::print_month(self.account, &m, self.cfg);
            }

            ShellCommand::Export {
                format,
                file,
                sheet,
                range,
                force,
            } => {
                let req = ExportRequest {
                    format: *format,
                    sheet: *sheet,
                    file: file.as_str(),
                    range: range.as_deref(),
                    force: *force,
                    decimals: self.cfg.hours_decimals,
                };
                ExportLogic::export(&self.store, self.user(), &req)?;
            }

            ShellCommand::Whoami => render::print_account(self.account),

            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::io::Cursor;

    fn account() -> UserAccount {
        Config::default().accounts[0].clone()
    }

    #[test]
    fn run_records_punches_until_quit() {
        let acc = account();
        let cfg = Config::default();
        let mut session = Session::new(&acc, &cfg);

        let script = "\
# a comment
punch entry --date 2024-03-01 --time 08:00
punch exit --date 2024-03-01 --time 17:00

quit
punch extra_1 --date 2024-03-01 --time 18:00
";
        session.run(Cursor::new(script), false).unwrap();

        assert_eq!(session.store().len(), 2);
        let day = Core::daily_hours(
            session.store(),
            "maria",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        assert_eq!(day.entry, NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(day.total_hours, 9.0);
    }

    #[test]
    fn bad_commands_do_not_end_the_session() {
        let acc = account();
        let cfg = Config::default();
        let mut session = Session::new(&acc, &cfg);

        assert_eq!(session.handle_line("punch coffee"), Flow::Continue);
        assert_eq!(session.handle_line("punch entry --time 8h"), Flow::Continue);
        assert_eq!(session.handle_line("month --month 13 --year 2024"), Flow::Continue);
        assert_eq!(session.handle_line("fly"), Flow::Continue);
        assert!(session.store().is_empty());
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let acc = account();
        let cfg = Config::default();
        let mut session = Session::new(&acc, &cfg);

        let mut script = b"punch entry --date 2024-03-01 --time 08:00\n".to_vec();
        script.extend_from_slice(b"punch \xff\xfe\n");
        script.extend_from_slice(b"punch exit --date 2024-03-01 --time 17:00\n");
        session.run(Cursor::new(script), false).unwrap();

        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn punch_without_time_uses_now() {
        let acc = account();
        let cfg = Config::default();
        let mut session = Session::new(&acc, &cfg);

        session.handle_line("punch entry");
        let events = session.store().query("maria", Some(today()));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn invalid_kind_is_a_typed_error() {
        let acc = account();
        let cfg = Config::default();
        let mut session = Session::new(&acc, &cfg);

        let err = session
            .execute(&ShellCommand::Punch {
                kind: "nap".into(),
                date: None,
                time: None,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidEventKind(_)));
    }
}
