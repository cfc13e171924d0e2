use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::calendar::{NavCommand, SwipeIntent, to_bucket_key};
use crate::core::context::AppContext;
use crate::core::types::CalendarCommand;
use crate::errors::{Error, Result, require_parse};
use crate::extensions::string::ToDashSeparators;
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

/// The interactive calendar: one command per line, grid redrawn after moves.
pub struct CalendarFlow<'a> {
    ctx: &'a mut AppContext,
    dm: DisplayManager,
    chrome: UiChrome,
    logger: Logger,
    redraw: bool,
}

impl<'a> CalendarFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            dm: DisplayManager::new(),
            chrome: UiChrome::new(),
            logger,
            redraw: true,
        }
    }

    /// Same flow with a caller-chosen display (tests use the plain one).
    pub fn with_display(ctx: &'a mut AppContext, dm: DisplayManager) -> Self {
        Self {
            dm,
            ..Self::new(ctx)
        }
    }
}

impl<'a> Flow for CalendarFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        if self.redraw {
            self.dm.display_calendar(&self.ctx.calendar);
            self.redraw = false;
        }
        self.chrome.print_prompt("> ");
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.chrome.finish_prompt();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();

        let line = input.trim();
        let mut parts = line.split_whitespace();
        let Some(raw_command) = parts.next() else {
            return Ok(FlowCtrl::Continue);
        };
        let args: Vec<&str> = parts.collect();

        let command = match CalendarCommand::try_from(raw_command) {
            Ok(command) => command,
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleAndFile);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger
            .info(format!("Command run: {line}"), LogTarget::FileOnly);
        if let Err(err) = self.execute(command, &args) {
            self.logger.error(
                format!("Command '{raw_command}' failed. {err}"),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(FlowCtrl::Continue)
    }
}

impl<'a> CalendarFlow<'a> {
    pub fn context(&self) -> &AppContext {
        &*self.ctx
    }

    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.print_banner();
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Tasks path: {}", self.ctx.tasks_path.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!("Type 'help' for the list of commands.");
        println!();
        self.ctx.startup_displayed = true;
    }

    fn execute(&mut self, command: CalendarCommand, args: &[&str]) -> Result<()> {
        match command {
            CalendarCommand::Next => self.navigate(NavCommand::Next, args, command),
            CalendarCommand::Previous => self.navigate(NavCommand::Previous, args, command),
            CalendarCommand::ToggleView => self.navigate(NavCommand::ToggleView, args, command),
            CalendarCommand::Today => {
                expect_args(args, 0, command)?;
                self.ctx.calendar.go_to_today();
                self.redraw = true;
                Ok(())
            }
            CalendarCommand::Select => {
                expect_args(args, 1, command)?;
                let day = to_bucket_key(&args[0].to_dash_separators())?;
                self.navigate(NavCommand::Select(day), &[], command)
            }
            CalendarCommand::Swipe => self.swipe(args),
            CalendarCommand::Config => {
                expect_args(args, 0, command)?;
                self.dm.display_config(&self.ctx.config);
                Ok(())
            }
            CalendarCommand::Set => self.set(args),
            CalendarCommand::Reload => {
                expect_args(args, 0, command)?;
                let rejected = self.ctx.reload_tasks()?;
                println!(
                    "Loaded {} task(s), {rejected} skipped.",
                    self.ctx.calendar.index().len()
                );
                self.redraw = true;
                Ok(())
            }
            CalendarCommand::Help => {
                self.print_help();
                Ok(())
            }
        }
    }

    fn navigate(&mut self, nav: NavCommand, args: &[&str], command: CalendarCommand) -> Result<()> {
        expect_args(args, 0, command)?;
        self.ctx.calendar.navigate(nav);
        self.redraw = true;
        Ok(())
    }

    fn swipe(&mut self, args: &[&str]) -> Result<()> {
        expect_args(args, 4, CalendarCommand::Swipe)?;
        let mut coords = [0.0_f64; 4];
        for (slot, raw) in coords.iter_mut().zip(args) {
            *slot = raw.parse().map_err(|_| {
                Error::parse(format!(
                    "Invalid coordinate '{raw}'. Usage: {}",
                    CalendarCommand::Swipe.syntax()
                ))
            })?;
        }
        let [x1, y1, x2, y2] = coords;
        match self.ctx.calendar.swipe((x1, y1), (x2, y2)) {
            SwipeIntent::None => println!(
                "Gesture ignored: needs a mostly horizontal move of at least {}.",
                self.ctx.calendar.settings().swipe_threshold
            ),
            _ => self.redraw = true,
        }
        Ok(())
    }

    fn set(&mut self, args: &[&str]) -> Result<()> {
        let usage = format!("Usage: {}", CalendarCommand::Set.syntax());
        let key = require_parse(args.first(), usage.as_str())?;
        let value = args[1..].join(" ");
        if value.is_empty() {
            return Err(Error::parse(usage));
        }
        self.ctx.config.set(key, &value)?;
        if let Some((key, old, new)) = self.ctx.config.take_last_change() {
            self.logger.info(
                format!("Config {key} changed: {old} -> {new}"),
                LogTarget::ConsoleAndFile,
            );
        }
        self.ctx.apply_config()?;
        self.redraw = true;
        Ok(())
    }

    fn print_help(&self) {
        println!("Commands:");
        for command in CalendarCommand::iter() {
            println!("  {}", command.usage());
        }
        println!("  {:<27}{}", "exit | quit | q", "leave taskgrid");
    }
}

fn expect_args(args: &[&str], count: usize, command: CalendarCommand) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(usage_error(command))
    }
}

fn usage_error(command: CalendarCommand) -> Error {
    Error::parse(format!("Usage: {}", command.syntax()))
}
