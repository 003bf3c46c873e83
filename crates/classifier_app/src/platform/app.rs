use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use classifier_core::SubmitOutcome;
use classifier_engine::SubmissionController;
use classifier_logging::{classifier_info, LogDestination};
use log::LevelFilter;

use super::config::{load_config, ENDPOINT_ENV_VAR};
use super::ui::input::{parse_command, Command, HELP_TEXT};
use super::ui::render::render;

/// How often pending responses are polled while waiting for input.
const TICK: Duration = Duration::from_millis(75);
/// How long to wait for an outstanding request once stdin has closed.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(120);

pub fn run_app() -> anyhow::Result<()> {
    classifier_logging::initialize(LogDestination::default(), LevelFilter::Info);

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = load_config(&cwd, std::env::var(ENDPOINT_ENV_VAR).ok())?;
    let mut controller = SubmissionController::new(config.client_settings());

    // Stdin blocks, so it gets its own thread; the main loop keeps polling
    // the controller for settled responses in between lines.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut out = io::stdout().lock();
    writeln!(out, "Endpoint: {}\n{}\n", config.endpoint_base_url, HELP_TEXT)?;
    write!(out, "{}", render(&controller.view()))?;
    out.flush()?;

    loop {
        match line_rx.recv_timeout(TICK) {
            Ok(line) => {
                if !handle_line(&mut controller, &line, &mut out)? {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // Input ended (piped script); let an outstanding request finish.
                if controller.state().in_flight().is_some() {
                    controller.wait_for_settle(DRAIN_TIMEOUT);
                }
                redraw_if_dirty(&mut controller, &mut out)?;
                break;
            }
        }
        controller.pump();
        redraw_if_dirty(&mut controller, &mut out)?;
    }

    controller.shutdown();
    classifier_info!("Classifier front-end exiting");
    Ok(())
}

/// Returns false when the user asked to quit.
fn handle_line(
    controller: &mut SubmissionController,
    line: &str,
    out: &mut impl Write,
) -> io::Result<bool> {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(true);
        }
    };

    match command {
        Command::Set { field, value } => controller.update_field(field, value),
        Command::Sample => controller.load_sample(),
        Command::Reset => controller.reset(),
        Command::Dismiss => controller.dismiss_error(),
        Command::Submit => match controller.submit() {
            SubmitOutcome::Started => {}
            SubmitOutcome::NotSubmittable => {
                writeln!(out, "Job title and job description are required.")?;
            }
            SubmitOutcome::AlreadyInFlight => {
                writeln!(out, "A classification is already in progress.")?;
            }
        },
        Command::Show => write!(out, "{}", render(&controller.view()))?,
        Command::Help => writeln!(out, "{HELP_TEXT}")?,
        Command::Quit => return Ok(false),
    }
    out.flush()?;
    Ok(true)
}

fn redraw_if_dirty(controller: &mut SubmissionController, out: &mut impl Write) -> io::Result<()> {
    if controller.consume_dirty() {
        write!(out, "\n{}", render(&controller.view()))?;
        out.flush()?;
    }
    Ok(())
}
