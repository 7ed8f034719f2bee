// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The interactive shell: a read-eval loop over the complaint store.
//!
//! One [`ComplaintStore`] lives for the whole process and survives
//! logouts, so a student can submit, log out, and a warden can pick the
//! complaint up in the same session. Each input line is parsed into a
//! command, gated by the session role, and dispatched; errors are printed
//! and never terminate the loop.

use std::io::{self, BufRead, Write};

use hmc_core::ComplaintStore;

use crate::cli::Cli;
use crate::colors;
use crate::commands;
use crate::error::{Error, Result};
use crate::session::{Role, Session};

const BANNER: &str = "hmc - hostel maintenance complaints (in-memory; quitting discards everything)";

const LOGIN_HELP: &str = "log in with: <student|warden|staff> [name]";

/// What the loop should do after handling one line.
#[derive(Debug)]
enum Outcome {
    Continue,
    Logout,
    Quit,
}

/// What the login prompt produced from one line.
enum LoginOutcome {
    Continue,
    Login(Session),
    Quit,
}

pub fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut store = ComplaintStore::new();
    let mut session = cli.role.map(|role| {
        let user = cli.user.clone().unwrap_or_else(|| role.to_string());
        Session::new(user, role)
    });

    println!("{}", colors::header(BANNER));

    loop {
        match session {
            None => {
                print!("login> ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else { break };
                match parse_login(&line?) {
                    Ok(LoginOutcome::Continue) => {}
                    Ok(LoginOutcome::Login(next)) => {
                        println!("Logged in as {} ({})", next.user, next.role);
                        session = Some(next);
                    }
                    Ok(LoginOutcome::Quit) => break,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        println!("{}", LOGIN_HELP);
                    }
                }
            }
            Some(ref current) => {
                print!("{}@{}> ", current.user, current.role);
                io::stdout().flush()?;
                let Some(line) = lines.next() else { break };
                match dispatch(&mut store, current, &line?) {
                    Ok(Outcome::Continue) => {}
                    Ok(Outcome::Logout) => session = None,
                    Ok(Outcome::Quit) => break,
                    Err(e) => eprintln!("error: {}", e),
                }
            }
        }
    }

    Ok(())
}

/// Parse a login line: `<role> [name]` (a leading `login` word is allowed).
fn parse_login(line: &str) -> Result<LoginOutcome> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(LoginOutcome::Continue);
    };

    match first.to_lowercase().as_str() {
        "quit" | "exit" => return Ok(LoginOutcome::Quit),
        "help" => {
            println!("{}", LOGIN_HELP);
            return Ok(LoginOutcome::Continue);
        }
        _ => {}
    }

    let role_token = if first.eq_ignore_ascii_case("login") {
        tokens
            .next()
            .ok_or(Error::Usage("usage: login <student|warden|staff> [name]"))?
    } else {
        first
    };
    let role: Role = role_token.parse()?;

    let name = tokens.collect::<Vec<_>>().join(" ");
    let user = if name.is_empty() { role.to_string() } else { name };
    Ok(LoginOutcome::Login(Session::new(user, role)))
}

fn dispatch(store: &mut ComplaintStore, session: &Session, line: &str) -> Result<Outcome> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(Outcome::Continue);
    };
    let command = first.to_lowercase();
    let rest: Vec<&str> = tokens.collect();

    match command.as_str() {
        "quit" | "exit" => Ok(Outcome::Quit),
        "logout" => Ok(Outcome::Logout),
        "help" => {
            println!("{}", help_text(session.role));
            Ok(Outcome::Continue)
        }
        "submit" | "edit" | "delete" | "assign" | "complete" | "list" | "export" => {
            if !session.role.allows(&command) {
                return Err(Error::NotPermitted {
                    role: session.role.to_string(),
                    command,
                });
            }
            tracing::debug!(user = %session.user, role = %session.role, %command, "dispatch");
            run_command(store, session, &command, &rest)?;
            Ok(Outcome::Continue)
        }
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}

fn run_command(
    store: &mut ComplaintStore,
    session: &Session,
    command: &str,
    rest: &[&str],
) -> Result<()> {
    match command {
        "submit" => match rest {
            [category, description @ ..] if !description.is_empty() => {
                commands::submit::run(store, category, &description.join(" "))
            }
            _ => Err(Error::Usage("usage: submit <category> <description>")),
        },
        "edit" => match rest {
            [reference, category, description @ ..] if !description.is_empty() => {
                commands::edit::run(store, reference, category, &description.join(" "))
            }
            _ => Err(Error::Usage("usage: edit <ref> <category> <description>")),
        },
        "delete" => match rest {
            [reference] => commands::delete::run(store, reference),
            _ => Err(Error::Usage("usage: delete <ref>")),
        },
        "assign" => match rest {
            [reference, staff @ ..] if !staff.is_empty() => {
                commands::assign::run(store, reference, &staff.join(" "))
            }
            _ => Err(Error::Usage("usage: assign <ref> <staff name>")),
        },
        "complete" => match rest {
            [reference] => commands::complete::run(store, reference),
            _ => Err(Error::Usage("usage: complete <ref>")),
        },
        "list" => commands::list::run(store, session),
        "export" => commands::export::run(store),
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}

/// Per-role command summary shown by `help`, mirroring what each
/// dashboard of the app offers.
fn help_text(role: Role) -> &'static str {
    match role {
        Role::Student => {
            "\
Commands:
  submit <category> <description>       Submit a new complaint
  edit <ref> <category> <description>   Rewrite one of your complaints
  delete <ref>                          Withdraw a complaint
  list                                  Show all complaints
  export                                Dump the collection as JSON
  logout                                Return to the login prompt
  quit                                  Exit (state is discarded)

Categories: water, electricity, furniture, cleanliness, other
References: list position (1), id (cmp-ab12cd34), or unique id prefix"
        }
        Role::Warden => {
            "\
Commands:
  assign <ref> <staff name>   Hand a pending complaint to a staff member
  list                        Show all complaints
  export                      Dump the collection as JSON
  logout                      Return to the login prompt
  quit                        Exit (state is discarded)

References: list position (1), id (cmp-ab12cd34), or unique id prefix"
        }
        Role::Staff => {
            "\
Commands:
  complete <ref>   Mark an assigned complaint as completed
  list             Show complaints assigned to staff
  export           Dump the collection as JSON
  logout           Return to the login prompt
  quit             Exit (state is discarded)

References: list position (1), id (cmp-ab12cd34), or unique id prefix"
        }
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
