use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use unscramble_core::{
    Clock, Difficulty, GameSession, RandomSource, Round, RoundReport, StatsStore, TileStatus,
    format_elapsed,
};

use crate::summary::star_glyphs;

const HELP: &str = "\
Commands:
  swap <a> <b>   exchange the letters at positions a and b (from 1)
  shuffle        scramble the letters again
  check          check the current arrangement
  hint           show or hide the hint (medium only)
  new            give up and pick another word
  quit           give up and leave";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Swap(usize, usize),
    Shuffle,
    Check,
    Hint,
    New,
    Quit,
    Help,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("Usage: swap <a> <b>, positions start at 1")]
    BadSwap,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Help);
        };

        Ok(match name.to_ascii_lowercase().as_str() {
            "swap" | "s" => {
                let mut position = || {
                    words
                        .next()
                        .and_then(|word| word.parse::<usize>().ok())
                        .and_then(|pos| pos.checked_sub(1))
                        .ok_or(CommandError::BadSwap)
                };
                let a = position()?;
                let b = position()?;
                Command::Swap(a, b)
            }
            "shuffle" | "r" => Command::Shuffle,
            "check" | "c" => Command::Check,
            "hint" | "h" => Command::Hint,
            "new" | "n" => Command::New,
            "quit" | "q" | "exit" => Command::Quit,
            "help" | "?" => Command::Help,
            other => return Err(CommandError::Unknown(other.to_string())),
        })
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    lines.next().transpose()
}

fn render(round: &Round, elapsed_secs: u64, out: &mut impl Write) -> io::Result<()> {
    let positions: Vec<String> = (1..=round.tiles().len()).map(|pos| format!("{:>3}", pos)).collect();
    let letters: Vec<String> = round
        .tiles()
        .iter()
        .map(|tile| format!("{:>3}", tile.letter()))
        .collect();
    let marks: Vec<String> = round
        .tiles()
        .iter()
        .map(|tile| {
            let mark = match tile.status() {
                TileStatus::Unset => ' ',
                TileStatus::Correct => '+',
                TileStatus::Incorrect => '-',
            };
            format!("{:>3}", mark)
        })
        .collect();

    writeln!(out, "{}", positions.concat())?;
    writeln!(out, "{}", letters.concat())?;
    writeln!(out, "{}", marks.concat())?;
    write!(
        out,
        "attempts {}  time {}",
        round.attempts(),
        format_elapsed(elapsed_secs)
    )?;
    if let Some(hint) = round.hint() {
        write!(out, "  hint {}", hint)?;
    }
    writeln!(out)
}

/// Plays rounds until the input ends or the player quits. `word` is used for the first round only.
pub(crate) fn run<S, C, R>(
    session: &mut GameSession<S, C, R>,
    difficulty: Difficulty,
    mut word: Option<String>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()>
where
    S: StatsStore,
    C: Clock,
    R: RandomSource,
{
    let mut lines = input.lines();
    let range = difficulty.length_range().capped(session.config().max_word_len);

    loop {
        let next_word = match word.take() {
            Some(word) => word,
            None => {
                let text = format!("Word to scramble ({} letters, empty to stop): ", range);
                match prompt(&mut lines, &mut out, &text)? {
                    Some(line) if !line.trim().is_empty() => line,
                    _ => return Ok(()),
                }
            }
        };

        match session.start_round(&next_word, difficulty) {
            Ok(round) => render(round, 0, &mut out)?,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        }

        loop {
            let Some(line) = prompt(&mut lines, &mut out, "> ")? else {
                session.abandon_round();
                return Ok(());
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            };
            log::trace!("command: {:?}", command);

            let result = match command {
                Command::Swap(a, b) => session.swap(a, b),
                Command::Shuffle => session.shuffle(),
                Command::Hint => session.toggle_hint().map(|_| ()),
                Command::Check => match session.check() {
                    Ok(RoundReport::Won {
                        stars,
                        elapsed_secs,
                        attempts,
                    }) => {
                        writeln!(
                            out,
                            "Solved! {} in {} with {} attempts",
                            star_glyphs(stars),
                            format_elapsed(elapsed_secs),
                            attempts
                        )?;
                        session.close_round();
                        break;
                    }
                    Ok(RoundReport::Missed { encouragement }) => {
                        writeln!(out, "{}", encouragement)?;
                        Ok(())
                    }
                    Ok(RoundReport::Repeated { .. }) => {
                        writeln!(out, "Already checked, move some letters first")?;
                        continue;
                    }
                    Err(err) => Err(err),
                },
                Command::New => {
                    session.abandon_round();
                    break;
                }
                Command::Quit => {
                    session.abandon_round();
                    return Ok(());
                }
                Command::Help => {
                    writeln!(out, "{}", HELP)?;
                    continue;
                }
            };

            match result {
                Ok(()) => {
                    if let Some(round) = session.round() {
                        render(round, session.elapsed_secs(), &mut out)?;
                    }
                }
                Err(err) => writeln!(out, "{}", err)?,
            }
        }
    }
}
