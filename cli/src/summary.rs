use std::io::{self, Write};

use unscramble_core::{Difficulty, MAX_STARS, Statistics, format_elapsed};

pub(crate) fn star_glyphs(stars: u8) -> String {
    let stars = stars.min(MAX_STARS);
    let mut glyphs = "★".repeat(stars.into());
    glyphs.push_str(&"☆".repeat((MAX_STARS - stars).into()));
    glyphs
}

pub(crate) fn write_summary(stats: &Statistics, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "Wins / games: {} / {}", stats.total_wins, stats.total_games)?;

    for difficulty in Difficulty::ALL {
        let level = stats.level(difficulty);
        let best = level
            .best_time
            .map_or_else(|| "-".to_string(), format_elapsed);
        writeln!(
            out,
            "{:<7} played {:>3}  won {:>3} ({:>3.0}%)  stars {:>3} (avg {:.1})  best {}",
            difficulty.name(),
            level.played,
            level.won,
            level.win_rate() * 100.0,
            level.total_stars,
            level.average_stars(),
            best
        )?;
    }

    if let Some(last) = stats.last_game() {
        writeln!(
            out,
            "Last game: {} ({}) {} in {}, {} attempts {}",
            last.word,
            last.difficulty,
            if last.won { "won" } else { "lost" },
            format_elapsed(last.elapsed_secs),
            last.attempts,
            star_glyphs(last.stars)
        )?;
    }

    if !stats.history.is_empty() {
        writeln!(out, "Recent rounds:")?;
        for entry in &stats.history {
            writeln!(
                out,
                "  {:<20} {:<6} {} {:>2} attempts {}",
                entry.word,
                entry.difficulty.name(),
                format_elapsed(entry.elapsed_secs),
                entry.attempts,
                if entry.won {
                    star_glyphs(entry.stars)
                } else {
                    "lost".to_string()
                }
            )?;
        }
    }

    Ok(())
}
