// std imports
use std::io::Write;

// third-party imports
use itertools::Itertools;

// local imports
use crate::{cli::Opt, error::Result, matcher::Matcher, settings::Settings, template};

// ---

/// Exit status when every candidate matched.
pub const EXIT_MATCHED: i32 = 0;
/// Exit status when at least one candidate did not match.
pub const EXIT_UNMATCHED: i32 = 1;
/// Exit status when the run failed.
pub const EXIT_FAILURE: i32 = 2;

/// Matches each candidate of `opt` and writes one line per match to `out`.
///
/// A line is either the rendered template or the candidate followed by the captures,
/// joined by the separator. Returns `true` if every candidate matched.
pub fn run(opt: &Opt, settings: &Settings, out: &mut impl Write) -> Result<bool> {
    let matcher = Matcher::from_settings(settings)?;

    let mut all = true;
    for candidate in &opt.candidates {
        let Some(caps) = matcher.captures(&opt.pattern, candidate) else {
            log::debug!("{candidate:?} does not match {:?}", opt.pattern);
            all = false;
            continue;
        };

        match &opt.template {
            Some(t) => writeln!(out, "{}", template::expand(t, &caps))?,
            None => writeln!(out, "{}", caps.iter().join(&opt.separator))?,
        }
    }
    out.flush()?;

    Ok(all)
}

/// Maps the outcome of [`run`] or of the preceding setup to a process exit status.
pub fn exit_code(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => EXIT_MATCHED,
        Ok(_) => EXIT_UNMATCHED,
        Err(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests;
