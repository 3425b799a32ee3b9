//! Tab completion.
//!
//! A line without a space completes to the first verb (in `help` order)
//! it prefixes. A verb followed by one partial word completes that word
//! from what the verb accepts: visible folders for `cd`, visible files for
//! `cat`, both for `rm`, program names for `run`. Hidden entries never
//! complete.

use crate::commands::{Program, Verb, PARENT_TOKEN};
use crate::session::Session;

/// Completed line, or `None` when nothing matches.
pub fn complete(line: &str, session: &Session) -> Option<String> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }

    let Some((head, rest)) = line.split_once(char::is_whitespace) else {
        return Verb::ALL
            .into_iter()
            .find(|verb| verb.name().starts_with(line))
            .map(|verb| format!("{} ", verb.name()));
    };

    let partial = rest.trim_start();
    if partial.split_whitespace().count() > 1 || partial.ends_with(char::is_whitespace) {
        return None;
    }

    let verb = Verb::parse(head)?;
    candidates(verb, session)
        .into_iter()
        .find(|name| name.starts_with(partial))
        .map(|name| format!("{} {}", verb.name(), name))
}

fn candidates(verb: Verb, session: &Session) -> Vec<String> {
    let fs = session.current_fs();
    let folder = session.current_folder();
    let have = session.authority();

    let files = || -> Vec<String> {
        fs.visible_files(folder, have)
            .map(|files| files.into_iter().map(|f| f.name().to_string()).collect())
            .unwrap_or_default()
    };
    let folders = || -> Vec<String> {
        fs.visible_folders(folder, have)
            .map(|folders| folders.into_iter().map(|(_, f)| f.name().to_string()).collect())
            .unwrap_or_default()
    };

    match verb {
        Verb::Cd => {
            let mut names = vec![PARENT_TOKEN.to_string()];
            names.extend(folders());
            names
        }
        Verb::Cat => files(),
        Verb::Rm => {
            let mut names = files();
            names.extend(folders());
            names
        }
        Verb::Run => Program::ALL.iter().map(|p| p.name().to_string()).collect(),
        _ => Vec::new(),
    }
}
