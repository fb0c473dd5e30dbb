// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for the ladder search.
//!
//! This is a thin wrapper for running one query by hand:
//!
//! ```text
//! ladder <lexicon-file> <from> <to>
//! ```
//!
//! Ladders are printed to stdout, one per line; search statistics go to
//! stderr. The library's tests are the real verification surface - this
//! binary exists for poking at a lexicon interactively.

use std::env;
use std::process;

use word_ladder::state::Counters;
use word_ladder::{read_lexicon, search, SearchContext};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: ladder <lexicon-file> <from> <to>");
        process::exit(2);
    }
    let (path, from, to) = (&args[1], &args[2], &args[3]);

    let lexicon = match read_lexicon(path) {
        Ok(lexicon) => lexicon,
        Err(err) => {
            eprintln!("ladder: cannot read lexicon {}: {}", path, err);
            process::exit(1);
        }
    };
    eprintln!("[ladder] {} lexicon words loaded", lexicon.len());

    let mut ctx = SearchContext::new(from, &lexicon);
    let ladders = search::run(&mut ctx, to);

    for ladder in &ladders {
        println!("{}", ladder.join(" -> "));
    }

    match ctx.shortest {
        Some(hops) => eprintln!(
            "[ladder] {} ladders of {} words ({} expanded, {} enqueued, {} edges pruned)",
            ladders.len(),
            hops + 1,
            ctx.statistics.get(Counters::WordsExpanded),
            ctx.statistics.get(Counters::WordsEnqueued),
            ctx.statistics.get(Counters::EdgesPruned),
        ),
        None => eprintln!(
            "[ladder] no ladder from {} to {} ({} words expanded)",
            from,
            to,
            ctx.statistics.get(Counters::WordsExpanded),
        ),
    }
}
