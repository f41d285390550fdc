//! Interactive console dialogue
//!
//! Walks the reader through the three synopsis questions (subject, name,
//! goal) in a conversational tone. Input parsing is generic over BufRead so
//! the dialogue is testable without a terminal.

use std::io::{self, BufRead, Write};

use crate::domain::story::Synopsis;

const BANNER: &str = r#"
   _____ __                      __           __
  / ___// /_____  _______  _____/ /__  _____/ /__
  \__ \/ __/ __ \/ ___/ / / / __  / _ \/ ___/ //_/
 ___/ / /_/ /_/ / /  / /_/ / /_/ /  __/ /__/ ,<
/____/\__/\____/_/   \__, /\__,_/\___/\___/_/|_|
                    /____/
"#;

/// Prints the startup banner.
pub fn print_banner() {
    println!("{}", BANNER);
}

/// Prints the sign-off line once the deck is ready.
pub fn print_closing() {
    println!("\nWe've done it.");
}

/// Collects the story synopsis through an interactive dialogue on stdin.
pub fn collect_synopsis() -> io::Result<Synopsis> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    collect_synopsis_from(&mut lines)
}

fn collect_synopsis_from<R: BufRead>(input: &mut R) -> io::Result<Synopsis> {
    println!("Hello! Welcome to story book. Let's write a story together.");
    println!("Let's write a story about an animal.");
    println!("What kind of Animal should we write about?");
    println!();

    let subject = read_answer(input)?;

    println!("\nAh! {}! That's perfect!", subject);
    println!("And what should we name this {}?\n", subject);

    let name = read_answer(input)?;

    println!("\nA {} named {}. Interesting.", subject, name);
    println!("What are {}'s aspirations? Finish the sentence:", name);
    println!("\"{} is trying to...\"\n", name);

    let goal = read_answer(input)?;

    println!("\nOkay. {} is trying to {}.\n", name, goal);

    Ok(Synopsis {
        subject,
        name,
        goal,
    })
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_synopsis_trims_answers() {
        let mut input = Cursor::new("  zebra \nPoncho\n become a giraffe\n");
        let synopsis = collect_synopsis_from(&mut input).unwrap();
        assert_eq!(synopsis.subject, "zebra");
        assert_eq!(synopsis.name, "Poncho");
        assert_eq!(synopsis.goal, "become a giraffe");
    }

    #[test]
    fn test_collect_synopsis_handles_crlf() {
        let mut input = Cursor::new("fox\r\nFinn\r\nfind the moon\r\n");
        let synopsis = collect_synopsis_from(&mut input).unwrap();
        assert_eq!(synopsis.subject, "fox");
        assert_eq!(synopsis.name, "Finn");
        assert_eq!(synopsis.goal, "find the moon");
    }
}
