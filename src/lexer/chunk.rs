//! First lexing stage: cutting source text into chunks.
//!
//! A single left-to-right pass produces trimmed, non-empty fragments.
//! Comments vanish entirely. A quoted literal survives as one fragment with
//! its quotes, shielding whitespace and operators (comment markers are the
//! one thing recognized even there). `->` is grouped into its own fragment,
//! structural characters stand alone, a fragment opened by `<` is closed by
//! the next `>`, and everything else is cut at whitespace.
//!
//! The rules run in a fixed order for every character, and that order is
//! load-bearing: whitespace wins over comment markers, comment markers win
//! over string state, comment state wins over everything below it. Reordering
//! changes what lexes.

use std::iter::Peekable;
use std::str::Chars;

use super::{is_structural, TERMINATOR};

/// Lexing mode. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    /// After a lone `*`: dropping characters until the next newline.
    LineComment,
    /// Between `**` markers: dropping characters until the region closes.
    BlockComment,
    /// Inside a double-quoted literal: whitespace and structural characters
    /// accumulate instead of splitting.
    InString,
}

struct Chunker<'a> {
    input: Peekable<Chars<'a>>,
    mode: Mode,
    /// The previous character of the raw input, whatever became of it.
    prev: Option<char>,
    fragment: String,
    chunks: Vec<String>,
}

/// Cut the source into chunks.
pub(super) fn chunk(source: &str) -> Vec<String> {
    Chunker {
        input: source.chars().peekable(),
        mode: Mode::Normal,
        prev: None,
        fragment: String::new(),
        chunks: Vec::new(),
    }
    .run()
}

impl Chunker<'_> {
    fn run(mut self) -> Vec<String> {
        while let Some(c) = self.input.next() {
            let peek = self.input.peek().copied();
            self.step(c, peek);
            self.prev = Some(c);
        }
        self.flush();
        self.chunks
    }

    /// Close the accumulator into the output, keeping it only if anything
    /// remains after trimming.
    fn flush(&mut self) {
        let trimmed = self.fragment.trim();
        if !trimmed.is_empty() {
            self.chunks.push(trimmed.to_owned());
        }
        self.fragment.clear();
    }

    fn step(&mut self, c: char, peek: Option<char>) {
        let in_string = self.mode == Mode::InString;

        if matches!(c, ' ' | '\t' | '\n') && !in_string {
            self.flush();
            if c == '\n' && self.mode == Mode::LineComment {
                self.mode = Mode::Normal;
            }
        } else if c == '*' {
            // Comment markers are recognized ahead of string state, so a
            // star inside a quoted literal still opens a comment.
            self.asterisk(peek);
        } else if matches!(self.mode, Mode::LineComment | Mode::BlockComment) {
            // Comment body.
        } else if c == '"' {
            if in_string {
                self.fragment.push(c);
                self.mode = Mode::Normal;
                self.flush();
            } else {
                self.flush();
                self.fragment.push(c);
                self.mode = Mode::InString;
            }
        } else if c == '-' && peek == Some('>') && !in_string {
            self.flush();
            self.fragment.push(c);
        } else if c == '>' && self.prev == Some('-') && !in_string {
            // Completes the arrow started by the branch above.
            self.fragment.push(c);
            self.flush();
        } else if (is_structural(c) || c == TERMINATOR) && !in_string {
            self.flush();
            self.fragment.push(c);
            self.flush();
        } else if c == '<' && !in_string {
            self.flush();
            self.fragment.push(c);
        } else if c == '>' && !in_string {
            // A bare `>` closes the current fragment rather than opening a
            // fresh one; `<x>` stays whole while `a>` glues to `a`.
            self.fragment.push(c);
            self.flush();
        } else {
            self.fragment.push(c);
        }
    }

    /// Comment-marker transitions. The star itself is never emitted.
    fn asterisk(&mut self, peek: Option<char>) {
        if self.prev == Some('*') {
            // Second star of a marker the previous step already handled.
            return;
        }
        if peek == Some('*') {
            self.mode = match self.mode {
                Mode::BlockComment => Mode::Normal,
                _ => Mode::BlockComment,
            };
        } else if self.mode != Mode::BlockComment {
            // Block comments absorb lone stars.
            self.mode = Mode::LineComment;
        }
    }
}
