// std imports
use std::io::{BufRead, Write};

// local imports
use crate::{
    batch::Batch,
    error::{Error, Result},
    text::Text,
};

// ---

#[derive(Debug, Clone)]
pub struct Options {
    pub ignore_case: bool,
    pub match_all: bool,
    pub invert: bool,
    pub count: bool,
    pub concurrency: usize,
    pub chunk_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ignore_case: false,
            match_all: false,
            invert: false,
            count: false,
            concurrency: 1,
            chunk_size: Batch::DEFAULT_CHUNK_SIZE.get(),
        }
    }
}

// ---

#[derive(Debug)]
pub struct App {
    options: Options,
    patterns: Vec<String>,
    batch: Batch,
}

impl App {
    /// Creates an application, rejecting malformed patterns before any subject is seen.
    pub fn new(patterns: Vec<String>, options: Options) -> Result<Self> {
        for (index, pattern) in patterns.iter().enumerate() {
            wildcard::validate(pattern.as_bytes()).map_err(|source| Error::InvalidPattern {
                index,
                pattern: pattern.clone(),
                source,
            })?;
        }

        let batch = Batch::new()
            .fold(options.ignore_case)
            .concurrency(options.concurrency)
            .chunk_size(options.chunk_size);

        Ok(Self {
            options,
            patterns,
            batch,
        })
    }

    /// Tells whether `subject` is selected.
    pub fn select<S: Text + ?Sized>(&self, subject: &S) -> Result<bool> {
        let results = self.batch.run(&self.patterns, subject)?;
        let matched = if self.options.match_all {
            results.iter().all(|&x| x)
        } else {
            results.iter().any(|&x| x)
        };

        Ok(matched != self.options.invert)
    }

    /// Selects subjects and writes them, or their number, to `output`.
    /// Returns the number of selected subjects.
    pub fn run<I, W>(&self, subjects: I, output: &mut W) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
        W: Write + ?Sized,
    {
        self.process(subjects.into_iter().map(Ok), output)
    }

    /// Same as [`App::run`] but takes newline separated subjects from `input`.
    pub fn run_lines<R, W>(&self, input: R, output: &mut W) -> Result<usize>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        self.process(input.split(b'\n').map(|line| line.map_err(Error::Io)), output)
    }

    fn process<I, S, W>(&self, subjects: I, output: &mut W) -> Result<usize>
    where
        I: Iterator<Item = Result<S>>,
        S: AsRef<[u8]>,
        W: Write + ?Sized,
    {
        let mut selected = 0;
        for subject in subjects {
            let subject = subject?;
            let subject = subject.as_ref();
            if self.select(subject)? {
                selected += 1;
                if !self.options.count {
                    output.write_all(subject)?;
                    output.write_all(b"\n")?;
                }
            }
        }

        if self.options.count {
            writeln!(output, "{}", selected)?;
        }
        output.flush()?;

        log::debug!("selected {} subjects", selected);
        Ok(selected)
    }
}

// ---

/// Outcome of a command line run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage was printed instead of matching anything.
    Help,
    /// The reader of the output went away before all subjects were written.
    Closed,
    /// Subjects were matched, this many of them were selected.
    Selected(usize),
}

impl Outcome {
    /// Process exit status, `1` means that nothing was selected.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Selected(0) => 1,
            Self::Help | Self::Closed | Self::Selected(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests;
