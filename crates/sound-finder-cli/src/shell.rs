//! Interactive command prompt.
//!
//! The shell is an explicit loop over top-level commands. Any nested prompt
//! can answer `back`, `prompt` or `cancel`, which surfaces as
//! [`Interrupt::Back`] through `?` and lands the user at the top-level
//! prompt again.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use sound_finder::VersionedDatasets;

/// Settings fixed for the lifetime of a shell.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub sounds_dir: PathBuf,
    pub output: PathBuf,
    /// Pause between messages so they can be read.
    pub delay: bool,
}

/// Why a prompt did not produce an answer.
#[derive(Debug)]
pub enum Interrupt {
    /// The user asked to go back to the top-level prompt.
    Back,
    /// Input ended.
    Eof,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

pub type Step<T> = Result<T, Interrupt>;

/// Conversation state that changes as the user goes through prompts.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub first_prompt: bool,
    pub first_base_ask: bool,
    /// Scales the pauses of the confirmation step; shrinks on every retry.
    pub delay_multiplier: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            first_prompt: true,
            first_base_ask: true,
            delay_multiplier: 1.0,
        }
    }
}

enum Command {
    Exit,
    Start,
    Help(Option<String>),
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        let lowered = line.to_lowercase();
        let mut words = lowered.split_whitespace();
        match words.next() {
            Some("end" | "exit" | "close" | "stop") => Command::Exit,
            Some("start" | "begin") => Command::Start,
            Some("help" | "commands") => Command::Help(words.next().map(str::to_string)),
            _ => Command::Unknown,
        }
    }
}

pub struct Shell<R, W> {
    pub(crate) input: R,
    pub(crate) out: W,
    pub(crate) config: ShellConfig,
    pub(crate) session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, config: ShellConfig) -> Self {
        Self {
            input,
            out,
            config,
            session: Session::default(),
        }
    }

    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Sound Finder!")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Sounds are read from '{}'. To use sounds from another version, add a sounds json \
             named like 'sounds <version>.json' to that folder.",
            self.config.sounds_dir.display()
        )
    }

    /// Runs commands until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.command() {
                Ok(true) | Err(Interrupt::Back) => continue,
                Ok(false) | Err(Interrupt::Eof) => return Ok(()),
                Err(Interrupt::Io(err)) => return Err(err),
            }
        }
    }

    /// Reads and executes one top-level command; `false` means exit.
    fn command(&mut self) -> Step<bool> {
        writeln!(self.out)?;
        write!(self.out, "Please type a command.")?;
        if self.session.first_prompt {
            write!(self.out, " (Type \"help\" to see the list of commands)")?;
        }
        writeln!(self.out)?;
        self.session.first_prompt = false;

        let line = self.read_line()?;
        writeln!(self.out)?;

        match Command::parse(&line) {
            Command::Exit => {
                writeln!(self.out, "Goodbye, happy coding!")?;
                Ok(false)
            }
            Command::Start => {
                self.start()?;
                Ok(true)
            }
            Command::Help(topic) => {
                self.help(topic.as_deref())?;
                Ok(true)
            }
            Command::Unknown => {
                writeln!(self.out, "Command not found! Type \"help\" to see the list of commands.")?;
                Ok(true)
            }
        }
    }

    fn help(&mut self, topic: Option<&str>) -> io::Result<()> {
        let text = match topic {
            None => {
                "List of available commands (Arguments enclosed in [] are optional):\n\
                 - exit       -> Exits the script\n\
                 - help [cmd] -> Shows the list of commands or detailed help of a specific command\n\
                 - start      -> Generates a list of sounds based on jsons in sounds folder"
            }
            Some("exit" | "end" | "close" | "stop") => {
                "Showing help of exit command >>\n  \
                 Aliases: end, close, stop\n  \
                 Description: Exits the script\n  \
                 Usage: > exit"
            }
            Some("start" | "begin") => {
                "Showing help of start command >>\n  \
                 Alias: begin\n  \
                 Description: Generates a list of sounds based on jsons in sounds folder\n  \
                 Usage: > start"
            }
            Some("help" | "command" | "commands") => {
                "Showing help of help command >>\n  \
                 Alias: command, commands\n  \
                 Description: Shows the list of commands or detailed help of a specific command\n  \
                 Arguments:\n    \
                 <cmd>: Shows the details of a command and its arguments.\n  \
                 Usage: > help [args]"
            }
            Some(_) => "Command not found! Type \"help\" to see the list of commands.",
        };
        writeln!(self.out, "{}", text)
    }

    /// Prints the input marker and reads one line without its line ending.
    pub(crate) fn read_line(&mut self) -> Step<String> {
        write!(self.out, "> ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupt::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// Reads an answer to a nested prompt, turning back-words into [`Interrupt::Back`].
    pub(crate) fn ask(&mut self) -> Step<String> {
        let answer = self.read_line()?;
        if is_back(&answer) {
            return Err(Interrupt::Back);
        }
        Ok(answer)
    }

    /// Sleeps for `millis` milliseconds unless delays are disabled.
    pub(crate) fn pause(&self, millis: f64) {
        if self.config.delay && millis > 0.0 {
            thread::sleep(Duration::from_millis(millis as u64));
        }
    }
}

fn is_back(answer: &str) -> bool {
    ["back", "prompt", "cancel"]
        .iter()
        .any(|word| answer.eq_ignore_ascii_case(word))
}

/// Lists versions the way the prompts show them: `[1.7, 1.8]`.
pub(crate) fn version_list(datasets: &VersionedDatasets) -> String {
    let versions: Vec<&str> = datasets.keys().map(|version| version.as_str()).collect();
    format!("[{}]", versions.join(", "))
}
