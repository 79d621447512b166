use std::io::{ BufRead, Write };
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::form::PasswordForm;
use crate::password::CharacterClass;

const HELP: &str = "\
commands:
  length <n>       set the password length (8-16)
  toggle <class>   flip lowercase | uppercase | numbers | symbols
  generate         generate a password
  reset            clear the form
  show             print the current password
  status           print the form fields
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Length(String),
    Toggle(CharacterClass),
    Generate,
    Reset,
    Show,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(String::from("Empty command"));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then_some(rest);

        match (word, arg) {
            // the validator sees everything after the command word
            ("length" | "len", Some(raw)) => Ok(Self::Length(raw.to_string())),
            ("length" | "len", None) => Ok(Self::Length(String::new())),
            ("toggle" | "t", Some(class)) => Ok(Self::Toggle(class.parse()?)),
            ("toggle" | "t", None) => Err(String::from("Missing class after toggle")),
            ("generate" | "gen" | "g", _) => Ok(Self::Generate),
            ("reset" | "r", _) => Ok(Self::Reset),
            ("show", _) => Ok(Self::Show),
            ("status", _) => Ok(Self::Status),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "exit" | "q", _) => Ok(Self::Quit),
            (other, _) => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// Line-driven front end for a [`PasswordForm`].
pub struct Session<'a, R: Rng + ?Sized> {
    form: PasswordForm,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Session<'a, R> {
    pub fn new(form: PasswordForm, rng: &'a mut R) -> Self {
        Self { form, rng }
    }

    pub fn into_form(self) -> PasswordForm {
        self.form
    }

    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> std::io::Result<()> {
        writeln!(output, "{}", HELP)?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "skipping line that is not UTF-8");
                    writeln!(output, "Invalid input: not valid UTF-8")?;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(command, &mut output)?,
                Err(e) => writeln!(output, "{}", e)?,
            }
        }

        Ok(())
    }

    fn apply<O: Write>(&mut self, command: Command, output: &mut O) -> std::io::Result<()> {
        debug!(?command, "applying command");

        match command {
            Command::Length(raw) => self.form.set_length(&raw),
            Command::Toggle(class) => {
                self.form.toggle(class);
                let state = if self.form.classes().is_enabled(class) { "on" } else { "off" };
                writeln!(output, "{}: {}", class, state)?;
            }
            Command::Generate => match self.form.submit(&mut *self.rng) {
                Ok(password) => writeln!(output, "{}", password)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::Reset => {
                self.form.reset();
                writeln!(output, "{}", self.form.display())?;
            }
            Command::Show => writeln!(output, "{}", self.form.display())?,
            Command::Status => {
                let classes = self.form.classes();
                writeln!(
                    output,
                    "length: {:?} lowercase: {} uppercase: {} numbers: {} symbols: {}",
                    self.form.length_input(),
                    classes.lowercase,
                    classes.uppercase,
                    classes.numbers,
                    classes.symbols,
                )?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {}
        }

        Ok(())
    }
}
