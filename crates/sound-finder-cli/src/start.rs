//! The `start` command: choose base and versions, confirm, generate.

use std::io::{BufRead, Write};

use log::error;
use sound_finder::{
    generate, load_versions, write_output, Base, GenerateError, Version,
    VersionedDatasets,
};

use crate::shell::{version_list, Interrupt, Shell, Step};

const YES: [&str; 5] = ["y", "yes", "yeah", "ye", "yea"];
const NO: [&str; 5] = ["n", "no", "naur", "nah", "nope"];
const CONFIRM: [&str; 6] = ["confirm", "ok", "proceed", "check", "yes", "okay"];
const DONE: [&str; 2] = ["done", "ready"];

fn is_any(answer: &str, words: &[&str]) -> bool {
    words.iter().any(|word| answer.eq_ignore_ascii_case(word))
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Runs the whole generation dialogue.
    ///
    /// Always ends by returning to the top-level prompt, either normally or
    /// through [`Interrupt::Back`].
    pub(crate) fn start(&mut self) -> Step<()> {
        let sounds_dir = self.config.sounds_dir.clone();
        writeln!(self.out, "Reading jsons in '{}' folder...", sounds_dir.display())?;

        let report = match load_versions(&sounds_dir) {
            Ok(report) => report,
            Err(err) => {
                error!("{}", err);
                writeln!(self.out, "Something went wrong while getting available sound versions.")?;
                return Err(Interrupt::Back);
            }
        };
        for skipped in &report.skipped {
            writeln!(self.out, "Unable to use '{}': {}", skipped.path.display(), skipped.reason)?;
        }
        writeln!(self.out)?;

        let mut candidates = report.datasets;
        if candidates.is_empty() {
            writeln!(
                self.out,
                "It looks like there are no sound files in '{}' folder.",
                sounds_dir.display()
            )?;
            writeln!(self.out, "Please add sound files named like 'sounds <version>.json' and try again.")?;
            self.pause(5000.0);
            return Err(Interrupt::Back);
        }

        let base = if candidates.len() == 1 {
            let Some((version, dataset)) = candidates.first_key_value() else {
                return Err(Interrupt::Back);
            };
            Base::new(version.clone(), dataset.clone())
        } else {
            let base = self.ask_base(&candidates)?;
            self.ask_exclusions(&mut candidates)?;
            base
        };

        let remove_denominator = self.ask_remove_denominator(&candidates)?;
        self.confirm(&base, &candidates, remove_denominator)
    }

    fn ask_base(&mut self, available: &VersionedDatasets) -> Step<Base> {
        loop {
            write!(self.out, "Please input the version you would like to use as base for the enum")?;
            if self.session.first_base_ask {
                write!(
                    self.out,
                    ", that is the version that will be used to create the names of the enums, \
                     and to compare to sound files of other versions."
                )?;
            } else {
                write!(self.out, ".")?;
            }
            writeln!(self.out)?;
            writeln!(self.out, "Type 'back' to go back to command prompt.")?;
            writeln!(self.out, "Available sound versions: {}", version_list(available))?;
            self.session.first_base_ask = false;

            let answer = self.ask()?;
            let base = Version::parse(&answer)
                .ok()
                .and_then(|version| Base::from_datasets(available, &version));
            match base {
                Some(base) => return Ok(base),
                None => {
                    writeln!(self.out, "\nUnknown version '{}'\n", answer)?;
                    self.pause(1000.0);
                }
            }
        }
    }

    /// Lets the user drop versions one at a time until `done`.
    fn ask_exclusions(&mut self, candidates: &mut VersionedDatasets) -> Step<()> {
        loop {
            if candidates.len() == 1 {
                writeln!(self.out, "\nLooks like there is only one version left. Using it.\n")?;
                self.pause(2000.0);
                return Ok(());
            }

            writeln!(
                self.out,
                "\nType in the versions you would not like to have its sounds in the enum. One at a time, please."
            )?;
            writeln!(self.out, "Type 'done' when you're done, or 'back' to go back to prompt.")?;
            writeln!(self.out, "Current sound versions: {}", version_list(candidates))?;

            let answer = self.ask()?;
            if is_any(&answer, &DONE) {
                return Ok(());
            }

            let removed = Version::parse(&answer)
                .map(|version| candidates.remove(&version).is_some())
                .unwrap_or(false);
            if !removed {
                writeln!(self.out, "\nUnknown version '{}'", answer)?;
                self.pause(1000.0);
            }
        }
    }

    /// Asks whether a single-version enum should drop the version prefix.
    fn ask_remove_denominator(&mut self, candidates: &VersionedDatasets) -> Step<bool> {
        if candidates.len() != 1 {
            return Ok(false);
        }

        writeln!(self.out, "Only one version was detected: {}", version_list(candidates))?;
        writeln!(
            self.out,
            "Since you're creating an enum with only one version of sounds, would you like to \
             remove the version denominator of the string at the enum constructor?"
        )?;
        write!(self.out, "Y/N ")?;

        let answer = self.ask()?;
        if is_any(&answer, &YES) {
            Ok(true)
        } else if is_any(&answer, &NO) {
            Ok(false)
        } else {
            writeln!(self.out, "I'll take that as a no.")?;
            self.pause(1300.0);
            Ok(false)
        }
    }

    fn confirm(
        &mut self,
        base: &Base,
        candidates: &VersionedDatasets,
        remove_denominator: bool,
    ) -> Step<()> {
        loop {
            let multiplier = self.session.delay_multiplier;
            writeln!(self.out, "\nWe are all set! Please confirm the options:")?;
            self.pause(500.0 * multiplier);
            writeln!(self.out, "\n- Base for enum names: {}", base.version)?;
            self.pause(500.0 * multiplier);
            writeln!(
                self.out,
                "- Versions to add sound names to constructor: {}",
                version_list(candidates)
            )?;
            if candidates.len() == 1 {
                self.pause(500.0 * multiplier);
                writeln!(
                    self.out,
                    "- Remove version denominator from sound names in enum constructor: {}",
                    if remove_denominator { "yes" } else { "no" }
                )?;
            }
            self.pause(5000.0 * multiplier);

            writeln!(
                self.out,
                "\nType 'confirm' to confirm the options, or 'cancel' to discard and go back to command prompt."
            )?;
            let answer = self.ask()?;
            if is_any(&answer, &CONFIRM) {
                return self.write_enum(base, candidates, !remove_denominator);
            }

            writeln!(self.out, "\nI couldn't catch that, I'm going to ask again.")?;
            self.pause(2000.0 * multiplier);
            self.session.delay_multiplier = (multiplier - 0.2).max(0.0);
        }
    }

    fn write_enum(
        &mut self,
        base: &Base,
        candidates: &VersionedDatasets,
        use_denominator: bool,
    ) -> Step<()> {
        let output = self.config.output.clone();
        writeln!(self.out, "\nPrinting sound enum to '{}'...", output.display())?;

        let text = match generate(base, candidates, use_denominator) {
            Ok(text) => text,
            Err(GenerateError::NoSounds) => {
                writeln!(self.out, "No sounds were found.")?;
                return Err(Interrupt::Back);
            }
        };

        match write_output(&output, &text) {
            Ok(replaced) => {
                if replaced {
                    writeln!(self.out, "Previous '{}' deleted.", output.display())?;
                }
                writeln!(self.out, "\nAll done! Type 'exit' to exit the program.")?;
                self.pause(2000.0);
                Ok(())
            }
            Err(err) => {
                error!("{}", err);
                writeln!(self.out, "Unable to print '{}': {}", output.display(), err)?;
                Err(Interrupt::Back)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::shell::tests::run_shell;

    fn sounds_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, json) in files {
            fs::write(dir.path().join(name), json).unwrap();
        }
        dir
    }

    #[test]
    fn test_is_any_ignores_case() {
        assert!(is_any("YeS", &YES));
        assert!(is_any("Naur", &NO));
        assert!(is_any("OKAY", &CONFIRM));
        assert!(!is_any("maybe", &YES));
    }

    #[test]
    fn test_full_run_two_versions() {
        let sounds = sounds_dir(&[
            ("sounds 1.7.json", r#"{"random.click": {"sounds": ["random/click"]}}"#),
            ("sounds 1.8.json", r#"{"ui.button.click": {"sounds": ["random/click"]}}"#),
        ]);
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("output.txt");

        let transcript = run_shell(sounds.path(), &output, "start\n1.7\ndone\nconfirm\nexit\n");

        assert!(transcript.contains("Available sound versions: [1.7, 1.8]"));
        assert!(transcript.contains("All done!"));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            r#"RANDOM_CLICK("1.7-1.7 random.click", "1.8-1.8 ui.button.click");"#
        );
    }

    #[test]
    fn test_exclude_down_to_one_version() {
        let sounds = sounds_dir(&[
            ("sounds 1.7.json", r#"{"a": {"sounds": ["x"]}}"#),
            ("sounds 1.8.json", r#"{"a": {"sounds": ["x"]}}"#),
        ]);
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("output.txt");

        let transcript = run_shell(sounds.path(), &output, "start\n1.7\n1.9\n1.8\nyes\nok\nexit\n");

        assert!(transcript.contains("Unknown version '1.9'"));
        assert!(transcript.contains("Looks like there is only one version left."));
        assert!(transcript.contains("Remove version denominator from sound names in enum constructor: yes"));
        assert_eq!(fs::read_to_string(&output).unwrap(), r#"A("a");"#);
    }

    #[test]
    fn test_single_version_keeps_denominator_on_unclear_answer() {
        let sounds = sounds_dir(&[("sounds 1.12.json", r#"{"block.note.harp": {"sounds": ["note/harp"]}}"#)]);
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("output.txt");

        let transcript = run_shell(sounds.path(), &output, "start\nmaybe\nconfirm\n");

        assert!(transcript.contains("I'll take that as a no."));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            r#"BLOCK_NOTE_HARP("1.12-1.12 block.note.harp");"#
        );
    }

    #[test]
    fn test_back_returns_to_prompt() {
        let sounds = sounds_dir(&[
            ("sounds 1.7.json", r#"{"a": {"sounds": ["x"]}}"#),
            ("sounds 1.8.json", r#"{"a": {"sounds": ["x"]}}"#),
        ]);
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("output.txt");

        let transcript = run_shell(sounds.path(), &output, "start\n2.0\nBACK\nexit\n");

        assert!(transcript.contains("Unknown version '2.0'"));
        // The first-time hint is only shown on the first base question.
        assert_eq!(transcript.matches("that is the version that will be used").count(), 1);
        assert!(transcript.ends_with("Goodbye, happy coding!\n"));
        assert!(!output.exists());
    }

    #[test]
    fn test_confirm_retry_shrinks_multiplier() {
        let sounds = sounds_dir(&[
            ("sounds 1.7.json", r#"{"a": {"sounds": ["x"]}}"#),
            ("sounds 1.8.json", r#"{"a": {"sounds": ["x"]}}"#),
        ]);
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("output.txt");
        let config = crate::shell::ShellConfig {
            sounds_dir: sounds.path().to_path_buf(),
            output: output.clone(),
            delay: false,
        };

        let input = "start\n1.7\ndone\nhuh\nwhat\nconfirm\n";
        let mut out = Vec::new();
        let mut shell = Shell::new(input.as_bytes(), &mut out, config);
        shell.run().unwrap();

        assert!((shell.session.delay_multiplier - 0.6).abs() < 1e-9);
        assert_eq!(fs::read_to_string(&output).unwrap(), r#"A("1.7-1.8 a");"#);
    }

    #[test]
    fn test_no_sounds_found() {
        let sounds = sounds_dir(&[
            ("sounds 1.7.json", r#"{"ghost": {"sounds": []}}"#),
            ("sounds 1.8.json", r#"{"other": {"sounds": ["y"]}}"#),
        ]);
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("output.txt");

        // Base 1.7 with 1.7 itself excluded: its only sound has no resources to match by.
        let input = "start\n1.7\n1.7\nn\nconfirm\nstart\n1.8\ndone\nconfirm\nexit\n";
        let transcript = run_shell(sounds.path(), &output, input);

        assert!(transcript.contains("No sounds were found."));
        assert_eq!(fs::read_to_string(&output).unwrap(), r#"OTHER("1.8-1.8 other");"#);
    }

    #[test]
    fn test_replaces_previous_output() {
        let sounds = sounds_dir(&[("sounds 1.7.json", r#"{"a": {"sounds": ["x"]}}"#)]);
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("output.txt");
        fs::write(&output, "stale").unwrap();

        let transcript = run_shell(sounds.path(), &output, "start\nn\nconfirm\n");

        assert!(transcript.contains("deleted."));
        assert_eq!(fs::read_to_string(&output).unwrap(), r#"A("1.7-1.7 a");"#);
    }

    #[test]
    fn test_empty_sounds_dir() {
        let sounds = TempDir::new().unwrap();
        let output = sounds.path().join("output.txt");

        let transcript = run_shell(&sounds.path().join("missing"), &output, "start\nexit\n");

        assert!(transcript.contains("It looks like there are no sound files"));
        assert!(transcript.ends_with("Goodbye, happy coding!\n"));
    }
}
