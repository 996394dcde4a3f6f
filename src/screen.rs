use std::io::{self, Write};

use crate::domain::{Error, Screen, Toast};

/// Views and toasts go to stdout, errors to stderr.
#[derive(Default, Debug)]
pub struct StdScreen {}

impl Screen for StdScreen {
    fn show(&mut self, view: &str) -> Result<(), Error> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", view)?;
        out.flush()?;
        Ok(())
    }

    fn toast(&mut self, toast: &Toast) {
        println!("[{}] {}", toast.title, toast.description);
    }

    fn report(&mut self, error: &Error) {
        eprintln!("[{}] {}", error.title(), error);
    }
}

/// Keeps everything in memory; handy for driving the engine from tests.
#[derive(Default, Debug)]
pub struct RecordingScreen {
    pub views: Vec<String>,
    pub toasts: Vec<(String, String)>,
    pub errors: Vec<String>,
}

impl RecordingScreen {
    pub fn last_view(&self) -> Option<&str> {
        self.views.last().map(String::as_str)
    }

    pub fn toast_titles(&self) -> Vec<&str> {
        self.toasts.iter().map(|(t, _)| t.as_str()).collect()
    }
}

impl Screen for RecordingScreen {
    fn show(&mut self, view: &str) -> Result<(), Error> {
        self.views.push(view.to_string());
        Ok(())
    }

    fn toast(&mut self, toast: &Toast) {
        self.toasts
            .push((toast.title.clone(), toast.description.clone()));
    }

    fn report(&mut self, error: &Error) {
        self.errors.push(format!("[{}] {}", error.title(), error));
    }
}
