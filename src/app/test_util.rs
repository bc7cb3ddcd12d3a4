use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use crate::{
    actions::{clipboard::ClipboardWriter, file_saver::FileSaver},
    app::models::app_error::AppError,
    AppState,
};

#[derive(Default)]
pub struct RecordingClipboard {
    texts: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl RecordingClipboard {
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::new("clipboard unavailable"));
        }

        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingFileSaver {
    saved: Mutex<Vec<(String, String)>>,
    failing: AtomicBool,
}

impl RecordingFileSaver {
    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved.lock().unwrap().clone()
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl FileSaver for RecordingFileSaver {
    fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::new("disk full"));
        }

        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), contents.to_string()));
        Ok(PathBuf::from(filename))
    }
}

pub fn test_state() -> (AppState, Arc<RecordingClipboard>, Arc<RecordingFileSaver>) {
    let clipboard = Arc::new(RecordingClipboard::default());
    let file_saver = Arc::new(RecordingFileSaver::default());
    let state = AppState::new(clipboard.clone(), file_saver.clone());

    (state, clipboard, file_saver)
}
