//! Blocking yes/no confirmation used before destructive actions.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Asks the user to confirm an action; `true` means go ahead.
pub trait ConfirmPrompt {
    fn confirm(&self, title: &str, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str, &str) -> bool,
{
    fn confirm(&self, title: &str, message: &str) -> bool {
        self(title, message)
    }
}

/// Native warning dialog with Yes/No buttons.
#[derive(Clone, Copy, Debug, Default)]
pub struct DialogConfirm;

impl ConfirmPrompt for DialogConfirm {
    fn confirm(&self, title: &str, message: &str) -> bool {
        matches!(
            MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(title)
                .set_description(message)
                .set_buttons(MessageButtons::YesNo)
                .show(),
            MessageDialogResult::Yes
        )
    }
}
