//! A password entry field with an inline eye button toggling the echo mode.

use crest_foundation::CallbackWith;

/// How the host line edit echoes typed characters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    /// Characters are masked.
    #[default]
    Password,
    /// Characters are shown as typed.
    Normal,
}

/// Arguments for [`PasswordField::new`].
#[derive(Clone, Default, PartialEq)]
pub struct PasswordFieldArgs {
    /// Callback fired with the new mode after each toggle.
    pub on_toggle: CallbackWith<EchoMode>,
}

impl PasswordFieldArgs {
    /// Sets the toggle callback.
    pub fn on_toggle(mut self, on_toggle: impl Into<CallbackWith<EchoMode>>) -> Self {
        self.on_toggle = on_toggle.into();
        self
    }
}

/// Interaction core of the echo-toggle field. Starts masked.
pub struct PasswordField {
    mode: EchoMode,
    on_toggle: CallbackWith<EchoMode>,
}

impl PasswordField {
    /// Builds the field in `Password` mode.
    pub fn new(args: PasswordFieldArgs) -> Self {
        Self {
            mode: EchoMode::Password,
            on_toggle: args.on_toggle,
        }
    }

    /// Current echo mode.
    pub fn echo_mode(&self) -> EchoMode {
        self.mode
    }

    /// Label for the inline affordance: what clicking it will do.
    pub fn action_label(&self) -> &'static str {
        match self.mode {
            EchoMode::Password => "Show",
            EchoMode::Normal => "Hide",
        }
    }

    /// Flips the echo mode and notifies.
    pub fn toggle_echo(&mut self) {
        self.mode = match self.mode {
            EchoMode::Password => EchoMode::Normal,
            EchoMode::Normal => EchoMode::Password,
        };
        self.on_toggle.call(self.mode);
    }
}
