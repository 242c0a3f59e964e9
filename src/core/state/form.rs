use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::core::cmd::Cmd;
use crate::core::msg::form::FormMsg;
use crate::domain::form_spec::{FieldKind, FieldSpec, FormSpec};

/// Display mode of the wired password field. Never persisted; every run
/// starts `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Indicator shown on the reveal toggle, kept in lock-step with
/// [`Visibility`]: masked ⇔ `EyeClosed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconVariant {
    #[default]
    EyeClosed,
    EyeOpen,
}

/// One field plus its current value.
#[derive(Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
}

// Password values must not leak through Debug (status dumps, trace_dbg).
impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Debug = match self.spec.kind {
            FieldKind::Password => &"<redacted>",
            FieldKind::Text => &self.value,
        };
        f.debug_struct("FieldState")
            .field("id", &self.spec.id)
            .field("value", value)
            .finish()
    }
}

/// A wired reveal toggle: the index of its target field and the icon state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealToggle {
    pub target: usize,
    pub icon: IconVariant,
}

/// Values crossing the submit boundary. The password is wrapped so it is
/// redacted from `Debug` output and never logged in clear.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Sign-in form state machine: field editing, focus movement, and the
/// password visibility toggle ({Hidden, Visible} with a synced icon).
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FieldState>,
    pub focus: usize,
    pub visibility: Visibility,
    reveal: Option<RevealToggle>,
}

impl FormState {
    /// Wires a form from its spec. The reveal toggle resolves the FIRST
    /// password field matching its target id; when the toggle, the target,
    /// or the kind does not line up, the toggle stays unwired and later
    /// `ToggleVisibility` messages are silent no-ops. Visibility always
    /// starts `Hidden`, whatever any previous session did.
    pub fn new(spec: FormSpec) -> Self {
        let reveal = spec.reveal_toggle.as_ref().and_then(|toggle| {
            spec.fields
                .iter()
                .position(|f| f.id == toggle.target && f.kind == FieldKind::Password)
                .map(|target| RevealToggle {
                    target,
                    icon: IconVariant::EyeClosed,
                })
        });

        Self {
            fields: spec
                .fields
                .into_iter()
                .map(|spec| FieldState {
                    spec,
                    value: String::new(),
                })
                .collect(),
            focus: 0,
            visibility: Visibility::Hidden,
            reveal,
        }
    }

    pub fn update(&mut self, msg: FormMsg) -> Vec<Cmd> {
        match msg {
            FormMsg::ToggleVisibility => self.toggle_visibility(),
            FormMsg::FocusNext => self.move_focus(1),
            FormMsg::FocusPrev => self.move_focus(-1),
            FormMsg::Input(c) => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.push(c);
                }
            }
            FormMsg::Backspace => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.pop();
                }
            }
            // Submit is resolved by the top-level update so the outcome can
            // reach the status line.
            FormMsg::Submit => {}
        }
        vec![]
    }

    fn toggle_visibility(&mut self) {
        let Some(reveal) = self.reveal.as_mut() else {
            return;
        };
        let (visibility, icon) = match self.visibility {
            Visibility::Hidden => (Visibility::Visible, IconVariant::EyeOpen),
            Visibility::Visible => (Visibility::Hidden, IconVariant::EyeClosed),
        };
        self.visibility = visibility;
        reveal.icon = icon;
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Whether the field at `index` renders masked right now. Password
    /// fields without a wired toggle are always masked.
    pub fn is_masked(&self, index: usize) -> bool {
        let Some(field) = self.fields.get(index) else {
            return false;
        };
        match field.spec.kind {
            FieldKind::Text => false,
            FieldKind::Password => {
                !(self.visibility == Visibility::Visible
                    && self.reveal.is_some_and(|r| r.target == index))
            }
        }
    }

    /// Icon shown on the reveal toggle, `None` when unwired.
    pub fn icon(&self) -> Option<IconVariant> {
        self.reveal.map(|r| r.icon)
    }

    /// Index of the field the reveal toggle controls, `None` when unwired.
    pub fn reveal_target(&self) -> Option<usize> {
        self.reveal.map(|r| r.target)
    }

    fn value_of(&self, id: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.spec.id == id)
    }

    /// Validates the form and produces the submit payload. Every field is
    /// required, and the email must at least look like one.
    pub fn submit(&self) -> Result<Credentials, String> {
        for field in &self.fields {
            if field.value.trim().is_empty() {
                return Err(format!("{} is required", field.spec.label));
            }
        }

        let email = self
            .value_of("email")
            .map(|f| f.value.clone())
            .ok_or_else(|| "Email is required".to_string())?;
        if !email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }

        let password = self
            .value_of("password")
            .map(|f| SecretString::from(f.value.clone()))
            .ok_or_else(|| "Password is required".to_string())?;

        Ok(Credentials { email, password })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormSpec::sign_in())
    }
}
