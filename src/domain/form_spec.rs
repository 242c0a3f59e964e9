//! Declarative description of a form screen.

/// How a field displays its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
}

/// A single input field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// A reveal toggle names the field it controls by id.
#[derive(Debug, Clone)]
pub struct RevealToggleSpec {
    pub target: &'static str,
}

#[derive(Debug, Clone)]
pub struct FormSpec {
    pub fields: Vec<FieldSpec>,
    pub reveal_toggle: Option<RevealToggleSpec>,
}

impl FormSpec {
    /// The sign-in screen: email + password with a reveal toggle.
    pub fn sign_in() -> Self {
        Self {
            fields: vec![
                FieldSpec {
                    id: "email",
                    label: "Email",
                    kind: FieldKind::Text,
                },
                FieldSpec {
                    id: "password",
                    label: "Password",
                    kind: FieldKind::Password,
                },
            ],
            reveal_toggle: Some(RevealToggleSpec { target: "password" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sign_in_spec_shape() {
        let spec = FormSpec::sign_in();
        assert_eq!(spec.fields.len(), 2);
        assert_eq!(spec.fields[0].id, "email");
        assert_eq!(spec.fields[1].kind, FieldKind::Password);
        assert_eq!(
            spec.reveal_toggle.map(|t| t.target),
            Some("password")
        );
    }
}
