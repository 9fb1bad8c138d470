//! Form field value objects

/// An option in a select field: server id plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Rendered masked
    Secret(String),
    /// Monetary text: digits and at most one decimal point
    Amount(String),
    /// Digits only
    Integer(String),
    /// One of a fixed option list, cycled rather than typed
    Select {
        options: Vec<SelectOption>,
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value),
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Secret(String::new()),
        }
    }

    /// Create a new amount field
    pub fn amount(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Amount(String::new()),
        }
    }

    /// Create a new amount field with initial value
    pub fn amount_with_value(name: &str, label: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Amount(format!("{value}")),
        }
    }

    /// Create a new integer field with initial value
    pub fn integer_with_value(name: &str, label: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Integer(value.to_string()),
        }
    }

    /// Create a new select field, nothing chosen
    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options,
                selected: None,
            },
        }
    }

    /// Get the text value (empty for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s)
            | FieldValue::Secret(s)
            | FieldValue::Amount(s)
            | FieldValue::Integer(s) => s,
            FieldValue::Select { .. } => "",
        }
    }

    /// Parse the amount value (0 when empty or not an amount field)
    pub fn as_amount(&self) -> f64 {
        match &self.value {
            FieldValue::Amount(s) => s.parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Parse the integer value
    pub fn as_integer(&self) -> Option<i64> {
        match &self.value {
            FieldValue::Integer(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Get the id of the chosen option, if any
    pub fn selected_id(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Select { options, selected } => {
                selected.and_then(|i| options.get(i)).map(|o| o.id.as_str())
            }
            _ => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
            FieldValue::Amount(s) => {
                if c.is_ascii_digit() || (c == '.' && !s.contains('.')) {
                    s.push(c);
                }
            }
            FieldValue::Integer(s) => {
                if c.is_ascii_digit() {
                    s.push(c);
                }
            }
            FieldValue::Select { .. } => {
                // Select fields are cycled, not typed into
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s)
            | FieldValue::Secret(s)
            | FieldValue::Amount(s)
            | FieldValue::Integer(s) => {
                s.pop();
            }
            FieldValue::Select { .. } => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s)
            | FieldValue::Secret(s)
            | FieldValue::Amount(s)
            | FieldValue::Integer(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Move a select field to its next option (wraps, starts at the first)
    pub fn cycle_next(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move a select field to its previous option (wraps, starts at the last)
    pub fn cycle_prev(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(0) | None => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Amount(s) | FieldValue::Integer(s) => s.clone(),
            FieldValue::Secret(s) => "•".repeat(s.chars().count()),
            FieldValue::Select { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        }
    }
}
