use serde_json::Value;

static MISSING: Value = Value::Null;

/// The backend's `result` object, kept exactly as received.
///
/// Display fields are read out of the raw JSON on demand. A field that is
/// missing, `null` or of an unexpected type never rejects the result; it only
/// changes what the viewer shows for that field.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeResult {
    raw: Value,
}

impl ScrapeResult {
    /// Accepts any JSON object. Everything else is rejected.
    pub fn from_value(value: Value) -> Result<Self, String> {
        if !value.is_object() {
            return Err("Backend result is not a JSON object".to_string());
        }
        Ok(Self { raw: value })
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn url(&self) -> String {
        text_at(&self.raw, "/url")
    }

    pub fn title(&self) -> String {
        text_at(&self.raw, "/meta/title")
    }

    pub fn description(&self) -> String {
        text_at(&self.raw, "/meta/description")
    }

    pub fn language(&self) -> String {
        text_at(&self.raw, "/meta/language")
    }

    /// `null` when the backend sent no interactions.
    pub fn interactions(&self) -> &Value {
        self.raw.get("interactions").unwrap_or(&MISSING)
    }

    /// Sections in backend order. A non-array `sections` field yields none.
    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        self.raw
            .get("sections")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|raw| Section { raw })
    }
}

/// One entry of the result's `sections` array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section<'a> {
    raw: &'a Value,
}

impl<'a> Section<'a> {
    /// The section's `id` as text, whatever JSON type it was sent as.
    pub fn id(&self) -> Option<String> {
        match self.raw.get("id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(text_of(value)),
        }
    }

    pub fn label(&self) -> String {
        text_at(self.raw, "/label")
    }

    /// The section's `type` field.
    pub fn kind(&self) -> String {
        text_at(self.raw, "/type")
    }

    pub fn as_value(&self) -> &'a Value {
        self.raw
    }
}

fn text_at(value: &Value, pointer: &str) -> String {
    value.pointer(pointer).map(text_of).unwrap_or_default()
}

/// Strings come back bare; `null` is empty; anything else is compact JSON.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
